//! Fixed schedules for road tax, CO₂ surcharge and registration fees.

use super::brackets::{Co2Bracket, RegistrationBracket, TaxBracket};

/// VAT rate applied to or stripped from gross amounts.
pub const VAT_RATE: f64 = 0.21;

/// Emissions below this value (g/km) carry no CO₂ surcharge.
pub const CO2_SURCHARGE_THRESHOLD: f64 = 146.0;

/// Highest tabulated engine capacity (cc); above it the fee is extrapolated.
pub const REGISTRATION_CEILING_CC: f64 = 4150.0;

/// Displacement step (cc) that adds one estimated fiscal unit above the ceiling.
pub const REGISTRATION_STEP_CC: f64 = 200.0;

/// Fee per estimated fiscal unit above the ceiling.
pub const REGISTRATION_FEE_PER_UNIT: f64 = 140.84;

/// Oldest age bucket of the road-tax tables.
pub const MAX_AGE_INDEX: usize = 15;

const MIN_RATE: f64 = 61.50;

pub static TAX_BRACKETS: &[TaxBracket] = &[
    TaxBracket {
        min_power_kw: None,
        max_power_kw: 70.0,
        rates_by_age: [MIN_RATE; 16],
    },
    TaxBracket {
        min_power_kw: Some(71.0),
        max_power_kw: 85.0,
        rates_by_age: [
            123.00, 110.70, 98.40, 86.10, 73.80, 67.65, MIN_RATE, MIN_RATE, MIN_RATE, MIN_RATE,
            MIN_RATE, MIN_RATE, MIN_RATE, MIN_RATE, MIN_RATE, MIN_RATE,
        ],
    },
    TaxBracket {
        min_power_kw: Some(86.0),
        max_power_kw: 100.0,
        rates_by_age: [
            495.00, 445.50, 396.00, 346.50, 297.00, 272.25, 247.50, 222.75, 198.00, 173.25,
            148.50, 123.75, 99.00, 74.25, 61.50, 61.50,
        ],
    },
    TaxBracket {
        min_power_kw: Some(101.0),
        max_power_kw: 110.0,
        rates_by_age: [
            867.00, 780.30, 693.60, 606.90, 520.20, 476.85, 433.50, 390.15, 346.80, 303.45,
            260.10, 216.75, 173.40, 130.05, 86.70, 61.50,
        ],
    },
    TaxBracket {
        min_power_kw: Some(111.0),
        max_power_kw: 120.0,
        rates_by_age: [
            1239.00, 1115.10, 991.20, 867.30, 743.40, 681.45, 619.50, 557.55, 495.60, 433.65,
            371.70, 309.75, 247.80, 185.85, 123.90, 61.50,
        ],
    },
    TaxBracket {
        min_power_kw: Some(121.0),
        max_power_kw: 155.0,
        rates_by_age: [
            2478.00, 2230.20, 1982.40, 1734.60, 1486.80, 1362.90, 1239.00, 1115.10, 991.20,
            867.30, 743.40, 619.50, 495.60, 371.70, 247.80, 61.50,
        ],
    },
    TaxBracket {
        min_power_kw: Some(156.0),
        max_power_kw: f64::INFINITY,
        rates_by_age: [
            4957.00, 4461.30, 3965.60, 3469.90, 2974.20, 2726.35, 2478.50, 2230.65, 1982.80,
            1734.95, 1487.10, 1239.25, 991.40, 743.55, 495.70, 61.50,
        ],
    },
];

const fn co2(min: f64, max: f64, surcharge: f64) -> Co2Bracket {
    Co2Bracket {
        min_g_per_km: min,
        max_g_per_km: max,
        surcharge,
    }
}

pub static CO2_BRACKETS: &[Co2Bracket] = &[
    co2(146.0, 155.0, 100.0),
    co2(156.0, 165.0, 175.0),
    co2(166.0, 175.0, 250.0),
    co2(176.0, 185.0, 375.0),
    co2(186.0, 195.0, 500.0),
    co2(196.0, 205.0, 600.0),
    co2(206.0, 215.0, 700.0),
    co2(216.0, 225.0, 1000.0),
    co2(226.0, 235.0, 1200.0),
    co2(236.0, 245.0, 1500.0),
    co2(246.0, 255.0, 2000.0),
    co2(256.0, f64::INFINITY, 2500.0),
];

const fn reg(min_cc: Option<f64>, max_cc: f64, fiscal_units: u32, fee: f64) -> RegistrationBracket {
    RegistrationBracket {
        min_cc,
        max_cc,
        fiscal_units,
        fee,
    }
}

pub static REGISTRATION_BRACKETS: &[RegistrationBracket] = &[
    reg(None, 750.0, 4, 100.98),
    reg(Some(751.0), 950.0, 5, 126.32),
    reg(Some(951.0), 1150.0, 6, 182.56),
    reg(Some(1151.0), 1350.0, 7, 238.52),
    reg(Some(1351.0), 1550.0, 8, 295.02),
    reg(Some(1551.0), 1750.0, 9, 351.52),
    reg(Some(1751.0), 1950.0, 10, 407.22),
    reg(Some(1951.0), 2150.0, 11, 528.40),
    reg(Some(2151.0), 2350.0, 12, 649.70),
    reg(Some(2351.0), 2550.0, 13, 770.62),
    reg(Some(2551.0), 2750.0, 14, 891.79),
    reg(Some(2751.0), 3050.0, 15, 1013.10),
    reg(Some(3051.0), 3250.0, 16, 1326.86),
    reg(Some(3251.0), 3450.0, 17, 1640.89),
    reg(Some(3451.0), 3650.0, 18, 1954.92),
    reg(Some(3651.0), 3950.0, 19, 2268.29),
    reg(Some(3951.0), REGISTRATION_CEILING_CC, 20, 2582.32),
];
