//! Range-tagged schedule records and the shared lookup over them.

use serde::Serialize;

/// A record covering a closed numeric range of some input axis.
pub trait Bracket {
    /// Inclusive lower bound. Brackets without an explicit minimum start at 0.
    fn lower(&self) -> f64;
    /// Inclusive upper bound, `f64::INFINITY` for the open-ended top bracket.
    fn upper(&self) -> f64;
}

/// Road-tax bracket by engine power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxBracket {
    pub min_power_kw: Option<f64>,
    pub max_power_kw: f64,
    /// Yearly amount by vehicle age; index 15 applies to 15 years and older.
    pub rates_by_age: [f64; 16],
}

/// CO₂ surcharge bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Co2Bracket {
    pub min_g_per_km: f64,
    pub max_g_per_km: f64,
    pub surcharge: f64,
}

/// Registration fee bracket by engine displacement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegistrationBracket {
    pub min_cc: Option<f64>,
    pub max_cc: f64,
    /// Fiscal horsepower units assigned to this displacement range.
    pub fiscal_units: u32,
    pub fee: f64,
}

impl Bracket for TaxBracket {
    fn lower(&self) -> f64 {
        self.min_power_kw.unwrap_or(0.0)
    }

    fn upper(&self) -> f64 {
        self.max_power_kw
    }
}

impl Bracket for Co2Bracket {
    fn lower(&self) -> f64 {
        self.min_g_per_km
    }

    fn upper(&self) -> f64 {
        self.max_g_per_km
    }
}

impl Bracket for RegistrationBracket {
    fn lower(&self) -> f64 {
        self.min_cc.unwrap_or(0.0)
    }

    fn upper(&self) -> f64 {
        self.max_cc
    }
}

/// Find the bracket covering `value` in an ascending table.
///
/// Tables are tabulated on integer bounds (`..=70`, `71..=85`, ...). The
/// first bracket whose upper bound is not below `value` wins, so a
/// fractional value between two tabulated bounds belongs to the next bracket
/// up and the table has no holes. Values below the first bracket's lower
/// bound, above the last upper bound, or NaN yield `None`.
pub fn lookup<B: Bracket>(table: &[B], value: f64) -> Option<&B> {
    let first = table.first()?;
    if value.is_nan() || value < first.lower() {
        return None;
    }
    table.iter().find(|b| value <= b.upper())
}
