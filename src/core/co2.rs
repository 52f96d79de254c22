//! Yearly CO₂ emissions surcharge.

use super::brackets::lookup;
use super::tables::{CO2_BRACKETS, CO2_SURCHARGE_THRESHOLD};
use super::types::FuelType;

/// Flat yearly surcharge for `co2_g_per_km`.
///
/// Electric vehicles are exempt whatever the reported emissions; combustion
/// vehicles below 146 g/km pay nothing. Amounts step discretely between
/// brackets and are not pro-rated.
pub fn co2_surcharge(co2_g_per_km: f64, fuel_type: FuelType) -> f64 {
    if fuel_type.is_electric() {
        return 0.0;
    }
    if co2_g_per_km < CO2_SURCHARGE_THRESHOLD {
        return 0.0;
    }
    match lookup(CO2_BRACKETS, co2_g_per_km) {
        Some(bracket) => bracket.surcharge,
        None => {
            log::warn!("no CO₂ bracket covers {co2_g_per_km} g/km, defaulting to 0");
            0.0
        }
    }
}
