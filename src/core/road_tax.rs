//! Yearly road tax by engine power and vehicle age.

use chrono::{Datelike, Local};

use super::brackets::lookup;
use super::tables::{MAX_AGE_INDEX, TAX_BRACKETS};

/// Age bucket of a vehicle, clamped to the `0..=15` range of the rate tables.
///
/// Future production years count as new; anything 15 years or older shares
/// the last bucket.
pub fn age_index(production_year: i32, current_year: i32) -> usize {
    let age = current_year.saturating_sub(production_year);
    age.clamp(0, MAX_AGE_INDEX as i32) as usize
}

/// Yearly road tax for a vehicle of `power_kw` built in `production_year`,
/// as seen from `current_year`.
///
/// Returns `0` when no power bracket matches, which the tables rule out for
/// any finite non-negative power.
pub fn power_age_tax(power_kw: f64, production_year: i32, current_year: i32) -> f64 {
    let Some(bracket) = lookup(TAX_BRACKETS, power_kw) else {
        log::warn!("no road-tax bracket covers {power_kw} kW, defaulting to 0");
        return 0.0;
    };
    bracket.rates_by_age[age_index(production_year, current_year)]
}

/// [`power_age_tax`] against the current calendar year of the local clock.
pub fn power_age_tax_now(power_kw: f64, production_year: i32) -> f64 {
    power_age_tax(power_kw, production_year, current_year())
}

pub fn current_year() -> i32 {
    Local::now().year()
}
