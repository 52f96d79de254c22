//! Cost of ownership over the financing term.

use super::co2::co2_surcharge;
use super::financing::calculate;
use super::registration::registration_quote;
use super::road_tax::power_age_tax;
use super::types::{CostOfOwnership, CostOverrides, FinancingInputs, VehicleProfile};

/// Number of tax years a term of `months` touches: every started year counts.
pub fn tax_years(months: u32) -> u32 {
    months.div_ceil(12)
}

/// Yearly tax for a vehicle: road tax plus CO₂ surcharge.
pub fn yearly_tax(profile: &VehicleProfile, current_year: i32) -> f64 {
    power_age_tax(profile.power_kw, profile.production_year, current_year)
        + co2_surcharge(profile.co2_emissions_g_per_km, profile.fuel_type)
}

/// Financing total plus one-time registration plus yearly tax for every
/// started year of the term.
pub fn total_cost_of_ownership(
    financing_total: f64,
    registration_fee: f64,
    yearly_tax: f64,
    months: u32,
) -> f64 {
    financing_total + registration_fee + yearly_tax * f64::from(tax_years(months))
}

/// Run every resolver and the financing calculator for one vehicle.
pub fn assess(
    profile: &VehicleProfile,
    financing: &FinancingInputs,
    current_year: i32,
) -> CostOfOwnership {
    assess_with(profile, financing, current_year, &CostOverrides::default())
}

/// [`assess`], with entered registration cost or yearly tax taking the
/// place of the computed figures in the totals.
pub fn assess_with(
    profile: &VehicleProfile,
    financing: &FinancingInputs,
    current_year: i32,
    overrides: &CostOverrides,
) -> CostOfOwnership {
    let result = calculate(financing);
    let power_age = power_age_tax(profile.power_kw, profile.production_year, current_year);
    let co2 = co2_surcharge(profile.co2_emissions_g_per_km, profile.fuel_type);
    let years = tax_years(financing.months);

    let mut registration = registration_quote(profile.engine_capacity_cc);
    let registration_fee = overrides.effective_registration_cost();
    if let Some(fee) = registration_fee {
        log::debug!("registration cost entered as {fee}, computed {}", registration.fee);
        registration.fee = fee;
        registration.estimated = false;
    }
    let entered_tax = overrides.effective_yearly_tax();
    let yearly = entered_tax.unwrap_or(power_age + co2);

    CostOfOwnership {
        financing: result,
        registration,
        registration_overridden: registration_fee.is_some(),
        power_age_tax: power_age,
        co2_surcharge: co2,
        yearly_tax: yearly,
        yearly_tax_overridden: entered_tax.is_some(),
        tax_years: years,
        tax_over_period: yearly * f64::from(years),
        total: total_cost_of_ownership(
            result.total_with_vat_and_interest,
            registration.fee,
            yearly,
            financing.months,
        ),
    }
}
