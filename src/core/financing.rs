//! Monthly payment, VAT pass-through and loan surcharge.

use super::tables::VAT_RATE;
use super::types::{CalculationResult, FinancedPrincipal, FinancingInputs, FinancingMode};

/// Strip VAT from a gross amount.
pub fn net_of_vat(gross: f64) -> f64 {
    gross / (1.0 + VAT_RATE)
}

/// Principal to spread over the term, before VAT is reapplied.
///
/// - Leasing finances the VAT-free amount minus the residual value.
/// - Purchase finances the gross amount, or the VAT-free one when VAT is
///   deductible.
pub fn financed_principal(inputs: &FinancingInputs) -> FinancedPrincipal {
    match inputs.mode {
        FinancingMode::Leasing {
            remaining_value_percent,
        } => {
            let net_amount = net_of_vat(inputs.total_amount);
            let remaining_value = net_amount * (remaining_value_percent / 100.0);
            FinancedPrincipal {
                net_amount,
                remaining_value,
                amount_to_finance: net_amount - remaining_value,
            }
        }
        FinancingMode::Purchase { vat_deductible } => {
            let base = if vat_deductible {
                net_of_vat(inputs.total_amount)
            } else {
                inputs.total_amount
            };
            FinancedPrincipal {
                net_amount: base,
                remaining_value: 0.0,
                amount_to_finance: base,
            }
        }
    }
}

/// Annuity factor `r(1+r)^n / ((1+r)^n - 1)` for periodic rate `r` over `n` periods.
pub fn annuity_factor(periodic_rate: f64, periods: u32) -> f64 {
    let growth = (1.0 + periodic_rate).powf(f64::from(periods));
    periodic_rate * growth / (growth - 1.0)
}

/// Compute the monthly and total figures for a financing plan.
///
/// Returns an all-zero result when the amount or the term is zero.
///
/// With a loan at a positive rate both monthly figures are scaled by
/// `1 + annuity_factor`, i.e. the annuity charge is added on top of the
/// straight principal instalment rather than replacing it.
pub fn calculate(inputs: &FinancingInputs) -> CalculationResult {
    if inputs.total_amount == 0.0 || inputs.months == 0 {
        log::debug!(
            "skipping financing calculation: amount {} over {} months",
            inputs.total_amount,
            inputs.months
        );
        return CalculationResult::default();
    }

    let months = f64::from(inputs.months);
    let principal = financed_principal(inputs);
    let monthly_base = principal.amount_to_finance / months;
    let monthly_with_vat = monthly_base * (1.0 + VAT_RATE);

    let mut monthly_with_interest = monthly_base;
    let mut monthly_with_vat_and_interest = monthly_with_vat;
    let mut total_interest_paid = 0.0;

    if inputs.has_loan && inputs.annual_interest_rate_percent > 0.0 {
        let monthly_rate = inputs.annual_interest_rate_percent / 100.0 / 12.0;
        let factor = annuity_factor(monthly_rate, inputs.months);

        monthly_with_interest = monthly_base * (1.0 + factor);
        monthly_with_vat_and_interest = monthly_with_vat * (1.0 + factor);
        total_interest_paid = monthly_with_vat_and_interest * months - monthly_with_vat * months;
    }

    CalculationResult {
        monthly_base,
        monthly_with_vat,
        monthly_with_interest,
        monthly_with_vat_and_interest,
        total_interest_paid,
        total_with_vat_and_interest: monthly_with_vat_and_interest * months,
    }
}
