use serde::Serialize;

use super::currency::format_eur;
use crate::core::{CostOfOwnership, FinancingInputs, FinancingMode};

/// Note attached to the registration line when the fee was extrapolated.
pub const EXTRAPOLATED_FEE_NOTE: &str = "Includes additional CV charge";
/// Note attached to figures the user entered instead of the computed ones.
pub const ENTERED_NOTE: &str = "Entered manually";

/// One labelled, formatted line of the results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    pub label: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

impl BreakdownLine {
    fn new(label: &'static str, amount: f64) -> Self {
        Self {
            label,
            value: format_eur(amount),
            note: None,
        }
    }
}

/// Lines of the results panel for a computed breakdown.
///
/// Monthly VAT is only listed for leasing, interest only when a loan is
/// selected, and the CO₂ line only when a surcharge applies.
pub fn breakdown_lines(cost: &CostOfOwnership, financing: &FinancingInputs) -> Vec<BreakdownLine> {
    let result = &cost.financing;
    let mut lines = vec![BreakdownLine::new("Monthly Payment", result.monthly_base)];

    if matches!(financing.mode, FinancingMode::Leasing { .. }) {
        lines.push(BreakdownLine::new("Monthly with VAT", result.monthly_with_vat));
    }
    if financing.has_loan {
        lines.push(BreakdownLine::new(
            "Monthly with Interest",
            result.monthly_with_vat_and_interest,
        ));
        lines.push(BreakdownLine::new("Total Interest", result.total_interest_paid));
    }

    lines.push(BreakdownLine::new(
        "Vehicle Cost",
        result.total_with_vat_and_interest,
    ));
    let registration_note = if cost.registration_overridden {
        Some(ENTERED_NOTE)
    } else {
        cost.registration.estimated.then_some(EXTRAPOLATED_FEE_NOTE)
    };
    lines.push(BreakdownLine {
        note: registration_note,
        ..BreakdownLine::new("Registration Cost", cost.registration.fee)
    });
    lines.push(BreakdownLine {
        note: cost.yearly_tax_overridden.then_some(ENTERED_NOTE),
        ..BreakdownLine::new("Total Tax Over Period", cost.tax_over_period)
    });
    lines.push(BreakdownLine::new(
        "Base Yearly Tax (KW & Age)",
        cost.power_age_tax,
    ));
    if cost.co2_surcharge > 0.0 {
        lines.push(BreakdownLine::new("Additional CO₂ Tax", cost.co2_surcharge));
    }
    lines.push(BreakdownLine::new("Total Cost of Ownership", cost.total));
    lines
}

/// Plain-text rendering of [`breakdown_lines`], one `label: value` per line.
pub fn render_breakdown(cost: &CostOfOwnership, financing: &FinancingInputs) -> String {
    let mut out = String::new();
    for line in breakdown_lines(cost, financing) {
        out.push_str(line.label);
        out.push_str(": ");
        out.push_str(&line.value);
        out.push('\n');
        if let Some(note) = line.note {
            out.push_str("  ");
            out.push_str(note);
            out.push('\n');
        }
    }
    out
}
