//! One-time registration fee by engine displacement.

use super::brackets::lookup;
use super::tables::{
    REGISTRATION_BRACKETS, REGISTRATION_CEILING_CC, REGISTRATION_FEE_PER_UNIT,
    REGISTRATION_STEP_CC,
};
use super::types::RegistrationQuote;

/// Registration fee for an engine of `engine_capacity_cc`.
///
/// See [`registration_quote`] for the lookup and extrapolation rules.
pub fn registration_fee(engine_capacity_cc: f64) -> f64 {
    registration_quote(engine_capacity_cc).fee
}

/// Registration fee together with the fiscal units it was derived from.
///
/// - `0` cc (electric) costs nothing and skips the table.
/// - Up to 4150 cc the fee of the matching bracket applies.
/// - Above 4150 cc one fiscal unit is added per started 200 cc, each costing
///   140.84 on top of the last tabulated fee.
pub fn registration_quote(engine_capacity_cc: f64) -> RegistrationQuote {
    if engine_capacity_cc == 0.0 {
        return RegistrationQuote::default();
    }

    if let Some(bracket) = lookup(REGISTRATION_BRACKETS, engine_capacity_cc) {
        return RegistrationQuote {
            fee: bracket.fee,
            fiscal_units: bracket.fiscal_units,
            estimated: false,
        };
    }

    if engine_capacity_cc > REGISTRATION_CEILING_CC {
        let Some(top) = REGISTRATION_BRACKETS.last() else {
            return RegistrationQuote::default();
        };
        let extra = ((engine_capacity_cc - REGISTRATION_CEILING_CC) / REGISTRATION_STEP_CC).ceil();
        // Units saturate for absurd capacities; the fee stays linear in f64.
        let extra_units = if extra < f64::from(u32::MAX) {
            extra as u32
        } else {
            u32::MAX
        };
        return RegistrationQuote {
            fee: top.fee + extra * REGISTRATION_FEE_PER_UNIT,
            fiscal_units: top.fiscal_units.saturating_add(extra_units),
            estimated: true,
        };
    }

    log::warn!("no registration bracket covers {engine_capacity_cc} cc, defaulting to 0");
    RegistrationQuote::default()
}
