//! Currency formatting and result breakdown for presentation.
//!
//! The engine keeps full `f64` precision; this module is the only place
//! amounts are rounded, using `rust_decimal` half-away-from-zero rounding to
//! cents.

mod breakdown;
mod currency;

pub use breakdown::{
    BreakdownLine, ENTERED_NOTE, EXTRAPOLATED_FEE_NOTE, breakdown_lines, render_breakdown,
};
pub use currency::{format_eur, to_cents};
