//! Raw form input for the calculator.
//!
//! Converts the text fields of an input form into core inputs. Numbers are
//! read leniently: the leading integer counts, anything unparseable or zero
//! falls back to the field default. Hard range violations surface as
//! [`CostError::Validation`](crate::core::CostError::Validation).
//!
//! # Example
//!
//! ```
//! use carcost::core::*;
//! use carcost::form::*;
//!
//! let vehicle = VehicleForm {
//!     car_model: "Golf".into(),
//!     production_year: "2021".into(),
//!     power_kw: "110 kW".into(),
//!     engine_capacity: "1968".into(),
//!     co2_emissions: "152".into(),
//!     fuel_type: FuelType::Diesel,
//! };
//! let profile = vehicle.to_profile(2025);
//! assert_eq!(profile.power_kw, 110.0);
//!
//! let financing = FinancingForm { total_amount: "30000".into(), ..Default::default() };
//! let result = calculate(&financing.to_inputs().unwrap());
//! assert!(result.monthly_base > 0.0);
//! ```

mod fields;
mod parse;

pub use fields::*;
pub use parse::{decimal_or, int_or, parse_decimal_lenient, parse_int_lenient};
