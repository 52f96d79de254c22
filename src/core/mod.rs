//! Core calculation engine: tax resolvers, financing and cost of ownership.
//!
//! Every function here is pure and deterministic. Nothing reads or writes
//! storage, parses free text or formats output; those concerns live in the
//! `form`, `store` and `display` modules.

mod brackets;
mod builder;
mod co2;
mod error;
mod financing;
mod ownership;
mod registration;
mod road_tax;
pub mod tables;
mod types;

pub use brackets::*;
pub use builder::*;
pub use co2::co2_surcharge;
pub use error::*;
pub use financing::{annuity_factor, calculate, financed_principal, net_of_vat};
pub use ownership::{assess, assess_with, tax_years, total_cost_of_ownership, yearly_tax};
pub use registration::{registration_fee, registration_quote};
pub use road_tax::{age_index, current_year, power_age_tax, power_age_tax_now};
pub use tables::VAT_RATE;
pub use types::*;
