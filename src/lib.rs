//! # carcost
//!
//! Vehicle financing and cost-of-ownership calculator: yearly road tax by
//! engine power and age, CO₂ surcharge, one-time registration fee, leasing
//! and purchase payments with optional loan interest.
//!
//! The calculation engine works in `f64` and never rounds; rounding happens
//! only when amounts are rendered by the `display` module.
//!
//! ## Quick Start
//!
//! ```rust
//! use carcost::core::*;
//!
//! let car = VehicleProfile {
//!     power_kw: 110.0,
//!     production_year: 2023,
//!     engine_capacity_cc: 1498.0,
//!     co2_emissions_g_per_km: 150.0,
//!     fuel_type: FuelType::Benzine,
//! };
//! let plan = FinancingInputsBuilder::leasing(30_000.0, 48)
//!     .remaining_value_percent(35.0)
//!     .build()
//!     .unwrap();
//!
//! let cost = assess(&car, &plan, 2025);
//! assert_eq!(cost.registration.fee, 295.02);
//! assert_eq!(cost.tax_years, 4);
//! assert!((cost.financing.monthly_base - 335.74).abs() < 0.01);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Resolvers, financing calculator, cost of ownership |
//! | `form` | Lenient parsing of raw form fields into core inputs |
//! | `store` | Saved calculation records with JSON persistence |
//! | `display` | EUR currency formatting and breakdown lines |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "form")]
pub mod form;

#[cfg(feature = "store")]
pub mod store;

#[cfg(feature = "display")]
pub mod display;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
