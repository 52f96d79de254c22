//! Saved calculations and their JSON persistence.
//!
//! A store is an ordered list of [`SavedCalculation`] records kept in the
//! order they were created. The on-disk form is a JSON array with camelCase
//! keys; vehicle and financing inputs are flattened into one `inputs` object.
//!
//! # Example
//!
//! ```
//! use carcost::core::*;
//! use carcost::store::*;
//!
//! let inputs = CalculationInputs {
//!     vehicle: VehicleProfile {
//!         power_kw: 85.0,
//!         production_year: 2022,
//!         engine_capacity_cc: 999.0,
//!         co2_emissions_g_per_km: 120.0,
//!         fuel_type: FuelType::Benzine,
//!     },
//!     financing: FinancingInputsBuilder::leasing(25_000.0, 36).build().unwrap(),
//!     overrides: CostOverrides::default(),
//! };
//!
//! let mut store = CalculationStore::new();
//! store.save_now("Dealer offer", "Polo", inputs, calculate(&inputs.financing)).unwrap();
//!
//! let json = store.to_json().unwrap();
//! assert_eq!(CalculationStore::from_json(&json).unwrap(), store);
//! ```

mod collection;
mod record;

pub use collection::CalculationStore;
pub use record::{CalculationInputs, SavedCalculation};
