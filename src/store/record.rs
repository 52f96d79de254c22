use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{
    CalculationResult, CostOfOwnership, CostOverrides, FinancingInputs, VehicleProfile,
};

/// Everything that went into a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInputs {
    #[serde(flatten)]
    pub vehicle: VehicleProfile,
    #[serde(flatten)]
    pub financing: FinancingInputs,
    /// Entered registration cost and yearly tax; absent keys keep the computed ones.
    #[serde(flatten)]
    pub overrides: CostOverrides,
}

/// A named snapshot of inputs and results.
///
/// Inputs are range-checked on save; records are neither re-validated nor
/// migrated on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculation {
    /// Millisecond timestamp of creation, unique within a store.
    pub id: String,
    pub title: String,
    /// "`{model} ({year})`".
    pub vehicle_description: String,
    pub saved_date: NaiveDate,
    pub inputs: CalculationInputs,
    pub results: CalculationResult,
}

impl SavedCalculation {
    /// Recompute the results from the stored inputs.
    ///
    /// Useful to compare a snapshot against the current schedules.
    pub fn recalculate(&self) -> CalculationResult {
        crate::core::calculate(&self.inputs.financing)
    }

    /// Full breakdown for the stored inputs, honouring entered figures.
    pub fn reassess(&self, current_year: i32) -> CostOfOwnership {
        crate::core::assess_with(
            &self.inputs.vehicle,
            &self.inputs.financing,
            current_year,
            &self.inputs.overrides,
        )
    }
}
