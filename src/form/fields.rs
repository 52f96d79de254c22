use serde::{Deserialize, Serialize};

use super::parse::{decimal_or, int_or, parse_decimal_lenient};
use crate::core::{
    CostError, CostOverrides, FinancingInputs, FinancingInputsBuilder, FinancingMode, FuelType,
    ValidationError, VehicleProfile, check_save_details, validation_failure,
};

/// Default term shown in a fresh form.
pub const DEFAULT_MONTHS: &str = "48";
/// Default residual percentage shown in a fresh form.
pub const DEFAULT_REMAINING_VALUE_PERCENT: &str = "35";
/// Default loan rate shown in a fresh form.
pub const DEFAULT_INTEREST_RATE: &str = "5";

/// Raw vehicle fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleForm {
    pub car_model: String,
    pub production_year: String,
    pub fuel_type: FuelType,
    pub power_kw: String,
    pub engine_capacity: String,
    pub co2_emissions: String,
}

impl VehicleForm {
    /// Convert to a profile. Unparseable numbers become 0; a missing
    /// production year becomes `current_year`.
    pub fn to_profile(&self, current_year: i32) -> VehicleProfile {
        let production_year = int_or(&self.production_year, i64::from(current_year))
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        VehicleProfile {
            power_kw: int_or(&self.power_kw, 0).max(0) as f64,
            production_year,
            engine_capacity_cc: int_or(&self.engine_capacity, 0).max(0) as f64,
            co2_emissions_g_per_km: int_or(&self.co2_emissions, 0).max(0) as f64,
            fuel_type: self.fuel_type,
        }
    }

    /// Engine capacity only accepts whole numbers.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if !self.engine_capacity.chars().all(|c| c.is_ascii_digit()) {
            errors.push(ValidationError::new(
                "engine_capacity",
                "only whole numbers are allowed",
            ));
        }
        for (field, raw) in [
            ("power_kw", &self.power_kw),
            ("co2_emissions", &self.co2_emissions),
        ] {
            if int_or(raw, 0) < 0 {
                errors.push(ValidationError::new(field, "must not be negative"));
            }
        }
        errors
    }

    /// "`{model} ({year})`", as shown next to saved calculations.
    pub fn description(&self, current_year: i32) -> String {
        format!(
            "{} ({})",
            self.car_model.trim(),
            self.to_profile(current_year).production_year
        )
    }
}

/// Which financing flow the form is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationType {
    #[default]
    #[serde(rename = "financial-renting")]
    Leasing,
    Purchase,
}

/// Raw financing fields as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancingForm {
    pub calculation_type: CalculationType,
    pub total_amount: String,
    pub months: String,
    pub remaining_value_percent: String,
    pub has_loan: bool,
    pub interest_rate: String,
    pub vat_deductible: bool,
}

impl Default for FinancingForm {
    fn default() -> Self {
        Self {
            calculation_type: CalculationType::Leasing,
            total_amount: String::new(),
            months: DEFAULT_MONTHS.into(),
            remaining_value_percent: DEFAULT_REMAINING_VALUE_PERCENT.into(),
            has_loan: false,
            interest_rate: DEFAULT_INTEREST_RATE.into(),
            vat_deductible: false,
        }
    }
}

impl FinancingForm {
    fn mode(&self) -> FinancingMode {
        match self.calculation_type {
            CalculationType::Leasing => FinancingMode::Leasing {
                remaining_value_percent: int_or(&self.remaining_value_percent, 0) as f64,
            },
            CalculationType::Purchase => FinancingMode::Purchase {
                vat_deductible: self.vat_deductible,
            },
        }
    }

    /// Soft findings: the calculator still runs but yields zeros or rejects.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if int_or(&self.total_amount, 0) <= 0 {
            errors.push(ValidationError::new(
                "total_amount",
                "enter a positive amount to calculate",
            ));
        }
        if int_or(&self.months, 0) <= 0 {
            errors.push(ValidationError::new(
                "months",
                "enter a positive number of months",
            ));
        }
        if self.calculation_type == CalculationType::Leasing {
            let pct = int_or(&self.remaining_value_percent, 0);
            if !(0..=100).contains(&pct) {
                errors.push(ValidationError::new(
                    "remaining_value_percent",
                    "must be between 0 and 100",
                ));
            }
        }
        if self.has_loan && decimal_or(&self.interest_rate, 0.0) < 0.0 {
            errors.push(ValidationError::new("interest_rate", "must not be negative"));
        }
        errors
    }

    /// Build checked core inputs. Empty amount or term pass through as 0.
    pub fn to_inputs(&self) -> Result<FinancingInputs, CostError> {
        let months = int_or(&self.months, 0);
        let months = u32::try_from(months).map_err(|_| {
            validation_failure(&[ValidationError::new(
                "months",
                format!("must be a non-negative whole number, got {months}"),
            )])
        })?;
        let total_amount = int_or(&self.total_amount, 0) as f64;

        let builder = FinancingInputsBuilder::new(self.mode(), total_amount, months);
        let builder = if self.has_loan {
            builder.loan(decimal_or(&self.interest_rate, 0.0))
        } else {
            builder
        };
        builder.build()
    }
}

/// Registration and tax fields the user may type over.
///
/// A blank field keeps the computed figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxDetailsForm {
    pub registration_cost: String,
    pub yearly_tax: String,
}

impl TaxDetailsForm {
    pub fn overrides(&self) -> CostOverrides {
        CostOverrides {
            registration_cost: entered_amount(&self.registration_cost),
            yearly_tax: entered_amount(&self.yearly_tax),
        }
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (field, raw) in [
            ("registration_cost", &self.registration_cost),
            ("yearly_tax", &self.yearly_tax),
        ] {
            if parse_decimal_lenient(raw).is_some_and(|v| v < 0.0) {
                errors.push(ValidationError::new(field, "must not be negative"));
            }
        }
        errors
    }
}

fn entered_amount(raw: &str) -> Option<f64> {
    parse_decimal_lenient(raw).filter(|v| *v >= 0.0)
}

/// Guard before a calculation may be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveRequest {
    pub title: String,
    pub car_model: String,
}

impl SaveRequest {
    pub fn new(title: impl Into<String>, car_model: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            car_model: car_model.into(),
        }
    }

    /// A title and a car model are both required.
    pub fn check(&self) -> Result<(), CostError> {
        let errors = check_save_details(&self.title, &self.car_model);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(validation_failure(&errors))
        }
    }
}
