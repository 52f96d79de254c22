use super::error::{CostError, ValidationError, validation_failure};
use super::types::*;

/// Builder for range-checked financing inputs.
///
/// ```
/// use carcost::core::*;
///
/// let inputs = FinancingInputsBuilder::leasing(30_000.0, 48)
///     .remaining_value_percent(35.0)
///     .loan(5.0)
///     .build()
///     .unwrap();
/// assert!(inputs.has_loan);
/// ```
#[derive(Debug, Clone)]
pub struct FinancingInputsBuilder {
    mode: FinancingMode,
    total_amount: f64,
    months: u32,
    has_loan: bool,
    annual_interest_rate_percent: f64,
}

impl FinancingInputsBuilder {
    /// Financial renting with the default 35% remaining value.
    pub fn leasing(total_amount: f64, months: u32) -> Self {
        Self::new(FinancingMode::default(), total_amount, months)
    }

    /// Outright purchase, VAT not deductible unless set.
    pub fn purchase(total_amount: f64, months: u32) -> Self {
        Self::new(
            FinancingMode::Purchase {
                vat_deductible: false,
            },
            total_amount,
            months,
        )
    }

    pub fn new(mode: FinancingMode, total_amount: f64, months: u32) -> Self {
        Self {
            mode,
            total_amount,
            months,
            has_loan: false,
            annual_interest_rate_percent: 0.0,
        }
    }

    /// Set the residual percentage. Switches the mode to leasing.
    pub fn remaining_value_percent(mut self, percent: f64) -> Self {
        self.mode = FinancingMode::Leasing {
            remaining_value_percent: percent,
        };
        self
    }

    /// Mark VAT as deductible. Switches the mode to purchase.
    pub fn vat_deductible(mut self, deductible: bool) -> Self {
        self.mode = FinancingMode::Purchase {
            vat_deductible: deductible,
        };
        self
    }

    /// Finance through a loan at the given nominal yearly rate (percent).
    pub fn loan(mut self, annual_interest_rate_percent: f64) -> Self {
        self.has_loan = true;
        self.annual_interest_rate_percent = annual_interest_rate_percent;
        self
    }

    pub fn no_loan(mut self) -> Self {
        self.has_loan = false;
        self
    }

    /// Check ranges and build.
    ///
    /// A zero amount or zero months is accepted; the calculator answers it
    /// with an all-zero result.
    pub fn build(self) -> Result<FinancingInputs, CostError> {
        let inputs = FinancingInputs {
            mode: self.mode,
            total_amount: self.total_amount,
            months: self.months,
            has_loan: self.has_loan,
            annual_interest_rate_percent: self.annual_interest_rate_percent,
        };
        let errors = check_financing(&inputs);
        if errors.is_empty() {
            Ok(inputs)
        } else {
            Err(validation_failure(&errors))
        }
    }
}

/// Range checks shared by the builder and deserialized records.
pub fn check_financing(inputs: &FinancingInputs) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !inputs.total_amount.is_finite() || inputs.total_amount < 0.0 {
        errors.push(ValidationError::new(
            "total_amount",
            format!("must be a finite non-negative amount, got {}", inputs.total_amount),
        ));
    }

    if !inputs.annual_interest_rate_percent.is_finite() || inputs.annual_interest_rate_percent < 0.0
    {
        errors.push(ValidationError::new(
            "annual_interest_rate_percent",
            format!(
                "must be a finite non-negative rate, got {}",
                inputs.annual_interest_rate_percent
            ),
        ));
    }

    if let FinancingMode::Leasing {
        remaining_value_percent,
    } = inputs.mode
    {
        if !(0.0..=100.0).contains(&remaining_value_percent) {
            errors.push(ValidationError::new(
                "remaining_value_percent",
                format!("must be within 0..=100, got {remaining_value_percent}"),
            ));
        }
    }

    errors
}

/// Range checks for the vehicle attributes.
pub fn check_vehicle(profile: &VehicleProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let fields = [
        ("power_kw", profile.power_kw),
        ("engine_capacity_cc", profile.engine_capacity_cc),
        ("co2_emissions_g_per_km", profile.co2_emissions_g_per_km),
    ];
    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            errors.push(ValidationError::new(
                field,
                format!("must be a finite non-negative number, got {value}"),
            ));
        }
    }
    errors
}

/// A saved calculation needs a title and a car model.
pub fn check_save_details(title: &str, car_model: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if title.trim().is_empty() {
        errors.push(ValidationError::new("title", "a title is required"));
    }
    if car_model.trim().is_empty() {
        errors.push(ValidationError::new("car_model", "a car model is required"));
    }
    errors
}
