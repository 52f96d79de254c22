use serde::{Deserialize, Serialize};

/// Fuel type of the vehicle.
///
/// Only the electric/combustion distinction affects the calculation;
/// benzine and diesel are kept apart because saved records carry them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    #[default]
    Benzine,
    Diesel,
    Electric,
}

impl FuelType {
    /// Electric vehicles are exempt from the CO₂ surcharge.
    pub fn is_electric(self) -> bool {
        matches!(self, FuelType::Electric)
    }

    pub fn from_code(s: &str) -> Option<FuelType> {
        match s.trim().to_lowercase().as_str() {
            "benzine" | "petrol" | "gasoline" => Some(FuelType::Benzine),
            "diesel" => Some(FuelType::Diesel),
            "electric" | "ev" => Some(FuelType::Electric),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            FuelType::Benzine => "benzine",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Technical attributes of the vehicle that drive tax and registration cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    /// Engine power in kW.
    pub power_kw: f64,
    /// Year of first production; used to derive the vehicle age.
    pub production_year: i32,
    /// Engine displacement in cc. `0` for electric vehicles.
    pub engine_capacity_cc: f64,
    /// CO₂ emissions in g/km.
    pub co2_emissions_g_per_km: f64,
    pub fuel_type: FuelType,
}

/// How the vehicle is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculationType", rename_all = "kebab-case")]
pub enum FinancingMode {
    /// Financial renting: a residual value is kept out of the financed principal.
    #[serde(rename = "financial-renting", rename_all = "camelCase")]
    Leasing {
        /// Residual value as a percentage of the net (VAT-free) amount, `0..=100`.
        remaining_value_percent: f64,
    },
    /// Outright purchase, optionally with VAT recoverable by the buyer.
    #[serde(rename_all = "camelCase")]
    Purchase { vat_deductible: bool },
}

impl Default for FinancingMode {
    fn default() -> Self {
        FinancingMode::Leasing {
            remaining_value_percent: 35.0,
        }
    }
}

/// Financial side of a calculation.
///
/// Construct through [`FinancingInputsBuilder`](super::FinancingInputsBuilder)
/// to get range checks; the fields stay public for deserialized records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingInputs {
    #[serde(flatten)]
    pub mode: FinancingMode,
    /// Gross amount including VAT.
    pub total_amount: f64,
    /// Term in months.
    pub months: u32,
    pub has_loan: bool,
    /// Nominal yearly interest rate in percent, e.g. `5.0` for 5%.
    pub annual_interest_rate_percent: f64,
}

/// Monthly and total figures produced by the financing calculator.
///
/// All amounts are unrounded; formatting is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub monthly_base: f64,
    pub monthly_with_vat: f64,
    pub monthly_with_interest: f64,
    pub monthly_with_vat_and_interest: f64,
    pub total_interest_paid: f64,
    pub total_with_vat_and_interest: f64,
}

impl CalculationResult {
    /// True when the calculator declined to compute (missing amount or term).
    pub fn is_zero(&self) -> bool {
        *self == CalculationResult::default()
    }
}

/// Intermediate amounts of the principal computation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancedPrincipal {
    /// Amount the monthly payment is derived from, before the residual is removed.
    pub net_amount: f64,
    /// Residual value kept out of the financing (leasing only, else `0`).
    pub remaining_value: f64,
    pub amount_to_finance: f64,
}

/// Registration fee together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistrationQuote {
    pub fee: f64,
    /// Fiscal horsepower units of the matching bracket (estimated above the table).
    pub fiscal_units: u32,
    /// Set when the capacity exceeds the tabulated ceiling and the fee was extrapolated.
    pub estimated: bool,
}

/// User-entered figures that replace the computed ones.
///
/// `None` keeps the computed value. Non-finite or negative entries are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_tax: Option<f64>,
}

impl CostOverrides {
    pub fn registration_cost(mut self, fee: f64) -> Self {
        self.registration_cost = Some(fee);
        self
    }

    pub fn yearly_tax(mut self, tax: f64) -> Self {
        self.yearly_tax = Some(tax);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.effective_registration_cost().is_none() && self.effective_yearly_tax().is_none()
    }

    pub(crate) fn effective_registration_cost(&self) -> Option<f64> {
        self.registration_cost.filter(|v| v.is_finite() && *v >= 0.0)
    }

    pub(crate) fn effective_yearly_tax(&self) -> Option<f64> {
        self.yearly_tax.filter(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Full cost-of-ownership breakdown for one vehicle and financing plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostOfOwnership {
    pub financing: CalculationResult,
    /// Computed quote, or the entered fee when overridden.
    pub registration: RegistrationQuote,
    pub registration_overridden: bool,
    /// Yearly road tax from power and age.
    pub power_age_tax: f64,
    /// Yearly CO₂ surcharge (zero for electric vehicles).
    pub co2_surcharge: f64,
    /// Sum of the two parts above, or the entered figure when overridden.
    pub yearly_tax: f64,
    pub yearly_tax_overridden: bool,
    /// Number of (started) years covered by the term.
    pub tax_years: u32,
    pub tax_over_period: f64,
    pub total: f64,
}
