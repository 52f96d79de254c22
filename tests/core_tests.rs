use carcost::core::tables::{CO2_BRACKETS, TAX_BRACKETS};
use carcost::core::*;

const NOW: i32 = 2025;

fn approx(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}

fn vehicle(power_kw: f64, year: i32, cc: f64, co2: f64, fuel: FuelType) -> VehicleProfile {
    VehicleProfile {
        power_kw,
        production_year: year,
        engine_capacity_cc: cc,
        co2_emissions_g_per_km: co2,
        fuel_type: fuel,
    }
}

// ---------------------------------------------------------------------------
// Road tax by power and age
// ---------------------------------------------------------------------------

#[test]
fn every_bracket_and_age_returns_table_entry() {
    for bracket in TAX_BRACKETS {
        let lo = bracket.min_power_kw.unwrap_or(0.0);
        let hi = if bracket.max_power_kw.is_finite() {
            bracket.max_power_kw
        } else {
            lo + 500.0
        };
        for power in [lo, (lo + hi) / 2.0, hi] {
            for age in 0..=15 {
                assert_eq!(
                    power_age_tax(power, NOW - age, NOW),
                    bracket.rates_by_age[age as usize],
                    "{power} kW, age {age}"
                );
            }
        }
    }
}

#[test]
fn age_twenty_equals_age_fifteen() {
    for power in [60.0, 80.0, 95.0, 105.0, 115.0, 140.0, 200.0] {
        assert_eq!(
            power_age_tax(power, NOW - 20, NOW),
            power_age_tax(power, NOW - 15, NOW)
        );
    }
}

#[test]
fn future_year_equals_new_car() {
    for power in [60.0, 80.0, 95.0, 105.0, 115.0, 140.0, 200.0] {
        assert_eq!(
            power_age_tax(power, NOW + 3, NOW),
            power_age_tax(power, NOW, NOW)
        );
    }
}

#[test]
fn power_bracket_boundaries() {
    assert_eq!(power_age_tax(70.0, NOW, NOW), 61.50);
    assert_eq!(power_age_tax(71.0, NOW, NOW), 123.00);
    assert_eq!(power_age_tax(85.0, NOW, NOW), 123.00);
    assert_eq!(power_age_tax(86.0, NOW, NOW), 495.00);
    assert_eq!(power_age_tax(155.0, NOW, NOW), 2478.00);
    assert_eq!(power_age_tax(156.0, NOW, NOW), 4957.00);
    assert_eq!(power_age_tax(1000.0, NOW, NOW), 4957.00);
}

#[test]
fn current_year_variant_matches_explicit_year() {
    let year = current_year();
    assert_eq!(power_age_tax_now(120.0, year - 3), power_age_tax(120.0, year - 3, year));
}

// ---------------------------------------------------------------------------
// CO₂ surcharge
// ---------------------------------------------------------------------------

#[test]
fn co2_reference_points() {
    assert_eq!(co2_surcharge(145.0, FuelType::Benzine), 0.0);
    assert_eq!(co2_surcharge(146.0, FuelType::Benzine), 100.0);
    assert_eq!(
        co2_surcharge(999.0, FuelType::Diesel),
        CO2_BRACKETS.last().unwrap().surcharge
    );
    assert_eq!(co2_surcharge(300.0, FuelType::Electric), 0.0);
}

#[test]
fn co2_steps_discretely_at_each_boundary() {
    for pair in CO2_BRACKETS.windows(2) {
        let below = co2_surcharge(pair[0].max_g_per_km, FuelType::Benzine);
        let above = co2_surcharge(pair[1].min_g_per_km, FuelType::Benzine);
        assert_eq!(below, pair[0].surcharge);
        assert_eq!(above, pair[1].surcharge);
        assert!(above > below);
    }
}

// ---------------------------------------------------------------------------
// Registration fee
// ---------------------------------------------------------------------------

#[test]
fn registration_reference_points() {
    assert_eq!(registration_fee(0.0), 0.0);
    assert_eq!(registration_fee(750.0), 100.98);
    assert!(registration_fee(4200.0) > registration_fee(4150.0));
}

#[test]
fn registration_extrapolation_monotonic() {
    let mut previous = registration_fee(4150.0);
    for cc in (4151..=8000).step_by(37) {
        let fee = registration_fee(f64::from(cc));
        assert!(fee >= previous, "{cc} cc: {fee} < {previous}");
        previous = fee;
    }
}

#[test]
fn registration_quote_flags_estimate() {
    assert!(!registration_quote(4150.0).estimated);
    let q = registration_quote(5000.0);
    assert!(q.estimated);
    // ceil(850 / 200) = 5 extra units
    assert_eq!(q.fiscal_units, 25);
    approx(q.fee, 2582.32 + 5.0 * 140.84, 1e-9);
}

// ---------------------------------------------------------------------------
// Financing
// ---------------------------------------------------------------------------

#[test]
fn leasing_reference_example() {
    let inputs = FinancingInputsBuilder::leasing(30_000.0, 48)
        .remaining_value_percent(35.0)
        .build()
        .unwrap();
    let p = financed_principal(&inputs);
    approx(p.net_amount, 24_793.39, 0.01);
    approx(p.remaining_value, 8_677.69, 0.01);
    approx(p.amount_to_finance, 16_115.70, 0.01);
    approx(calculate(&inputs).monthly_base, 335.74, 0.01);
}

#[test]
fn purchase_reference_example() {
    let inputs = FinancingInputsBuilder::purchase(20_000.0, 60)
        .vat_deductible(false)
        .build()
        .unwrap();
    approx(calculate(&inputs).monthly_base, 333.33, 0.01);
}

#[test]
fn loan_raises_payment_and_interest() {
    let with_loan = FinancingInputsBuilder::leasing(30_000.0, 48)
        .loan(5.0)
        .build()
        .unwrap();
    let r = calculate(&with_loan);
    assert!(r.monthly_with_interest > r.monthly_base);
    assert!(r.monthly_with_vat_and_interest > r.monthly_with_vat);
    assert!(r.total_interest_paid > 0.0);

    let without = FinancingInputsBuilder::leasing(30_000.0, 48).build().unwrap();
    let r = calculate(&without);
    assert_eq!(r.total_interest_paid, 0.0);
    assert_eq!(r.monthly_with_interest, r.monthly_base);
}

#[test]
fn vat_is_reapplied_on_monthly_base() {
    let inputs = FinancingInputsBuilder::purchase(50_000.0, 36).build().unwrap();
    let r = calculate(&inputs);
    assert_eq!(r.monthly_with_vat, r.monthly_base * (1.0 + VAT_RATE));
}

#[test]
fn missing_inputs_give_zero_result() {
    for (amount, months) in [(0.0, 48), (30_000.0, 0), (0.0, 0)] {
        let inputs = FinancingInputsBuilder::leasing(amount, months)
            .loan(5.0)
            .build()
            .unwrap();
        assert!(calculate(&inputs).is_zero(), "{amount} over {months}");
    }
}

#[test]
fn resolvers_are_idempotent() {
    let inputs = FinancingInputsBuilder::leasing(41_000.0, 36)
        .loan(6.5)
        .build()
        .unwrap();
    assert_eq!(calculate(&inputs), calculate(&inputs));
    assert_eq!(power_age_tax(118.0, 2019, NOW), power_age_tax(118.0, 2019, NOW));
    assert_eq!(co2_surcharge(201.0, FuelType::Diesel), co2_surcharge(201.0, FuelType::Diesel));
    assert_eq!(registration_fee(4700.0), registration_fee(4700.0));
}

// ---------------------------------------------------------------------------
// Cost of ownership
// ---------------------------------------------------------------------------

#[test]
fn tax_period_rounds_up_to_whole_years() {
    assert_eq!(tax_years(13), 2);
    assert_eq!(tax_years(12), 1);
    assert_eq!(total_cost_of_ownership(0.0, 0.0, 100.0, 13), 200.0);
    assert_eq!(total_cost_of_ownership(0.0, 0.0, 100.0, 12), 100.0);
}

#[test]
fn electric_vehicle_assessment() {
    let ev = vehicle(150.0, NOW, 0.0, 0.0, FuelType::Electric);
    let plan = FinancingInputsBuilder::purchase(48_400.0, 24)
        .vat_deductible(true)
        .build()
        .unwrap();
    let cost = assess(&ev, &plan, NOW);
    assert_eq!(cost.registration.fee, 0.0);
    assert_eq!(cost.co2_surcharge, 0.0);
    assert_eq!(cost.power_age_tax, 2478.00);
    assert_eq!(cost.tax_years, 2);
    approx(cost.financing.monthly_base, 40_000.0 / 24.0, 1e-6);
    approx(
        cost.total,
        cost.financing.total_with_vat_and_interest + 2.0 * 2478.00,
        1e-6,
    );
}

#[test]
fn combustion_assessment_matches_manual_sum() {
    let car = vehicle(100.0, NOW - 5, 1598.0, 160.0, FuelType::Benzine);
    let plan = FinancingInputsBuilder::leasing(35_000.0, 30)
        .remaining_value_percent(40.0)
        .loan(4.0)
        .build()
        .unwrap();
    let cost = assess(&car, &plan, NOW);

    let yearly = power_age_tax(100.0, NOW - 5, NOW) + co2_surcharge(160.0, FuelType::Benzine);
    assert_eq!(cost.yearly_tax, yearly);
    assert_eq!(yearly, yearly_tax(&car, NOW));
    assert_eq!(
        cost.total,
        total_cost_of_ownership(
            calculate(&plan).total_with_vat_and_interest,
            registration_fee(1598.0),
            yearly,
            30
        )
    );
}
