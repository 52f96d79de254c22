#![cfg(feature = "display")]

use carcost::core::*;
use carcost::display::*;

const NOW: i32 = 2025;

fn hatchback() -> VehicleProfile {
    VehicleProfile {
        power_kw: 100.0,
        production_year: 2020,
        engine_capacity_cc: 1598.0,
        co2_emissions_g_per_km: 160.0,
        fuel_type: FuelType::Benzine,
    }
}

#[test]
fn purchase_breakdown_snapshot() {
    let plan = FinancingInputsBuilder::purchase(12_000.0, 12).build().unwrap();
    let cost = assess(&hatchback(), &plan, NOW);

    insta::assert_snapshot!(render_breakdown(&cost, &plan), @r"
    Monthly Payment: €1,000.00
    Vehicle Cost: €14,520.00
    Registration Cost: €351.52
    Total Tax Over Period: €447.25
    Base Yearly Tax (KW & Age): €272.25
    Additional CO₂ Tax: €175.00
    Total Cost of Ownership: €15,318.77
    ");
}

#[test]
fn leasing_with_loan_lists_vat_and_interest() {
    let car = VehicleProfile {
        engine_capacity_cc: 4500.0,
        ..hatchback()
    };
    let plan = FinancingInputsBuilder::leasing(60_000.0, 36)
        .loan(5.0)
        .build()
        .unwrap();
    let cost = assess(&car, &plan, NOW);
    let lines = breakdown_lines(&cost, &plan);

    let labels: Vec<_> = lines.iter().map(|l| l.label).collect();
    assert_eq!(
        labels,
        [
            "Monthly Payment",
            "Monthly with VAT",
            "Monthly with Interest",
            "Total Interest",
            "Vehicle Cost",
            "Registration Cost",
            "Total Tax Over Period",
            "Base Yearly Tax (KW & Age)",
            "Additional CO₂ Tax",
            "Total Cost of Ownership",
        ]
    );

    let registration = &lines[5];
    assert_eq!(registration.note, Some(EXTRAPOLATED_FEE_NOTE));
    // 2582.32 + ceil(350 / 200) * 140.84
    assert_eq!(registration.value, "€2,864.00");
    assert_eq!(lines[3].value, format_eur(cost.financing.total_interest_paid));
}

#[test]
fn electric_breakdown_omits_co2_line() {
    let ev = VehicleProfile {
        engine_capacity_cc: 0.0,
        co2_emissions_g_per_km: 0.0,
        fuel_type: FuelType::Electric,
        ..hatchback()
    };
    let plan = FinancingInputsBuilder::purchase(40_000.0, 48).build().unwrap();
    let cost = assess(&ev, &plan, NOW);
    let lines = breakdown_lines(&cost, &plan);

    assert!(lines.iter().all(|l| l.label != "Additional CO₂ Tax"));
    assert!(lines.iter().all(|l| l.note.is_none()));
    let registration = lines.iter().find(|l| l.label == "Registration Cost").unwrap();
    assert_eq!(registration.value, "€0.00");
}

#[test]
fn breakdown_serializes_without_empty_notes() {
    let plan = FinancingInputsBuilder::purchase(12_000.0, 12).build().unwrap();
    let cost = assess(&hatchback(), &plan, NOW);
    let json = serde_json::to_value(breakdown_lines(&cost, &plan)).unwrap();
    assert_eq!(json[0]["label"], "Monthly Payment");
    assert_eq!(json[0]["value"], "€1,000.00");
    assert!(json[0].get("note").is_none());
}

#[test]
fn cents_rounding() {
    use rust_decimal_macros::dec;
    assert_eq!(to_cents(335.743801), Some(dec!(335.74)));
    assert_eq!(to_cents(0.125), Some(dec!(0.13)));
    assert_eq!(to_cents(f64::NAN), None);
}

#[test]
fn entered_figures_are_marked_and_totalled() {
    let plan = FinancingInputsBuilder::purchase(12_000.0, 12).build().unwrap();
    let overrides = CostOverrides::default()
        .registration_cost(400.0)
        .yearly_tax(300.0);
    let cost = assess_with(&hatchback(), &plan, NOW, &overrides);
    let lines = breakdown_lines(&cost, &plan);

    let registration = lines.iter().find(|l| l.label == "Registration Cost").unwrap();
    assert_eq!(registration.value, "€400.00");
    assert_eq!(registration.note, Some(ENTERED_NOTE));

    let tax = lines.iter().find(|l| l.label == "Total Tax Over Period").unwrap();
    assert_eq!(tax.value, "€300.00");
    assert_eq!(tax.note, Some(ENTERED_NOTE));

    let total = lines.last().unwrap();
    assert_eq!(total.value, "€15,220.00");
}
