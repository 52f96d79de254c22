use carcost::core::*;
use carcost::display::render_breakdown;
use carcost::form::{FinancingForm, TaxDetailsForm, VehicleForm};
use carcost::store::{CalculationInputs, CalculationStore};

fn main() {
    let year = current_year();

    // Raw fields as a form would hand them over
    let vehicle = VehicleForm {
        car_model: "Audi A6 Avant".into(),
        production_year: "2022".into(),
        fuel_type: FuelType::Diesel,
        power_kw: "150".into(),
        engine_capacity: "2967".into(),
        co2_emissions: "178".into(),
    };
    let financing = FinancingForm {
        total_amount: "62000".into(),
        months: "48".into(),
        remaining_value_percent: "30".into(),
        has_loan: true,
        interest_rate: "4.9".into(),
        ..FinancingForm::default()
    };

    // Registration cost as quoted by the dealer; yearly tax left computed
    let details = TaxDetailsForm {
        registration_cost: "1450".into(),
        ..TaxDetailsForm::default()
    };

    let problems = vehicle
        .validate()
        .into_iter()
        .chain(financing.validate())
        .chain(details.validate());
    for problem in problems {
        eprintln!("warning: {problem}");
    }

    let profile = vehicle.to_profile(year);
    let plan = financing.to_inputs().expect("form values should be in range");
    let overrides = details.overrides();
    let cost = assess_with(&profile, &plan, year, &overrides);

    println!("{}", vehicle.description(year));
    print!("{}", render_breakdown(&cost, &plan));

    let mut store = CalculationStore::new();
    store
        .save_now(
            "Dealer offer",
            &vehicle.car_model,
            CalculationInputs {
                vehicle: profile,
                financing: plan,
                overrides,
            },
            cost.financing,
        )
        .expect("title and model are set");
    println!("\n{}", store.to_json().expect("store serializes"));
}
