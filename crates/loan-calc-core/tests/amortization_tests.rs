use loan_calc_core::amortization::{self, level_payment};
use loan_calc_core::products::{self, calculator_catalogue, get_calculator_defaults};
use loan_calc_core::record::CalculationRecord;
use loan_calc_core::schedule;
use loan_calc_core::types::LoanInputs;
use loan_calc_core::LoanCalcError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn inputs(amount: Decimal, rate: Decimal, months: u32, down: Decimal) -> LoanInputs {
    LoanInputs {
        loan_amount: amount,
        interest_rate: rate,
        loan_term_months: months,
        down_payment: down,
    }
}

// ===========================================================================
// Level payment: known answers
// ===========================================================================

#[test]
fn test_sba_7a_headline_payment() {
    // 500k at 11.5% over 10 years
    let out = amortization::calculate_loan(&inputs(dec!(500000), dec!(11.5), 120, dec!(0))).unwrap();
    let r = &out.result;
    assert!(
        (r.monthly_payment - dec!(7029.77)).abs() < dec!(0.01),
        "Expected ~7029.77, got {}",
        r.monthly_payment
    );
    assert_eq!(r.amortization_schedule.len(), 120);
    assert_eq!(r.amortization_schedule.last().unwrap().balance, Decimal::ZERO);
    assert!((r.total_interest - dec!(343572.66)).abs() < dec!(0.01));
}

#[test]
fn test_thirty_year_commercial_property() {
    // 2M at 7.5% over 360 months => ~13984.29
    let out = amortization::calculate_loan(&inputs(dec!(2000000), dec!(7.5), 360, dec!(0))).unwrap();
    assert!(
        (out.result.monthly_payment - dec!(13984.29)).abs() < dec!(0.01),
        "got {}",
        out.result.monthly_payment
    );
    assert_eq!(out.result.amortization_schedule[359].balance, Decimal::ZERO);
}

#[test]
fn test_zero_rate_straight_line() {
    let out = amortization::calculate_loan(&inputs(dec!(100000), dec!(0), 12, dec!(0))).unwrap();
    assert_eq!(out.result.monthly_payment.round_dp(2), dec!(8333.33));
    for row in &out.result.amortization_schedule {
        assert_eq!(row.interest, Decimal::ZERO);
    }
}

#[test]
fn test_level_payment_matches_calculation() {
    let i = inputs(dec!(300000), dec!(11), 60, dec!(25000));
    let pmt = level_payment(i.principal(), amortization::monthly_rate(i.interest_rate), 60).unwrap();
    let out = amortization::calculate_loan(&i).unwrap();
    assert_eq!(pmt, out.result.monthly_payment);
}

// ===========================================================================
// Envelope
// ===========================================================================

#[test]
fn test_envelope_records_assumptions() {
    let out = amortization::calculate_loan(&inputs(dec!(1200), dec!(12), 12, dec!(0))).unwrap();
    assert_eq!(out.assumptions["principal"], "1200");
    assert_eq!(out.assumptions["term_months"], 12);
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    assert!(out.warnings.is_empty());
}

#[test]
fn test_results_serialize_with_snake_case_fields() {
    let out = amortization::calculate_loan(&inputs(dec!(1200), dec!(12), 3, dec!(0))).unwrap();
    let value = serde_json::to_value(&out.result).unwrap();
    assert!(value.get("monthly_payment").is_some());
    assert_eq!(value["amortization_schedule"].as_array().unwrap().len(), 3);
    assert_eq!(value["amortization_schedule"][0]["month"], 1);
}

// ===========================================================================
// Validation errors
// ===========================================================================

#[test]
fn test_invalid_inputs_name_the_field() {
    let cases = [
        (inputs(dec!(1000), dec!(5), 0, dec!(0)), "loan_term_months"),
        (inputs(dec!(1000), dec!(-0.5), 12, dec!(0)), "interest_rate"),
        (inputs(dec!(1000), dec!(5), 12, dec!(-1)), "down_payment"),
        (inputs(dec!(1000), dec!(5), 12, dec!(1000)), "loan_amount"),
        (inputs(dec!(0), dec!(5), 12, dec!(0)), "loan_amount"),
    ];
    for (i, expected) in cases {
        match amortization::calculate_loan(&i) {
            Err(LoanCalcError::InvalidInput { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected InvalidInput for {expected}, got {other:?}"),
        }
    }
}

// ===========================================================================
// Products
// ===========================================================================

#[test]
fn test_unknown_product_equals_sba_7a() {
    assert_eq!(
        products::get_calculator_defaults("unknown-key"),
        products::get_calculator_defaults("sba-7a")
    );
}

#[test]
fn test_every_product_default_calculates_cleanly() {
    for d in calculator_catalogue() {
        let out = amortization::calculate_product_loan(d.key, &d.default_inputs()).unwrap();
        assert!(out.warnings.is_empty(), "{}: {:?}", d.key, out.warnings);
        assert_eq!(out.result.amortization_schedule.len(), d.default_term as usize);
        assert_eq!(
            out.result.amortization_schedule.last().unwrap().balance,
            Decimal::ZERO,
            "{}",
            d.key
        );
    }
}

#[test]
fn test_merchant_cash_advance_high_rate() {
    let d = get_calculator_defaults("merchant-cash-advance");
    let out = amortization::calculate_loan(&d.default_inputs()).unwrap();
    // 50k at 35% over 12 months
    assert!(
        (out.result.monthly_payment - dec!(4998.15)).abs() < dec!(0.01),
        "got {}",
        out.result.monthly_payment
    );
}

// ===========================================================================
// Downstream shapes
// ===========================================================================

#[test]
fn test_chart_and_record_from_one_calculation() {
    let d = get_calculator_defaults("sba-7a");
    let i = d.default_inputs();
    let results = amortization::calculate_loan(&i).unwrap().result;

    let points = schedule::chart_points(&results.amortization_schedule, 12);
    assert_eq!(points.len(), 11);
    assert_eq!(points[10].month, 120);

    let years = schedule::yearly_summary(&results.amortization_schedule);
    assert_eq!(years.len(), 10);
    let interest: Decimal = years.iter().map(|y| y.interest_paid).sum();
    assert!((interest - results.total_interest).abs() < dec!(0.000001));

    let record = CalculationRecord::new(d.key, &i, &results);
    assert_eq!(record.total_interest, results.total_interest);
}
