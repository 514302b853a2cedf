//! Local scorer tests: reference scores, invariants and monotonicity.

use glyco_core::prelude::*;

fn base() -> Vitals {
    Vitals {
        gender: Gender::Female,
        age: 20,
        pregnancies: 0,
        glucose: 90.0,
        blood_pressure: 70.0,
        skin_thickness: 20.0,
        insulin: 50.0,
        bmi: 22.0,
        pedigree_function: 0.2,
    }
}

#[test]
fn high_risk_reference_record() {
    let v = Vitals {
        gender: Gender::Female,
        age: 50,
        pregnancies: 2,
        glucose: 150.0,
        blood_pressure: 85.0,
        skin_thickness: 20.0,
        insulin: 220.0,
        bmi: 32.0,
        pedigree_function: 0.6,
    };

    assert_eq!(mock_risk_score(&v), 25 + 20 + 15 + 10 + 15 + 10);
    let p = mock_predict(&v);
    assert_eq!(p.probability_positive, 95.0);
    assert_eq!(p.probability_negative, 5.0);
    assert_eq!(p.risk_band, RiskBand::High);
    assert!(p.diabetic);
}

#[test]
fn healthy_reference_record() {
    let v = Vitals {
        gender: Gender::Male,
        age: 22,
        pregnancies: 0,
        glucose: 85.0,
        blood_pressure: 70.0,
        skin_thickness: 15.0,
        insulin: 50.0,
        bmi: 21.5,
        pedigree_function: 0.2,
    };

    assert_eq!(mock_risk_score(&v), 0);
    let p = mock_predict(&v);
    assert_eq!(p.probability_positive, 5.0);
    assert_eq!(p.risk_band, RiskBand::Low);
    assert!(!p.diabetic);
}

#[test]
fn probabilities_always_sum_to_100() {
    for glucose in [0.0, 101.0, 126.0] {
        for bmi in [15.0, 26.0, 31.0] {
            for age in [20, 40, 60] {
                for insulin in [0.0, 250.0] {
                    let v = base()
                        .with_glucose(glucose)
                        .with_bmi(bmi)
                        .with_age(age)
                        .with_insulin(insulin);
                    let p = mock_predict(&v);
                    assert_eq!(p.probability_positive + p.probability_negative, 100.0);
                    assert!((5.0..=95.0).contains(&p.probability_positive));
                }
            }
        }
    }
}

fn assert_non_decreasing(values: &[f64], what: &str) {
    for pair in values.windows(2) {
        assert!(pair[1] >= pair[0], "{} not monotonic: {:?}", what, values);
    }
}

#[test]
fn monotonic_in_each_input() {
    let steps = [0.0, 50.0, 100.0, 100.5, 125.0, 126.0, 200.0];
    let by_glucose: Vec<f64> = steps
        .iter()
        .map(|&g| mock_predict(&base().with_glucose(g)).probability_positive)
        .collect();
    assert_non_decreasing(&by_glucose, "glucose");

    let by_bmi: Vec<f64> = [10.0, 24.9, 25.0, 29.9, 30.0, 60.0]
        .iter()
        .map(|&b| mock_predict(&base().with_bmi(b)).probability_positive)
        .collect();
    assert_non_decreasing(&by_bmi, "bmi");

    let by_age: Vec<f64> = [1, 34, 35, 44, 45, 90]
        .iter()
        .map(|&a| mock_predict(&base().with_age(a)).probability_positive)
        .collect();
    assert_non_decreasing(&by_age, "age");

    let by_bp: Vec<f64> = [0.0, 80.0, 81.0, 130.0]
        .iter()
        .map(|&bp| mock_predict(&base().with_blood_pressure(bp)).probability_positive)
        .collect();
    assert_non_decreasing(&by_bp, "blood pressure");

    let by_dpf: Vec<f64> = [0.0, 0.5, 0.51, 2.5]
        .iter()
        .map(|&d| mock_predict(&base().with_pedigree_function(d)).probability_positive)
        .collect();
    assert_non_decreasing(&by_dpf, "pedigree");

    let by_insulin: Vec<f64> = [0.0, 200.0, 201.0, 900.0]
        .iter()
        .map(|&i| mock_predict(&base().with_insulin(i)).probability_positive)
        .collect();
    assert_non_decreasing(&by_insulin, "insulin");
}

#[test]
fn band_cutoffs() {
    // 15 (age) + 15 (pedigree) = 30 -> MODERATE, not diabetic
    let v = base().with_age(50).with_pedigree_function(0.9);
    let p = mock_predict(&v);
    assert_eq!(p.probability_positive, 30.0);
    assert_eq!(p.risk_band, RiskBand::Moderate);
    assert!(!p.diabetic);

    // 25 + 20 + 15 + 10 = 70 -> still MODERATE, diabetic
    let v = base()
        .with_glucose(130.0)
        .with_bmi(31.0)
        .with_age(50)
        .with_insulin(250.0);
    let p = mock_predict(&v);
    assert_eq!(p.probability_positive, 70.0);
    assert_eq!(p.risk_band, RiskBand::Moderate);
    assert!(p.diabetic);
}

#[test]
fn scoring_is_idempotent() {
    let v = base().with_glucose(140.0);
    assert_eq!(mock_predict(&v), mock_predict(&v));
}
