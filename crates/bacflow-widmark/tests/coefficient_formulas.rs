use bacflow_widmark::{CoefficientError, Model, Sex, estimate};

const H: f64 = 1.70;
const W: f64 = 70.0;
const G: f64 = 18.0;

/// Reference evaluation of the formula table, written independently of the registry
fn reference(model: Model, sex: Sex, h: f64, w: f64, g: f64) -> Option<f64> {
    let r = match (model, sex) {
        (Model::Widmark, Sex::Female) => 0.55,
        (Model::Widmark, Sex::Male) => 0.68,
        (Model::Watson, Sex::Female) => 0.29218 + (12.666 * h - 2.4846) / w,
        (Model::Watson, Sex::Male) => 0.39834 + (12.725 * h - 0.11275 * g + 2.8993) / w,
        (Model::Forrest, Sex::Female) => 0.8736 - 0.0124 * w / h.powi(2),
        (Model::Forrest, Sex::Male) => 1.0178 - 0.012127 * w / h.powi(2),
        (Model::Seidl, Sex::Female) => 0.31223 - 0.006446 * w + 0.4466 * h,
        (Model::Seidl, Sex::Male) => 0.31608 - 0.004821 * w + 0.4632 * h,
        (Model::Ulrich, Sex::Female) => return None,
        (Model::Ulrich, Sex::Male) => 0.715 - 0.00462 * w + 0.22 * h,
        (Model::Average, Sex::Female) => {
            0.50766 + 0.11165 * h - w * (0.001612 + 0.0031 / h.powi(2))
                - (0.62115 - 3.1665 * h) / w
        }
        (Model::Average, Sex::Male) => {
            0.62544 + 0.13664 * h - w * (0.00189 + 0.002425 / h.powi(2))
                + (0.57986 + 2.545 * h - 0.02255 * g) / w
        }
    };
    Some(r)
}

fn assert_relative(actual: f64, expected: f64, context: &str) {
    let tol = 1e-9 * expected.abs().max(f64::MIN_POSITIVE);
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}

#[test]
fn test_registry_matches_formula_table() {
    let heights = [1.50, 1.62, 1.70, 1.85, 2.01];
    let weights = [45.0, 58.5, 70.0, 92.0, 130.0];
    let adjustments = [18.0, 35.0, 72.0];

    for model in Model::ALL {
        for sex in Sex::ALL {
            for &h in &heights {
                for &w in &weights {
                    for &g in &adjustments {
                        let context = format!("{} {} h={} w={} g={}", model, sex, h, w, g);
                        match reference(model, sex, h, w, g) {
                            Some(expected) => {
                                let actual = model.call(sex, h, w, g).unwrap();
                                assert_relative(actual, expected, &context);
                            }
                            None => assert!(model.call(sex, h, w, g).is_err(), "{}", context),
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_forward_branches_match_call() {
    for model in Model::ALL {
        assert_eq!(
            model.call(Sex::Male, H, W, G).unwrap(),
            model.forward_male(H, W, G)
        );
        assert_eq!(
            model.call(Sex::Female, H, W, G),
            model.forward_female(H, W, G)
        );
    }
}

#[test]
fn test_invalid_sex_for_every_model() {
    for model in Model::ALL {
        for tag in ["", "X", "unknown", "2"] {
            let result = estimate(model.name(), tag, H, W, G);
            assert!(
                matches!(result, Err(CoefficientError::InvalidSex(_))),
                "{} accepted sex tag {:?}",
                model,
                tag
            );
        }
    }
}

#[test]
fn test_ulrich_female_always_unavailable() {
    for (h, w, g) in [(1.70, 70.0, 18.0), (0.0, 0.0, 0.0), (2.2, 150.0, 90.0), (-1.0, -5.0, -3.0)] {
        assert_eq!(
            Model::Ulrich.forward_female(h, w, g),
            Err(CoefficientError::FormulaUnavailable {
                model: Model::Ulrich,
                sex: Sex::Female
            })
        );
        assert!(Model::Ulrich.call(Sex::Male, h, w, g).is_ok());
    }
}

#[test]
fn test_unavailable_message_is_descriptive() {
    let err = Model::Ulrich.call(Sex::Female, H, W, G).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Ulrich"));
    assert!(message.contains("female"));
}

#[test]
fn test_sample_scenarios() {
    assert_eq!(Model::Widmark.call(Sex::Male, H, W, G).unwrap(), 0.68);
    assert_eq!(Model::Widmark.call(Sex::Female, H, W, G).unwrap(), 0.55);

    let watson = Model::Watson.call(Sex::Female, H, W, G).unwrap();
    assert!((watson - 0.5643).abs() < 1e-4);

    let forrest = Model::Forrest.call(Sex::Male, H, W, G).unwrap();
    assert!((forrest - 0.7241).abs() < 1e-4);

    let average = Model::Average.call(Sex::Male, H, W, G).unwrap();
    assert!((average - 0.730_983_261_5).abs() < 1e-9);
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    let r = Model::Watson.call(Sex::Female, H, 0.0, G).unwrap();
    assert!(r.is_infinite());

    let r = Model::Forrest.call(Sex::Male, 0.0, W, G).unwrap();
    assert!(r.is_infinite());

    let r = Model::Forrest.call(Sex::Female, 0.0, 0.0, G).unwrap();
    assert!(r.is_nan());
}

#[test]
fn test_results_are_deterministic() {
    for model in Model::ALL {
        for sex in Sex::ALL.into_iter().filter(|&s| model.supports(s)) {
            let a = model.call(sex, H, W, G).unwrap();
            let b = model.call(sex, H, W, G).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
