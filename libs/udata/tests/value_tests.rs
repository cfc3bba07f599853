use udata::{mean_of, UncertainDataError, UncertainValue, WeightedSample};

#[test]
fn test_mean_of_state() {
    // State estimate mixing representations collapses per-variable
    let state = vec![
        UncertainValue::Point(50.0),
        UncertainValue::gaussian(3.0, 0.5).unwrap(),
        UncertainValue::samples(vec![1.0, 3.0]).unwrap(),
    ];

    assert_eq!(mean_of(&state), vec![50.0, 3.0, 2.0]);
}

#[test]
fn test_mean_of_empty_state() {
    let state: Vec<UncertainValue> = Vec::new();
    assert!(mean_of(&state).is_empty());
}

#[test]
fn test_validate_roundtrip() {
    // Checked constructors produce values that re-validate cleanly
    let values = vec![
        UncertainValue::Point(1.0),
        UncertainValue::gaussian(0.0, 1.0).unwrap(),
        UncertainValue::samples(vec![0.0]).unwrap(),
        UncertainValue::weighted_samples(vec![WeightedSample { value: 1.0, weight: 1.0 }])
            .unwrap(),
    ];

    for value in &values {
        assert!(value.validate().is_ok());
    }
}

#[test]
fn test_validate_catches_direct_construction() {
    // Direct enum construction bypasses the checked constructors; validate
    // still catches the broken invariants.
    let bad_gaussian = UncertainValue::Gaussian {
        mean: 0.0,
        std_dev: -2.0,
    };
    assert!(matches!(
        bad_gaussian.validate(),
        Err(UncertainDataError::InvalidStdDev(_))
    ));

    let bad_samples = UncertainValue::Samples(vec![]);
    assert_eq!(
        bad_samples.validate(),
        Err(UncertainDataError::EmptySamples)
    );
}
