//! Assertion utilities for testing.
//!
//! Helper functions for floating-point comparisons and for checking the
//! structural invariants every classification result must satisfy.

use choros::Classification;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert the invariants that hold for every classification result:
/// non-decreasing breaks, endpoints at the valid data extremes, and every
/// bin index inside [0, class_count).
pub fn assert_classification_invariants(result: &Classification, values: &[f64]) {
    assert!(result.breaks.len() >= 2, "breaks must bound at least one class");
    for pair in result.breaks.windows(2) {
        assert!(pair[0] <= pair[1], "breaks must be non-decreasing");
    }

    let valid: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if !valid.is_empty() {
        let min = valid.iter().copied().fold(f64::INFINITY, f64::min);
        let max = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.breaks[0], min, "first break must equal the minimum");
        assert_eq!(
            *result.breaks.last().unwrap(),
            max,
            "last break must equal the maximum"
        );
    }

    assert_eq!(result.bins.len(), values.len(), "bins must parallel the input");
    let classes = result.class_count();
    for &bin in &result.bins {
        assert!(bin < classes, "bin {} out of range for {} classes", bin, classes);
    }
}
