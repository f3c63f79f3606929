//! Shared helpers for the choros integration tests.

pub mod assertions;

/// A deterministic pseudo-random sample set with a skewed distribution,
/// plus a couple of NaN holes like real attribute columns have.
pub fn skewed_samples(n: usize) -> Vec<f64> {
    let mut values: Vec<f64> = (0..n)
        .map(|i| {
            let u = ((i * 2654435761) % 1_000_000) as f64 / 1_000_000.0;
            // Squaring skews mass toward the low end
            u * u * 500.0
        })
        .collect();
    if n >= 10 {
        values[3] = f64::NAN;
        values[7] = f64::NAN;
    }
    values
}
