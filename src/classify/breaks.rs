//! Break computation for the rank- and moment-based schemes.
//!
//! Every function takes the valid samples pre-sorted ascending and returns a
//! raw boundary sequence; [`finalize`] then applies the shared
//! sort-then-adjacent-dedupe pass. The natural-breaks solver lives in
//! [`super::jenks`].

/// Boundaries at equal value intervals: `min + i*(max-min)/k`.
///
/// The last boundary is pinned to the exact maximum rather than recomputed,
/// so float drift cannot push it past the data.
pub(crate) fn equal_interval(sorted: &[f64], k: usize) -> Vec<f64> {
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let step = (max - min) / k as f64;
    (0..=k)
        .map(|i| if i == k { max } else { min + step * i as f64 })
        .collect()
}

/// Boundaries at equal sample ranks: interior boundary `i` is the sample at
/// sorted rank `floor(i*n/k)`, clamped to the last index.
///
/// Heavy duplication in the data can collapse neighboring ranks onto the
/// same value; the dedupe pass then yields fewer classes than requested.
pub(crate) fn quantile(sorted: &[f64], k: usize) -> Vec<f64> {
    let n = sorted.len();
    let mut breaks = Vec::with_capacity(k + 1);
    breaks.push(sorted[0]);
    for i in 1..k {
        let rank = (i * n / k).min(n - 1);
        breaks.push(sorted[rank]);
    }
    breaks.push(sorted[n - 1]);
    breaks
}

/// Boundaries at whole standard deviations around the mean.
///
/// Candidates are `mean + m*std` for `m` in -2..=2 (population std), kept
/// only when strictly inside the data range. The requested class count is
/// not honored here: up to six classes come back.
pub(crate) fn std_deviation(sorted: &[f64]) -> Vec<f64> {
    let n = sorted.len() as f64;
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    let mean = sorted.iter().sum::<f64>() / n;
    let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    let mut breaks = vec![min];
    for m in -2..=2i32 {
        let boundary = mean + m as f64 * std;
        if boundary > min && boundary < max {
            breaks.push(boundary);
        }
    }
    breaks.push(max);
    breaks
}

/// Head/tail breaks for heavy-tailed distributions.
///
/// Repeatedly take the mean of the current tail and split above it. The
/// strictly-increasing-mean check stops the iteration on flat tails, which
/// both guarantees ordered boundaries and prevents non-termination.
pub(crate) fn head_tail(sorted: &[f64], k: usize) -> Vec<f64> {
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    let mut breaks = vec![min];
    let mut tail = sorted.to_vec();
    let mut prev = min;

    while breaks.len() < k && tail.len() > 1 {
        let mean = tail.iter().sum::<f64>() / tail.len() as f64;
        if mean <= prev {
            break;
        }
        breaks.push(mean);
        prev = mean;
        tail.retain(|&v| v > mean);
    }

    breaks.push(max);
    breaks
}

/// Shared post-pass: sort ascending, drop adjacent duplicates, and pad a
/// fully collapsed result to a zero-width interval so at least one class
/// always exists.
pub(crate) fn finalize(mut breaks: Vec<f64>) -> Vec<f64> {
    breaks.sort_by(|a, b| a.total_cmp(b));
    breaks.dedup();
    while breaks.len() < 2 {
        let v = breaks.last().copied().unwrap_or(0.0);
        breaks.push(v);
    }
    breaks
}
