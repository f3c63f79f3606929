//! Fisher-Jenks natural breaks.
//!
//! Finds the partition of the sorted samples into `k` contiguous groups
//! minimizing the total within-group sum of squared deviations, via dynamic
//! programming over two dense `(n+1) x (k+1)` matrices: one holding the
//! optimal cost, one the back-pointer to the first sample of the last
//! group. O(n^2 * k) time, O(n*k) space; both tables are allocated once per
//! call.

use ndarray::Array2;

/// Compute natural-breaks boundaries on pre-sorted samples.
///
/// With `n <= k` there is nothing to optimize: each distinct value becomes
/// its own boundary. Interior boundaries are placed at the midpoint between
/// the last sample of one group and the first sample of the next, so two
/// distinct groups can never share a boundary value and the dedupe pass
/// keeps them apart.
pub(crate) fn natural_breaks(sorted: &[f64], k: usize) -> Vec<f64> {
    let n = sorted.len();
    if n <= k {
        let mut breaks = sorted.to_vec();
        breaks.dedup();
        return breaks;
    }

    let start = build_tables(sorted, k);

    let min = sorted[0];
    let max = sorted[n - 1];
    let mut breaks = vec![0.0; k + 1];
    breaks[0] = min;
    breaks[k] = max;

    // Walk the back-pointers from the final cell, peeling one group per
    // step. `first` is the 1-based index of the first sample in the group.
    let mut end = n;
    for j in (2..=k).rev() {
        let first = start[[end, j]];
        breaks[j - 1] = (sorted[first - 2] + sorted[first - 1]) / 2.0;
        end = first - 1;
    }

    breaks
}

/// Fill the cost and back-pointer matrices.
///
/// `cost[[i, j]]` is the minimal within-group sum of squared deviations
/// partitioning the first `i` samples into `j` groups; `start[[i, j]]` the
/// 1-based index where the last of those groups begins.
fn build_tables(sorted: &[f64], k: usize) -> Array2<usize> {
    let n = sorted.len();
    let mut cost = Array2::<f64>::from_elem((n + 1, k + 1), f64::INFINITY);
    let mut start = Array2::<usize>::zeros((n + 1, k + 1));

    // One group: running sums give the prefix deviations directly.
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for i in 1..=n {
        let v = sorted[i - 1];
        sum += v;
        sum_sq += v * v;
        cost[[i, 1]] = group_cost(sum, sum_sq, i as f64);
        start[[i, 1]] = 1;
    }

    for j in 2..=k {
        for i in j..=n {
            // Grow the last group downward from i, reusing the running sums
            // instead of rescanning the group for every candidate start.
            let mut sum = 0.0;
            let mut sum_sq = 0.0;
            let mut count = 0.0;
            let mut best = f64::INFINITY;
            let mut best_start = j;

            for first in (j..=i).rev() {
                let v = sorted[first - 1];
                sum += v;
                sum_sq += v * v;
                count += 1.0;

                let total = cost[[first - 1, j - 1]] + group_cost(sum, sum_sq, count);
                if total < best {
                    best = total;
                    best_start = first;
                }
            }

            cost[[i, j]] = best;
            start[[i, j]] = best_start;
        }
    }

    start
}

/// Sum of squared deviations from the mean, from running sums. Clamped at
/// zero against negative float residue on constant groups.
fn group_cost(sum: f64, sum_sq: f64, count: f64) -> f64 {
    (sum_sq - sum * sum / count).max(0.0)
}
