//! Classification of numeric samples into ordered classes.
//!
//! This module partitions a flat sequence of attribute values into `k`
//! ordered classes under a chosen scheme and assigns each sample a bin
//! index. It is a pure computation: no state survives between calls, no
//! edge case raises, and identical inputs always produce identical output.

pub mod breaks;
pub mod jenks;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ChorosError;

/// Statistical partitioning rules for deriving class boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationScheme {
    /// Boundaries at equal sample ranks
    Quantile,
    /// Boundaries at equal value intervals
    EqualInterval,
    /// Fisher-Jenks optimal partition minimizing within-class variance
    NaturalBreaks,
    /// Boundaries at whole standard deviations around the mean
    StdDeviation,
    /// Iterated tail means for heavy-tailed distributions
    HeadTail,
}

impl ClassificationScheme {
    /// The canonical lowercase name of this scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quantile => "quantile",
            Self::EqualInterval => "equal-interval",
            Self::NaturalBreaks => "natural-breaks",
            Self::StdDeviation => "std-deviation",
            Self::HeadTail => "head-tail",
        }
    }

    /// Parse a scheme name leniently, as style requests arrive from
    /// external panels: an unrecognized name falls back to equal-interval
    /// rather than failing the whole request.
    pub fn from_param(name: &str) -> Self {
        match name.parse() {
            Ok(scheme) => scheme,
            Err(_) => {
                warn!(
                    scheme = name,
                    "Unknown classification scheme, falling back to equal-interval"
                );
                Self::EqualInterval
            }
        }
    }
}

impl FromStr for ClassificationScheme {
    type Err = ChorosError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quantile" => Ok(Self::Quantile),
            "equal-interval" => Ok(Self::EqualInterval),
            "natural-breaks" => Ok(Self::NaturalBreaks),
            "std-deviation" => Ok(Self::StdDeviation),
            "head-tail" | "head/tail" => Ok(Self::HeadTail),
            _ => Err(ChorosError::InvalidParameter {
                param: "scheme".to_string(),
                message: format!("Unknown classification scheme: {}", s),
            }),
        }
    }
}

/// The result of one classification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Class boundaries, non-decreasing, `class_count + 1` entries.
    /// First equals the minimum of the valid samples, last the maximum.
    pub breaks: Vec<f64>,
    /// Bin index per input sample, parallel to the input.
    pub bins: Vec<usize>,
}

impl Classification {
    /// Number of classes actually produced.
    ///
    /// Quantile, std-deviation and head-tail may return fewer classes than
    /// requested after duplicate boundaries collapse; consumers must read
    /// the count from here rather than from the requested `k`.
    pub fn class_count(&self) -> usize {
        self.breaks.len().saturating_sub(1)
    }
}

/// Partition `values` into at most `k` classes under `scheme`.
///
/// NaN samples are excluded from all statistics but keep their position in
/// `bins`, where they are assigned class 0 (the original system's behavior;
/// see the crate docs for the caveat). With no valid samples at all the
/// result degenerates to `breaks = [0, 1]` with every bin 0. `k` is clamped
/// to at least 2; the practical upper cap belongs to the caller
/// ([`crate::config::MAX_CLASSES`]).
pub fn classify(values: &[f64], scheme: ClassificationScheme, k: usize) -> Classification {
    let k = k.max(2);

    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        debug!(
            scheme = scheme.as_str(),
            samples = values.len(),
            "No valid samples, returning degenerate classification"
        );
        return Classification {
            breaks: vec![0.0, 1.0],
            bins: vec![0; values.len()],
        };
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let raw = match scheme {
        ClassificationScheme::Quantile => breaks::quantile(&sorted, k),
        ClassificationScheme::EqualInterval => breaks::equal_interval(&sorted, k),
        ClassificationScheme::NaturalBreaks => jenks::natural_breaks(&sorted, k),
        ClassificationScheme::StdDeviation => breaks::std_deviation(&sorted),
        ClassificationScheme::HeadTail => breaks::head_tail(&sorted, k),
    };

    let breaks = breaks::finalize(raw);
    let bins = assign_bins(values, &breaks);

    debug!(
        scheme = scheme.as_str(),
        requested = k,
        classes = breaks.len() - 1,
        samples = values.len(),
        valid = sorted.len(),
        "Classification complete"
    );

    Classification { breaks, bins }
}

/// Assign each value to the first interval `[breaks[i], breaks[i+1]]` whose
/// upper boundary it does not exceed. The final interval is closed on both
/// ends; NaN goes to class 0; values above the maximum (a float edge that
/// cannot arise from the schemes themselves) clamp to the last class.
fn assign_bins(values: &[f64], breaks: &[f64]) -> Vec<usize> {
    let class_count = breaks.len() - 1;
    values
        .iter()
        .map(|&v| {
            if v.is_nan() {
                return 0;
            }
            for i in 0..class_count {
                if v <= breaks[i + 1] {
                    return i;
                }
            }
            class_count - 1
        })
        .collect()
}
