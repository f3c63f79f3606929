//! Gradient sampling.
//!
//! Turns a stop table and a normalized position into a concrete color, and
//! a class count into one evenly spaced color per class.

use crate::color::{interpolate, Rgb};

use super::{ColorStop, Colormap};

/// Sample a color at a normalized position along a stop table.
///
/// The position is clamped to [0, 1]. Positions at or beyond an endpoint
/// return that endpoint's color directly; in between, the first bracketing
/// stop pair wins and the color is linearly interpolated in RGB space. A
/// zero-width bracket resolves to its lower stop (factor 0).
pub fn color_at_position(stops: &[ColorStop], position: f64) -> Rgb {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        // An empty stop table has no meaningful answer; black is the
        // never-panic fallback.
        _ => return Rgb::new(0, 0, 0),
    };

    let t = if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    };

    if t <= first.position {
        return first.color;
    }
    if t >= last.position {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        if lower.position <= t && t <= upper.position {
            let width = upper.position - lower.position;
            let factor = if width > 0.0 {
                (t - lower.position) / width
            } else {
                0.0
            };
            return interpolate(lower.color, upper.color, factor);
        }
    }

    last.color
}

/// Generate one color per class, evenly spaced across the gradient.
///
/// A single class samples the gradient midpoint (0.5); otherwise samples sit
/// at `i / (num_colors - 1)` with both endpoints included.
pub fn class_colors(colormap: &Colormap, num_colors: usize) -> Vec<Rgb> {
    match num_colors {
        0 => Vec::new(),
        1 => vec![colormap.sample(0.5)],
        n => (0..n)
            .map(|i| colormap.sample(i as f64 / (n - 1) as f64))
            .collect(),
    }
}
