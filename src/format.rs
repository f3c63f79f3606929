//! Human-readable formatting of break values for legends.
//!
//! Precision follows magnitude: large values read as grouped integers,
//! mid-range values carry a couple of decimals, and tiny values switch to
//! exponential notation rather than rendering as a wall of zeros.

/// Format a single break value for display.
///
/// Tiers by absolute magnitude: >= 1000 formats as a thousands-grouped
/// integer, >= 1 with two decimals, >= 0.01 with four, and anything smaller
/// (including zero) in exponential notation with a two-digit mantissa.
pub fn format_break_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1000.0 {
        group_thousands(value)
    } else if magnitude >= 1.0 {
        format!("{:.2}", value)
    } else if magnitude >= 0.01 {
        format!("{:.4}", value)
    } else {
        format!("{:.2e}", value)
    }
}

/// One label per class: `"<lo> – <hi>"` over consecutive break pairs.
pub fn legend_labels(breaks: &[f64]) -> Vec<String> {
    breaks
        .windows(2)
        .map(|pair| {
            format!(
                "{} – {}",
                format_break_value(pair[0]),
                format_break_value(pair[1])
            )
        })
        .collect()
}

fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
