//! The one-call styling pipeline.
//!
//! `build_style` runs the full chain a renderer needs: classify the samples,
//! sample one color per class from the requested colormap, and build legend
//! labels. The result is serializable so it can travel to a map panel as
//! JSON.

use std::time::Instant;

use serde::Serialize;

use crate::classify::{classify, ClassificationScheme};
use crate::colormaps::{class_colors, get_colormap};
use crate::config::StyleConfig;
use crate::error::Result;
use crate::format::legend_labels;
use crate::logging::log_classification_stats;

/// Everything a renderer and its legend need for one styled layer.
#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethStyle {
    /// Scheme actually used (after lenient fallback)
    pub scheme: ClassificationScheme,
    /// Colormap name
    pub colormap: String,
    /// Class boundaries, `class_count + 1` entries
    pub breaks: Vec<f64>,
    /// Bin index per input sample
    pub bins: Vec<usize>,
    /// One hex color per class
    pub colors: Vec<String>,
    /// One `"<lo> – <hi>"` label per class
    pub labels: Vec<String>,
}

impl ChoroplethStyle {
    /// Number of classes actually produced; may be fewer than requested.
    pub fn class_count(&self) -> usize {
        self.colors.len()
    }

    /// The hex color for one sample, by its position in the input.
    pub fn color_for_sample(&self, index: usize) -> Option<&str> {
        let bin = *self.bins.get(index)?;
        self.colors.get(bin).map(String::as_str)
    }
}

/// Build a complete choropleth style for a sample sequence.
///
/// The only failure is an unknown colormap name; classification itself is
/// total. Scheme name and class count resolve leniently via
/// [`StyleConfig::sanitized`].
pub fn build_style(values: &[f64], config: &StyleConfig) -> Result<ChoroplethStyle> {
    let start = Instant::now();

    let colormap = get_colormap(&config.colormap)?;
    let (scheme, k) = config.sanitized();

    let classification = classify(values, scheme, k);
    let class_count = classification.class_count();

    let colors: Vec<String> = class_colors(colormap, class_count)
        .into_iter()
        .map(|c| c.to_hex())
        .collect();
    let labels = legend_labels(&classification.breaks);

    let valid_count = values.iter().filter(|v| !v.is_nan()).count();
    log_classification_stats(
        scheme.as_str(),
        colormap.name(),
        values.len(),
        valid_count,
        class_count,
        start.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(ChoroplethStyle {
        scheme,
        colormap: colormap.name().to_string(),
        breaks: classification.breaks,
        bins: classification.bins,
        colors,
        labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_style_shapes_line_up() {
        let values = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 100.0];
        let config = StyleConfig {
            scheme: "equal-interval".to_string(),
            colormap: "viridis".to_string(),
            classes: 4,
        };
        let style = build_style(&values, &config).unwrap();

        assert_eq!(style.class_count(), 4);
        assert_eq!(style.breaks.len(), 5);
        assert_eq!(style.bins.len(), values.len());
        assert_eq!(style.labels.len(), 4);
        assert!(style.bins.iter().all(|&b| b < 4));
    }

    #[test]
    fn test_build_style_unknown_colormap() {
        let config = StyleConfig {
            colormap: "bogus".to_string(),
            ..StyleConfig::default()
        };
        assert!(build_style(&[1.0, 2.0], &config).is_err());
    }

    #[test]
    fn test_colors_follow_actual_class_count() {
        // Heavy duplication collapses quantile classes; colors and labels
        // must track the collapsed count, not the requested one
        let mut values = vec![5.0; 40];
        values.push(1.0);
        values.push(9.0);
        let config = StyleConfig {
            scheme: "quantile".to_string(),
            colormap: "coolwarm".to_string(),
            classes: 5,
        };
        let style = build_style(&values, &config).unwrap();

        assert!(style.class_count() < 5);
        assert_eq!(style.colors.len(), style.class_count());
        assert_eq!(style.labels.len(), style.class_count());
        assert_eq!(style.breaks.len(), style.class_count() + 1);
    }

    #[test]
    fn test_color_for_sample() {
        let values = [0.0, 100.0];
        let config = StyleConfig {
            scheme: "equal-interval".to_string(),
            colormap: "viridis".to_string(),
            classes: 2,
        };
        let style = build_style(&values, &config).unwrap();

        assert_eq!(style.color_for_sample(0), Some(style.colors[0].as_str()));
        assert_eq!(style.color_for_sample(1), Some(style.colors[1].as_str()));
        assert_eq!(style.color_for_sample(99), None);
    }

    #[test]
    fn test_style_serializes() {
        let style = build_style(&[1.0, 2.0, 3.0], &StyleConfig::default()).unwrap();
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("\"breaks\""));
        assert!(json.contains("\"colors\""));
    }
}
