//! Style request configuration.
//!
//! A [`StyleConfig`] is what a map panel or legend widget hands over when it
//! wants a layer styled: scheme name, colormap name, and requested class
//! count, typically arriving as JSON. Defaults fill any omitted field;
//! `validate` rejects nonsense strictly, while `sanitized` applies the
//! lenient fallbacks the rendering path uses.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::classify::ClassificationScheme;
use crate::colormaps::{is_valid_colormap, DEFAULT_COLORMAP};
use crate::error::{ChorosError, Result};

/// Fewest classes a request may ask for
pub const MIN_CLASSES: usize = 2;

/// Most classes a request may ask for. The natural-breaks solver is
/// O(n^2 * k), so the cap also bounds its cost.
pub const MAX_CLASSES: usize = 20;

/// Choropleth style request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Classification scheme name (quantile, equal-interval, natural-breaks,
    /// std-deviation, head-tail)
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Colormap name (e.g. viridis, plasma, coolwarm)
    #[serde(default = "default_colormap")]
    pub colormap: String,

    /// Requested class count
    #[serde(default = "default_classes")]
    pub classes: usize,
}

impl StyleConfig {
    /// Parse a style request from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StyleConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Validate the configuration strictly
    pub fn validate(&self) -> Result<()> {
        self.scheme.parse::<ClassificationScheme>()?;

        if !is_valid_colormap(&self.colormap) {
            return Err(ChorosError::Config {
                message: format!("Unknown colormap: {}", self.colormap),
            });
        }

        if self.classes < MIN_CLASSES || self.classes > MAX_CLASSES {
            return Err(ChorosError::Config {
                message: format!(
                    "Class count must be between {} and {}, got {}",
                    MIN_CLASSES, MAX_CLASSES, self.classes
                ),
            });
        }

        Ok(())
    }

    /// Resolve the request leniently for the rendering path: unknown scheme
    /// names fall back to equal-interval and the class count is clamped
    /// into [MIN_CLASSES, MAX_CLASSES], each with a warning.
    pub fn sanitized(&self) -> (ClassificationScheme, usize) {
        let scheme = ClassificationScheme::from_param(&self.scheme);

        let classes = self.classes.clamp(MIN_CLASSES, MAX_CLASSES);
        if classes != self.classes {
            warn!(
                requested = self.classes,
                clamped = classes,
                "Class count out of range, clamped"
            );
        }

        (scheme, classes)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            colormap: default_colormap(),
            classes: default_classes(),
        }
    }
}

// Default value functions for serde
fn default_scheme() -> String {
    "quantile".to_string()
}

fn default_colormap() -> String {
    DEFAULT_COLORMAP.to_string()
}

fn default_classes() -> usize {
    5
}
