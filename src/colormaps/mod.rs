//! Colormap registry and gradient sampling.
//!
//! Colormaps are static, ordered stop tables spanning [0, 1], registered
//! once in a process-wide read-only map and looked up by name.

pub mod diverging;
pub mod gradient;
pub mod sequential;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::color::Rgb;
use crate::error::{ChorosError, Result};

pub use gradient::{class_colors, color_at_position};

/// Default colormap
pub const DEFAULT_COLORMAP: &str = "viridis";

/// A gradient stop: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(position: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            position,
            color: Rgb::new(r, g, b),
        }
    }
}

/// A named, immutable sequence of color stops covering [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Colormap {
    name: &'static str,
    stops: &'static [ColorStop],
}

impl Colormap {
    /// Get the name of this colormap
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The ordered stop table, ascending by position.
    pub fn stops(&self) -> &'static [ColorStop] {
        self.stops
    }

    /// Sample the gradient at a normalized position in [0, 1].
    pub fn sample(&self, position: f64) -> Rgb {
        gradient::color_at_position(self.stops, position)
    }
}

static REGISTRY: Lazy<HashMap<&'static str, Colormap>> = Lazy::new(|| {
    let entries = [
        ("viridis", sequential::VIRIDIS),
        ("plasma", sequential::PLASMA),
        ("inferno", sequential::INFERNO),
        ("magma", sequential::MAGMA),
        ("cividis", sequential::CIVIDIS),
        ("coolwarm", diverging::COOLWARM),
        ("rdbu", diverging::RDBU),
        ("seismic", diverging::SEISMIC),
    ];
    entries
        .into_iter()
        .map(|(name, stops)| (name, Colormap { name, stops }))
        .collect()
});

/// Get a colormap by name
pub fn get_colormap(name: &str) -> Result<&'static Colormap> {
    REGISTRY
        .get(name.to_lowercase().as_str())
        .ok_or_else(|| ChorosError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!("Unknown colormap: {}", name),
        })
}

/// Check whether a name resolves to a registered colormap.
pub fn is_valid_colormap(name: &str) -> bool {
    REGISTRY.contains_key(name.to_lowercase().as_str())
}

/// Names of all registered colormaps, sorted.
pub fn colormap_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}
