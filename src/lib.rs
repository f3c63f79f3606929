//! # choros
//!
//! Classification and color engine for choropleth mapping.
//!
//! This library turns a flat sequence of per-feature attribute values into
//! class boundaries, per-feature bin indices, and per-class colors, ready
//! for a map renderer or legend widget to consume.
//!
//! ## Key Features
//!
//! - **Five partitioning schemes**: quantile, equal-interval, natural breaks
//!   (Fisher-Jenks optimal partition), standard deviation, and head/tail
//! - **Gradient colormaps**: a read-only registry of named stop tables with
//!   linear RGB sampling at arbitrary positions
//! - **Total by construction**: every degenerate input (empty data, all-NaN,
//!   constant values, malformed hex) resolves to a documented fallback
//!   instead of an error
//!
//! ## Architecture
//!
//! - **Classifier**: pure break computation and bin assignment over owned
//!   local buffers; safe to call concurrently without locking
//! - **Color pipeline**: hex/RGB utilities feeding a stop-table gradient
//!   sampler
//! - **Style layer**: one call combining both plus legend labels, driven by
//!   a serde-deserializable request
//!
//! NaN samples are excluded from all statistics but keep their position in
//! the output, where they are assigned class 0. That mirrors the behavior
//! downstream consumers already rely on; treat missing data upstream if the
//! lowest class must stay clean.

pub mod classify;
pub mod color;
pub mod colormaps;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod style;

pub use classify::{classify, Classification, ClassificationScheme};
pub use color::{hex_to_rgb, interpolate, interpolate_hex, rgb_to_hex, Rgb};
pub use colormaps::{
    class_colors, color_at_position, colormap_names, get_colormap, is_valid_colormap, ColorStop,
    Colormap, DEFAULT_COLORMAP,
};
pub use config::{StyleConfig, MAX_CLASSES, MIN_CLASSES};
pub use error::{ChorosError, Result};
pub use format::{format_break_value, legend_labels};
pub use logging::{init_tracing, log_timed_operation};
pub use style::{build_style, ChoroplethStyle};
