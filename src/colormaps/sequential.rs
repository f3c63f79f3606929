//! Sequential colormaps (single-hue progression).
//!
//! These colormaps are suitable for data that progresses from low to high.
//! Stop tables are sampled from the matplotlib reference palettes at nine
//! evenly spaced positions.

use super::ColorStop;

/// Viridis - perceptually uniform, colorblind-friendly
pub const VIRIDIS: &[ColorStop] = &[
    ColorStop::new(0.000, 0x44, 0x01, 0x54),
    ColorStop::new(0.125, 0x47, 0x2d, 0x7b),
    ColorStop::new(0.250, 0x3b, 0x52, 0x8b),
    ColorStop::new(0.375, 0x2c, 0x72, 0x8e),
    ColorStop::new(0.500, 0x21, 0x91, 0x8c),
    ColorStop::new(0.625, 0x28, 0xae, 0x80),
    ColorStop::new(0.750, 0x5e, 0xc9, 0x62),
    ColorStop::new(0.875, 0xad, 0xdc, 0x30),
    ColorStop::new(1.000, 0xfd, 0xe7, 0x25),
];

/// Plasma
pub const PLASMA: &[ColorStop] = &[
    ColorStop::new(0.000, 0x0d, 0x08, 0x87),
    ColorStop::new(0.125, 0x4b, 0x03, 0xa1),
    ColorStop::new(0.250, 0x7d, 0x03, 0xa8),
    ColorStop::new(0.375, 0xa8, 0x22, 0x96),
    ColorStop::new(0.500, 0xcb, 0x46, 0x79),
    ColorStop::new(0.625, 0xe5, 0x6b, 0x5d),
    ColorStop::new(0.750, 0xf8, 0x94, 0x41),
    ColorStop::new(0.875, 0xfd, 0xc3, 0x28),
    ColorStop::new(1.000, 0xf0, 0xf9, 0x21),
];

/// Inferno
pub const INFERNO: &[ColorStop] = &[
    ColorStop::new(0.000, 0x00, 0x00, 0x04),
    ColorStop::new(0.125, 0x21, 0x0c, 0x4a),
    ColorStop::new(0.250, 0x55, 0x0f, 0x6d),
    ColorStop::new(0.375, 0x88, 0x22, 0x6a),
    ColorStop::new(0.500, 0xba, 0x36, 0x55),
    ColorStop::new(0.625, 0xe3, 0x59, 0x33),
    ColorStop::new(0.750, 0xf9, 0x8c, 0x0a),
    ColorStop::new(0.875, 0xf9, 0xc9, 0x32),
    ColorStop::new(1.000, 0xfc, 0xff, 0xa4),
];

/// Magma
pub const MAGMA: &[ColorStop] = &[
    ColorStop::new(0.000, 0x00, 0x00, 0x04),
    ColorStop::new(0.125, 0x1d, 0x11, 0x47),
    ColorStop::new(0.250, 0x51, 0x12, 0x7c),
    ColorStop::new(0.375, 0x82, 0x26, 0x81),
    ColorStop::new(0.500, 0xb6, 0x36, 0x79),
    ColorStop::new(0.625, 0xe6, 0x51, 0x64),
    ColorStop::new(0.750, 0xfb, 0x88, 0x61),
    ColorStop::new(0.875, 0xfe, 0xc2, 0x87),
    ColorStop::new(1.000, 0xfc, 0xfd, 0xbf),
];

/// Cividis - colorblind-friendly alternative to viridis
pub const CIVIDIS: &[ColorStop] = &[
    ColorStop::new(0.000, 0x00, 0x20, 0x4d),
    ColorStop::new(0.125, 0x00, 0x33, 0x6f),
    ColorStop::new(0.250, 0x39, 0x48, 0x6b),
    ColorStop::new(0.375, 0x57, 0x5d, 0x6d),
    ColorStop::new(0.500, 0x70, 0x71, 0x73),
    ColorStop::new(0.625, 0x8a, 0x87, 0x79),
    ColorStop::new(0.750, 0xa6, 0x9d, 0x75),
    ColorStop::new(0.875, 0xc4, 0xb5, 0x6c),
    ColorStop::new(1.000, 0xff, 0xea, 0x46),
];
