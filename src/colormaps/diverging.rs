//! Diverging colormaps (two hues meeting at a neutral midpoint).
//!
//! These colormaps are suitable for data with a meaningful center, such as
//! anomalies around zero.

use super::ColorStop;

/// Coolwarm - blue through neutral gray to red
pub const COOLWARM: &[ColorStop] = &[
    ColorStop::new(0.00, 0x3b, 0x4c, 0xc0),
    ColorStop::new(0.25, 0x8d, 0xb0, 0xfe),
    ColorStop::new(0.50, 0xdd, 0xdd, 0xdd),
    ColorStop::new(0.75, 0xf4, 0x9a, 0x7b),
    ColorStop::new(1.00, 0xb4, 0x04, 0x26),
];

/// RdBu - ColorBrewer red-white-blue, eleven classes
pub const RDBU: &[ColorStop] = &[
    ColorStop::new(0.0, 0x67, 0x00, 0x1f),
    ColorStop::new(0.1, 0xb2, 0x18, 0x2b),
    ColorStop::new(0.2, 0xd6, 0x60, 0x4d),
    ColorStop::new(0.3, 0xf4, 0xa5, 0x82),
    ColorStop::new(0.4, 0xfd, 0xdb, 0xc7),
    ColorStop::new(0.5, 0xf7, 0xf7, 0xf7),
    ColorStop::new(0.6, 0xd1, 0xe5, 0xf0),
    ColorStop::new(0.7, 0x92, 0xc5, 0xde),
    ColorStop::new(0.8, 0x43, 0x93, 0xc3),
    ColorStop::new(0.9, 0x21, 0x66, 0xac),
    ColorStop::new(1.0, 0x05, 0x30, 0x61),
];

/// Seismic - dark blue to white to dark red
pub const SEISMIC: &[ColorStop] = &[
    ColorStop::new(0.00, 0x00, 0x00, 0x4c),
    ColorStop::new(0.25, 0x00, 0x00, 0xff),
    ColorStop::new(0.50, 0xff, 0xff, 0xff),
    ColorStop::new(0.75, 0xff, 0x00, 0x00),
    ColorStop::new(1.00, 0x7f, 0x00, 0x00),
];
