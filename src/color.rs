//! Color space utilities.
//!
//! Hex parsing/printing and per-channel linear interpolation in RGB space.
//! These are the leaves of the color pipeline; the gradient sampler builds
//! on them.

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }
}

/// Parse a 6-hex-digit color, with or without a leading `#`.
///
/// Case-insensitive. Returns `None` for malformed input rather than
/// panicking; interpolation falls back to the first operand in that case.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Format a color as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn lerp_channel(a: u8, b: u8, factor: f64) -> u8 {
    // f64::round rounds half away from zero, so the black/white midpoint
    // lands on 128 (#808080).
    (a as f64 + (b as f64 - a as f64) * factor).round() as u8
}

/// Per-channel linear interpolation between two colors.
pub fn interpolate(c1: Rgb, c2: Rgb, factor: f64) -> Rgb {
    Rgb::new(
        lerp_channel(c1.r, c2.r, factor),
        lerp_channel(c1.g, c2.g, factor),
        lerp_channel(c1.b, c2.b, factor),
    )
}

/// Interpolate between two hex color strings.
///
/// If either input fails to parse, the first operand is returned unchanged.
pub fn interpolate_hex(h1: &str, h2: &str, factor: f64) -> String {
    match (hex_to_rgb(h1), hex_to_rgb(h2)) {
        (Some(c1), Some(c2)) => rgb_to_hex(interpolate(c1, c2, factor)),
        _ => h1.to_string(),
    }
}
