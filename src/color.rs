//! Color derivation from a name digest.
//!
//! The foreground hue comes from the head of the digest and the background
//! hue from its tail. Both go through HSV at full saturation; the background
//! is kept dark (value 0.2) and the foreground is mixed with 20% of the
//! inverted background so the two always contrast.

use image::Rgba;
use palette::Srgb;

use crate::digest::NameDigest;

/// HSV value used for the background color.
pub const BACKGROUND_VALUE: f64 = 0.2;

/// Share of the full-brightness foreground in the final foreground.
const FOREGROUND_WEIGHT: f64 = 0.8;

/// Share of the inverted background in the final foreground.
const INVERTED_BACKGROUND_WEIGHT: f64 = 0.2;

// ============================================================================
// ColorPair
// ============================================================================

/// The foreground and background colors of an icon, in 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    pub foreground: Srgb<u8>,
    pub background: Srgb<u8>,
}

impl ColorPair {
    /// Derives the color pair for a digest.
    pub fn from_digest(digest: &NameDigest) -> Self {
        let foreground_full = hsv_to_rgb(hue_from_word(digest.leading_word()), 1.0, 1.0);
        let background = hsv_to_rgb(
            hue_from_word(digest.trailing_word()),
            1.0,
            BACKGROUND_VALUE,
        );
        let foreground = blend_with_inverse(foreground_full, background);

        Self {
            foreground: to_u8(foreground),
            background: to_u8(background),
        }
    }

    /// Shorthand for hashing `name` and deriving its colors.
    pub fn for_name(name: &str) -> Self {
        Self::from_digest(&NameDigest::of(name))
    }

    /// Foreground as an opaque RGBA pixel.
    pub fn foreground_rgba(&self) -> Rgba<u8> {
        opaque(self.foreground)
    }

    /// Background as an opaque RGBA pixel.
    pub fn background_rgba(&self) -> Rgba<u8> {
        opaque(self.background)
    }
}

/// Formats a color as `#rrggbb`.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Scales a 16-bit digest word to a hue in `[0, 1]`.
pub fn hue_from_word(word: u16) -> f64 {
    word as f64 / 65535.0
}

/// Converts HSV (all components in `[0, 1]`) to normalized RGB.
///
/// Hue wraps, so `1.0` yields the same color as `0.0`. The sector
/// arithmetic is kept in this exact form; the output is truncated to 8 bits
/// later and a different but equivalent formula can flip a channel by one.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Srgb<f64> {
    if saturation == 0.0 {
        return Srgb::new(value, value, value);
    }

    let scaled = hue * 6.0;
    let sector = scaled as i64;
    let f = scaled - sector as f64;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector.rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    Srgb::new(r, g, b)
}

/// Mixes 80% of `foreground` with 20% of the inverse of `background`.
fn blend_with_inverse(foreground: Srgb<f64>, background: Srgb<f64>) -> Srgb<f64> {
    let mix = |fc: f64, bc: f64| INVERTED_BACKGROUND_WEIGHT * (1.0 - bc) + FOREGROUND_WEIGHT * fc;
    Srgb::new(
        mix(foreground.red, background.red),
        mix(foreground.green, background.green),
        mix(foreground.blue, background.blue),
    )
}

/// Scales to 0-255, truncating toward zero.
fn to_u8(color: Srgb<f64>) -> Srgb<u8> {
    let scale = |c: f64| (c * 255.0) as u8;
    Srgb::new(scale(color.red), scale(color.green), scale(color.blue))
}

fn opaque(color: Srgb<u8>) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, 255])
}

// ============================================================================
// Tests
// ============================================================================
