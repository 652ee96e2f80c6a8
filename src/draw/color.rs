//! RGBA color type and the validated hex stroke color.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }
}

/// Error returned when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a 6-digit hex color (expected #RRGGBB)")]
pub struct ParseColorError(pub String);

/// Stroke color as chosen in the color picker.
///
/// Only values matching `^#[A-Fa-f0-9]{6}$` can be constructed, so anything
/// holding a `StrokeColor` can paint with it without re-checking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeColor {
    rgb: [u8; 3],
}

/// Color the canvas starts with.
pub const DEFAULT_STROKE_COLOR: StrokeColor = StrokeColor {
    rgb: [0x00, 0xD8, 0xFF],
};

impl StrokeColor {
    /// Creates a stroke color from 8-bit channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Returns the 8-bit `[r, g, b]` channels.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Converts to the floating-point color used by the renderer.
    pub fn to_color(&self) -> Color {
        let [r, g, b] = self.rgb;
        Color::from_rgb8(r, g, b)
    }

    /// Canonical `#RRGGBB` form (uppercase).
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl Default for StrokeColor {
    fn default() -> Self {
        DEFAULT_STROKE_COLOR
    }
}

impl FromStr for StrokeColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ParseColorError(s.to_string()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
        };

        Ok(Self {
            rgb: [channel(0)?, channel(2)?, channel(4)?],
        })
    }
}

impl fmt::Display for StrokeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}
