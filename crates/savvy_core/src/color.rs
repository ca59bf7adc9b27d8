//! RGBA color value with CSS-text round-trip

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for color literals that cannot be parsed
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color literal: {0}")]
pub struct ParseColorError(pub String);

/// RGBA color with components in `[0.0, 1.0]`
///
/// Serializes as a lowercase CSS hex string (`"#rrggbb"`, or `"#rrggbbaa"`
/// when translucent) so palette values read the same in token trees and
/// view code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from individual components
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a `0xRRGGBB` integer
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Return this color with a different alpha
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// CSS hex text for this color
    pub fn to_css(self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        if self.a < 1.0 {
            let a = (self.a * 255.0).round() as u8;
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse `#rgb`, `#rrggbb`, or `#rrggbbaa` hex text
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError(s.to_string()))?;

        let component = |hi: u8, lo: u8| -> Result<f32, ParseColorError> {
            let pair = [hi, lo];
            let text = std::str::from_utf8(&pair).map_err(|_| ParseColorError(s.to_string()))?;
            let value = u8::from_str_radix(text, 16).map_err(|_| ParseColorError(s.to_string()))?;
            Ok(value as f32 / 255.0)
        };

        let bytes = digits.as_bytes();
        match bytes.len() {
            3 => Ok(Self {
                r: component(bytes[0], bytes[0])?,
                g: component(bytes[1], bytes[1])?,
                b: component(bytes[2], bytes[2])?,
                a: 1.0,
            }),
            6 => Ok(Self {
                r: component(bytes[0], bytes[1])?,
                g: component(bytes[2], bytes[3])?,
                b: component(bytes[4], bytes[5])?,
                a: 1.0,
            }),
            8 => Ok(Self {
                r: component(bytes[0], bytes[1])?,
                g: component(bytes[2], bytes[3])?,
                b: component(bytes[4], bytes[5])?,
                a: component(bytes[6], bytes[7])?,
            }),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
