//! 8-bit RGBA colors parsed from CSS color strings.
//!
//! Tool colors arrive as CSS strings: `data-color` attributes on palette
//! swatches and the value of an `<input type="color">`. Any CSS Color 4
//! syntax is accepted (hex with or without alpha, named colors, `rgb()`,
//! `hsl()`, `hwb()` ...). They are parsed once at selection time so the
//! raster and the 2D context receive the same value.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use crate::error::SketchError;

/// An 8-bit-per-channel color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

impl Color {
    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a == 0xFF
    }

    /// Parse any CSS color string, ignoring surrounding whitespace and case.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidColor`] if the string is not a CSS color.
    pub fn parse(raw: &str) -> Result<Self, SketchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SketchError::InvalidColor(raw.to_owned()));
        }
        let parsed = csscolorparser::parse(trimmed).map_err(|_| SketchError::InvalidColor(raw.to_owned()))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self::rgba(r, g, b, a))
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when translucent. Both are accepted
    /// by a 2D context style setter.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Source-over composite onto an opaque backdrop. The result is opaque.
    #[must_use]
    pub fn over(self, backdrop: Color) -> Color {
        if self.is_opaque() {
            return self;
        }
        Color::rgb(
            mix(self.r, backdrop.r, self.a),
            mix(self.g, backdrop.g, self.a),
            mix(self.b, backdrop.b, self.a),
        )
    }
}

impl FromStr for Color {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn mix(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    let v = (u32::from(src) * a + u32::from(dst) * (255 - a) + 127) / 255;
    u8::try_from(v).unwrap_or(u8::MAX)
}
