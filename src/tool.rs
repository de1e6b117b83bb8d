//! Tool state and the tool selector.
//!
//! `ToolSelector` holds the two mutually exclusive option groups shown by the
//! host page (palette swatches and brush widths) plus the free-form color
//! picker. It tracks which option is highlighted in each group and the
//! resulting [`ToolState`] applied to new segments.

#[cfg(test)]
#[path = "tool_test.rs"]
mod tool_test;

use crate::color::Color;
use crate::error::SketchError;

/// The active color and brush width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolState {
    color: String,
    rgb: Color,
    width: u32,
}

impl ToolState {
    /// Build a tool state from a CSS color and a brush width.
    ///
    /// # Errors
    ///
    /// Returns an error if the color does not parse or the width is zero.
    pub fn new(color: &str, width: u32) -> Result<Self, SketchError> {
        let rgb = Color::parse(color)?;
        let width = check_width(width)?;
        Ok(Self { color: color.to_owned(), rgb, width })
    }

    /// The color exactly as it was supplied.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn rgb(&self) -> Color {
        self.rgb
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }
}

/// Parse a brush width from a `data-size` attribute value.
///
/// # Errors
///
/// Returns [`SketchError::InvalidWidth`] unless the value is a positive integer.
pub fn parse_width(raw: &str) -> Result<u32, SketchError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| SketchError::InvalidWidth(raw.to_owned()))
        .and_then(|w| check_width(w).map_err(|_| SketchError::InvalidWidth(raw.to_owned())))
}

fn check_width(width: u32) -> Result<u32, SketchError> {
    if width == 0 {
        return Err(SketchError::InvalidWidth(width.to_string()));
    }
    Ok(width)
}

/// Keep the host-page options whose attribute value parses.
///
/// Each item pairs an option with its raw `data-*` value (`None` when the
/// attribute is missing). Rejected options are logged at `warn` and dropped.
/// Order is preserved, keeping option and value at the same index.
#[must_use]
pub fn usable_options<T, V>(
    attribute: &str,
    options: impl IntoIterator<Item = (T, Option<String>)>,
    parse: impl Fn(&str) -> Result<V, SketchError>,
) -> (Vec<T>, Vec<V>) {
    options
        .into_iter()
        .enumerate()
        .filter_map(|(i, (option, raw))| {
            let Some(raw) = raw else {
                log::warn!("option {i} has no data-{attribute}; skipped");
                return None;
            };
            match parse(&raw) {
                Ok(value) => Some((option, value)),
                Err(err) => {
                    log::warn!("option {i} skipped: {err}");
                    None
                }
            }
        })
        .unzip()
}

/// Palette swatches with a CSS color in `data-color`, keeping the string as written.
#[must_use]
pub fn usable_swatches<T>(options: impl IntoIterator<Item = (T, Option<String>)>) -> (Vec<T>, Vec<String>) {
    usable_options("color", options, |raw| Color::parse(raw).map(|_| raw.to_owned()))
}

/// Width options with a positive integer in `data-size`.
#[must_use]
pub fn usable_widths<T>(options: impl IntoIterator<Item = (T, Option<String>)>) -> (Vec<T>, Vec<u32>) {
    usable_options("size", options, parse_width)
}

/// Which color path last wrote the tool color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    /// Startup default that matched no swatch.
    Default,
    /// Palette swatch at this index.
    Palette(usize),
    /// The free-form color picker.
    Custom,
}

/// Palette, width options, highlight state, and the resulting tool state.
#[derive(Debug, Clone)]
pub struct ToolSelector {
    palette: Vec<String>,
    widths: Vec<u32>,
    color_source: ColorSource,
    active_width: Option<usize>,
    state: ToolState,
}

impl ToolSelector {
    /// Build a selector from the offered options and the starting tool state.
    ///
    /// The swatch equal to the starting color and the option equal to the
    /// starting width begin highlighted, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if any palette color fails to parse or any width is zero.
    pub fn new(palette: Vec<String>, widths: Vec<u32>, initial: ToolState) -> Result<Self, SketchError> {
        let mut palette_rgb = Vec::with_capacity(palette.len());
        for color in &palette {
            palette_rgb.push(Color::parse(color)?);
        }
        for &w in &widths {
            check_width(w)?;
        }

        let color_source = palette_rgb
            .iter()
            .position(|&c| c == initial.rgb)
            .map_or(ColorSource::Default, ColorSource::Palette);
        let active_width = widths.iter().position(|&w| w == initial.width);

        Ok(Self { palette, widths, color_source, active_width, state: initial })
    }

    #[must_use]
    pub fn state(&self) -> &ToolState {
        &self.state
    }

    /// Whether the swatch at `index` is highlighted.
    #[must_use]
    pub fn is_color_active(&self, index: usize) -> bool {
        self.color_source == ColorSource::Palette(index)
    }

    /// Whether the width option at `index` is highlighted.
    #[must_use]
    pub fn is_width_active(&self, index: usize) -> bool {
        self.active_width == Some(index)
    }

    /// Select the palette swatch at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::PaletteIndex`] if there is no such swatch.
    pub fn select_palette(&mut self, index: usize) -> Result<&ToolState, SketchError> {
        let color = self.palette.get(index).ok_or(SketchError::PaletteIndex(index))?;
        self.state.rgb = Color::parse(color)?;
        self.state.color.clone_from(color);
        self.color_source = ColorSource::Palette(index);
        Ok(&self.state)
    }

    /// Apply a value from the free-form color picker. Clears the palette highlight.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidColor`] and leaves the state untouched
    /// if the value does not parse.
    pub fn select_custom(&mut self, value: &str) -> Result<&ToolState, SketchError> {
        self.state.rgb = Color::parse(value)?;
        value.clone_into(&mut self.state.color);
        self.color_source = ColorSource::Custom;
        Ok(&self.state)
    }

    /// Select the width option at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::WidthIndex`] if there is no such option.
    pub fn select_width(&mut self, index: usize) -> Result<&ToolState, SketchError> {
        let width = *self.widths.get(index).ok_or(SketchError::WidthIndex(index))?;
        self.state.width = width;
        self.active_width = Some(index);
        Ok(&self.state)
    }

    /// Select a width option by its raw attribute value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a positive integer or not one of
    /// the offered widths.
    pub fn select_width_value(&mut self, raw: &str) -> Result<&ToolState, SketchError> {
        let width = parse_width(raw)?;
        let index = self
            .widths
            .iter()
            .position(|&w| w == width)
            .ok_or(SketchError::UnknownWidth(width))?;
        self.select_width(index)
    }
}
