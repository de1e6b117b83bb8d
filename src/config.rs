//! Host page wiring and default tool settings.
//!
//! Every field has a default matching the stock `www/index.html`, so a page
//! only needs a `#sketchpad-config` JSON element when it deviates.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::color::Color;
use crate::consts::{ACTIVE_CLASS, BACKGROUND, DEFAULT_COLOR, DEFAULT_WIDTH};
use crate::error::SketchError;
use crate::tool::ToolState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Id of the `<canvas>` element.
    pub canvas_id: String,
    /// Selector matching palette swatches (each with `data-color`).
    pub color_option_selector: String,
    /// Selector matching width options (each with `data-size`).
    pub size_option_selector: String,
    /// Id of the clear button.
    pub clear_button_id: String,
    /// Id of the free-form `<input type="color">`.
    pub custom_color_id: String,
    /// Class toggled on the highlighted option in each group.
    pub active_class: String,
    /// Fill for a fresh or cleared surface.
    pub background: String,
    pub default_color: String,
    pub default_width: u32,
    /// `log` level filter name: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_id: "myCanvas".into(),
            color_option_selector: ".color-option".into(),
            size_option_selector: ".size-option".into(),
            clear_button_id: "clearBtn".into(),
            custom_color_id: "customColor".into(),
            active_class: ACTIVE_CLASS.into(),
            background: BACKGROUND.into(),
            default_color: DEFAULT_COLOR.into(),
            default_width: DEFAULT_WIDTH,
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, names an unknown field, or
    /// fails [`Config::validate`].
    pub fn from_json(raw: &str) -> Result<Self, SketchError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that colors parse, the background is opaque, the default width
    /// is positive and the log level is a known name.
    ///
    /// # Errors
    ///
    /// Returns the first offending field's error.
    pub fn validate(&self) -> Result<(), SketchError> {
        self.background_color()?;
        self.initial_tool()?;
        self.log_level()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SketchError::InvalidColor`] if `background` does not parse
    /// or is not opaque.
    pub fn background_color(&self) -> Result<Color, SketchError> {
        let color = Color::parse(&self.background)?;
        if !color.is_opaque() {
            return Err(SketchError::InvalidColor(self.background.clone()));
        }
        Ok(color)
    }

    /// Tool state active before any selection.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_color` or `default_width` is invalid.
    pub fn initial_tool(&self) -> Result<ToolState, SketchError> {
        ToolState::new(&self.default_color, self.default_width)
    }

    /// # Errors
    ///
    /// Returns [`SketchError::LogLevel`] unless `log_level` names a `log`
    /// level (case-insensitive).
    pub fn log_level(&self) -> Result<log::Level, SketchError> {
        self.log_level
            .parse()
            .map_err(|_| SketchError::LogLevel(self.log_level.clone()))
    }
}
