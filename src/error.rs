//! Error type shared across the crate.

use wasm_bindgen::JsValue;

/// Everything that can go wrong while configuring or driving the surface.
///
/// Input handlers never fail: bad pointer sequences are ignored by the state
/// machine. Errors only come from tool selection, configuration, and the DOM.
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    #[error("invalid brush width: {0:?}")]
    InvalidWidth(String),
    #[error("brush width {0} is not one of the offered sizes")]
    UnknownWidth(u32),
    #[error("no palette entry at index {0}")]
    PaletteIndex(usize),
    #[error("no width option at index {0}")]
    WidthIndex(usize),
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("unknown log level: {0:?}")]
    LogLevel(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("browser error: {0}")]
    Js(String),
}

impl From<JsValue> for SketchError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SketchError> for JsValue {
    fn from(err: SketchError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
