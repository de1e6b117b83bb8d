//! Shared constants for the sketchpad crate.

// ── Tool defaults ───────────────────────────────────────────────

/// Stroke color active before the user picks one.
pub const DEFAULT_COLOR: &str = "#000000";

/// Brush width in surface pixels active before the user picks one.
pub const DEFAULT_WIDTH: u32 = 2;

/// Fill used for a fresh or cleared surface.
pub const BACKGROUND: &str = "white";

// ── Host page ───────────────────────────────────────────────────

/// CSS class marking the highlighted palette swatch / width option.
pub const ACTIVE_CLASS: &str = "active";

/// Id of an optional `<script type="application/json">` holding a [`crate::config::Config`].
pub const CONFIG_ELEMENT_ID: &str = "sketchpad-config";
