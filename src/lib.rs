//! Freehand drawing surface compiled to WebAssembly.
//!
//! The user picks a color and a brush width, then drags a pointer (mouse or a
//! single finger) across a fixed-size raster canvas to paint strokes. Every
//! segment is composited into the pixels the moment it is drawn; there is no
//! stroke model to undo or export. A clear action refills the surface with
//! the opaque background.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`input`] | Pointer/touch input types and the stroke state machine |
//! | [`tool`] | Active color and brush width, palette highlight tracking |
//! | [`geometry`] | Points, surface layout and page-to-surface mapping |
//! | [`render`] | The [`render::Surface`] contract and action application |
//! | [`raster`] | In-memory pixel buffer implementing [`render::Surface`] |
//! | [`color`] | RGBA colors parsed from any CSS color string |
//! | [`config`] | Host page wiring and default tool settings |
//! | [`error`] | Error type shared across the crate |
//! | [`consts`] | Shared defaults |
//!
//! The browser entry point lives in `web` and is only compiled for `wasm32`.

pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod raster;
pub mod render;
pub mod tool;

#[cfg(target_arch = "wasm32")]
mod web;
