use web_sys::CanvasRenderingContext2d;

use crate::color::Color;
use crate::error::SketchError;
use crate::geometry::{Layout, Point};
use crate::input::{InputState, PointerInput, TouchInput};
use crate::render;
use crate::tool::{ToolSelector, ToolState};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// One straight piece of a stroke, in surface pixels, with the style it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub width: u32,
}

/// Raster work returned from input handlers for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Stroke a segment with round joins and caps.
    DrawSegment(Segment),
    /// Fill the whole surface with the background color.
    Clear(Color),
}

/// Core engine state: all logic that doesn't depend on the 2D context.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub tools: ToolSelector,
    pub input: InputState,
    pub layout: Layout,
    pub background: Color,
}

impl EngineCore {
    #[must_use]
    pub fn new(tools: ToolSelector, background: Color) -> Self {
        Self { tools, input: InputState::Idle, layout: Layout::default(), background }
    }

    // --- Layout ---

    /// Replace the page-to-surface mapping. Called on load and resize.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    // --- Tool selection ---

    /// Highlight palette swatch `index` and make its color active.
    ///
    /// # Errors
    ///
    /// See [`ToolSelector::select_palette`].
    pub fn select_palette_color(&mut self, index: usize) -> Result<&ToolState, SketchError> {
        let state = self.tools.select_palette(index)?;
        log::debug!("palette color {index} selected: {}", state.color());
        Ok(state)
    }

    /// Make a free-form color active and clear the palette highlight.
    ///
    /// # Errors
    ///
    /// See [`ToolSelector::select_custom`].
    pub fn select_custom_color(&mut self, value: &str) -> Result<&ToolState, SketchError> {
        let state = self.tools.select_custom(value)?;
        log::debug!("custom color selected: {}", state.color());
        Ok(state)
    }

    /// Highlight width option `index` and make its width active.
    ///
    /// # Errors
    ///
    /// See [`ToolSelector::select_width`].
    pub fn select_width(&mut self, index: usize) -> Result<&ToolState, SketchError> {
        let state = self.tools.select_width(index)?;
        log::debug!("brush width {} selected", state.width());
        Ok(state)
    }

    /// Select a width option by its raw `data-size` value.
    ///
    /// # Errors
    ///
    /// See [`ToolSelector::select_width_value`].
    pub fn select_width_value(&mut self, raw: &str) -> Result<&ToolState, SketchError> {
        let state = self.tools.select_width_value(raw)?;
        log::debug!("brush width {} selected", state.width());
        Ok(state)
    }

    // --- Clear ---

    /// Refill the surface with the background. Tool and pointer state are kept.
    #[must_use]
    pub fn clear(&self) -> Vec<Action> {
        log::debug!("surface cleared");
        vec![Action::Clear(self.background)]
    }

    // --- Pointer input ---

    pub fn on_pointer(&mut self, input: PointerInput) -> Vec<Action> {
        match input {
            PointerInput::Down(page) => self.on_pointer_down(page),
            PointerInput::Move(page) => self.on_pointer_move(page),
            PointerInput::Up => self.on_pointer_up(),
            PointerInput::Leave => self.on_pointer_leave(),
        }
    }

    /// Start a stroke at `page`. Nothing is drawn until the pointer moves.
    ///
    /// A pointer-down during a stroke restarts it at the new position.
    pub fn on_pointer_down(&mut self, page: Point) -> Vec<Action> {
        let last = self.layout.page_to_surface(page);
        if self.input.is_drawing() {
            log::debug!("stroke restarted at ({:.1}, {:.1})", last.x, last.y);
        } else {
            log::debug!("stroke started at ({:.1}, {:.1})", last.x, last.y);
        }
        self.input = InputState::Drawing { last };
        Vec::new()
    }

    /// Extend the stroke to `page`, drawing one segment. Ignored when idle.
    pub fn on_pointer_move(&mut self, page: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Drawing { last } => {
                let to = self.layout.page_to_surface(page);
                let tool = self.tools.state();
                let segment = Segment { from: last, to, color: tool.rgb(), width: tool.width() };
                self.input = InputState::Drawing { last: to };
                vec![Action::DrawSegment(segment)]
            }
        }
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_stroke("released");
        Vec::new()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_stroke("left surface");
        Vec::new()
    }

    fn end_stroke(&mut self, reason: &str) {
        if let InputState::Drawing { .. } = self.input {
            log::debug!("stroke ended: {reason}");
        }
        self.input = InputState::Idle;
    }

    // --- Touch input ---

    /// Route a single-finger touch through the pointer handlers.
    pub fn on_touch(&mut self, input: TouchInput) -> Vec<Action> {
        match input.to_pointer() {
            Some(pointer) => self.on_pointer(pointer),
            None => Vec::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser 2D context.
///
/// Every handler applies its actions to the context immediately, so a stroke
/// never buffers more than its last point.
pub struct Engine {
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Bind to a 2D context, set round joins and caps, and paint the background.
    #[must_use]
    pub fn new(mut ctx: CanvasRenderingContext2d, core: EngineCore) -> Self {
        render::prepare(&mut ctx, core.background);
        Self { ctx, core }
    }

    fn run(&mut self, actions: &[Action]) {
        render::apply(&mut self.ctx, actions);
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.core.set_layout(layout);
    }

    pub fn on_pointer(&mut self, input: PointerInput) {
        let actions = self.core.on_pointer(input);
        self.run(&actions);
    }

    pub fn on_touch(&mut self, input: TouchInput) {
        let actions = self.core.on_touch(input);
        self.run(&actions);
    }

    pub fn clear(&mut self) {
        let actions = self.core.clear();
        self.run(&actions);
    }

    /// # Errors
    ///
    /// See [`EngineCore::select_palette_color`].
    pub fn select_palette_color(&mut self, index: usize) -> Result<(), SketchError> {
        self.core.select_palette_color(index).map(|_| ())
    }

    /// # Errors
    ///
    /// See [`EngineCore::select_custom_color`].
    pub fn select_custom_color(&mut self, value: &str) -> Result<(), SketchError> {
        self.core.select_custom_color(value).map(|_| ())
    }

    /// # Errors
    ///
    /// See [`EngineCore::select_width`].
    pub fn select_width(&mut self, index: usize) -> Result<(), SketchError> {
        self.core.select_width(index).map(|_| ())
    }

    #[must_use]
    pub fn tools(&self) -> &ToolSelector {
        &self.core.tools
    }
}
