//! Input model: pointer and touch events and the stroke state machine.
//!
//! Pointer coordinates arrive in page space and are mapped to surface pixels
//! by the engine before they reach `InputState`. Touch events are translated
//! into the equivalent pointer input so a single state machine serves both.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// A pointer event from the surface, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Primary button pressed over the surface.
    Down(Point),
    /// Pointer moved over the surface.
    Move(Point),
    /// Button released.
    Up,
    /// Pointer left the surface.
    Leave,
}

/// A single-finger touch event, in page coordinates.
///
/// Only the first touch point is carried. Start and move events that report
/// no touch point at all carry `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchInput {
    Start(Option<Point>),
    Move(Option<Point>),
    End,
    Cancel,
}

impl TouchInput {
    /// The pointer input this touch stands for, if any.
    #[must_use]
    pub fn to_pointer(self) -> Option<PointerInput> {
        match self {
            Self::Start(p) => p.map(PointerInput::Down),
            Self::Move(p) => p.map(PointerInput::Move),
            Self::End => Some(PointerInput::Up),
            Self::Cancel => Some(PointerInput::Leave),
        }
    }
}

/// State of the stroke in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No stroke; move events are ignored.
    #[default]
    Idle,
    /// A stroke is in progress.
    Drawing {
        /// Surface-space position of the previous pointer event.
        last: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}
