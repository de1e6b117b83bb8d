//! Rendering: the 2D surface contract and application of engine actions.
//!
//! [`Surface`] is the subset of a canvas 2D context the drawing surface needs.
//! It is implemented here for [`web_sys::CanvasRenderingContext2d`] and in
//! [`crate::raster`] for an in-memory pixel buffer. This module is the only
//! place that touches the browser context.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use web_sys::CanvasRenderingContext2d;

use crate::color::Color;
use crate::engine::{Action, Segment};
use crate::geometry::Point;

/// How two connected segments of a path are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Round,
    Bevel,
    Miter,
}

impl LineJoin {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Bevel => "bevel",
            Self::Miter => "miter",
        }
    }
}

/// How the open ends of a path are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
    Butt,
    Square,
}

impl LineCap {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Butt => "butt",
            Self::Square => "square",
        }
    }
}

/// A raster drawing target with canvas-2D style path stroking.
pub trait Surface {
    /// Intrinsic size in pixels.
    fn size(&self) -> (u32, u32);

    fn set_fill_color(&mut self, color: Color);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_line_cap(&mut self, cap: LineCap);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn stroke(&mut self);
}

/// Set the fixed line style and fill the surface with `background`.
pub fn prepare<S: Surface + ?Sized>(surface: &mut S, background: Color) {
    surface.set_line_join(LineJoin::Round);
    surface.set_line_cap(LineCap::Round);
    clear(surface, background);
}

/// Apply engine actions in order.
pub fn apply<S: Surface + ?Sized>(surface: &mut S, actions: &[Action]) {
    for action in actions {
        match action {
            Action::DrawSegment(segment) => draw_segment(surface, segment),
            Action::Clear(background) => clear(surface, *background),
        }
    }
}

fn draw_segment<S: Surface + ?Sized>(surface: &mut S, segment: &Segment) {
    surface.set_stroke_color(segment.color);
    surface.set_line_width(f64::from(segment.width));
    surface.begin_path();
    surface.move_to(segment.from);
    surface.line_to(segment.to);
    surface.stroke();
}

fn clear<S: Surface + ?Sized>(surface: &mut S, background: Color) {
    let (w, h) = surface.size();
    surface.set_fill_color(background);
    surface.fill_rect(0.0, 0.0, f64::from(w), f64::from(h));
}

impl Surface for CanvasRenderingContext2d {
    fn size(&self) -> (u32, u32) {
        self.canvas().map_or((0, 0), |c| (c.width(), c.height()))
    }

    fn set_fill_color(&mut self, color: Color) {
        self.set_fill_style_str(&color.to_css());
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_line_join(&mut self, join: LineJoin) {
        CanvasRenderingContext2d::set_line_join(self, join.as_str());
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        CanvasRenderingContext2d::set_line_cap(self, cap.as_str());
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, p: Point) {
        CanvasRenderingContext2d::move_to(self, p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        CanvasRenderingContext2d::line_to(self, p.x, p.y);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
}
