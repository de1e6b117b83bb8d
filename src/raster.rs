//! In-memory opaque raster implementing [`Surface`].
//!
//! Translucent fills and strokes are composited source-over, so every pixel
//! stays opaque. Strokes are rasterized without anti-aliasing: a pixel is painted when its
//! center lies within `width / 2` of a path segment. The union of those
//! capsules is exactly what round joins and round caps produce, so join and
//! cap settings are recorded but do not change the coverage.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::color::{BLACK, Color, WHITE};
use crate::geometry::{Point, dist_sq_to_segment};
use crate::render::{LineCap, LineJoin, Surface};

/// A fixed-size grid of opaque pixels.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    fill: Color,
    stroke: Color,
    line_width: f64,
    line_join: LineJoin,
    line_cap: LineCap,
    path: Vec<Vec<Point>>,
}

impl PixelSurface {
    /// A `width` × `height` surface filled with `background` composited over white.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background.over(WHITE); width as usize * height as usize],
            fill: BLACK,
            stroke: BLACK,
            line_width: 1.0,
            line_join: LineJoin::Miter,
            line_cap: LineCap::Butt,
            path: Vec::new(),
        }
    }

    /// Color at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Whether every pixel equals `color`.
    #[must_use]
    pub fn is_uniform(&self, color: Color) -> bool {
        self.pixels.iter().all(|&p| p == color)
    }

    /// Number of pixels equal to `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    #[must_use]
    pub fn line_join(&self) -> LineJoin {
        self.line_join
    }

    #[must_use]
    pub fn line_cap(&self) -> LineCap {
        self.line_cap
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Clamp a half-open pixel span `[lo, hi)` to `[0, limit)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
        let lo = lo.floor().clamp(0.0, f64::from(limit)) as u32;
        let hi = hi.ceil().clamp(0.0, f64::from(limit)) as u32;
        (lo, hi)
    }

    fn stamp_segment(&mut self, a: Point, b: Point) {
        let radius = self.line_width / 2.0;
        let r_sq = radius * radius;
        let (x0, x1) = Self::span(a.x.min(b.x) - radius, a.x.max(b.x) + radius, self.width);
        let (y0, y1) = Self::span(a.y.min(b.y) - radius, a.y.max(b.y) + radius, self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if dist_sq_to_segment(center, a, b) <= r_sq {
                    let i = self.index(x, y);
                    self.pixels[i] = self.stroke.over(self.pixels[i]);
                }
            }
        }
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (x0, x1) = Self::span(x, x + width, self.width);
        let (y0, y1) = Self::span(y, y + height, self.height);
        for row in y0..y1 {
            for col in x0..x1 {
                let i = self.index(col, row);
                self.pixels[i] = self.fill.over(self.pixels[i]);
            }
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width > 0.0 && width.is_finite() {
            self.line_width = width;
        }
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.line_join = join;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.line_cap = cap;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Point) {
        self.path.push(vec![p]);
    }

    fn line_to(&mut self, p: Point) {
        match self.path.last_mut() {
            Some(sub) => sub.push(p),
            None => self.path.push(vec![p]),
        }
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        for sub in &path {
            for pair in sub.windows(2) {
                self.stamp_segment(pair[0], pair[1]);
            }
        }
        self.path = path;
    }
}
