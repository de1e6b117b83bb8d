#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in either page space or surface-pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry of the canvas element relative to the page.
///
/// `origin` is the top-left corner of the element in page coordinates
/// (bounding rect plus scroll offset). `rendered_*` is the on-screen CSS size
/// and `intrinsic_*` the size of the backing pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub origin: Point,
    pub rendered_width: f64,
    pub rendered_height: f64,
    pub intrinsic_width: f64,
    pub intrinsic_height: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            rendered_width: 1.0,
            rendered_height: 1.0,
            intrinsic_width: 1.0,
            intrinsic_height: 1.0,
        }
    }
}

impl Layout {
    /// Layout for an element rendered at exactly its intrinsic size.
    #[must_use]
    pub fn unscaled(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            rendered_width: width,
            rendered_height: height,
            intrinsic_width: width,
            intrinsic_height: height,
        }
    }

    /// Horizontal and vertical ratio of intrinsic pixels to rendered pixels.
    ///
    /// A collapsed element (zero or negative rendered size) maps 1:1.
    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        (
            ratio(self.intrinsic_width, self.rendered_width),
            ratio(self.intrinsic_height, self.rendered_height),
        )
    }

    /// Convert a page-space point to surface-pixel coordinates.
    #[must_use]
    pub fn page_to_surface(&self, page: Point) -> Point {
        let (sx, sy) = self.scale();
        Point {
            x: (page.x - self.origin.x) * sx,
            y: (page.y - self.origin.y) * sy,
        }
    }
}

fn ratio(intrinsic: f64, rendered: f64) -> f64 {
    if rendered > 0.0 && rendered.is_finite() {
        intrinsic / rendered
    } else {
        1.0
    }
}

/// Squared distance from `p` to the closed segment `a`–`b`.
#[must_use]
pub fn dist_sq_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let cx = a.x + t * dx;
    let cy = a.y + t * dy;
    (p.x - cx) * (p.x - cx) + (p.y - cy) * (p.y - cy)
}
