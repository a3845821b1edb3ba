//! Vector geometry for one stroke in progress.

use serde::{Deserialize, Serialize};

/// A point in surface-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A single path command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Starts a new subpath at the given point
    MoveTo(Point),
    /// Quadratic Bezier from the current point through `control` to `end`
    QuadTo { control: Point, end: Point },
}

/// Ordered sequence of move-to and quadratic-curve-to segments.
///
/// Paths are mutated in place while a pointer is down. Once baked, the
/// tracker takes the geometry and leaves an empty path under the same
/// pointer id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `point`, starting a new subpath.
    pub fn move_to(&mut self, point: Point) {
        self.segments.push(Segment::MoveTo(point));
    }

    /// Appends a quadratic curve ending at `end` with the given control point.
    pub fn quad_to(&mut self, control: Point, end: Point) {
        self.segments.push(Segment::QuadTo { control, end });
    }

    /// Discards all geometry, keeping the allocation.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of curve segments (move-to commands excluded).
    pub fn curve_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::QuadTo { .. }))
            .count()
    }

    /// Traces this path onto a Cairo context as the current path.
    ///
    /// Cairo has no quadratic primitive, so each quad is elevated to the
    /// equivalent cubic: `c1 = p0 + 2/3 (q - p0)`, `c2 = p1 + 2/3 (q - p1)`.
    /// A curve with no current point starts at its control point.
    pub(crate) fn trace(&self, ctx: &cairo::Context) {
        let mut current: Option<Point> = None;
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(p) => {
                    ctx.move_to(p.x, p.y);
                    current = Some(p);
                }
                Segment::QuadTo { control, end } => {
                    let start = current.unwrap_or_else(|| {
                        ctx.move_to(control.x, control.y);
                        control
                    });
                    let c1x = start.x + 2.0 / 3.0 * (control.x - start.x);
                    let c1y = start.y + 2.0 / 3.0 * (control.y - start.y);
                    let c2x = end.x + 2.0 / 3.0 * (control.x - end.x);
                    let c2y = end.y + 2.0 / 3.0 * (control.y - end.y);
                    ctx.curve_to(c1x, c1y, c2x, c2y, end.x, end.y);
                    current = Some(end);
                }
            }
        }
    }
}
