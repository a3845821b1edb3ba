//! Per-pointer stroke tracking with tolerance-based smoothing.

use super::events::{PointerId, TouchPoint};
use crate::draw::{Color, Path, Point, StrokeStyle};
use log::{debug, warn};
use std::collections::HashMap;
use std::mem;

/// Minimum movement (in either axis) before a stroke is extended.
pub const TOUCH_TOLERANCE: f64 = 10.0;

/// Geometry and last raw position for one pointer.
///
/// Kept together so a pointer can never have a path without a previous point
/// or the other way round.
#[derive(Debug, Default)]
struct ActiveStroke {
    path: Path,
    previous: Point,
}

/// Converts per-pointer touch positions into smoothed vector paths.
///
/// Each qualifying move appends a quadratic curve whose control point is the
/// previous raw position and whose end point is the midpoint between the
/// previous and the new position, which rounds off the corners a raw
/// polyline would have.
#[derive(Debug)]
pub struct StrokeTracker {
    strokes: HashMap<PointerId, ActiveStroke>,
    style: StrokeStyle,
    tolerance: f64,
}

impl Default for StrokeTracker {
    fn default() -> Self {
        Self::new(StrokeStyle::default(), TOUCH_TOLERANCE)
    }
}

impl StrokeTracker {
    pub fn new(style: StrokeStyle, tolerance: f64) -> Self {
        Self {
            strokes: HashMap::new(),
            style,
            tolerance,
        }
    }

    /// Begins (or restarts) the stroke for `id` at `(x, y)`.
    ///
    /// A pointer id that is already tracked has its geometry discarded and its
    /// entry reused.
    pub fn touch_started(&mut self, x: f64, y: f64, id: PointerId) {
        let stroke = self.strokes.entry(id).or_default();
        stroke.path.reset();

        let point = Point::new(x, y);
        stroke.path.move_to(point);
        stroke.previous = point;
        debug!("Pointer {} down at ({:.1}, {:.1})", id, x, y);
    }

    /// Extends the paths of every tracked pointer in the batch that moved far
    /// enough. Returns whether any path grew.
    pub fn touch_moved(&mut self, positions: &[TouchPoint]) -> bool {
        let mut extended = false;
        for touch in positions {
            let Some(stroke) = self.strokes.get_mut(&touch.id) else {
                continue;
            };

            let previous = stroke.previous;
            let delta_x = (touch.x - previous.x).abs();
            let delta_y = (touch.y - previous.y).abs();

            if delta_x >= self.tolerance || delta_y >= self.tolerance {
                let current = Point::new(touch.x, touch.y);
                stroke.path.quad_to(previous, previous.midpoint(current));
                stroke.previous = current;
                extended = true;
            }
        }
        extended
    }

    /// Takes the geometry of `id` for baking and leaves an empty path behind.
    ///
    /// The entry itself stays so a quick re-tap with the same id reuses it.
    /// Returns `None` for untracked pointers.
    pub fn touch_ended(&mut self, id: PointerId) -> Option<Path> {
        let stroke = self.strokes.get_mut(&id)?;
        debug!(
            "Pointer {} up after {} segments",
            id,
            stroke.path.segments().len()
        );
        Some(mem::take(&mut stroke.path))
    }

    /// Forgets every tracked pointer.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn path(&self, id: PointerId) -> Option<&Path> {
        self.strokes.get(&id).map(|stroke| &stroke.path)
    }

    pub fn previous_point(&self, id: PointerId) -> Option<Point> {
        self.strokes.get(&id).map(|stroke| stroke.previous)
    }

    /// Number of tracked pointer ids, including those whose stroke has ended.
    pub fn pointer_count(&self) -> usize {
        self.strokes.len()
    }

    /// In-progress paths ordered by pointer id.
    pub fn active_paths(&self) -> impl Iterator<Item = &Path> {
        let mut ids: Vec<_> = self.strokes.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter()
            .filter_map(|id| self.strokes.get(&id))
            .map(|stroke| &stroke.path)
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn stroke_color(&self) -> Color {
        self.style.color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn stroke_width(&self) -> f64 {
        self.style.width
    }

    /// Sets the stroke width; non-positive or non-finite widths are ignored.
    pub fn set_stroke_width(&mut self, width: f64) {
        if !width.is_finite() || width <= 0.0 {
            warn!("Ignoring invalid stroke width {}", width);
            return;
        }
        self.style.width = width;
    }
}
