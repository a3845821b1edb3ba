//! Stroke appearance shared by every path at a given time.

use super::color::{BLACK, Color};

/// Default stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Color and width applied when a path is rendered or baked.
///
/// Paths do not store their own style: changing the style affects every
/// in-progress path on the next render and every future bake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Line width in pixels (always positive)
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl StrokeStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    /// Configures a Cairo context for stroking: anti-aliased, solid, round caps.
    pub(crate) fn apply(&self, ctx: &cairo::Context) {
        self.color.apply_source(ctx);
        ctx.set_antialias(cairo::Antialias::Best);
        ctx.set_line_width(self.width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
    }
}
