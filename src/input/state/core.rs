//! Drawing surface state: stroke tracker plus committed buffer.

use crate::draw::{Color, PixelBuffer, RenderError, StrokeStyle, SurfaceCompositor};
use crate::input::tracker::StrokeTracker;
use log::info;

/// Main state for the finger-painting surface.
///
/// Holds the per-pointer stroke tracker and the compositor that owns the
/// committed pixel buffer. Hosts feed it touch events through
/// [`DoodleState::handle_touch`], present the frame returned by
/// [`DoodleState::render`] whenever `needs_redraw` is set, and report surface
/// size changes through [`DoodleState::resize`].
pub struct DoodleState {
    /// In-progress strokes, one per pointer id
    pub(super) tracker: StrokeTracker,
    /// Committed strokes
    pub(super) compositor: SurfaceCompositor,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for DoodleState {
    fn default() -> Self {
        Self::new(StrokeStyle::default(), crate::input::tracker::TOUCH_TOLERANCE)
    }
}

impl DoodleState {
    /// Creates a new state with the given stroke style and touch tolerance.
    ///
    /// No buffer exists until the first [`DoodleState::resize`].
    pub fn new(style: StrokeStyle, tolerance: f64) -> Self {
        Self {
            tracker: StrokeTracker::new(style, tolerance),
            compositor: SurfaceCompositor::new(),
            needs_redraw: true,
        }
    }

    /// Reallocates the buffer for a new surface size, discarding its content.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        self.compositor.resize(width, height)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Current buffer size, if one has been allocated.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.compositor.size()
    }

    /// Removes every stroke, committed or in progress.
    pub fn clear(&mut self) {
        self.tracker.clear();
        self.compositor.clear();
        self.needs_redraw = true;
        info!("Drawing cleared");
    }

    /// Composites the committed buffer with all in-progress strokes.
    pub fn render(&self) -> Result<PixelBuffer, RenderError> {
        self.compositor
            .render(self.tracker.active_paths(), self.tracker.style())
    }

    /// Committed strokes only, for export.
    pub fn snapshot(&self) -> Result<PixelBuffer, RenderError> {
        self.compositor.snapshot()
    }

    pub fn tracker(&self) -> &StrokeTracker {
        &self.tracker
    }

    pub fn drawing_color(&self) -> Color {
        self.tracker.stroke_color()
    }

    pub fn set_drawing_color(&mut self, color: Color) {
        self.tracker.set_stroke_color(color);
        self.needs_redraw = true;
    }

    pub fn line_width(&self) -> f64 {
        self.tracker.stroke_width()
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.tracker.set_stroke_width(width);
        self.needs_redraw = true;
    }
}
