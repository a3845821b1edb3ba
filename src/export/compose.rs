//! Flattening the drawing onto its view background for export.

use crate::draw::buffer::checked_dimensions;
use crate::draw::{Color, PixelBuffer, RED, RenderError};

/// Renders `drawing` over a solid background.
///
/// Mirrors capturing the containing view: the view background is painted
/// first and the drawing on top. Views without a background are captured
/// over opaque red.
pub fn compose_for_export(
    drawing: &PixelBuffer,
    background: Option<Color>,
) -> Result<PixelBuffer, RenderError> {
    let (width, height) = checked_dimensions(drawing.width(), drawing.height())?;
    let target = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&target)?;
        background.unwrap_or(RED).apply_source(&ctx);
        ctx.paint()?;

        let source = drawing.to_surface()?;
        ctx.set_source_surface(&source, 0.0, 0.0)?;
        ctx.paint()?;
    }
    PixelBuffer::from_surface(&target)
}
