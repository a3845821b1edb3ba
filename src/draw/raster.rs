//! Raster sink abstraction and its Cairo-backed implementation.

use super::buffer::{PixelBuffer, checked_dimensions};
use super::color::TRANSPARENT;
use super::path::Path;
use super::style::StrokeStyle;
use log::warn;
use thiserror::Error;

/// Errors raised while allocating or reading raster surfaces.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Surface size {width}x{height} is out of range")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// A persistent raster that strokes can be baked into.
///
/// The compositor only ever talks to its buffer through this trait, so the
/// backing imaging library can be swapped without touching stroke logic.
pub trait RasterSink: Sized {
    /// Allocates a fully transparent raster of the given size.
    fn allocate(width: u32, height: u32) -> Result<Self, RenderError>;

    /// Raster dimensions in pixels.
    fn size(&self) -> (u32, u32);

    /// Erases every pixel to transparent.
    fn clear(&mut self);

    /// Strokes `path` into the raster with `style`.
    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle);

    /// Independent copy of the current contents.
    fn duplicate(&self) -> Result<Self, RenderError>;

    /// Owned copy of the pixels.
    fn snapshot(&self) -> Result<PixelBuffer, RenderError>;
}

/// [`RasterSink`] backed by a Cairo `ARgb32` image surface.
pub struct CairoRaster {
    surface: cairo::ImageSurface,
}

impl CairoRaster {
    /// Borrow the underlying surface (e.g. to paint it onto a host context).
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    fn context(&self) -> Option<cairo::Context> {
        match cairo::Context::new(&self.surface) {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                warn!("Failed to create drawing context for raster: {}", err);
                None
            }
        }
    }
}

impl RasterSink for CairoRaster {
    fn allocate(width: u32, height: u32) -> Result<Self, RenderError> {
        let (w, h) = checked_dimensions(width, height)?;
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)?;
        let mut raster = Self { surface };
        raster.clear();
        Ok(raster)
    }

    fn size(&self) -> (u32, u32) {
        (
            self.surface.width().max(0) as u32,
            self.surface.height().max(0) as u32,
        )
    }

    fn clear(&mut self) {
        let Some(ctx) = self.context() else {
            return;
        };
        TRANSPARENT.apply_source(&ctx);
        ctx.set_operator(cairo::Operator::Source);
        if let Err(err) = ctx.paint() {
            warn!("Failed to clear raster: {}", err);
        }
    }

    fn stroke_path(&mut self, path: &Path, style: &StrokeStyle) {
        if path.is_empty() {
            return;
        }
        let Some(ctx) = self.context() else {
            return;
        };
        style.apply(&ctx);
        path.trace(&ctx);
        if let Err(err) = ctx.stroke() {
            warn!("Failed to stroke path into raster: {}", err);
        }
    }

    fn duplicate(&self) -> Result<Self, RenderError> {
        let (width, height) = self.size();
        let copy = Self::allocate(width, height)?;
        {
            let ctx = cairo::Context::new(&copy.surface)?;
            ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.paint()?;
        }
        Ok(copy)
    }

    fn snapshot(&self) -> Result<PixelBuffer, RenderError> {
        PixelBuffer::from_surface(&self.surface)
    }
}
