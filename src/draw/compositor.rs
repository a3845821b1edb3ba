//! Persistent stroke buffer plus live compositing of in-progress paths.

use super::buffer::PixelBuffer;
use super::path::Path;
use super::raster::{CairoRaster, RasterSink, RenderError};
use super::style::StrokeStyle;
use log::{debug, info};

/// Owns the committed raster and composites in-progress strokes over it.
///
/// The raster does not exist until the host reports a surface size via
/// [`SurfaceCompositor::resize`]; until then renders and snapshots are empty
/// and baked strokes are dropped.
pub struct SurfaceCompositor<R: RasterSink = CairoRaster> {
    raster: Option<R>,
}

impl<R: RasterSink> Default for SurfaceCompositor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RasterSink> SurfaceCompositor<R> {
    pub fn new() -> Self {
        Self { raster: None }
    }

    /// Current buffer dimensions, if a buffer has been allocated.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.raster.as_ref().map(RasterSink::size)
    }

    /// (Re)allocates the buffer at the given size. Prior content is lost.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        let raster = R::allocate(width, height)?;
        info!("Allocated {}x{} drawing buffer", width, height);
        self.raster = Some(raster);
        Ok(())
    }

    /// Permanently strokes `path` into the buffer.
    pub fn bake(&mut self, path: &Path, style: &StrokeStyle) {
        if path.is_empty() {
            return;
        }
        match self.raster.as_mut() {
            Some(raster) => raster.stroke_path(path, style),
            None => debug!("No drawing buffer allocated yet; dropping completed stroke"),
        }
    }

    /// Erases the buffer to fully transparent.
    pub fn clear(&mut self) {
        if let Some(raster) = self.raster.as_mut() {
            raster.clear();
        }
    }

    /// Buffer contents with every in-progress path stroked on top.
    ///
    /// The buffer itself is not modified.
    pub fn render<'a, I>(&self, paths: I, style: &StrokeStyle) -> Result<PixelBuffer, RenderError>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let Some(raster) = self.raster.as_ref() else {
            return Ok(PixelBuffer::empty());
        };
        let mut frame = raster.duplicate()?;
        for path in paths {
            frame.stroke_path(path, style);
        }
        frame.snapshot()
    }

    /// Committed buffer contents; in-progress strokes are not included.
    pub fn snapshot(&self) -> Result<PixelBuffer, RenderError> {
        match self.raster.as_ref() {
            Some(raster) => raster.snapshot(),
            None => Ok(PixelBuffer::empty()),
        }
    }

    /// Direct access to the backing raster (for hosts that present it themselves).
    pub fn raster(&self) -> Option<&R> {
        self.raster.as_ref()
    }
}
