//! Owned copies of raster contents handed out to callers.

use super::raster::RenderError;
use std::io::Write;

/// An owned ARGB32 pixel buffer.
///
/// Pixels use Cairo's native `ARgb32` layout: one native-endian `u32` per
/// pixel with premultiplied alpha in the top byte. Rows may be padded, so
/// always index through [`PixelBuffer::pixel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A buffer with no pixels, returned before any surface exists.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            stride: 0,
            data: Vec::new(),
        }
    }

    /// Copies the contents of a Cairo image surface.
    pub fn from_surface(surface: &cairo::ImageSurface) -> Result<Self, RenderError> {
        let width = surface.width().max(0) as u32;
        let height = surface.height().max(0) as u32;
        if width == 0 || height == 0 {
            return Ok(Self {
                width,
                height,
                stride: 0,
                data: Vec::new(),
            });
        }

        let stride = surface.stride().max(0) as usize;
        let mut data = Vec::new();
        surface.with_data(|bytes| data.extend_from_slice(bytes))?;
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied ARGB value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.stride + x as usize * 4;
        let bytes = self.data.get(offset..offset + 4)?;
        Some(u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Alpha channel at `(x, y)`; out-of-bounds reads as transparent.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.pixel(x, y).map_or(0, |argb| (argb >> 24) as u8)
    }

    /// True when every pixel has zero alpha (vacuously true for empty buffers).
    pub fn is_fully_transparent(&self) -> bool {
        (0..self.height).all(|y| (0..self.width).all(|x| self.alpha(x, y) == 0))
    }

    /// Number of pixels with non-zero alpha.
    pub fn painted_pixel_count(&self) -> usize {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.alpha(x, y) != 0)
            .count()
    }

    /// Wraps a copy of the pixels in a new Cairo image surface.
    pub fn to_surface(&self) -> Result<cairo::ImageSurface, RenderError> {
        let (width, height) = checked_dimensions(self.width, self.height)?;
        if self.data.is_empty() {
            return Ok(cairo::ImageSurface::create(
                cairo::Format::ARgb32,
                width,
                height,
            )?);
        }
        Ok(cairo::ImageSurface::create_for_data(
            self.data.clone(),
            cairo::Format::ARgb32,
            width,
            height,
            self.stride as i32,
        )?)
    }

    /// Encodes the buffer as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), RenderError> {
        let surface = self.to_surface()?;
        surface.write_to_png(writer)?;
        Ok(())
    }
}

/// Converts pixel dimensions to Cairo's signed sizes.
pub(crate) fn checked_dimensions(width: u32, height: u32) -> Result<(i32, i32), RenderError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(RenderError::InvalidSize { width, height }),
    }
}
