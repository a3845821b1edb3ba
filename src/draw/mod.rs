//! Rendering primitives for the finger-painting surface (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Path`]: move-to / quadratic-curve-to geometry for one stroke
//! - [`StrokeStyle`]: the color and width applied to every stroke
//! - [`SurfaceCompositor`]: the persistent buffer that strokes are baked into
//! - [`RasterSink`]: the raster capability the compositor draws through

pub mod buffer;
pub mod color;
pub mod compositor;
pub mod path;
pub mod raster;
pub mod style;

// Re-export commonly used types at module level
pub use buffer::PixelBuffer;
pub use color::Color;
pub use compositor::SurfaceCompositor;
pub use path::{Path, Point, Segment};
pub use raster::{CairoRaster, RasterSink, RenderError};
pub use style::{DEFAULT_STROKE_WIDTH, StrokeStyle};

pub use color::{BLACK, BLUE, GREEN, RED, TRANSPARENT, WHITE, YELLOW};
