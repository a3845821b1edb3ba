//! Touch input handling.
//!
//! This module translates host touch events into stroke geometry. The
//! [`StrokeTracker`] keeps one smoothed path per active pointer, and
//! [`DoodleState`] ties it to the compositor that commits finished strokes.

pub mod events;
pub mod script;
pub mod state;
pub mod tracker;

// Re-export commonly used types at module level
pub use events::{PointerId, TouchEvent, TouchPoint};
pub use state::DoodleState;
pub use tracker::{StrokeTracker, TOUCH_TOLERANCE};
