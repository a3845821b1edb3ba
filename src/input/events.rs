//! Generic touch event types delivered by the host platform.

use serde::{Deserialize, Serialize};

/// Platform-assigned identifier for one active touch contact.
///
/// Unique while the contact is down; the platform may hand the same id to a
/// later contact after release.
pub type PointerId = i32;

/// Position of one pointer inside a movement batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: PointerId,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(id: PointerId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// A discrete touch event in surface-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum TouchEvent {
    /// A pointer touched down (first finger or an additional one)
    Down { id: PointerId, x: f64, y: f64 },
    /// Current positions of every active pointer, delivered as one batch
    Move { pointers: Vec<TouchPoint> },
    /// A pointer lifted
    Up { id: PointerId },
}
