//! Recorded touch sessions that can be replayed against a [`DoodleState`].
//!
//! A script is a JSON array of steps:
//!
//! ```json
//! [
//!   { "action": "resize", "width": 320, "height": 240 },
//!   { "action": "down", "id": 0, "x": 10, "y": 10 },
//!   { "action": "move", "pointers": [{ "id": 0, "x": 25, "y": 10 }] },
//!   { "action": "up", "id": 0 },
//!   { "action": "color", "value": "blue" },
//!   { "action": "width", "value": 12 },
//!   { "action": "export" }
//! ]
//! ```

use super::events::{PointerId, TouchEvent, TouchPoint};
use super::state::DoodleState;
use crate::config::ColorSpec;
use crate::draw::RenderError;
use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One step of a recorded session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ScriptStep {
    /// Surface size change
    Resize { width: u32, height: u32 },
    /// Pointer down
    Down { id: PointerId, x: f64, y: f64 },
    /// Batched pointer movement
    Move { pointers: Vec<TouchPoint> },
    /// Pointer up
    Up { id: PointerId },
    /// Stroke color change
    Color { value: ColorSpec },
    /// Stroke width change
    Width { value: f64 },
    /// Erase everything
    Clear,
    /// Request an export once the script has finished
    Export,
}

/// Result of replaying a script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Number of touch events delivered
    pub touch_events: usize,
    /// Whether the script asked for an export
    pub export_requested: bool,
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read touch script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("Failed to parse touch script {}", path.display()))
}

/// Parses a script from JSON text.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    Ok(serde_json::from_str(text)?)
}

/// Applies every step to `state` in order.
pub fn replay(state: &mut DoodleState, steps: &[ScriptStep]) -> Result<ReplaySummary, RenderError> {
    let mut summary = ReplaySummary::default();
    for step in steps {
        match step {
            ScriptStep::Resize { width, height } => state.resize(*width, *height)?,
            ScriptStep::Down { id, x, y } => {
                state.handle_touch(&TouchEvent::Down {
                    id: *id,
                    x: *x,
                    y: *y,
                });
                summary.touch_events += 1;
            }
            ScriptStep::Move { pointers } => {
                state.handle_touch(&TouchEvent::Move {
                    pointers: pointers.clone(),
                });
                summary.touch_events += 1;
            }
            ScriptStep::Up { id } => {
                state.handle_touch(&TouchEvent::Up { id: *id });
                summary.touch_events += 1;
            }
            ScriptStep::Color { value } => state.set_drawing_color(value.to_color()),
            ScriptStep::Width { value } => state.set_line_width(*value),
            ScriptStep::Clear => state.clear(),
            ScriptStep::Export => summary.export_requested = true,
        }
    }
    info!(
        "Replayed {} steps ({} touch events)",
        steps.len(),
        summary.touch_events
    );
    Ok(summary)
}
