//! Library exports for the finger-painting surface.
//!
//! Exposes the stroke tracker, compositor, export pipeline and configuration so
//! that hosts (a mobile shell, a desktop window, or the bundled replay binary)
//! can drive the same drawing logic.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::DoodleState;
