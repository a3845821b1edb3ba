mod core;
mod touch;

pub use core::DoodleState;
