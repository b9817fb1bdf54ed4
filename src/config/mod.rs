//! Per-session configuration.

mod config;
mod phases;

pub use config::*;
pub use phases::*;
