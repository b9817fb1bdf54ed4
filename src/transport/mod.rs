//! Discrete distributions over small supports.

mod density;
mod support;

pub use density::*;
pub use support::*;
