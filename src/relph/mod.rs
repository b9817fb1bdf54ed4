//! Reinforcement-learned ELPH.
//!
//! Hypotheses are every ordered subset of the short-term memory. Each one
//! learns a scalar value by the delta rule from the rewards earned while it
//! matched the live window, and hypotheses whose action counts grow too
//! uncertain are deleted.

mod choice;
mod engine;
mod record;
mod trial;

pub use choice::*;
pub use engine::*;
pub use record::*;
pub use trial::*;
