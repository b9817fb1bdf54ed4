//! Entropy Learned Pruned Hypothesis space.
//!
//! Tracks which opponent move followed every contiguous context of recent
//! history, trusts only low-entropy contexts, and counters the move the
//! chosen context predicts.

mod decision;
mod engine;
mod pattern;

pub use decision::*;
pub use engine::*;
pub use pattern::*;
