//! Moves, outcomes, and per-session bookkeeping.

mod history;
mod moves;
mod outcome;
mod record;
mod stats;

pub use history::*;
pub use moves::*;
pub use outcome::*;
pub use record::*;
pub use stats::*;
