//! Contexts, outcome counts, and entropy-based hypothesis selection.

mod context;
mod filter;
mod hypothesis;
mod softmax;
mod store;
mod tally;

pub use context::*;
pub use filter::*;
pub use hypothesis::*;
pub use softmax::*;
pub use store::*;
pub use tally::*;
