//! Head-to-head sessions between strategies and their analysis.

mod round;
mod session;
mod summary;

pub use round::*;
pub use session::*;
pub use summary::*;
