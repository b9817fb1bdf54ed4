/// Marker trait for types that can index a discrete distribution.
///
/// Implemented by [`Move`](crate::Move) for outcome and choice distributions,
/// and by `usize` for soft-max policies over candidate lists.
pub trait Support: Clone {}

impl Support for usize {}
