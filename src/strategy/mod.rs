//! The shared player interface and the baselines learners are compared against.

mod counter;
mod frequency;
mod kind;
mod phased;
mod random;

pub use counter::*;
pub use frequency::*;
pub use kind::*;
pub use phased::*;
pub use random::*;

use crate::*;

/// A Rock-Paper-Scissors player that adapts (or not) to one opponent.
///
/// One round is `next_move` followed by exactly one `record_opponent_move`.
/// Implementations never fail to produce a move.
pub trait Strategy {
    /// Short display name.
    fn name(&self) -> &'static str;
    /// Decides this round's move. Call before the opponent's move is known.
    fn next_move(&mut self) -> Move;
    /// Reveals the opponent's move for the round just decided.
    fn record_opponent_move(&mut self, m: Move);
    /// Human-readable rationale for the most recent decision.
    fn explain(&self) -> String;
    /// Read-only snapshot of the session so far.
    fn stats(&self) -> Stats;
    /// Clears history, learned state, and stats for a new session.
    fn reset(&mut self);
}
