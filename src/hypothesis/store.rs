use crate::*;
use std::collections::HashMap;

/// Context → what the opponent played next.
///
/// Entries are created on first occurrence and never deleted; unreliable
/// contexts are filtered when queried, not pruned.
#[derive(Debug, Clone, Default)]
pub struct PatternStore(HashMap<Context, Tally>);

impl PatternStore {
    /// Records that `next` followed each suffix of `history` up to
    /// `stm_length` moves long. Call before `next` joins the history.
    pub fn observe(&mut self, history: &[Move], stm_length: usize, next: Move) {
        (1..=stm_length.min(history.len()))
            .map(|n| Context::from(&history[history.len() - n..]))
            .for_each(|context| self.0.entry(context).or_default().observe(next));
    }
    pub fn get(&self, context: &Context) -> Option<&Tally> {
        self.0.get(context)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Context, &Tally)> {
        self.0.iter()
    }
}
