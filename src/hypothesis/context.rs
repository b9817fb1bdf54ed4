use crate::*;

/// An ordered run of moves used as a lookup key.
///
/// Equality and hashing are structural over the move sequence, so a context
/// is its own canonical key. Displays as `Rock-Paper-Scissors`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct Context(Vec<Move>);

impl Context {
    pub fn moves(&self) -> &[Move] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Whether this context is exactly the tail of `window`.
    pub fn is_suffix_of(&self, window: &[Move]) -> bool {
        !self.0.is_empty() && window.ends_with(&self.0)
    }
    /// Every contiguous non-empty run of `window`, shortest first.
    /// A window of length L yields L·(L+1)/2 runs, repeats included.
    pub fn windows(window: &[Move]) -> Vec<Self> {
        (1..=window.len())
            .flat_map(|n| window.windows(n))
            .map(Self::from)
            .collect()
    }
    /// Every non-empty subset of `window` with its order preserved,
    /// enumerated by bitmask. A window of length L yields 2^L - 1 subsets,
    /// repeats included.
    pub fn subsets(window: &[Move]) -> Vec<Self> {
        (1u32..1 << window.len())
            .map(|mask| {
                window
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, m)| *m)
                    .collect::<Vec<_>>()
            })
            .map(Self)
            .collect()
    }
}

impl From<&[Move]> for Context {
    fn from(moves: &[Move]) -> Self {
        Self(moves.to_vec())
    }
}

impl From<Vec<Move>> for Context {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl TryFrom<&str> for Context {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let moves = s
            .split('-')
            .map(Move::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        anyhow::ensure!(!moves.is_empty(), "empty context");
        Ok(Self(moves))
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(n: usize) -> Vec<Move> {
        (0..n).map(Move::from).collect()
    }

    #[test]
    fn contiguous_counts() {
        for (n, expected) in [(1, 1), (3, 6), (4, 10), (8, 36)] {
            assert_eq!(Context::windows(&window(n)).len(), expected, "L = {}", n);
            assert_eq!(Context::windows(&window(n)).len(), n * (n + 1) / 2);
        }
        assert!(Context::windows(&[]).is_empty());
    }

    #[test]
    fn subset_counts() {
        for n in 1..=8 {
            assert_eq!(Context::subsets(&window(n)).len(), (1 << n) - 1, "L = {}", n);
        }
        assert!(Context::subsets(&[]).is_empty());
    }

    #[test]
    fn subsets_include_gapped_runs() {
        let subsets = Context::subsets(&[Move::Rock, Move::Paper, Move::Scissors]);
        let gapped = Context::from(vec![Move::Rock, Move::Scissors]);
        assert!(subsets.contains(&gapped));
        assert!(!Context::windows(&[Move::Rock, Move::Paper, Move::Scissors]).contains(&gapped));
    }

    #[test]
    fn display_round_trips_key() {
        let context = Context::from(vec![Move::Rock, Move::Paper]);
        assert_eq!(context.to_string(), "Rock-Paper");
        assert_eq!(Context::try_from("Rock-Paper").unwrap(), context);
        assert!(Context::try_from("").is_err());
    }

    #[test]
    fn suffix_matching() {
        let context = Context::from(vec![Move::Paper, Move::Scissors]);
        assert!(context.is_suffix_of(&[Move::Rock, Move::Paper, Move::Scissors]));
        assert!(!context.is_suffix_of(&[Move::Paper, Move::Scissors, Move::Rock]));
        assert!(!context.is_suffix_of(&[Move::Scissors]));
    }
}
