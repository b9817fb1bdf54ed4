use crate::*;

/// Two strategies facing each other, each seeing only the other's moves.
pub struct Arena {
    first: Box<dyn Strategy>,
    second: Box<dyn Strategy>,
    played: usize,
}

impl Arena {
    pub fn new(first: Box<dyn Strategy>, second: Box<dyn Strategy>) -> Self {
        Self {
            first,
            second,
            played: 0,
        }
    }
    pub fn first(&self) -> &dyn Strategy {
        self.first.as_ref()
    }
    pub fn second(&self) -> &dyn Strategy {
        self.second.as_ref()
    }
    /// Plays `rounds` more rounds. Both moves are fixed before either side
    /// learns the other's.
    pub fn play(&mut self, rounds: usize) -> Vec<Round> {
        log::debug!(
            "{} vs {} for {} rounds",
            self.first.name(),
            self.second.name(),
            rounds
        );
        (0..rounds).map(|_| self.round()).collect()
    }
    pub fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.played = 0;
    }
    fn round(&mut self) -> Round {
        let mine = self.first.next_move();
        let theirs = self.second.next_move();
        self.first.record_opponent_move(theirs);
        self.second.record_opponent_move(mine);
        self.played += 1;
        let round = Round {
            round: self.played,
            mine,
            theirs,
            outcome: resolve(mine, theirs),
            patterns: self.first.stats().patterns,
        };
        log::trace!("{}", round);
        round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const ROUNDS: usize = 150;

    fn arena(a: Kind, b: Kind, seed: u64) -> Arena {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let first = a.build(a.config(), SmallRng::from_rng(rng)).unwrap();
        let second = b.build(b.config(), SmallRng::from_rng(rng)).unwrap();
        Arena::new(first, second)
    }

    fn duel(a: Kind, b: Kind) {
        let mut arena = arena(a, b, 17);
        let rounds = arena.play(ROUNDS);
        let first = arena.first().stats();
        let second = arena.second().stats();
        assert_eq!(rounds.len(), ROUNDS);
        assert_eq!(first.rounds, ROUNDS);
        assert_eq!(second.rounds, ROUNDS);
        assert_eq!(first.wins, second.losses);
        assert_eq!(first.losses, second.wins);
        assert_eq!(first.ties, second.ties);
        let summary = Summary::from(rounds.as_slice());
        assert_eq!(summary.wins, first.wins);
        assert!((summary.win_rate + summary.loss_rate + summary.tie_rate - 1.).abs() < 1e-4);
        assert!((0. ..=1.).contains(&summary.exploration));
        assert!(!arena.first().explain().is_empty());
    }

    macro_rules! duel {
        ($A:ident, $B:ident) => {
            paste::paste! {
                #[test]
                fn [<$A:lower _vs_ $B:lower>]() {
                    duel(Kind::$A, Kind::$B);
                }
            }
        };
    }

    #[rustfmt::skip] duel!(Elph,      Random);
    #[rustfmt::skip] duel!(Elph,      Counter);
    #[rustfmt::skip] duel!(Elph,      Frequency);
    #[rustfmt::skip] duel!(Elph,      Phased);
    #[rustfmt::skip] duel!(Elph,      Relph);
    #[rustfmt::skip] duel!(Relph,     Random);
    #[rustfmt::skip] duel!(Relph,     Counter);
    #[rustfmt::skip] duel!(Relph,     Frequency);
    #[rustfmt::skip] duel!(Relph,     Phased);
    #[rustfmt::skip] duel!(Counter,   Frequency);
    #[rustfmt::skip] duel!(Frequency, Phased);
    #[rustfmt::skip] duel!(Random,    Random);

    #[test]
    fn elph_exploits_phased_bias() {
        let mut arena = arena(Kind::Elph, Kind::Phased, 23);
        let summary = Summary::from(arena.play(PHASE_2_END + 200).as_slice());
        assert!(
            summary.thirds[2] > summary.thirds[0],
            "third-phase win rate {:.3} vs first {:.3}",
            summary.thirds[2],
            summary.thirds[0]
        );
    }

    #[test]
    fn reset_restarts_numbering() {
        let mut arena = arena(Kind::Frequency, Kind::Counter, 1);
        arena.play(10);
        arena.reset();
        let rounds = arena.play(3);
        assert_eq!(rounds[0].round, 1);
        assert_eq!(arena.first().stats().rounds, 3);
    }
}
