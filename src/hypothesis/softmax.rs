use crate::*;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// A discrete strategy over some support, as (point, probability) pairs.
pub type Policy<T> = Vec<(T, Probability)>;

/// Soft-max selection over candidate scores.
///
/// P(i) = exp(s_i / T) / Σ_j exp(s_j / T), computed after shifting scores by
/// their maximum so the largest term is exactly 1. If the weights still
/// degenerate (non-finite scores, or a sum that is zero or infinite), all
/// mass goes to the first candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Softmax(Policy<usize>);

impl Softmax {
    pub fn new(scores: &[Utility], temperature: Entropy) -> Self {
        let peak = scores.iter().copied().fold(Utility::NEG_INFINITY, Utility::max);
        let weights = scores
            .iter()
            .map(|s| ((s - peak) / temperature).exp())
            .collect::<Vec<_>>();
        let total = weights.iter().sum::<Probability>();
        if total.is_finite() && total > 0. {
            Self(weights.into_iter().map(|w| w / total).enumerate().collect())
        } else {
            log::debug!("degenerate soft-max over {} candidates", scores.len());
            Self((0..scores.len()).map(|i| (i, if i == 0 { 1. } else { 0. })).collect())
        }
    }
    /// Lower entropy ⇒ higher weight: P(h) ∝ exp(-H_h).
    pub fn entropies(entropies: &[Entropy]) -> Self {
        Self::new(&entropies.iter().map(|h| -h).collect::<Vec<_>>(), 1.)
    }
    pub fn probabilities(&self) -> Vec<Probability> {
        self.0.iter().map(|(_, p)| *p).collect()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Draws a candidate index.
    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> anyhow::Result<usize> {
        anyhow::ensure!(!self.0.is_empty(), "soft-max over no candidates");
        let weights = self.probabilities();
        let index = WeightedIndex::new(&weights)?;
        Ok(self.0[index.sample(rng)].0)
    }
}

impl Density for Softmax {
    type Support = usize;
    fn density(&self, x: &Self::Support) -> Probability {
        self.0.density(x)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.0.support()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn normalized() {
        for entropies in [vec![0.], vec![0., 0.5, 1.2], vec![1.585; 7], vec![0.1, 0.2]] {
            let softmax = Softmax::entropies(&entropies);
            let total = softmax.probabilities().iter().sum::<Probability>();
            assert!((total - 1.).abs() < 0.001, "{:?} sums to {}", entropies, total);
        }
    }

    #[test]
    fn lower_entropy_preferred() {
        let p = Softmax::entropies(&[0.2, 0.9, 1.4]).probabilities();
        assert!(p[0] > p[1]);
        assert!(p[1] > p[2]);
    }

    #[test]
    fn equal_entropy_equal_weight() {
        let p = Softmax::entropies(&[0.7, 0.7, 0.7, 0.7]).probabilities();
        for w in &p {
            assert!((w - 0.25).abs() < 0.01);
        }
    }

    #[test]
    fn matches_closed_form() {
        let p = Softmax::entropies(&[0., 1.]).probabilities();
        let e = (-1f32).exp();
        assert!((p[0] - 1. / (1. + e)).abs() < 1e-5);
        assert!((p[1] - e / (1. + e)).abs() < 1e-5);
    }

    #[test]
    fn extreme_scores_do_not_underflow() {
        let p = Softmax::new(&[-1e6, -1e6 - 1., -1e6], 1.).probabilities();
        assert!(p.iter().all(|w| w.is_finite()));
        assert!((p.iter().sum::<Probability>() - 1.).abs() < 0.001);
        assert!((p[0] - p[2]).abs() < 1e-6);
    }

    #[test]
    fn degenerate_falls_back_to_first() {
        let softmax = Softmax::new(&[Utility::NAN, 0.5], 1.);
        assert_eq!(softmax.probabilities(), vec![1., 0.]);
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(softmax.sample(rng).unwrap(), 0);
    }

    #[test]
    fn empty_cannot_be_sampled() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert!(Softmax::new(&[], 1.).sample(rng).is_err());
    }

    #[test]
    fn sampling_tracks_weights() {
        let softmax = Softmax::new(&[3., 0.], 1.);
        let ref mut rng = SmallRng::seed_from_u64(11);
        let hits = (0..1000)
            .filter(|_| softmax.sample(rng).unwrap() == 0)
            .count();
        // P(0) = e^3 / (e^3 + 1) ≈ 0.953
        assert!(hits > 900, "{}", hits);
    }
}
