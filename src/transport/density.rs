use super::support::Support;
use crate::Entropy;
use crate::Probability;

/// A discrete probability distribution over a support set.
///
/// # Required Methods
///
/// - [`density`](Density::density): Query probability at a point
/// - [`support`](Density::support): Iterate over points with positive mass
///
/// # Provided Methods
///
/// - [`entropy`](Density::entropy): Shannon entropy in bits
/// - [`mass`](Density::mass): Total probability over the support
pub trait Density {
    /// The type of elements in the distribution's support.
    type Support: Support;
    /// Returns the probability mass at point `x`, or 0 if not in support.
    fn density(&self, x: &Self::Support) -> Probability;
    /// Iterates over all points with positive probability mass.
    fn support(&self) -> impl Iterator<Item = Self::Support>;
    /// H = -Σ p·log2(p). Points with zero mass contribute nothing,
    /// so an empty distribution has zero entropy rather than NaN.
    fn entropy(&self) -> Entropy {
        self.support()
            .map(|x| self.density(&x))
            .filter(|p| *p > 0.)
            .map(|p| -p * p.log2())
            .sum::<Entropy>()
            .max(0.)
    }
    fn mass(&self) -> Probability {
        self.support().map(|x| self.density(&x)).sum()
    }
}

/// Association list, used for soft-max policies over a handful of candidates.
impl<T> Density for Vec<(T, Probability)>
where
    T: Eq + Support,
{
    type Support = T;
    fn density(&self, x: &Self::Support) -> Probability {
        self.iter()
            .find(|(a, _)| a == x)
            .map(|(_, p)| p)
            .copied()
            .unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.iter().map(|(a, _)| a).cloned()
    }
}
