use crate::*;

/// Immutable per-session parameters.
///
/// Supplied at construction and never patched afterwards; reconfiguring
/// means building a fresh engine, which starts from an empty history and
/// an empty hypothesis store.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Short-term memory length: the window contexts are drawn from.
    pub stm_length: usize,
    /// Maximum tolerable entropy (bits) for a hypothesis to be trusted.
    /// RELPH deletes hypotheses whose smoothed entropy exceeds it.
    pub entropy_threshold: Entropy,
    /// Evidence floor: observations a context needs before it is scored.
    pub min_observations: u32,
    /// Keep only survivors within [`PRUNING_TOLERANCE`] of the best entropy.
    pub hypothesis_pruning: bool,
    /// RELPH delta-rule step size.
    pub alpha: Probability,
    /// Phase boundaries for the phased-bias baseline.
    pub phases: Phases,
    /// History length that triggers truncation.
    pub history_cap: usize,
    /// Moves kept when truncating.
    pub history_keep: usize,
}

impl Config {
    /// Study defaults for the statistical learner.
    pub fn elph() -> Self {
        Self {
            stm_length: 3,
            entropy_threshold: 1.5,
            min_observations: 3,
            hypothesis_pruning: true,
            alpha: 0.3,
            phases: Phases::default(),
            history_cap: HISTORY_CAP,
            history_keep: HISTORY_KEEP,
        }
    }
    /// Study defaults for the reinforcement learner.
    pub fn relph() -> Self {
        Self {
            stm_length: 2,
            entropy_threshold: 1.8,
            ..Self::elph()
        }
    }
    /// Rejects configurations an engine could not act on sensibly.
    pub fn validate(self) -> anyhow::Result<Self> {
        anyhow::ensure!(
            self.stm_length >= 1,
            "short-term memory length must be at least 1"
        );
        anyhow::ensure!(
            self.stm_length <= MAX_STM_LENGTH,
            "short-term memory length {} exceeds maximum {}",
            self.stm_length,
            MAX_STM_LENGTH
        );
        anyhow::ensure!(
            self.entropy_threshold.is_finite() && self.entropy_threshold > 0.,
            "entropy threshold must be a positive number of bits, got {}",
            self.entropy_threshold
        );
        anyhow::ensure!(
            (0. ..=1.).contains(&self.alpha),
            "learning rate must lie in [0, 1], got {}",
            self.alpha
        );
        anyhow::ensure!(
            self.history_keep > 0 && self.history_keep < self.history_cap,
            "history must keep between 1 and {} moves, got {}",
            self.history_cap.saturating_sub(1),
            self.history_keep
        );
        anyhow::ensure!(
            self.history_keep >= self.stm_length,
            "history keeps {} moves, fewer than the short-term memory {}",
            self.history_keep,
            self.stm_length
        );
        self.phases.validate()?;
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::elph()
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stm {} · Hthr {:.2} · min obs {} · pruning {} · α {:.2}",
            self.stm_length,
            self.entropy_threshold,
            self.min_observations,
            if self.hypothesis_pruning { "on" } else { "off" },
            self.alpha,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert!(Config::elph().validate().is_ok());
        assert!(Config::relph().validate().is_ok());
        assert_eq!(Config::default(), Config::elph());
    }

    #[test]
    fn rejects_empty_memory() {
        let config = Config {
            stm_length: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_oversized_memory() {
        let config = Config {
            stm_length: MAX_STM_LENGTH + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_threshold() {
        for threshold in [0., -1., Entropy::NAN, Entropy::INFINITY] {
            let config = Config {
                entropy_threshold: threshold,
                ..Config::default()
            };
            assert!(config.validate().is_err(), "accepted {}", threshold);
        }
    }

    #[test]
    fn rejects_learning_rate_outside_unit_interval() {
        for alpha in [-0.1, 1.1, Probability::NAN] {
            let config = Config {
                alpha,
                ..Config::relph()
            };
            assert!(config.validate().is_err(), "accepted {}", alpha);
        }
        for alpha in [0., 1.] {
            let config = Config {
                alpha,
                ..Config::relph()
            };
            assert!(config.validate().is_ok(), "rejected {}", alpha);
        }
    }

    #[test]
    fn rejects_inconsistent_history_bounds() {
        let config = Config {
            history_cap: 100,
            history_keep: 100,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        let config = Config {
            history_keep: 2,
            stm_length: 3,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn error_names_the_field() {
        let config = Config {
            alpha: 2.,
            ..Config::default()
        };
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("learning rate"), "{}", message);
    }
}
