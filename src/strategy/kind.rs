use super::*;
use rand::rngs::SmallRng;

/// Every player the crate can field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Elph,
    Relph,
    Random,
    Counter,
    Frequency,
    Phased,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Elph,
        Kind::Relph,
        Kind::Random,
        Kind::Counter,
        Kind::Frequency,
        Kind::Phased,
    ];

    /// The preset a fresh player of this kind starts from.
    pub fn config(self) -> Config {
        match self {
            Self::Relph => Config::relph(),
            _ => Config::elph(),
        }
    }

    pub fn build(self, config: Config, rng: SmallRng) -> anyhow::Result<Box<dyn Strategy>> {
        let player: Box<dyn Strategy> = match self {
            Self::Elph => Box::new(Elph::new(config, rng)?),
            Self::Relph => Box::new(Relph::new(config, rng)?),
            Self::Random => Box::new(Random::new(rng)),
            Self::Counter => Box::new(CounterLast::new(rng)),
            Self::Frequency => Box::new(FrequencyCounter::new(rng)),
            Self::Phased => Box::new(PhasedBias::new(config.phases, rng)?),
        };
        Ok(player)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Elph => write!(f, "elph"),
            Self::Relph => write!(f, "relph"),
            Self::Random => write!(f, "random"),
            Self::Counter => write!(f, "counter"),
            Self::Frequency => write!(f, "frequency"),
            Self::Phased => write!(f, "phased"),
        }
    }
}
