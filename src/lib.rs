//! Adaptive opponent modeling for Rock-Paper-Scissors.
//!
//! Two sequential-decision learners and the baselines they are measured against:
//! an entropy-pruned statistical pattern learner (ELPH) and a reinforcement-learned
//! variant (RELPH) that keeps value estimates over behavioral hypotheses.
//!
//! # Module Structure
//!
//! - `gameplay`: Moves, outcomes, bounded histories, win/loss bookkeeping
//! - `transport`: Discrete distribution traits
//! - `config`: Per-session configuration and validation
//! - `hypothesis`: Contexts, outcome counts, entropy filtering, soft-max selection
//! - `strategy`: The shared `Strategy` interface and baseline players
//! - `elph`: Entropy Learned Pruned Hypothesis space engine
//! - `relph`: Reinforcement-learned ELPH engine
//! - `arena`: Head-to-head sessions and comparative summaries

pub mod arena;
pub mod config;
pub mod elph;
pub mod gameplay;
pub mod hypothesis;
pub mod relph;
pub mod strategy;
pub mod transport;

pub use arena::*;
pub use config::*;
pub use elph::*;
pub use gameplay::*;
pub use hypothesis::*;
pub use relph::*;
pub use strategy::*;
pub use transport::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Information-theoretic measures, in bits.
pub type Entropy = f32;
/// Selection weights, outcome shares, and learning rates.
pub type Probability = f32;
/// Rewards, hypothesis values, and action scores.
pub type Utility = f32;

// ============================================================================
// HYPOTHESIS FILTERING
// ============================================================================
/// Survivors of the entropy threshold are kept only within this many bits
/// of the best one when hypothesis pruning is enabled.
pub const PRUNING_TOLERANCE: Entropy = 0.5;
/// Longest short-term memory accepted at construction. RELPH enumerates
/// 2^L - 1 subsets of the window, so this bounds per-turn work.
pub const MAX_STM_LENGTH: usize = 12;

// ============================================================================
// RELPH VALUE LEARNING
// ============================================================================
/// Soft-max temperature over per-move Q-values.
pub const SOFTMAX_TEMPERATURE: Entropy = 1.0;
/// Fresh hypotheses start with a value drawn uniformly from [0, scale).
pub const INITIAL_VALUE_SCALE: Utility = 0.1;

// ============================================================================
// HISTORY BOUNDS
// ============================================================================
/// History length that triggers truncation.
pub const HISTORY_CAP: usize = 1000;
/// Number of most recent moves kept after truncation.
pub const HISTORY_KEEP: usize = 500;
/// Number of most recent opponent moves echoed in stats snapshots.
pub const RECENT_MOVES: usize = 5;

// ============================================================================
// PHASED BIAS SCHEDULE
// Move-counter driven, non-adaptive. Weights are over (Rock, Paper, Scissors).
// ============================================================================
/// Last move of the uniform phase.
pub const PHASE_1_END: usize = 200;
/// Last move of the light-bias phase.
pub const PHASE_2_END: usize = 400;
/// Phase 1 weights: uniform.
pub const PHASE_1_BIAS: [Probability; 3] = [1. / 3., 1. / 3., 1. / 3.];
/// Phase 2 weights: favor Rock.
pub const PHASE_2_BIAS: [Probability; 3] = [0.50, 0.25, 0.25];
/// Phase 3 weights: heavily favor Paper.
pub const PHASE_3_BIAS: [Probability; 3] = [0.10, 0.80, 0.10];

// ============================================================================
// SESSION ANALYSIS
// ============================================================================
/// Rounds per point on a block win-rate curve.
pub const CURVE_BLOCK: usize = 10;

// ============================================================================
// REAL-TIME CONSTRAINT
// ============================================================================
/// Upper bound on a single decision at the largest expected window length.
pub const DECISION_BUDGET: std::time::Duration = std::time::Duration::from_secs(2);
/// Largest window length the decision budget is measured at.
pub const BUDGET_STM_LENGTH: usize = 8;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG to file, `terminal` level to the console.
#[cfg(feature = "cli")]
pub fn log(terminal: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context as _;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let path = format!("logs/{}.log", time);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path).with_context(|| format!("create log file {}", path))?,
    );
    let term = simplelog::TermLogger::new(
        terminal,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
