//! Arena Binary
//!
//! Plays two strategies against each other over one or more seeded
//! sessions and prints a summary per session.
//!
//! Example: arena elph phased --rounds 600 --sessions 8 --stm 4

use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use roboshambo::*;

#[derive(Parser)]
#[command(author, version, about = "Rock-Paper-Scissors strategy arena", long_about = None)]
struct Args {
    /// Strategy under study
    #[arg(value_enum, default_value_t = Kind::Elph)]
    first: Kind,
    /// Opponent
    #[arg(value_enum, default_value_t = Kind::Phased)]
    second: Kind,
    #[arg(short, long, default_value_t = PHASE_2_END + 200)]
    rounds: usize,
    /// Seed of the first session; later sessions count up from it
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Independent sessions, played in parallel
    #[arg(long, default_value_t = 1)]
    sessions: usize,
    /// Short-term memory length override
    #[arg(long)]
    stm: Option<usize>,
    /// Entropy threshold override, in bits
    #[arg(long)]
    threshold: Option<Entropy>,
    /// Learning rate override
    #[arg(long)]
    alpha: Option<Probability>,
    #[arg(long)]
    no_pruning: bool,
    /// Print summaries as JSON instead of tables
    #[arg(long)]
    json: bool,
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self, kind: Kind) -> Config {
        let preset = kind.config();
        Config {
            stm_length: self.stm.unwrap_or(preset.stm_length),
            entropy_threshold: self.threshold.unwrap_or(preset.entropy_threshold),
            alpha: self.alpha.unwrap_or(preset.alpha),
            hypothesis_pruning: preset.hypothesis_pruning && !self.no_pruning,
            ..preset
        }
    }
    fn level(&self) -> log::LevelFilter {
        match (self.json, self.verbose) {
            (true, _) => log::LevelFilter::Off,
            (false, true) => log::LevelFilter::Debug,
            (false, false) => log::LevelFilter::Info,
        }
    }
}

#[derive(serde::Serialize)]
struct Report {
    seed: u64,
    first: Kind,
    second: Kind,
    summary: Summary,
    stats: Stats,
    explain: String,
}

impl Report {
    fn print(&self) {
        let verdict = if self.summary.win_rate > self.summary.loss_rate {
            format!("{:.1}%", self.summary.win_rate * 100.).green()
        } else {
            format!("{:.1}%", self.summary.win_rate * 100.).red()
        };
        println!(
            "{} vs {} (seed {}): {} wins",
            self.first.to_string().bold(),
            self.second.to_string().bold(),
            self.seed,
            verdict
        );
        print!("{}", self.summary);
        println!("{}", self.explain.dimmed());
    }
}

fn session(args: &Args, seed: u64) -> anyhow::Result<Report> {
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let first = args.first.build(args.config(args.first), SmallRng::from_rng(rng))?;
    let second = args.second.build(args.config(args.second), SmallRng::from_rng(rng))?;
    let mut arena = Arena::new(first, second);
    let rounds = arena.play(args.rounds);
    log::info!("session {} finished after {} rounds", seed, rounds.len());
    Ok(Report {
        seed,
        first: args.first,
        second: args.second,
        summary: Summary::from(rounds.as_slice()),
        stats: arena.first().stats(),
        explain: arena.first().explain(),
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roboshambo::log(args.level())?;
    log::info!("{} vs {}, {}", args.first, args.second, args.config(args.first));
    let reports = (0..args.sessions as u64)
        .into_par_iter()
        .map(|i| session(&args, args.seed + i))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        reports.iter().for_each(Report::print);
        let mean = reports.iter().map(|r| r.summary.thirds[2]).sum::<Probability>()
            / reports.len().max(1) as Probability;
        println!("mean final-third win rate {:.1}%", mean * 100.);
    }
    Ok(())
}
