use clap::Parser;
use factory_siege::{init_logging, AutoCommander, NullUi, Outcome, Round};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play automatic rounds and print their statistics as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed; the same seed always yields the same rounds.
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of rounds to play.
    #[arg(long, default_value_t = 1)]
    rounds: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut summaries = Vec::with_capacity(args.rounds);
    for _ in 0..args.rounds {
        let mut round = Round::new(&mut rng)?;
        let summary = AutoCommander::new().play_round(&mut round, &mut rng, &mut NullUi)?;
        summaries.push(summary);
    }

    let victories = summaries
        .iter()
        .filter(|s| s.outcome == Some(Outcome::Victory))
        .count();
    let result = json!({
        "seed": args.seed,
        "rounds": summaries,
        "victories": victories,
        "losses": summaries.len() - victories,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
