//! Gridiron Coach CLI
//!
//! Front end for the decision engine and play simulator. Game states are
//! read from a JSON file (or stdin with `-`); models are the built-in
//! baselines unless a calibration artifact plus exported models are wired
//! in by the embedding host.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use gc_core::{
    decide_json, scenario_json, scenarios_json, simulate_play_json, DecisionSynthesizer,
    GameState, ModelKind, PlayCall, PlaySimulator,
};

#[derive(Parser)]
#[command(name = "gc")]
#[command(about = "Score a game situation and simulate plays", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the decision engine over a game state
    Decide {
        /// Game state JSON file ("-" for stdin)
        #[arg(long)]
        state: PathBuf,

        /// Decision kinds to run (default: all loaded)
        #[arg(long, value_delimiter = ',')]
        kinds: Vec<String>,
    },

    /// Simulate a drive from a game state
    Simulate {
        /// Game state JSON file ("-" for stdin)
        #[arg(long)]
        state: PathBuf,

        /// Play action: pass | run | punt
        #[arg(long)]
        action: String,

        /// RNG seed (same seed = same drive)
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Number of consecutive plays of the same action
        #[arg(long, default_value = "1")]
        plays: u32,
    },

    /// List or show the curated demo scenarios
    Scenarios {
        /// Scenario id (e.g. "scen_1"); omit to list all
        #[arg(long)]
        id: Option<String>,
    },
}

fn read_state(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading state from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading state from {}", path.display()))
    }
}

fn parse_kinds(raw: &[String]) -> Result<Option<Vec<ModelKind>>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let mut kinds = Vec::with_capacity(raw.len());
    for name in raw {
        let quoted = format!("\"{}\"", name);
        let kind: ModelKind = serde_json::from_str(&quoted)
            .with_context(|| format!("unknown decision kind: {name}"))?;
        kinds.push(kind);
    }
    Ok(Some(kinds))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decide { state, kinds } => {
            let state_json = read_state(&state)?;
            // Re-encode through the typed request so bad input fails with a
            // proper message instead of a half-applied decision.
            let state: GameState =
                serde_json::from_str(&state_json).context("parsing game state")?;
            let request = serde_json::json!({
                "schema_version": gc_core::SCHEMA_VERSION,
                "state": state,
                "kinds": parse_kinds(&kinds)?,
            })
            .to_string();

            let synth = DecisionSynthesizer::baseline();
            let response = decide_json(&synth, &request)?;
            println!("{}", pretty(&response)?);
        }

        Commands::Simulate {
            state,
            action,
            seed,
            plays,
        } => {
            if plays == 0 {
                bail!("--plays must be at least 1");
            }
            let state_json = read_state(&state)?;
            if plays == 1 {
                let request = serde_json::json!({
                    "schema_version": gc_core::SCHEMA_VERSION,
                    "seed": seed,
                    "action": action,
                    "state": serde_json::from_str::<GameState>(&state_json)
                        .context("parsing game state")?,
                })
                .to_string();
                let response = simulate_play_json(&request)?;
                println!("{}", pretty(&response)?);
            } else {
                // Drive mode: one simulator, one RNG stream.
                let call: PlayCall = action.parse()?;
                let mut state: GameState =
                    serde_json::from_str(&state_json).context("parsing game state")?;
                let mut sim = PlaySimulator::new(seed);
                for play in 1..=plays {
                    let (next, outcome) = sim.step(&state, call)?;
                    println!(
                        "[{play:>2}] {} & {} at the {}: {}",
                        next.down, next.distance, next.yard_line_100, outcome.description
                    );
                    state = next;
                }
                println!("{}", pretty(&serde_json::to_string(&state)?)?);
            }
        }

        Commands::Scenarios { id } => match id {
            Some(id) => match scenario_json(&id)? {
                Some(json) => println!("{}", pretty(&json)?),
                None => bail!("no scenario with id {id}"),
            },
            None => println!("{}", pretty(&scenarios_json()?)?),
        },
    }

    Ok(())
}

fn pretty(json: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
