//! skirmish-run: play headless matches between the agent and scripted bots.
//!
//! Usage:
//!   skirmish-run match --seed 7 --opponent circler:4 --opponent gunner:20:1.5
//!   skirmish-run match --config brain.json --ticks 5000 --output summary.json
//!   skirmish-run default-config

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use skirmish_core::config::BrainConfig;
use skirmish_sim::engine::{ArenaConfig, ArenaEngine};
use skirmish_sim::scripts::OpponentScript;

#[derive(Parser, Debug)]
#[command(name = "skirmish-run")]
#[command(about = "Headless arena matches for the skirmish agent")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one match and print its summary as JSON
    Match {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        #[arg(long, default_value_t = 10_000)]
        ticks: u64,
        /// Agent tuning as JSON; missing fields take defaults
        #[arg(long)]
        config: Option<PathBuf>,
        /// sitter | circler:TURN | shuttle:SPAN | gunner:PERIOD:POWER (repeatable)
        #[arg(long = "opponent", value_parser = parse_opponent)]
        opponents: Vec<OpponentScript>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the default agent tuning as JSON
    DefaultConfig,
}

fn parse_opponent(arg: &str) -> Result<OpponentScript> {
    let mut parts = arg.split(':');
    let kind = parts.next().unwrap_or_default();
    let args: Vec<f64> = parts
        .map(|p| p.parse::<f64>().with_context(|| format!("bad number '{p}'")))
        .collect::<Result<_>>()?;

    let script = match (kind, args.as_slice()) {
        ("sitter", []) => OpponentScript::Sitter,
        ("circler", []) => OpponentScript::Circler { turn: 5.0 },
        ("circler", [turn]) => OpponentScript::Circler { turn: *turn },
        ("shuttle", []) => OpponentScript::Shuttle {
            span: 200.0,
            reversing: false,
        },
        ("shuttle", [span]) => OpponentScript::Shuttle {
            span: *span,
            reversing: false,
        },
        ("gunner", []) => OpponentScript::Gunner {
            period: 20,
            power: 1.0,
        },
        ("gunner", [period, power]) if *period >= 1.0 => OpponentScript::Gunner {
            period: *period as u64,
            power: *power,
        },
        _ => bail!("unknown opponent '{arg}'"),
    };
    Ok(script)
}

fn main() -> Result<()> {
    env_logger::init();
    let Cli { command } = Cli::parse();

    match command {
        Commands::Match {
            seed,
            width,
            height,
            ticks,
            config,
            opponents,
            output,
        } => {
            let brain = match &config {
                Some(path) => BrainConfig::load(path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => BrainConfig::default(),
            };
            let opponents = if opponents.is_empty() {
                vec![OpponentScript::Circler { turn: 5.0 }]
            } else {
                opponents
            };

            let mut engine = ArenaEngine::new(ArenaConfig {
                seed,
                width,
                height,
            })?;
            let agent = engine.spawn_agent(brain)?;
            for script in opponents {
                engine.spawn_opponent(script);
            }
            log::info!("agent is bot {agent}, {} bots in play", engine.bots_alive());

            let summary = engine.run(ticks);
            let encoded = serde_json::to_string_pretty(&summary)?;
            match output {
                Some(path) => {
                    fs::write(&path, &encoded)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("wrote={}", path.display());
                    match summary.winner {
                        Some(id) => println!("winner={id}"),
                        None => println!("winner=none"),
                    }
                    println!("ticks={}", summary.ticks);
                }
                None => println!("{encoded}"),
            }
        }
        Commands::DefaultConfig => {
            println!("{}", serde_json::to_string_pretty(&BrainConfig::default())?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_opponent_specs() {
        assert_eq!(parse_opponent("sitter").unwrap(), OpponentScript::Sitter);
        assert_eq!(
            parse_opponent("circler:3.5").unwrap(),
            OpponentScript::Circler { turn: 3.5 }
        );
        assert_eq!(
            parse_opponent("gunner:15:2").unwrap(),
            OpponentScript::Gunner {
                period: 15,
                power: 2.0
            }
        );
        assert!(parse_opponent("gunner:0:2").is_err());
        assert!(parse_opponent("sitter:1").is_err());
        assert!(parse_opponent("tank").is_err());
        assert!(parse_opponent("circler:fast").is_err());
    }
}
