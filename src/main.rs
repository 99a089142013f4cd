//! clickcraft - a deterministic auto-clicker machine simulation
//!
//! Headless driver that runs the machine against a small demo world and
//! prints a JSON summary of what happened.

mod config;
mod headless;

use anyhow::Result;
use config::MachineConfig;
use std::{env, path::Path, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting clickcraft v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let mut cfg = match cli.config.as_deref() {
        Some(path) => MachineConfig::load_from_path(Path::new(path)),
        None => MachineConfig::load(),
    };
    if let Some(seed) = cli.world_seed {
        cfg.world_seed = seed;
    }
    if let Some(ticks) = cli.ticks {
        cfg.ticks = ticks;
    }
    if let Some(speed) = cli.speed {
        cfg.speed_index = speed;
    }
    if let Some(direction) = cli.direction {
        cfg.direction = direction;
    }
    if let Some(held) = cli.held {
        cfg.held = held;
    }
    if let Some(mobs) = cli.mobs {
        cfg.mob_count = mobs;
    }
    if cli.left {
        cfg.right_clicking = false;
    }

    let summary = headless::run(&cfg, cli.events_out)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    info!("clickcraft shutting down");
    Ok(())
}

struct CliOptions {
    config: Option<String>,
    world_seed: Option<u64>,
    ticks: Option<u64>,
    speed: Option<usize>,
    direction: Option<String>,
    held: Option<String>,
    mobs: Option<u32>,
    left: bool,
    events_out: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            config: None,
            world_seed: None,
            ticks: None,
            speed: None,
            direction: None,
            held: None,
            mobs: None,
            left: false,
            events_out: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(path);
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--world-seed" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.world_seed = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--world-seed must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--world-seed requires an integer");
                    }
                }
                "--ticks" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.ticks = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--ticks must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--ticks requires an integer");
                    }
                }
                "--speed" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<usize>() {
                            Ok(value) => opts.speed = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--speed must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--speed requires an integer (0-8)");
                    }
                }
                "--direction" => {
                    if let Some(value) = args.next() {
                        opts.direction = Some(value);
                    } else {
                        tracing::error!("--direction requires a value like east or up");
                    }
                }
                "--held" => {
                    if let Some(value) = args.next() {
                        opts.held = Some(value);
                    } else {
                        tracing::error!("--held requires one of none/sword/planks/food");
                    }
                }
                "--mobs" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u32>() {
                            Ok(value) => opts.mobs = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--mobs must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--mobs requires an integer");
                    }
                }
                "--left" => opts.left = true,
                "--events-out" => {
                    if let Some(path) = args.next() {
                        opts.events_out = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--events-out requires a file path");
                    }
                }
                _ => {}
            }
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_parse() {
        let args = [
            "--ticks", "50", "--speed", "8", "--direction", "north", "--left",
        ];
        let opts = CliOptions::parse(args.iter().map(|s| s.to_string()));
        assert_eq!(opts.ticks, Some(50));
        assert_eq!(opts.speed, Some(8));
        assert_eq!(opts.direction.as_deref(), Some("north"));
        assert!(opts.left);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let opts = CliOptions::parse(["--frobnicate"].iter().map(|s| s.to_string()));
        assert!(opts.ticks.is_none());
        assert!(!opts.left);
    }
}
