use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use forecast_core::{
    Config, RngBackend, SimulationResult, TemperatureGenerator,
    format::{format_forecast, format_parse_error},
    generator::{generator_for_backend, generator_from_config},
    parse_request,
    parser::MAX_HORIZON_HOURS,
};
use serde::Serialize;

use crate::repl;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Simulated temperature forecasts")]
pub struct Cli {
    /// RNG backend to use instead of the configured one ("java" or "std").
    #[arg(long, global = true)]
    pub rng: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer requests typed at a prompt (the default).
    Interactive,

    /// Answer a single request, e.g. `forecast ask Determine the temperature in Oslo in 3 hours`.
    Ask {
        /// Request words; joined with single spaces.
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        request: Vec<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run the simulator directly for a location and a horizon in hours.
    Simulate {
        location: String,

        #[arg(allow_negative_numbers = true)]
        hours: f64,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Choose the RNG backend stored in the config file.
    Configure {
        /// Backend name; prompts when omitted.
        backend: Option<String>,
    },
}

/// JSON shape printed by `--json`.
#[derive(Debug, Serialize)]
struct ForecastReport<'a> {
    #[serde(flatten)]
    result: &'a SimulationResult,
    valid_at: Option<DateTime<Utc>>,
    rng_backend: &'static str,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let command = self.command.unwrap_or(Command::Interactive);
        let config = match command {
            Command::Configure { .. } => config_for_configure(Config::load()),
            _ => Config::load()?,
        };

        match command {
            Command::Interactive => {
                let (generator, _) = resolve_generator(self.rng.as_deref(), &config)?;
                let stdin = std::io::stdin();
                repl::run(generator.as_ref(), stdin.lock(), std::io::stdout())?;
            }
            Command::Ask { request, json } => {
                let (generator, backend) = resolve_generator(self.rng.as_deref(), &config)?;
                let request = request.join(" ");
                match parse_request(&request) {
                    Ok(parsed) => {
                        let result = generator.forecast(&parsed)?;
                        print_result(&result, backend, json)?;
                    }
                    Err(err) => println!("{}", format_parse_error(err)),
                }
            }
            Command::Simulate {
                location,
                hours,
                json,
            } => {
                let (generator, backend) = resolve_generator(self.rng.as_deref(), &config)?;
                let result = simulate(generator.as_ref(), location, hours)?;
                print_result(&result, backend, json)?;
            }
            Command::Configure { backend } => configure(config, backend)?,
        }

        Ok(())
    }
}

/// An unreadable config file is replaced rather than blocking `configure`.
fn config_for_configure(loaded: Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        log::warn!("ignoring unreadable configuration: {err:#}");
        Config::default()
    })
}

fn configure(mut config: Config, backend: Option<String>) -> Result<()> {
    let chosen = match backend {
        Some(name) => RngBackend::try_from(name.as_str())?,
        None => prompt_backend(config.rng_backend().unwrap_or_default())?,
    };

    config.set_rng_backend(chosen);
    config.save()?;
    println!(
        "RNG backend set to '{chosen}' in {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

/// The `--rng` override wins over the configured backend.
fn resolve_generator(
    override_name: Option<&str>,
    config: &Config,
) -> Result<(Box<dyn TemperatureGenerator>, RngBackend)> {
    let (generator, backend) = match override_name {
        Some(name) => {
            let backend = RngBackend::try_from(name)?;
            (generator_for_backend(backend), backend)
        }
        None => (generator_from_config(config)?, config.rng_backend()?),
    };
    log::debug!("using RNG backend {backend}");

    Ok((generator, backend))
}

fn simulate(
    generator: &dyn TemperatureGenerator,
    location: String,
    hours: f64,
) -> Result<SimulationResult> {
    if hours > MAX_HORIZON_HOURS {
        anyhow::bail!("hours must not exceed {MAX_HORIZON_HOURS}, got {hours}");
    }

    let temperature_celsius = generator.generate_temperature(&location, hours)?;

    Ok(SimulationResult {
        temperature_celsius,
        location: location.trim().to_string(),
        duration_hours: hours,
    })
}

fn print_result(result: &SimulationResult, backend: RngBackend, json: bool) -> Result<()> {
    if json {
        let report = ForecastReport {
            result,
            valid_at: result.valid_at(Utc::now()),
            rng_backend: backend.as_str(),
        };
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize forecast")?;
        println!("{text}");
    } else {
        println!("{}", format_forecast(result));
    }

    Ok(())
}

fn prompt_backend(current: RngBackend) -> Result<RngBackend> {
    let options = RngBackend::all().to_vec();
    let start = options.iter().position(|b| *b == current).unwrap_or(0);

    inquire::Select::new("Which RNG backend should forecasts use?", options)
        .with_starting_cursor(start)
        .with_help_message("java matches temperatures produced by the JVM version")
        .prompt()
        .context("Backend selection was cancelled")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["forecast"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.rng.is_none());
    }

    #[test]
    fn ask_collects_request_words() {
        let cli = Cli::try_parse_from([
            "forecast", "ask", "Determine", "the", "temperature", "in", "Oslo", "in", "3", "hours",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Ask { request, json }) => {
                assert_eq!(request.join(" "), "Determine the temperature in Oslo in 3 hours");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rng_flag_is_global() {
        let cli = Cli::try_parse_from(["forecast", "simulate", "Oslo", "2.5", "--rng", "std", "--json"])
            .unwrap();

        assert_eq!(cli.rng.as_deref(), Some("std"));
        match cli.command {
            Some(Command::Simulate {
                location,
                hours,
                json,
            }) => {
                assert_eq!(location, "Oslo");
                assert_eq!(hours, 2.5);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rng_override_beats_config() {
        let mut config = Config::default();
        config.set_rng_backend(RngBackend::Java);

        let (_, backend) = resolve_generator(Some("std"), &config).unwrap();
        assert_eq!(backend, RngBackend::Std);

        let (_, backend) = resolve_generator(None, &config).unwrap();
        assert_eq!(backend, RngBackend::Java);

        assert!(resolve_generator(Some("nope"), &config).is_err());
    }

    #[test]
    fn simulate_rejects_negative_hours() {
        let generator = generator_for_backend(RngBackend::Java);
        let err = simulate(generator.as_ref(), "London".into(), -2.0).unwrap_err();
        assert!(err.to_string().contains("invalid argument"));
    }

    #[test]
    fn simulate_rejects_horizons_beyond_limit() {
        let generator = generator_for_backend(RngBackend::Java);
        let err = simulate(generator.as_ref(), "London".into(), 1e15).unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn configure_starts_over_from_unreadable_config() {
        let broken = Config::from_toml("rng_backend = [");
        assert!(broken.is_err());
        assert_eq!(config_for_configure(broken), Config::default());

        let mut stored = Config::default();
        stored.set_rng_backend(RngBackend::Std);
        assert_eq!(config_for_configure(Ok(stored.clone())), stored);
    }

    #[test]
    fn simulate_matches_request_pipeline() {
        let generator = generator_for_backend(RngBackend::Java);
        let result = simulate(generator.as_ref(), "London".into(), 2.0).unwrap();
        assert_eq!(format_forecast(&result), "It will be 25°C in London in 2.0 hours.");
    }

    #[test]
    fn report_flattens_result() {
        let result = SimulationResult {
            temperature_celsius: 12,
            location: "Oslo".into(),
            duration_hours: 2.0,
        };
        let report = ForecastReport {
            result: &result,
            valid_at: None,
            rng_backend: "java",
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["temperature_celsius"], 12);
        assert_eq!(json["location"], "Oslo");
        assert_eq!(json["rng_backend"], "java");
        assert!(json["valid_at"].is_null());
    }
}
