//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Parsing of "Determine the temperature in <location> in <time>" requests
//! - A deterministic, location-seeded temperature simulator
//! - Rendering of forecasts and request errors
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod constants;
pub mod forecast;
pub mod format;
pub mod generator;
pub mod model;
pub mod parser;
pub mod random;

pub use config::Config;
pub use forecast::process_request;
pub use generator::{GeneratorError, RngBackend, TemperatureGenerator};
pub use model::{ForecastRequest, SimulationResult, TimeUnit};
pub use parser::{ParseError, parse_request};
