use crate::{
    Config, ForecastRequest, SimulationResult, generator::hash_based::HashBasedGenerator,
};
use std::fmt::Debug;
use thiserror::Error;

pub mod hash_based;

/// Pseudo-random algorithm driving the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RngBackend {
    /// Bit-compatible with `java.util.Random`.
    #[default]
    Java,
    /// `rand`'s `StdRng`.
    Std,
}

impl RngBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            RngBackend::Java => "java",
            RngBackend::Std => "std",
        }
    }

    pub const fn all() -> &'static [RngBackend] {
        &[RngBackend::Java, RngBackend::Std]
    }
}

impl std::fmt::Display for RngBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RngBackend {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "java" => Ok(RngBackend::Java),
            "std" => Ok(RngBackend::Std),
            _ => Err(anyhow::anyhow!(
                "Unknown RNG backend '{value}'. Supported backends: java, std."
            )),
        }
    }
}

/// Misuse of the generator contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Produces a forecast temperature for a location and horizon.
pub trait TemperatureGenerator: Send + Sync + Debug {
    /// Temperature in °C expected at `location` in `hours` hours.
    fn generate_temperature(&self, location: &str, hours: f64) -> Result<i32, GeneratorError>;

    fn forecast(&self, request: &ForecastRequest) -> Result<SimulationResult, GeneratorError> {
        let temperature_celsius =
            self.generate_temperature(&request.location, request.duration_hours)?;

        Ok(SimulationResult {
            temperature_celsius,
            location: request.location.clone(),
            duration_hours: request.duration_hours,
        })
    }
}

/// Construct a generator for an explicit backend.
pub fn generator_for_backend(backend: RngBackend) -> Box<dyn TemperatureGenerator> {
    Box::new(HashBasedGenerator::new(backend))
}

/// Construct the generator selected in config, falling back to the default backend.
pub fn generator_from_config(config: &Config) -> anyhow::Result<Box<dyn TemperatureGenerator>> {
    let backend = config.rng_backend()?;
    Ok(generator_for_backend(backend))
}
