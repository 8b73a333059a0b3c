//! User-facing rendering of forecasts and request errors.

use crate::{SimulationResult, parser::ParseError};

pub const FORMAT_ERROR_MESSAGE: &str = "Sorry, I can only handle requests like 'Determine the temperature in London in 2 hours', '1.5 days' or 'in 90 minutes'.";
pub const INVALID_TIME_MESSAGE: &str =
    "Invalid time format. Use something like 'in 2 hours', 'in 1.5 hours', or 'in 30 minutes'.";
pub const MISSING_TIME_MESSAGE: &str = "Please specify a time (e.g. 'in 2 hours').";
pub const EMPTY_REQUEST_MESSAGE: &str = "Please enter a request.";
pub const GOODBYE_MESSAGE: &str = "Goodbye!";
pub const WELCOME_MESSAGE: &str =
    "Welcome to the temperature forecast CLI. Enter your request (or 'exit' to quit):";

/// Horizons closer than this to one hour are reported in the singular.
const SINGULAR_TOLERANCE: f64 = 0.05;

pub fn hour_label(hours: f64) -> &'static str {
    if (hours - 1.0).abs() < SINGULAR_TOLERANCE {
        "hour"
    } else {
        "hours"
    }
}

/// One decimal, ties rounded away from zero (`{:.1}` alone rounds ties to even).
fn one_decimal(hours: f64) -> String {
    format!("{:.1}", (hours * 10.0).round() / 10.0)
}

pub fn format_forecast(result: &SimulationResult) -> String {
    format!(
        "It will be {}°C in {} in {} {}.",
        result.temperature_celsius,
        result.location,
        one_decimal(result.duration_hours),
        hour_label(result.duration_hours),
    )
}

pub fn format_parse_error(error: ParseError) -> &'static str {
    match error {
        ParseError::Empty => EMPTY_REQUEST_MESSAGE,
        ParseError::Format => FORMAT_ERROR_MESSAGE,
        ParseError::MissingTime => MISSING_TIME_MESSAGE,
        ParseError::InvalidTime => INVALID_TIME_MESSAGE,
    }
}
