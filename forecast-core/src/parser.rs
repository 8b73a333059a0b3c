//! Extraction of a location and a horizon from a free-text request.
//!
//! Only one sentence shape is understood:
//! `Determine the temperature in <location> in <number> <unit>`.

use log::debug;
use thiserror::Error;

use crate::model::{ForecastRequest, TimeUnit};

const TEMPLATE_PREFIX: &str = "determine the temperature in ";
const MARKER: &str = " in ";
const MIN_WORDS: usize = 5;

/// Longest horizon accepted, in hours.
pub const MAX_HORIZON_HOURS: f64 = i32::MAX as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("request is empty")]
    Empty,
    #[error("request does not match the supported sentence template")]
    Format,
    #[error("request has no time clause")]
    MissingTime,
    #[error("time clause is not of the form 'in <number> <unit>'")]
    InvalidTime,
}

/// Parse a full request sentence.
pub fn parse_request(input: &str) -> Result<ForecastRequest, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    // ASCII lowercasing keeps byte offsets aligned with `input`.
    let lower = input.to_ascii_lowercase();
    if input.split_whitespace().count() < MIN_WORDS || !lower.starts_with(TEMPLATE_PREFIX) {
        return Err(ParseError::Format);
    }

    let location_start = TEMPLATE_PREFIX.len();
    let second_marker = lower[location_start..]
        .find(MARKER)
        .map(|offset| offset + location_start)
        .ok_or(ParseError::MissingTime)?;

    let location = input[location_start..second_marker].trim();
    if location.is_empty() {
        return Err(ParseError::Format);
    }

    let (amount, unit) = parse_time_phrase(&input[second_marker..])?;
    let duration_hours = unit.to_hours(amount);
    if duration_hours > MAX_HORIZON_HOURS {
        return Err(ParseError::InvalidTime);
    }

    debug!("parsed request: location={location:?} amount={amount} unit={unit:?} hours={duration_hours}");

    Ok(ForecastRequest {
        location: location.to_string(),
        duration_hours,
    })
}

/// Parse a time phrase such as `in 2 hours` into its amount and unit.
pub fn parse_time_phrase(phrase: &str) -> Result<(f64, TimeUnit), ParseError> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let [keyword, amount, unit] = words.as_slice() else {
        return Err(ParseError::InvalidTime);
    };

    if !keyword.eq_ignore_ascii_case("in") {
        return Err(ParseError::InvalidTime);
    }

    let amount = parse_amount(amount).ok_or(ParseError::InvalidTime)?;
    let unit = TimeUnit::from_word(unit).ok_or(ParseError::InvalidTime)?;

    Ok((amount, unit))
}

/// Accepts `\d+(\.\d+)?` only, so signs and exponents are rejected.
fn parse_amount(text: &str) -> Option<f64> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !fraction.is_none_or(all_digits) {
        return None;
    }

    text.parse().ok()
}
