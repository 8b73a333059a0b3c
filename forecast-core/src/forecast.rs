use crate::{
    format::{format_forecast, format_parse_error},
    generator::{GeneratorError, TemperatureGenerator},
    parser::parse_request,
};

/// Answer a free-text request with a printable line.
///
/// Requests that do not parse are answered with their fixed message; only a
/// generator rejecting a parsed request is reported as an error.
pub fn process_request(
    generator: &dyn TemperatureGenerator,
    input: &str,
) -> Result<String, GeneratorError> {
    let request = match parse_request(input) {
        Ok(request) => request,
        Err(err) => return Ok(format_parse_error(err).to_string()),
    };

    let result = generator.forecast(&request)?;
    Ok(format_forecast(&result))
}
