use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use forecast_core::{
    TemperatureGenerator,
    format::{GOODBYE_MESSAGE, WELCOME_MESSAGE},
    process_request,
};

const PROMPT: &str = "> ";
const EXIT_COMMAND: &str = "exit";

/// Read requests line by line and answer each one until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    generator: &dyn TemperatureGenerator,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "{WELCOME_MESSAGE}")?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read request")? == 0 {
            log::debug!("end of input, leaving interactive mode");
            break;
        }

        let request = line.trim();
        if request.eq_ignore_ascii_case(EXIT_COMMAND) {
            writeln!(output, "{GOODBYE_MESSAGE}")?;
            break;
        }

        let response = process_request(generator, request)?;
        writeln!(output, "{response}")?;
    }

    Ok(())
}
