//! Parsing of population arguments.
//!
//! A population is either a half-open integer range (`0..100`) or a
//! comma-separated list of items (`a,b,c`). Items are kept as strings so
//! that groups of numbers and letters can be sampled together.

use crate::error::{CliError, Result};

/// Parses a population argument into its items.
pub fn parse_population(arg: &str) -> Result<Vec<String>> {
    let arg = arg.trim();

    if let Some((start, end)) = arg.split_once("..") {
        let start: i64 = start
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidPopulation(arg.to_string()))?;
        let end: i64 = end
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidPopulation(arg.to_string()))?;
        return Ok((start..end).map(|n| n.to_string()).collect());
    }

    if arg.is_empty() {
        return Ok(Vec::new());
    }

    Ok(arg.split(',').map(|item| item.trim().to_string()).collect())
}

/// Formats a sample as a bracketed, comma-separated line.
pub fn format_sample(sample: &[String]) -> String {
    format!("[{}]", sample.join(", "))
}
