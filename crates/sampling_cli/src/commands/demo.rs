//! Demo command reproducing the reference sampling script.
//!
//! Enables cryptographic randomness process-wide, then runs every sampler on
//! the population `0..100` and the groups `a,b,c` and `x,y`.
//!
//! # Expected Output
//!
//! ```text
//! systematic (step 10, till 5): [37, 47, 57, 67, 77]
//! simple (till 5):              [12, 85, 3, 85, 40]
//! stratified (till 5):          [64, 9, 21, 90, 33]
//! stratified many (till 5):     [18, 2, 77, 59, 60]
//! ```

use std::io::Write;

use sampling_core::prelude::*;
use sampling_core::rng::enable_strong_randomness;
use tracing::{info, warn};

use crate::population::format_sample;
use crate::Result;

/// Runs the demo against standard output.
pub fn run() -> Result<()> {
    enable_strong_randomness();
    let mut rng = RandomSource::new();
    info!(mode = %rng.mode(), "Running sampling demo");

    let stdout = std::io::stdout();
    write_demo(&mut stdout.lock(), &mut rng)
}

/// Writes the four demo samples to `out`.
///
/// A stratified call that fails with a size mismatch is reported on its own
/// line and the demo carries on.
pub fn write_demo<W, R>(out: &mut W, rng: &mut R) -> Result<()>
where
    W: Write,
    R: IndexSource + ?Sized,
{
    let arr: Vec<String> = (0..100).map(|n| n.to_string()).collect();
    let arr1: Vec<String> = ["a", "b", "c"].map(String::from).to_vec();
    let arr2: Vec<String> = ["x", "y"].map(String::from).to_vec();

    let sample = systematic_sample(rng, &arr, 10, 5)?;
    writeln!(out, "systematic (step 10, till 5): {}", format_sample(&sample))?;

    let sample = simple_random_sample(rng, &arr, 5)?;
    writeln!(out, "simple (till 5):              {}", format_sample(&sample))?;

    let line = match stratified_sample(rng, &arr, &arr1, 5) {
        Ok(sample) => format_sample(&sample),
        Err(err @ SamplingError::SizeMismatch { .. }) => {
            warn!(%err, "two-group stratified sample skipped");
            err.to_string()
        }
        Err(err) => return Err(err.into()),
    };
    writeln!(out, "stratified (till 5):          {}", line)?;

    let line = match stratified_sample_many(rng, &[&arr, &arr1, &arr2], 5) {
        Ok(sample) => format_sample(&sample),
        Err(err @ SamplingError::SizeMismatch { .. }) => {
            warn!(%err, "many-group stratified sample skipped");
            err.to_string()
        }
        Err(err) => return Err(err.into()),
    };
    writeln!(out, "stratified many (till 5):     {}", line)?;

    Ok(())
}
