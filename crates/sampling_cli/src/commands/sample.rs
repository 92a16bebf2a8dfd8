//! Sampling commands operating on populations given on the command line.

use sampling_core::prelude::*;
use tracing::info;

use crate::population::{format_sample, parse_population};
use crate::Result;

/// Runs systematic sampling and prints the sample.
pub fn systematic(rng: &mut RandomSource, population: &str, step: usize, till: usize) -> Result<()> {
    let population = parse_population(population)?;
    info!(size = population.len(), step, till, "Systematic sample");

    let sample = systematic_sample(rng, &population, step, till)?;
    println!("{}", format_sample(&sample));
    Ok(())
}

/// Runs simple random sampling and prints the sample.
pub fn simple(rng: &mut RandomSource, population: &str, till: usize) -> Result<()> {
    let population = parse_population(population)?;
    info!(size = population.len(), till, "Simple random sample");

    let sample = simple_random_sample(rng, &population, till)?;
    println!("{}", format_sample(&sample));
    Ok(())
}

/// Runs stratified sampling over the given groups and prints the sample.
pub fn stratified(rng: &mut RandomSource, groups: &[String], till: usize) -> Result<()> {
    let sample = stratified_groups(rng, groups, till)?;
    println!("{}", format_sample(&sample));
    Ok(())
}

/// Parses `groups` and samples them; two groups use the two-group sampler.
pub fn stratified_groups<R>(rng: &mut R, groups: &[String], till: usize) -> Result<Vec<String>>
where
    R: IndexSource + ?Sized,
{
    let groups = groups
        .iter()
        .map(|g| parse_population(g))
        .collect::<Result<Vec<_>>>()?;
    info!(groups = groups.len(), till, "Stratified sample");

    let sample = match groups.as_slice() {
        [g1, g2] => stratified_sample(rng, g1, g2, till)?,
        _ => stratified_sample_many(rng, &groups, till)?,
    };
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_stratified_groups_two() {
        let mut rng = RandomSource::with_mode(RandomMode::Standard);
        let groups = vec!["0..8".to_string(), "x,y".to_string()];

        let sample = stratified_groups(&mut rng, &groups, 5).unwrap();

        assert_eq!(sample.len(), 5);
        assert!(sample[..4].iter().all(|s| s.parse::<u32>().is_ok()));
        assert!(sample[4] == "x" || sample[4] == "y");
    }

    #[test]
    fn test_stratified_groups_many() {
        let mut rng = RandomSource::with_mode(RandomMode::Standard);
        let groups = vec!["0..100".to_string(), "a,b,c".to_string(), "x,y".to_string()];

        let sample = stratified_groups(&mut rng, &groups, 5).unwrap();
        assert_eq!(sample.len(), 5);
    }

    #[test]
    fn test_stratified_groups_mismatch() {
        let mut rng = RandomSource::with_mode(RandomMode::Standard);
        let groups = vec!["a".to_string(), "b".to_string()];

        let err = stratified_groups(&mut rng, &groups, 1).unwrap_err();
        assert!(matches!(
            err,
            CliError::Sampling(SamplingError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_systematic_rejects_zero_step() {
        let mut rng = RandomSource::with_mode(RandomMode::Standard);
        assert!(matches!(
            systematic(&mut rng, "0..10", 0, 3),
            Err(CliError::Sampling(SamplingError::InvalidArgument { .. }))
        ));
    }
}
