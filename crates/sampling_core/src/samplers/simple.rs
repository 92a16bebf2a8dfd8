//! Simple random sampling with replacement.

use crate::error::{Result, SamplingError};
use crate::rng::IndexSource;

/// Draws `till` elements independently and uniformly, with replacement.
///
/// Every element has the same chance on every draw, so an element may appear
/// more than once in the sample.
///
/// # Errors
///
/// Returns [`SamplingError::InvalidArgument`] if `population` is empty and
/// `till > 0`. A `till` of zero returns an empty sample without drawing.
///
/// # Examples
///
/// ```rust
/// use sampling_core::prelude::*;
///
/// let mut rng = RandomSource::with_mode(RandomMode::Standard);
/// let sample = simple_random_sample(&mut rng, &['x', 'y'], 5).unwrap();
///
/// assert_eq!(sample.len(), 5);
/// assert!(sample.iter().all(|c| *c == 'x' || *c == 'y'));
/// ```
pub fn simple_random_sample<T, R>(rng: &mut R, population: &[T], till: usize) -> Result<Vec<T>>
where
    T: Clone,
    R: IndexSource + ?Sized,
{
    if till == 0 {
        return Ok(Vec::new());
    }
    if population.is_empty() {
        return Err(SamplingError::invalid_argument(
            "population",
            format!("cannot draw {} elements from an empty population", till),
        ));
    }

    let mut sample = Vec::with_capacity(till);
    for _ in 0..till {
        let index = rng.next_index(population.len())?;
        sample.push(population[index].clone());
    }

    debug_assert_eq!(sample.len(), till);
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::testing::{ScriptedSource, SeededSource};

    #[test]
    fn test_draws_scripted_indices() {
        let mut rng = ScriptedSource::new([2, 0, 2, 1]);
        let sample = simple_random_sample(&mut rng, &["a", "b", "c"], 4).unwrap();

        assert_eq!(sample, vec!["c", "a", "c", "b"]);
        assert_eq!(rng.bounds, vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_zero_till() {
        let mut rng = ScriptedSource::new([]);
        let empty: [u8; 0] = [];
        assert!(simple_random_sample(&mut rng, &empty, 0).unwrap().is_empty());
        assert!(simple_random_sample(&mut rng, &[1], 0).unwrap().is_empty());
    }

    #[test]
    fn test_empty_population_rejected() {
        let mut rng = ScriptedSource::new([]);
        let empty: [u8; 0] = [];
        let err = simple_random_sample(&mut rng, &empty, 3).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidArgument {
                name: "population",
                ..
            }
        ));
    }

    #[test]
    fn test_seeded_reproducibility() {
        let population: Vec<u32> = (0..1_000).collect();

        let a = simple_random_sample(&mut SeededSource::new(12345), &population, 50).unwrap();
        let b = simple_random_sample(&mut SeededSource::new(12345), &population, 50).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_till_beyond_population_repeats() {
        let mut rng = SeededSource::new(7);
        let sample = simple_random_sample(&mut rng, &[42], 10).unwrap();
        assert_eq!(sample, vec![42; 10]);
    }
}
