//! Systematic sampling.

use tracing::trace;

use crate::error::{Result, SamplingError};
use crate::rng::IndexSource;

/// Takes every `step`-th element from a random starting offset.
///
/// A starting offset `x` is drawn uniformly from `[0, population.len())`.
/// Each pass visits offsets `0, step, 2 * step, ...` below the population
/// length, shifted by `x` and wrapped back to the start once they run past
/// the last element. Passes repeat until `till` elements have been taken, so
/// a large `till` (or a `step` larger than the population) revisits elements.
///
/// # Errors
///
/// - [`SamplingError::InvalidArgument`] if `step` is zero
/// - [`SamplingError::InvalidArgument`] if `population` is empty and `till > 0`
///
/// A `till` of zero returns an empty sample without drawing.
///
/// # Examples
///
/// ```rust
/// use sampling_core::prelude::*;
///
/// let population: Vec<u32> = (0..100).collect();
/// let mut rng = RandomSource::with_mode(RandomMode::Standard);
/// let sample = systematic_sample(&mut rng, &population, 10, 5).unwrap();
///
/// assert_eq!(sample.len(), 5);
/// for pair in sample.windows(2) {
///     assert_eq!((pair[1] + 100 - pair[0]) % 100, 10);
/// }
/// ```
pub fn systematic_sample<T, R>(
    rng: &mut R,
    population: &[T],
    step: usize,
    till: usize,
) -> Result<Vec<T>>
where
    T: Clone,
    R: IndexSource + ?Sized,
{
    if step == 0 {
        return Err(SamplingError::invalid_argument("step", "must be positive"));
    }
    if till == 0 {
        return Ok(Vec::new());
    }
    if population.is_empty() {
        return Err(SamplingError::invalid_argument(
            "population",
            "cannot sample from an empty population",
        ));
    }

    let len = population.len();
    let start = rng.next_index(len)?;
    trace!(start, step, till, "systematic walk");

    let mut sample = Vec::with_capacity(till);
    'walk: loop {
        for offset in (0..len).step_by(step) {
            let mut i = offset + start;
            if i >= len {
                i -= len;
            }
            debug_assert!(i < len, "wrapped index {} out of bounds {}", i, len);

            sample.push(population[i].clone());
            if sample.len() == till {
                break 'walk;
            }
        }
    }

    debug_assert_eq!(sample.len(), till);
    Ok(sample)
}
