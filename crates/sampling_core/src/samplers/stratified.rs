//! Stratified sampling over two or many groups.
//!
//! Each group is sampled independently with [`simple_random_sample`] and
//! receives a share of `till` proportional to its size. Shares are rounded
//! half to even, computed exactly on integers.

use tracing::debug;

use super::simple::simple_random_sample;
use crate::error::{Result, SamplingError};
use crate::rng::IndexSource;

/// Computes per-group sample sizes proportional to group sizes.
///
/// Group `i` receives `round(till * group_sizes[i] / total)` where `total` is
/// the sum of `group_sizes`. Ties round to the nearest even integer. The
/// result is kept only if the shares add up to `till` exactly; no remainder
/// is redistributed.
///
/// # Errors
///
/// - [`SamplingError::InvalidArgument`] if `group_sizes` is empty or sums to zero
/// - [`SamplingError::SizeMismatch`] if the rounded shares do not sum to `till`
///
/// # Examples
///
/// ```rust
/// use sampling_core::samplers::proportional_allocation;
/// use sampling_core::SamplingError;
///
/// assert_eq!(proportional_allocation(&[100, 3, 2], 5).unwrap(), vec![5, 0, 0]);
///
/// // 3 * 1/3 rounds to 1 for each of three groups: fine.
/// assert_eq!(proportional_allocation(&[1, 1, 1], 3).unwrap(), vec![1, 1, 1]);
///
/// // 2 * 1/3 rounds to 1 for each of three groups: 3 != 2.
/// assert_eq!(
///     proportional_allocation(&[1, 1, 1], 2),
///     Err(SamplingError::SizeMismatch { expected: 2, allocated: 3 })
/// );
/// ```
pub fn proportional_allocation(group_sizes: &[usize], till: usize) -> Result<Vec<usize>> {
    if group_sizes.is_empty() {
        return Err(SamplingError::invalid_argument(
            "groups",
            "at least one group is required",
        ));
    }

    let total: u128 = group_sizes.iter().map(|&n| n as u128).sum();
    if total == 0 {
        return Err(SamplingError::invalid_argument(
            "groups",
            "total population size must be positive",
        ));
    }

    let shares: Vec<u128> = group_sizes
        .iter()
        .map(|&n| round_half_even(till as u128 * n as u128, total))
        .collect();

    let allocated: u128 = shares.iter().sum();
    if allocated != till as u128 {
        return Err(SamplingError::SizeMismatch {
            expected: till,
            allocated: usize::try_from(allocated).unwrap_or(usize::MAX),
        });
    }

    // Every share is at most `till`, so it fits in usize.
    Ok(shares.into_iter().map(|s| s as usize).collect())
}

/// Rounds `numerator / denominator` to the nearest integer, ties to even.
fn round_half_even(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);
    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Samples two groups in proportion to their sizes, `group1` first.
///
/// Equivalent to [`stratified_sample_many`] with `[group1, group2]`.
///
/// # Errors
///
/// - [`SamplingError::InvalidArgument`] if both groups are empty
/// - [`SamplingError::SizeMismatch`] if the rounded shares do not sum to `till`
///
/// # Examples
///
/// ```rust
/// use sampling_core::prelude::*;
///
/// let group1: Vec<u32> = (0..8).collect();
/// let group2 = [100, 200];
/// let mut rng = RandomSource::with_mode(RandomMode::Standard);
///
/// // 8 of 10 elements in group1: 4 draws from it, 1 from group2.
/// let sample = stratified_sample(&mut rng, &group1, &group2, 5).unwrap();
/// assert!(sample[..4].iter().all(|v| *v < 8));
/// assert!(sample[4] >= 100);
/// ```
pub fn stratified_sample<T, R>(
    rng: &mut R,
    group1: &[T],
    group2: &[T],
    till: usize,
) -> Result<Vec<T>>
where
    T: Clone,
    R: IndexSource + ?Sized,
{
    stratified_sample_many(rng, &[group1, group2], till)
}

/// Samples any number of groups in proportion to their sizes.
///
/// Shares come from [`proportional_allocation`]; each group's share is drawn
/// with [`simple_random_sample`] and the sub-samples are concatenated in group
/// order. A group whose share rounds to zero contributes nothing.
///
/// # Errors
///
/// - [`SamplingError::InvalidArgument`] if `groups` is empty or all groups are empty
/// - [`SamplingError::SizeMismatch`] if the rounded shares do not sum to `till`
///
/// # Examples
///
/// ```rust
/// use sampling_core::prelude::*;
///
/// let numbers: Vec<String> = (0..100).map(|n| n.to_string()).collect();
/// let letters: Vec<String> = ["a", "b", "c"].map(String::from).to_vec();
/// let tail: Vec<String> = ["x", "y"].map(String::from).to_vec();
/// let mut rng = RandomSource::with_mode(RandomMode::Cryptographic);
///
/// let sample = stratified_sample_many(&mut rng, &[&numbers, &letters, &tail], 5).unwrap();
/// assert_eq!(sample.len(), 5);
/// assert!(sample.iter().all(|s| numbers.contains(s)));
/// ```
pub fn stratified_sample_many<T, R, G>(rng: &mut R, groups: &[G], till: usize) -> Result<Vec<T>>
where
    T: Clone,
    R: IndexSource + ?Sized,
    G: AsRef<[T]>,
{
    let sizes: Vec<usize> = groups.iter().map(|g| g.as_ref().len()).collect();
    let shares = proportional_allocation(&sizes, till)?;
    debug!(?sizes, ?shares, till, "stratified allocation");

    let mut sample = Vec::with_capacity(till);
    for (group, &share) in groups.iter().zip(&shares) {
        sample.extend(simple_random_sample(rng, group.as_ref(), share)?);
    }

    debug_assert_eq!(sample.len(), till);
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::testing::{ScriptedSource, SeededSource};

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(5, 2), 2); // 2.5
        assert_eq!(round_half_even(7, 2), 4); // 3.5
        assert_eq!(round_half_even(1, 2), 0); // 0.5
        assert_eq!(round_half_even(2, 3), 1); // 0.67
        assert_eq!(round_half_even(1, 3), 0); // 0.33
        assert_eq!(round_half_even(12, 4), 3);
    }

    #[test]
    fn test_allocation_exact_split() {
        assert_eq!(proportional_allocation(&[50, 50], 10).unwrap(), vec![5, 5]);
        assert_eq!(proportional_allocation(&[3, 1], 4).unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_allocation_ties_to_even() {
        // 5 * 1/2 = 2.5 twice: both round to 2, sum 4 != 5.
        assert_eq!(
            proportional_allocation(&[1, 1], 5),
            Err(SamplingError::SizeMismatch {
                expected: 5,
                allocated: 4
            })
        );
        // 3 * 1/2 = 1.5 twice: both round to 2, sum 4 != 3.
        assert_eq!(
            proportional_allocation(&[1, 1], 3),
            Err(SamplingError::SizeMismatch {
                expected: 3,
                allocated: 4
            })
        );
    }

    #[test]
    fn test_allocation_documented_example() {
        // 100 + 3 + 2 = 105 elements; 476/105, 15/105, 10/105 of 5.
        assert_eq!(
            proportional_allocation(&[100, 3, 2], 5).unwrap(),
            vec![5, 0, 0]
        );
        // 100 + 3 = 103; 5 * 100 / 103 = 4.85 -> 5, 5 * 3 / 103 = 0.15 -> 0.
        assert_eq!(proportional_allocation(&[100, 3], 5).unwrap(), vec![5, 0]);
    }

    #[test]
    fn test_allocation_zero_till() {
        assert_eq!(proportional_allocation(&[4, 0, 9], 0).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_allocation_invalid() {
        assert!(matches!(
            proportional_allocation(&[], 3),
            Err(SamplingError::InvalidArgument { name: "groups", .. })
        ));
        assert!(matches!(
            proportional_allocation(&[0, 0], 3),
            Err(SamplingError::InvalidArgument { name: "groups", .. })
        ));
    }

    #[test]
    fn test_allocation_large_values_do_not_overflow() {
        let big = usize::MAX / 2;
        assert_eq!(
            proportional_allocation(&[big, big], usize::MAX - 1).unwrap(),
            vec![big, big]
        );
    }

    #[test]
    fn test_two_group_order_and_counts() {
        let group1 = [1, 2, 3, 4, 5, 6];
        let group2 = [10, 20];
        // 4 * 6/8 = 3, 4 * 2/8 = 1.
        let mut rng = ScriptedSource::new([0, 1, 2, 1]);

        let sample = stratified_sample(&mut rng, &group1, &group2, 4).unwrap();

        assert_eq!(sample, vec![1, 2, 3, 20]);
        assert_eq!(rng.bounds, vec![6, 6, 6, 2]);
    }

    #[test]
    fn test_two_group_mismatch() {
        let mut rng = ScriptedSource::new([]);
        let err = stratified_sample(&mut rng, &['a'], &['b'], 1).unwrap_err();
        assert_eq!(
            err,
            SamplingError::SizeMismatch {
                expected: 1,
                allocated: 0
            }
        );
        assert!(rng.bounds.is_empty());
    }

    #[test]
    fn test_two_empty_groups_rejected() {
        let mut rng = ScriptedSource::new([]);
        let empty: [u8; 0] = [];
        assert!(matches!(
            stratified_sample(&mut rng, &empty, &empty, 2),
            Err(SamplingError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_many_skips_empty_group() {
        let empty: Vec<char> = Vec::new();
        let groups = [vec!['a', 'b'], empty, vec!['c', 'd']];
        let mut rng = ScriptedSource::new([1, 0]);

        let sample = stratified_sample_many(&mut rng, &groups, 2).unwrap();

        assert_eq!(sample, vec!['b', 'c']);
        assert_eq!(rng.bounds, vec![2, 2]);
    }

    #[test]
    fn test_many_without_groups_rejected() {
        let mut rng = ScriptedSource::new([]);
        let groups: [&[u8]; 0] = [];
        assert!(matches!(
            stratified_sample_many(&mut rng, &groups, 1),
            Err(SamplingError::InvalidArgument { name: "groups", .. })
        ));
    }

    #[test]
    fn test_single_group_matches_simple_sample() {
        let population: Vec<u32> = (0..37).collect();

        let simple = simple_random_sample(&mut SeededSource::new(99), &population, 20).unwrap();
        let many =
            stratified_sample_many(&mut SeededSource::new(99), &[&population[..]], 20).unwrap();

        assert_eq!(simple, many);
    }
}
