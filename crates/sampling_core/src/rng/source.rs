//! Index sources and the switchable random source provider.
//!
//! This module provides [`IndexSource`], the only randomness interface the
//! samplers depend on, and [`RandomSource`], its production implementation.

use std::fmt;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::mode::RandomMode;
use crate::error::{Result, SamplingError};

/// A source of uniformly distributed indices.
///
/// Implementations must return a value in `[0, bound)` and must reject
/// `bound == 0` with [`SamplingError::InvalidArgument`].
///
/// # Examples
///
/// A deterministic source for tests:
///
/// ```rust
/// use sampling_core::rng::IndexSource;
/// use sampling_core::{Result, SamplingError};
///
/// struct AlwaysFirst;
///
/// impl IndexSource for AlwaysFirst {
///     fn next_index(&mut self, bound: usize) -> Result<usize> {
///         if bound == 0 {
///             return Err(SamplingError::invalid_argument("bound", "must be positive"));
///         }
///         Ok(0)
///     }
/// }
///
/// assert_eq!(AlwaysFirst.next_index(7).unwrap(), 0);
/// ```
pub trait IndexSource {
    /// Returns a uniformly distributed integer strictly less than `bound`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidArgument`] if `bound` is zero.
    fn next_index(&mut self, bound: usize) -> Result<usize>;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    #[inline]
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        (**self).next_index(bound)
    }
}

/// Random source provider switchable between a standard and a cryptographic
/// generator.
///
/// The mode is instance state; toggling it never affects other providers.
/// Draws use `Rng::gen_range`, which is unbiased for every bound.
///
/// # Examples
///
/// ```rust
/// use sampling_core::rng::{IndexSource, RandomMode, RandomSource};
///
/// let mut rng = RandomSource::with_mode(RandomMode::Cryptographic);
/// assert!(rng.next_index(3).unwrap() < 3);
///
/// rng.disable_strong_randomness();
/// assert_eq!(rng.mode(), RandomMode::Standard);
/// ```
pub struct RandomSource {
    /// Active generator selection.
    mode: RandomMode,
    /// Generator used in standard mode.
    standard: StdRng,
}

impl RandomSource {
    /// Creates a provider in the current process-wide default mode.
    ///
    /// The default is standard unless
    /// [`enable_strong_randomness`](super::enable_strong_randomness) was called.
    pub fn new() -> Self {
        Self::with_mode(RandomMode::process_default())
    }

    /// Creates a provider in the given mode.
    pub fn with_mode(mode: RandomMode) -> Self {
        Self {
            mode,
            standard: StdRng::from_entropy(),
        }
    }

    /// Returns the active mode.
    #[inline]
    pub fn mode(&self) -> RandomMode {
        self.mode
    }

    /// Switches this provider to the given mode.
    pub fn set_mode(&mut self, mode: RandomMode) {
        self.mode = mode;
    }

    /// Switches this provider to the cryptographic generator. Idempotent.
    pub fn enable_strong_randomness(&mut self) {
        self.mode = RandomMode::Cryptographic;
        debug!("Enabled the use of OsRng");
    }

    /// Switches this provider back to the standard generator. Idempotent.
    pub fn disable_strong_randomness(&mut self) {
        self.mode = RandomMode::Standard;
        debug!("Disabled the use of OsRng");
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl IndexSource for RandomSource {
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(SamplingError::invalid_argument(
                "bound",
                "must be positive",
            ));
        }

        let index = match self.mode {
            RandomMode::Standard => self.standard.gen_range(0..bound),
            RandomMode::Cryptographic => {
                trace!(bound, "Using OsRng");
                OsRng.gen_range(0..bound)
            }
        };
        Ok(index)
    }
}
