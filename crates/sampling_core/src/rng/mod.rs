//! # Random Source Provider
//!
//! This module centralises randomness for every sampler. Samplers never touch
//! a generator directly; they ask an [`IndexSource`] for a uniform index in
//! `[0, bound)`.
//!
//! ## Modes
//!
//! - [`RandomMode::Standard`]: fast non-cryptographic generator (`StdRng`
//!   seeded from OS entropy)
//! - [`RandomMode::Cryptographic`]: operating system CSPRNG (`OsRng`)
//!
//! The mode is held by each [`RandomSource`] instance. A process-wide default
//! (see [`enable_strong_randomness`]) only decides the mode of providers built
//! with [`RandomSource::new`] afterwards; existing providers are unaffected.
//!
//! ## Module Structure
//!
//! - [`mode`]: `RandomMode` and the process-wide default toggle
//! - [`source`]: `IndexSource` trait and the `RandomSource` provider
//!
//! ## Usage Example
//!
//! ```rust
//! use sampling_core::rng::{IndexSource, RandomMode, RandomSource};
//!
//! let mut rng = RandomSource::with_mode(RandomMode::Standard);
//! rng.enable_strong_randomness();
//! assert_eq!(rng.mode(), RandomMode::Cryptographic);
//!
//! let index = rng.next_index(10).unwrap();
//! assert!(index < 10);
//! ```

pub mod mode;
pub mod source;

// Public re-exports
pub use mode::{
    disable_strong_randomness, enable_strong_randomness, strong_randomness_enabled, RandomMode,
};
pub use source::{IndexSource, RandomSource};
