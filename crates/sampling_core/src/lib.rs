//! # sampling_core: Statistical Sampling over In-Memory Sequences
//!
//! ## Role
//!
//! sampling_core provides four sampling algorithms over slices, each drawing
//! its randomness through a single switchable provider:
//! - Systematic sampling (`samplers::systematic`)
//! - Simple random sampling with replacement (`samplers::simple`)
//! - Stratified sampling over two or many groups (`samplers::stratified`)
//! - Random source provider with standard and cryptographic modes (`rng`)
//! - Error types: `SamplingError` (`error`)
//!
//! ## Randomness
//!
//! Every sampler is generic over [`rng::IndexSource`], so callers choose the
//! source explicitly. [`rng::RandomSource`] is the production provider:
//! - `RandomMode::Standard`: `rand::rngs::StdRng` seeded from OS entropy
//! - `RandomMode::Cryptographic`: `rand::rngs::OsRng`
//!
//! ## Usage Example
//!
//! ```rust
//! use sampling_core::prelude::*;
//!
//! let population: Vec<u32> = (0..100).collect();
//! let mut rng = RandomSource::with_mode(RandomMode::Cryptographic);
//!
//! let sample = systematic_sample(&mut rng, &population, 10, 5).unwrap();
//! assert_eq!(sample.len(), 5);
//!
//! let sample = simple_random_sample(&mut rng, &["x", "y"], 5).unwrap();
//! assert!(sample.iter().all(|s| *s == "x" || *s == "y"));
//! ```
//!
//! ## Thread Safety
//!
//! A [`rng::RandomSource`] is owned state; share it across threads by giving
//! each thread its own instance. The process-wide default mode is held in an
//! atomic and is only consulted when a provider is constructed.

#![warn(missing_docs)]

pub mod error;
pub mod rng;
pub mod samplers;

pub use error::{Result, SamplingError};

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::error::{Result, SamplingError};
    pub use crate::rng::{IndexSource, RandomMode, RandomSource};
    pub use crate::samplers::{
        proportional_allocation, simple_random_sample, stratified_sample,
        stratified_sample_many, systematic_sample,
    };
}
