//! # Sampling Algorithms
//!
//! Four samplers over in-memory slices. Each takes its randomness from an
//! [`IndexSource`](crate::rng::IndexSource) and returns a freshly allocated
//! sample whose length equals the requested `till`.
//!
//! - [`systematic_sample`]: fixed stride from a random starting offset
//! - [`simple_random_sample`]: independent uniform draws with replacement
//! - [`stratified_sample`]: two groups sampled in proportion to their sizes
//! - [`stratified_sample_many`]: any number of groups, same rule
//!
//! Group sizes for the stratified samplers come from
//! [`proportional_allocation`], which fails with
//! [`SamplingError::SizeMismatch`](crate::SamplingError::SizeMismatch) rather
//! than redistributing a rounding remainder.

mod simple;
mod stratified;
mod systematic;

pub use simple::simple_random_sample;
pub use stratified::{proportional_allocation, stratified_sample, stratified_sample_many};
pub use systematic::systematic_sample;
