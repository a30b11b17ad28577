//! # sampler_core: Truncated Normal Sampling
//!
//! Draws batches of independent samples from a normal distribution truncated
//! to a closed interval `[lowerbound, upperbound]`, using vectorised rejection
//! sampling rather than one-at-a-time inversion.
//!
//! ## Overview
//!
//! The sampler estimates an oversampling multiplier from the probability mass
//! inside the bounds, then repeatedly draws batches sized to yield the
//! remaining count, keeps the in-bounds values in draw order and stops once
//! exactly `no_samples` values have been accepted. Each batch is capped, and
//! the number of iterations is bounded by the configured convergence guard.
//!
//! ## Module Structure
//!
//! - [`distributions`]: Normal cumulative distribution and density functions
//! - [`rng`]: Seeded Gaussian pseudo-random number generator
//! - [`truncated`]: Truncated normal sampler, configuration and errors
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::truncated::{SamplerConfig, TruncatedNormal, TruncatedNormalSampler};
//!
//! let dist = TruncatedNormal::new(5.0, 2.0)
//!     .and_then(|d| d.with_bounds(3.0, 7.0))
//!     .unwrap();
//!
//! let config = SamplerConfig::builder().seed(42).build().unwrap();
//! let mut sampler = TruncatedNormalSampler::new(config).unwrap();
//!
//! let values = sampler.sample(&dist, 50).unwrap();
//! assert_eq!(values.len(), 50);
//! assert!(values.iter().all(|&x| (3.0..=7.0).contains(&x)));
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events but never installs a subscriber; the
//! host application decides where they go.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for [`truncated::SamplerConfig`] and
//!   [`truncated::TruncatedSample`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod rng;
pub mod truncated;

pub use truncated::{truncated_normal, SamplerError, TruncatedNormal, TruncatedNormalSampler};
