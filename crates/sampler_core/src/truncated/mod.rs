//! Truncated normal sampling by vectorised rejection.
//!
//! # Architecture
//!
//! ```text
//! TruncatedNormalSampler
//! ├── SamplerConfig     (batch cap, iteration and draw limits, seed)
//! ├── SamplerRng        (Gaussian draws)
//! └── sample_with_report()
//!     ├── Multiplier::estimate()   (once per call)
//!     └── draw → filter → accumulate, until no_samples accepted
//! ```
//!
//! # Examples
//!
//! ## One-shot sampling
//!
//! ```rust
//! use sampler_core::truncated::{truncated_normal, DEFAULT_NO_SAMPLES};
//!
//! // Half-normal: loc=0, scale=1, truncated below at 0
//! let values = truncated_normal(0.0, 1.0, f64::INFINITY, 0.0, DEFAULT_NO_SAMPLES).unwrap();
//! assert_eq!(values.len(), 100);
//! assert!(values.iter().all(|&x| x >= 0.0));
//! ```
//!
//! ## Guarding against impossible bounds
//!
//! ```rust
//! use sampler_core::truncated::{
//!     SamplerConfig, SamplerError, TruncatedNormal, TruncatedNormalSampler,
//! };
//!
//! let config = SamplerConfig::builder().max_iterations(100).seed(1).build().unwrap();
//! let mut sampler = TruncatedNormalSampler::new(config).unwrap();
//!
//! // 50 standard deviations out: no draw will ever land here
//! let dist = TruncatedNormal::new(0.0, 1.0)
//!     .and_then(|d| d.with_lower_bound(50.0))
//!     .unwrap();
//!
//! let result = sampler.sample(&dist, 10);
//! assert!(matches!(result, Err(SamplerError::ConvergenceFailure { .. })));
//! ```

mod config;
mod error;
mod multiplier;
mod params;
mod sampler;

pub use config::{
    SamplerConfig, SamplerConfigBuilder, DEFAULT_MAX_BATCH_SIZE, DEFAULT_MAX_ITERATIONS,
    DEFAULT_MAX_TOTAL_DRAWS, MAX_BATCH_SIZE_LIMIT,
};
pub use error::{ConfigError, SamplerError};
pub use multiplier::{Multiplier, DEGENERATE_MULTIPLIER};
pub use params::TruncatedNormal;
pub use sampler::{TruncatedNormalSampler, TruncatedSample};

/// Default number of samples for a one-shot draw.
pub const DEFAULT_NO_SAMPLES: usize = 100;

/// Draws `no_samples` values from N(loc, scale²) truncated to
/// `[lowerbound, upperbound]`.
///
/// One-shot convenience over [`TruncatedNormalSampler`] with the default
/// configuration and an entropy seed. Pass `f64::INFINITY` /
/// `f64::NEG_INFINITY` to leave a side unbounded.
///
/// # Errors
///
/// - `SamplerError::InvalidArgument` for invalid parameters or `no_samples == 0`
/// - `SamplerError::ConvergenceFailure` if the default iteration or draw limit is reached
pub fn truncated_normal(
    loc: f64,
    scale: f64,
    upperbound: f64,
    lowerbound: f64,
    no_samples: usize,
) -> Result<Vec<f64>, SamplerError> {
    let dist = TruncatedNormal::new(loc, scale)?.with_bounds(lowerbound, upperbound)?;
    let mut sampler = TruncatedNormalSampler::new(SamplerConfig::default())?;
    sampler.sample(&dist, no_samples)
}
