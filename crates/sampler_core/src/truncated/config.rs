//! Sampler configuration.
//!
//! This module provides [`SamplerConfig`] and its builder. The configuration
//! caps the work done per iteration and bounds both the number of iterations
//! and the total number of raw draws, so a sampling call on near-impossible
//! bounds ends in an error rather than spinning forever.

use super::error::ConfigError;

/// Default number of raw draws allowed in a single batch.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100_000;

/// Upper limit accepted for the batch size cap.
pub const MAX_BATCH_SIZE_LIMIT: usize = 100_000_000;

/// Default iteration limit for a single sampling call.
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Default limit on raw draws for a single sampling call.
pub const DEFAULT_MAX_TOTAL_DRAWS: u64 = 500_000_000;

/// Truncated normal sampler configuration.
///
/// Immutable once built. Use [`SamplerConfig::builder`] to construct
/// instances, or [`SamplerConfig::default`] for the standard limits with an
/// entropy seed.
///
/// # Examples
///
/// ```rust
/// use sampler_core::truncated::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .max_batch_size(10_000)
///     .max_iterations(500)
///     .max_total_draws(1_000_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.max_batch_size(), 10_000);
/// assert_eq!(config.max_iterations(), 500);
/// assert_eq!(config.max_total_draws(), 1_000_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    /// Maximum raw draws per iteration.
    max_batch_size: usize,
    /// Maximum iterations per sampling call.
    max_iterations: usize,
    /// Maximum raw draws per sampling call.
    max_total_draws: u64,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_total_draws: DEFAULT_MAX_TOTAL_DRAWS,
            seed: None,
        }
    }
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the maximum number of raw draws per iteration.
    #[inline]
    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Returns the iteration limit per sampling call.
    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the limit on raw draws per sampling call.
    #[inline]
    pub fn max_total_draws(&self) -> u64 {
        self.max_total_draws
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `max_batch_size` is 0 or greater than 100,000,000
    /// - `max_iterations` is 0
    /// - `max_total_draws` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_batch_size == 0 || self.max_batch_size > MAX_BATCH_SIZE_LIMIT {
            return Err(ConfigError::InvalidBatchSize(self.max_batch_size));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidIterationLimit(self.max_iterations));
        }
        if self.max_total_draws == 0 {
            return Err(ConfigError::InvalidDrawLimit(self.max_total_draws));
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
///
/// Unset limits fall back to [`DEFAULT_MAX_BATCH_SIZE`],
/// [`DEFAULT_MAX_ITERATIONS`] and [`DEFAULT_MAX_TOTAL_DRAWS`].
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    max_batch_size: Option<usize>,
    max_iterations: Option<usize>,
    max_total_draws: Option<u64>,
    seed: Option<u64>,
}

impl SamplerConfigBuilder {
    /// Sets the maximum number of raw draws per iteration.
    ///
    /// # Arguments
    ///
    /// * `max_batch_size` - Cap in [1, 100_000_000]
    #[inline]
    pub fn max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = Some(max_batch_size);
        self
    }

    /// Sets the iteration limit per sampling call.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Sets the limit on raw draws per sampling call.
    #[inline]
    pub fn max_total_draws(mut self, max_total_draws: u64) -> Self {
        self.max_total_draws = Some(max_total_draws);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any limit is out of range.
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let config = SamplerConfig {
            max_batch_size: self.max_batch_size.unwrap_or(DEFAULT_MAX_BATCH_SIZE),
            max_iterations: self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
            max_total_draws: self.max_total_draws.unwrap_or(DEFAULT_MAX_TOTAL_DRAWS),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
