//! Error types for the truncated normal sampler.
//!
//! - [`ConfigError`]: rejected sampler configuration, raised at build time
//! - [`SamplerError`]: invalid distribution arguments or a sampling run that
//!   hit its iteration or draw limit

use thiserror::Error;

use super::config::MAX_BATCH_SIZE_LIMIT;

/// Configuration error for [`SamplerConfig`](super::SamplerConfig).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Batch size cap outside valid range [1, `MAX_BATCH_SIZE_LIMIT`].
    #[error("Invalid batch size {0}: must be in range [1, {max}]", max = MAX_BATCH_SIZE_LIMIT)]
    InvalidBatchSize(usize),

    /// Iteration limit of zero.
    #[error("Invalid iteration limit {0}: must be at least 1")]
    InvalidIterationLimit(usize),

    /// Draw limit of zero.
    #[error("Invalid draw limit {0}: must be at least 1")]
    InvalidDrawLimit(u64),
}

/// Sampling error.
///
/// # Examples
/// ```
/// use sampler_core::truncated::SamplerError;
///
/// let err = SamplerError::InvalidArgument {
///     name: "scale",
///     reason: "must be positive, got -1".to_string(),
/// };
/// assert_eq!(err.to_string(), "Invalid argument 'scale': must be positive, got -1");
/// ```
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SamplerError {
    /// A distribution parameter or sample count was rejected.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// The iteration or draw limit was reached before enough samples were
    /// accepted.
    #[error(
        "Sampling did not converge: accepted {accepted} of {requested} samples \
         after {iterations} iterations ({total_draws} draws)"
    )]
    ConvergenceFailure {
        /// Number of samples requested.
        requested: usize,
        /// Number of samples accepted before giving up.
        accepted: usize,
        /// Iterations performed.
        iterations: usize,
        /// Raw normal draws consumed.
        total_draws: u64,
    },

    /// The sampler configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SamplerError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
