//! Truncated normal distribution parameters.

use super::error::SamplerError;
use crate::distributions::normal_cdf;

/// Normal distribution N(loc, scale²) restricted to `[lowerbound, upperbound]`.
///
/// Construction validates every field, so a `TruncatedNormal` value is always
/// samplable in principle: `loc` finite, `scale` finite and positive, bounds
/// not NaN and `lowerbound < upperbound`. Bounds default to −∞ and +∞.
///
/// # Examples
///
/// ```rust
/// use sampler_core::truncated::TruncatedNormal;
///
/// let half_normal = TruncatedNormal::new(0.0, 1.0)
///     .and_then(|d| d.with_lower_bound(0.0))
///     .unwrap();
///
/// assert_eq!(half_normal.upperbound(), f64::INFINITY);
/// assert!((half_normal.probability_mass() - 0.5).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TruncatedNormal {
    loc: f64,
    scale: f64,
    lowerbound: f64,
    upperbound: f64,
}

impl TruncatedNormal {
    /// Creates an untruncated normal distribution with bounds (−∞, +∞).
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidArgument` if `loc` is not finite or
    /// `scale` is not finite and positive.
    pub fn new(loc: f64, scale: f64) -> Result<Self, SamplerError> {
        if !loc.is_finite() {
            return Err(SamplerError::invalid(
                "loc",
                format!("must be finite, got {}", loc),
            ));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SamplerError::invalid(
                "scale",
                format!("must be finite and positive, got {}", scale),
            ));
        }
        Ok(Self {
            loc,
            scale,
            lowerbound: f64::NEG_INFINITY,
            upperbound: f64::INFINITY,
        })
    }

    /// Returns a copy truncated to `[lowerbound, upperbound]`.
    ///
    /// Either bound may be infinite.
    ///
    /// # Errors
    ///
    /// Returns `SamplerError::InvalidArgument` if a bound is NaN or
    /// `lowerbound >= upperbound`.
    pub fn with_bounds(self, lowerbound: f64, upperbound: f64) -> Result<Self, SamplerError> {
        if lowerbound.is_nan() {
            return Err(SamplerError::invalid("lowerbound", "must not be NaN"));
        }
        if upperbound.is_nan() {
            return Err(SamplerError::invalid("upperbound", "must not be NaN"));
        }
        if lowerbound >= upperbound {
            return Err(SamplerError::invalid(
                "lowerbound",
                format!(
                    "must be below upperbound, got [{}, {}]",
                    lowerbound, upperbound
                ),
            ));
        }
        Ok(Self {
            lowerbound,
            upperbound,
            ..self
        })
    }

    /// Returns a copy with only the lower bound replaced.
    ///
    /// # Errors
    ///
    /// See [`with_bounds`](Self::with_bounds).
    pub fn with_lower_bound(self, lowerbound: f64) -> Result<Self, SamplerError> {
        self.with_bounds(lowerbound, self.upperbound)
    }

    /// Returns a copy with only the upper bound replaced.
    ///
    /// # Errors
    ///
    /// See [`with_bounds`](Self::with_bounds).
    pub fn with_upper_bound(self, upperbound: f64) -> Result<Self, SamplerError> {
        self.with_bounds(self.lowerbound, upperbound)
    }

    /// Mean of the parent normal distribution.
    #[inline]
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Standard deviation of the parent normal distribution.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Inclusive lower bound.
    #[inline]
    pub fn lowerbound(&self) -> f64 {
        self.lowerbound
    }

    /// Inclusive upper bound.
    #[inline]
    pub fn upperbound(&self) -> f64 {
        self.upperbound
    }

    /// Probability that a parent normal draw lands inside the bounds,
    /// computed as `CDF(upperbound) - CDF(lowerbound)`.
    ///
    /// Rounds to zero when both bounds sit far enough in the same tail.
    pub fn probability_mass(&self) -> f64 {
        normal_cdf(self.upperbound, self.loc, self.scale)
            - normal_cdf(self.lowerbound, self.loc, self.scale)
    }

    /// Returns whether `x` lies in the closed interval `[lowerbound, upperbound]`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lowerbound <= x && x <= self.upperbound
    }
}
