//! Oversampling multiplier.
//!
//! The multiplier estimates how many raw normal draws are needed per
//! accepted sample: the reciprocal of the probability mass inside the bounds.
//! It is computed once per sampling call and sizes every batch of that call.

use super::params::TruncatedNormal;

/// Multiplier used when the in-bounds mass rounds to zero.
///
/// Deliberately tiny: every batch then shrinks to a single draw, and the
/// iteration limit decides how long the sampler keeps trying.
pub const DEGENERATE_MULTIPLIER: f64 = 1e-15;

/// Oversampling multiplier for one sampling call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multiplier {
    /// Raw draws per accepted sample.
    value: f64,
    /// Whether the estimate fell back to [`DEGENERATE_MULTIPLIER`].
    degenerate: bool,
}

impl Multiplier {
    /// Estimates the multiplier as `1 / (CDF(upperbound) - CDF(lowerbound))`.
    ///
    /// A quotient that is zero, infinite or NaN is replaced by
    /// [`DEGENERATE_MULTIPLIER`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::truncated::{Multiplier, TruncatedNormal};
    ///
    /// let half_normal = TruncatedNormal::new(0.0, 1.0)
    ///     .and_then(|d| d.with_lower_bound(0.0))
    ///     .unwrap();
    ///
    /// let multiplier = Multiplier::estimate(&half_normal);
    /// assert!((multiplier.value() - 2.0).abs() < 1e-12);
    /// assert!(!multiplier.is_degenerate());
    /// ```
    pub fn estimate(dist: &TruncatedNormal) -> Self {
        Self::from_mass(dist.probability_mass())
    }

    pub(crate) fn from_mass(mass: f64) -> Self {
        let value = 1.0 / mass;
        if value == 0.0 || !value.is_finite() {
            Self {
                value: DEGENERATE_MULTIPLIER,
                degenerate: true,
            }
        } else {
            Self {
                value,
                degenerate: false,
            }
        }
    }

    /// Raw draws per accepted sample.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns whether the degenerate fallback is in use.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Number of raw draws for the next batch: `min(ceil(remaining * value), cap)`.
    ///
    /// Never zero while `remaining > 0`. Products too large for `usize`
    /// saturate before the cap applies.
    #[inline]
    pub fn batch_size(&self, remaining: usize, cap: usize) -> usize {
        if remaining == 0 {
            return 0;
        }
        let wanted = (remaining as f64 * self.value).ceil() as usize;
        wanted.clamp(1, cap.max(1))
    }
}
