//! Normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Standard normal cumulative distribution function (CDF)
//! - `normal_cdf`: CDF of a normal distribution with given mean and standard deviation
//! - `norm_pdf`: Standard normal probability density function (PDF)
//!
//! The CDF is evaluated through `libm::erfc`, which is accurate to full double
//! precision. Tail masses below roughly 1e-16 round the CDF to exactly 0 or 1;
//! the truncated sampler relies on that rounding to detect degenerate bounds.

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Returns
/// The probability P(X <= x), in range [0, 1]. Φ(-∞) = 0 and Φ(+∞) = 1
/// exactly; NaN propagates.
///
/// # Examples
/// ```
/// use sampler_core::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
/// assert_eq!(norm_cdf(f64::INFINITY), 1.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// Cumulative distribution function of N(loc, scale²).
///
/// Standardises `x` and delegates to [`norm_cdf`]. Infinite `x` maps to 0 or
/// 1 without going through the division, so the sentinel bounds of a
/// truncated distribution are always exact.
///
/// # Arguments
/// * `x` - Evaluation point (may be infinite)
/// * `loc` - Mean of the distribution
/// * `scale` - Standard deviation (must be positive)
///
/// # Examples
/// ```
/// use sampler_core::distributions::normal_cdf;
///
/// // Half the mass lies below the mean
/// assert!((normal_cdf(5.0, 5.0, 2.0) - 0.5).abs() < 1e-15);
/// ```
#[inline]
pub fn normal_cdf(x: f64, loc: f64, scale: f64) -> f64 {
    if x == f64::INFINITY {
        1.0
    } else if x == f64::NEG_INFINITY {
        0.0
    } else {
        norm_cdf((x - loc) / scale)
    }
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use sampler_core::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
