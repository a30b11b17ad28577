//! Vectorised rejection sampler.
//!
//! # Algorithm
//!
//! 1. Estimate the [`Multiplier`] from the in-bounds probability mass
//! 2. Draw `min(ceil(remaining * multiplier), max_batch_size)` values from
//!    N(loc, scale²) into a reused scratch buffer, never exceeding the
//!    remaining draw budget
//! 3. Keep the in-bounds draws in draw order, at most `remaining` of them
//! 4. Append a non-empty accepted batch to the accumulator
//! 5. Repeat until `no_samples` values are accepted or the iteration or
//!    draw limit is reached, then concatenate the batches once

use tracing::{debug, trace, warn};

use super::config::SamplerConfig;
use super::error::{ConfigError, SamplerError};
use super::multiplier::Multiplier;
use super::params::TruncatedNormal;
use crate::rng::SamplerRng;

/// Result of a sampling call together with its run statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruncatedSample {
    /// Accepted samples in draw order.
    pub values: Vec<f64>,
    /// Multiplier used for every batch of the call.
    pub multiplier: Multiplier,
    /// Number of batches drawn.
    pub iterations: usize,
    /// Raw normal draws consumed across all batches.
    pub total_draws: u64,
}

impl TruncatedSample {
    /// Number of accepted samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no samples were accepted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fraction of raw draws that were kept.
    ///
    /// Draws that were in bounds but discarded because the target was
    /// already met count as rejected.
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_draws == 0 {
            0.0
        } else {
            self.values.len() as f64 / self.total_draws as f64
        }
    }

    /// Consumes the report, returning the samples.
    #[inline]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Truncated normal rejection sampler.
///
/// Owns its random number generator, so successive calls continue one
/// stream. A sampler built from a seeded configuration is reproducible:
/// the same sequence of calls yields bit-identical output.
///
/// # Examples
///
/// ```rust
/// use sampler_core::truncated::{SamplerConfig, TruncatedNormal, TruncatedNormalSampler};
///
/// let config = SamplerConfig::builder().seed(7).build().unwrap();
/// let mut sampler = TruncatedNormalSampler::new(config).unwrap();
///
/// let dist = TruncatedNormal::new(0.0, 1.0)
///     .and_then(|d| d.with_lower_bound(0.0))
///     .unwrap();
///
/// let report = sampler.sample_with_report(&dist, 1000).unwrap();
/// assert_eq!(report.len(), 1000);
/// assert!(report.values.iter().all(|&x| x >= 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct TruncatedNormalSampler {
    config: SamplerConfig,
    rng: SamplerRng,
    /// Scratch buffer for raw draws, reused across iterations and released
    /// at the end of each call.
    draws: Vec<f64>,
}

impl TruncatedNormalSampler {
    /// Creates a sampler from a configuration.
    ///
    /// Seeds from the configured seed, or from entropy when none is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid (possible for
    /// configurations that were deserialised rather than built).
    pub fn new(config: SamplerConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed() {
            Some(seed) => SamplerRng::from_seed(seed),
            None => SamplerRng::from_entropy(),
        };
        Self::from_parts(config, rng)
    }

    /// Creates a sampler with a specific seed, overriding the config seed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn with_seed(config: SamplerConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_parts(config, SamplerRng::from_seed(seed))
    }

    fn from_parts(config: SamplerConfig, rng: SamplerRng) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(seed = rng.seed(), "Initialised truncated normal sampler");
        Ok(Self {
            config,
            rng,
            draws: Vec::new(),
        })
    }

    /// Returns the sampler configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Returns the seed of the underlying generator.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Restarts the generator from its seed.
    pub fn reset(&mut self) {
        self.rng = SamplerRng::from_seed(self.rng.seed());
    }

    /// Draws exactly `no_samples` values from `dist`.
    ///
    /// # Errors
    ///
    /// - `SamplerError::InvalidArgument` if `no_samples` is 0
    /// - `SamplerError::ConvergenceFailure` if the iteration limit or the
    ///   draw limit is reached first
    pub fn sample(
        &mut self,
        dist: &TruncatedNormal,
        no_samples: usize,
    ) -> Result<Vec<f64>, SamplerError> {
        self.sample_with_report(dist, no_samples)
            .map(TruncatedSample::into_values)
    }

    /// Draws exactly `no_samples` values from `dist` and reports the run
    /// statistics.
    ///
    /// Consumes the same random stream as [`sample`](Self::sample).
    ///
    /// # Errors
    ///
    /// See [`sample`](Self::sample).
    pub fn sample_with_report(
        &mut self,
        dist: &TruncatedNormal,
        no_samples: usize,
    ) -> Result<TruncatedSample, SamplerError> {
        if no_samples == 0 {
            return Err(SamplerError::invalid("no_samples", "must be positive"));
        }

        let result = self.run(dist, no_samples);
        self.draws = Vec::new();
        result
    }

    #[cfg(test)]
    fn scratch_capacity(&self) -> usize {
        self.draws.capacity()
    }

    fn run(
        &mut self,
        dist: &TruncatedNormal,
        no_samples: usize,
    ) -> Result<TruncatedSample, SamplerError> {
        let multiplier = Multiplier::estimate(dist);
        if multiplier.is_degenerate() {
            warn!(
                loc = dist.loc(),
                scale = dist.scale(),
                lowerbound = dist.lowerbound(),
                upperbound = dist.upperbound(),
                "In-bounds probability mass is zero; falling back to degenerate multiplier"
            );
        }

        let max_batch_size = self.config.max_batch_size();
        let max_total_draws = self.config.max_total_draws();
        let mut batches: Vec<Vec<f64>> = Vec::new();
        let mut accepted = 0_usize;
        let mut total_draws = 0_u64;
        let mut iterations = 0_usize;

        while accepted < no_samples {
            if iterations == self.config.max_iterations() || total_draws >= max_total_draws {
                warn!(
                    requested = no_samples,
                    accepted,
                    iterations,
                    total_draws,
                    "Truncated normal sampling hit its iteration or draw limit"
                );
                return Err(SamplerError::ConvergenceFailure {
                    requested: no_samples,
                    accepted,
                    iterations,
                    total_draws,
                });
            }
            iterations += 1;

            let remaining = no_samples - accepted;
            let draw_budget = usize::try_from(max_total_draws - total_draws).unwrap_or(usize::MAX);
            let batch_size = multiplier
                .batch_size(remaining, max_batch_size)
                .min(draw_budget);

            self.draws.resize(batch_size, 0.0);
            self.rng
                .fill_gaussian(&mut self.draws, dist.loc(), dist.scale());
            total_draws += batch_size as u64;

            let batch: Vec<f64> = self
                .draws
                .iter()
                .copied()
                .filter(|&x| dist.contains(x))
                .take(remaining)
                .collect();

            trace!(
                iteration = iterations,
                batch_size,
                accepted = batch.len(),
                total = accepted + batch.len(),
                "Drew rejection batch"
            );

            if !batch.is_empty() {
                accepted += batch.len();
                batches.push(batch);
            }
        }

        debug!(
            no_samples,
            iterations,
            total_draws,
            multiplier = multiplier.value(),
            "Truncated normal sampling complete"
        );

        Ok(TruncatedSample {
            values: batches.concat(),
            multiplier,
            iterations,
            total_draws,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seeded(seed: u64) -> TruncatedNormalSampler {
        let config = SamplerConfig::builder().seed(seed).build().unwrap();
        TruncatedNormalSampler::new(config).unwrap()
    }

    fn bounded(loc: f64, scale: f64, lower: f64, upper: f64) -> TruncatedNormal {
        TruncatedNormal::new(loc, scale)
            .and_then(|d| d.with_bounds(lower, upper))
            .unwrap()
    }

    #[test]
    fn test_sample_exact_count_within_bounds() {
        let mut sampler = seeded(42);
        let dist = bounded(5.0, 2.0, 3.0, 7.0);

        let values = sampler.sample(&dist, 50).unwrap();

        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|&x| (3.0..=7.0).contains(&x)));
    }

    #[test]
    fn test_zero_samples_rejected() {
        let mut sampler = seeded(1);
        let dist = TruncatedNormal::new(0.0, 1.0).unwrap();

        assert!(matches!(
            sampler.sample(&dist, 0),
            Err(SamplerError::InvalidArgument { name: "no_samples", .. })
        ));
    }

    #[test]
    fn test_unbounded_single_iteration() {
        let mut sampler = seeded(3);
        let dist = TruncatedNormal::new(0.0, 1.0).unwrap();

        let report = sampler.sample_with_report(&dist, 1000).unwrap();

        // Multiplier 1 draws exactly the requested count, all accepted
        assert_eq!(report.iterations, 1);
        assert_eq!(report.total_draws, 1000);
        assert_eq!(report.acceptance_rate(), 1.0);
    }

    #[test]
    fn test_unbounded_output_is_raw_draw_stream() {
        let mut sampler = seeded(11);
        let mut rng = SamplerRng::from_seed(11);
        let dist = TruncatedNormal::new(2.0, 0.5).unwrap();

        let values = sampler.sample(&dist, 64).unwrap();
        let mut expected = vec![0.0; 64];
        rng.fill_gaussian(&mut expected, 2.0, 0.5);

        assert_eq!(values, expected);
    }

    #[test]
    fn test_output_preserves_draw_order() {
        let mut sampler = seeded(5);
        let mut rng = SamplerRng::from_seed(5);
        let dist = bounded(0.0, 1.0, 0.0, f64::INFINITY);

        let report = sampler.sample_with_report(&dist, 200).unwrap();

        // Replay the raw stream and filter it by hand
        let mut raw = vec![0.0; report.total_draws as usize];
        rng.fill_gaussian(&mut raw, 0.0, 1.0);
        let expected: Vec<f64> = raw.into_iter().filter(|&x| x >= 0.0).take(200).collect();

        assert_eq!(report.values, expected);
    }

    #[test]
    fn test_batch_size_cap_forces_more_iterations() {
        let config = SamplerConfig::builder()
            .max_batch_size(10)
            .seed(8)
            .build()
            .unwrap();
        let mut sampler = TruncatedNormalSampler::new(config).unwrap();
        let dist = TruncatedNormal::new(0.0, 1.0).unwrap();

        let report = sampler.sample_with_report(&dist, 95).unwrap();

        assert_eq!(report.len(), 95);
        assert_eq!(report.iterations, 10);
        assert_eq!(report.total_draws, 95);
    }

    #[test]
    fn test_degenerate_bounds_hit_iteration_limit() {
        let config = SamplerConfig::builder()
            .max_iterations(500)
            .seed(13)
            .build()
            .unwrap();
        let mut sampler = TruncatedNormalSampler::new(config).unwrap();
        let dist = bounded(0.0, 1.0, 40.0, f64::INFINITY);

        let result = sampler.sample(&dist, 10);

        assert_eq!(
            result,
            Err(SamplerError::ConvergenceFailure {
                requested: 10,
                accepted: 0,
                iterations: 500,
                total_draws: 500,
            })
        );
    }

    #[test]
    fn test_same_seed_reproducible() {
        let dist = bounded(1.0, 3.0, -2.0, 0.5);

        let a = seeded(99).sample(&dist, 300).unwrap();
        let b = seeded(99).sample(&dist, 300).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_reset_replays_stream() {
        let mut sampler = seeded(21);
        let dist = bounded(0.0, 1.0, -0.5, 1.5);

        let first = sampler.sample(&dist, 100).unwrap();
        let second = sampler.sample(&dist, 100).unwrap();
        sampler.reset();
        let replay = sampler.sample(&dist, 100).unwrap();

        assert_ne!(first, second);
        assert_eq!(first, replay);
    }

    #[test]
    fn test_with_seed_overrides_config_seed() {
        let config = SamplerConfig::builder().seed(1).build().unwrap();
        let sampler = TruncatedNormalSampler::with_seed(config, 77).unwrap();

        assert_eq!(sampler.seed(), 77);
        assert_eq!(sampler.config().seed(), Some(1));
    }

    #[test]
    fn test_entropy_seeded_sampler_reports_its_seed() {
        let mut sampler = TruncatedNormalSampler::new(SamplerConfig::default()).unwrap();
        let dist = bounded(0.0, 1.0, -1.0, 1.0);

        let values = sampler.sample(&dist, 40).unwrap();
        let replay = TruncatedNormalSampler::with_seed(SamplerConfig::default(), sampler.seed())
            .unwrap()
            .sample(&dist, 40)
            .unwrap();

        assert_eq!(values, replay);
    }

    #[test]
    fn test_unreachable_left_tail_stops_at_draw_limit() {
        let config = SamplerConfig::builder()
            .max_total_draws(1_000_000)
            .seed(1)
            .build()
            .unwrap();
        let mut sampler = TruncatedNormalSampler::new(config).unwrap();
        // Φ(-30) is tiny but representable, so every batch is a full 100 000
        let dist = bounded(0.0, 1.0, f64::NEG_INFINITY, -30.0);
        assert!(!Multiplier::estimate(&dist).is_degenerate());

        assert_eq!(
            sampler.sample(&dist, 1),
            Err(SamplerError::ConvergenceFailure {
                requested: 1,
                accepted: 0,
                iterations: 10,
                total_draws: 1_000_000,
            })
        );
    }

    #[test]
    fn test_last_batch_trimmed_to_draw_budget() {
        let config = SamplerConfig::builder()
            .max_total_draws(250_000)
            .seed(2)
            .build()
            .unwrap();
        let mut sampler = TruncatedNormalSampler::new(config).unwrap();
        let dist = bounded(0.0, 1.0, f64::NEG_INFINITY, -30.0);

        assert!(matches!(
            sampler.sample(&dist, 5),
            Err(SamplerError::ConvergenceFailure {
                iterations: 3,
                total_draws: 250_000,
                ..
            })
        ));
    }

    #[test]
    fn test_scratch_buffer_released_after_call() {
        let config = SamplerConfig::builder()
            .max_batch_size(1_000_000)
            .max_total_draws(2_000_000)
            .seed(6)
            .build()
            .unwrap();
        let mut sampler = TruncatedNormalSampler::new(config).unwrap();

        let narrow = bounded(0.0, 1.0, -0.01, 0.01);
        assert_eq!(sampler.sample(&narrow, 100).unwrap().len(), 100);
        assert_eq!(sampler.scratch_capacity(), 0);

        let unreachable = bounded(0.0, 1.0, f64::NEG_INFINITY, -30.0);
        assert!(sampler.sample(&unreachable, 1).is_err());
        assert_eq!(sampler.scratch_capacity(), 0);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_both_constructors_log_seed() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let config = SamplerConfig::builder().seed(5).build().unwrap();
            TruncatedNormalSampler::new(config.clone()).unwrap();
            TruncatedNormalSampler::with_seed(config, 77).unwrap();
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("Initialised truncated normal sampler").count(), 2);
        assert!(output.contains("seed=5"));
        assert!(output.contains("seed=77"));
    }

    #[test]
    fn test_acceptance_rate_empty_report() {
        let report = TruncatedSample {
            values: Vec::new(),
            multiplier: Multiplier::from_mass(1.0),
            iterations: 0,
            total_draws: 0,
        };

        assert!(report.is_empty());
        assert_eq!(report.acceptance_rate(), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Output length and bounds hold for arbitrary parameters.
        #[test]
        fn prop_exact_length_within_bounds(
            seed in any::<u64>(),
            loc in -100.0..100.0f64,
            scale in 0.1..10.0f64,
            offset in -3.0..3.0f64,
            width in 0.1..4.0f64,
            no_samples in 1..500usize,
        ) {
            let lower = loc + offset * scale;
            let upper = lower + width * scale;
            let dist = bounded(loc, scale, lower, upper);

            let mut sampler = seeded(seed);
            let report = sampler.sample_with_report(&dist, no_samples).unwrap();

            prop_assert_eq!(report.len(), no_samples);
            prop_assert!(report.iterations <= sampler.config().max_iterations());
            prop_assert!(report.total_draws <= sampler.config().max_total_draws());
            for &x in &report.values {
                prop_assert!(
                    lower <= x && x <= upper,
                    "{} outside [{}, {}] (seed={})",
                    x, lower, upper, seed
                );
            }
        }
    }
}
