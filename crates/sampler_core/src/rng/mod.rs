//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for the truncated normal sampler.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Every generator carries the seed it was initialised
//!   with, including entropy-seeded ones, so any run can be replayed
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Static dispatch**: No `Box<dyn RngCore>` in the sampling loop
//!
//! ## Module Structure
//!
//! - `prng`: Pseudo-random number generator wrapper with seed management
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::SamplerRng;
//!
//! let mut rng = SamplerRng::from_seed(12345);
//!
//! // Standard normal variate (mean=0, std=1)
//! let z = rng.gen_normal();
//!
//! // Batch of N(10, 3²) variates into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_gaussian(&mut buffer, 10.0, 3.0);
//! ```

mod prng;

pub use prng::SamplerRng;
