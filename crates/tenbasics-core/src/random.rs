//! Random number generation for tensor initialization
//!
//! All sampling goes through `scirs2_core::random`. A process-wide
//! [`Generator`] backs [`Tensor::rand`](crate::Tensor::rand) and friends;
//! [`manual_seed`] makes it reproducible. Code that wants its own stream can
//! hold a [`Generator`] and call the `*_with` constructors.
//!
//! # Examples
//!
//! ```
//! use tenbasics_core::random::{manual_seed, Generator};
//! use tenbasics_core::Tensor;
//!
//! let mut a = Generator::seeded(7);
//! let mut b = Generator::seeded(7);
//! let x = Tensor::<f32>::rand_with(&[2, 3], &mut a);
//! let y = Tensor::<f32>::rand_with(&[2, 3], &mut b);
//! assert_eq!(x, y);
//!
//! manual_seed(42);
//! let _ = Tensor::<f64>::rand(&[4]);
//! ```

use crate::dtype::FloatElement;
use parking_lot::Mutex;
use scirs2_core::random::{thread_rng, SeedableRng, StdRng};

lazy_static::lazy_static! {
    static ref GLOBAL_GENERATOR: Mutex<Generator> = Mutex::new(Generator::from_entropy());
}

/// Seedable random stream
pub struct Generator {
    rng: StdRng,
    seed: Option<u64>,
}

impl Generator {
    /// Deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Generator seeded from the thread-local entropy source
    pub fn from_entropy() -> Self {
        let mut thread_rng_instance = thread_rng();
        Self {
            rng: StdRng::from_rng(&mut thread_rng_instance),
            seed: None,
        }
    }

    /// Seed this generator was created with, if any
    pub fn initial_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Reset the stream to a fixed seed
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::seeded(seed);
    }

    /// One sample from the uniform distribution on `[0, 1)`
    pub fn next_unit<F: FloatElement>(&mut self) -> F {
        F::sample_unit(&mut self.rng)
    }

    /// `n` samples from the uniform distribution on `[0, 1)`
    pub fn uniform<F: FloatElement>(&mut self, n: usize) -> Vec<F> {
        (0..n).map(|_| self.next_unit()).collect()
    }

    /// `n` samples from the standard normal distribution (Box-Muller)
    pub fn normal<F: FloatElement>(&mut self, n: usize) -> Vec<F> {
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            // 1 - u keeps the log argument in (0, 1]
            let u1 = 1.0 - self.next_unit::<f64>();
            let u2 = self.next_unit::<f64>();
            let radius = (-2.0 * u1.ln()).sqrt();
            let angle = 2.0 * std::f64::consts::PI * u2;

            out.push(F::cast_from_f64(radius * angle.cos()));
            if out.len() < n {
                out.push(F::cast_from_f64(radius * angle.sin()));
            }
        }
        out
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Reseed the process-wide generator
pub fn manual_seed(seed: u64) {
    tracing::debug!(seed, "reseeding global generator");
    GLOBAL_GENERATOR.lock().reseed(seed);
}

/// Seed of the process-wide generator, if it was set with [`manual_seed`]
pub fn initial_seed() -> Option<u64> {
    GLOBAL_GENERATOR.lock().initial_seed()
}

/// Run `f` with exclusive access to the process-wide generator
pub fn with_global<R>(f: impl FnOnce(&mut Generator) -> R) -> R {
    let mut generator = GLOBAL_GENERATOR.lock();
    f(&mut generator)
}
