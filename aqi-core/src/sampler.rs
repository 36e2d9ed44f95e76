//! Random fill-in values for pollutants the air-pollution service does not
//! report.
//!
//! The source of randomness is a trait so tests can script exact values.

/// Inclusive range a synthesized reading is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackRange {
    pub low: f64,
    pub high: f64,
}

impl FallbackRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

pub const NO_RANGE: FallbackRange = FallbackRange::new(5.0, 50.0);
pub const CO_RANGE: FallbackRange = FallbackRange::new(1.0, 5.0);
pub const BENZENE_RANGE: FallbackRange = FallbackRange::new(1.0, 5.0);
pub const TOLUENE_RANGE: FallbackRange = FallbackRange::new(5.0, 20.0);
pub const XYLENE_RANGE: FallbackRange = FallbackRange::new(1.0, 10.0);

/// Source of plausible values for unmeasured pollutants.
pub trait PollutantSampler {
    /// Draw a value in `[range.low, range.high]`.
    fn sample(&mut self, range: FallbackRange) -> f64;
}

impl<T: PollutantSampler + ?Sized> PollutantSampler for &mut T {
    fn sample(&mut self, range: FallbackRange) -> f64 {
        (**self).sample(range)
    }
}

/// Sampler that always returns the midpoint of the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointSampler;

impl PollutantSampler for MidpointSampler {
    fn sample(&mut self, range: FallbackRange) -> f64 {
        (range.low + range.high) / 2.0
    }
}

/// Uniform sampler backed by any `rand` generator.
#[cfg(feature = "api")]
pub struct RngSampler<R: rand::Rng> {
    rng: R,
}

#[cfg(feature = "api")]
impl<R: rand::Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

#[cfg(feature = "api")]
impl RngSampler<rand::rngs::StdRng> {
    /// Sampler seeded from the operating system.
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::from_entropy())
    }

    /// Deterministic sampler for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

#[cfg(feature = "api")]
impl<R: rand::Rng> PollutantSampler for RngSampler<R> {
    fn sample(&mut self, range: FallbackRange) -> f64 {
        self.rng.gen_range(range.low..=range.high)
    }
}
