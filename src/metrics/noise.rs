use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the multiplicative jitter applied to forecast and history series.
pub trait NoiseSource {
    /// A factor in `[low, high]`.
    fn factor(&mut self, low: f64, high: f64) -> f64;
}

/// Uniform jitter from a `StdRng`, either entropy-seeded or fixed-seeded.
pub struct RandomNoise {
    rng: StdRng,
}

impl RandomNoise {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for RandomNoise {
    fn factor(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// No jitter: always the midpoint of the range.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatNoise;

impl NoiseSource for FlatNoise {
    fn factor(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }
}

/// How the service builds a noise source per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseMode {
    Random,
    Seeded(u64),
    Flat,
}

impl NoiseMode {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Random, Self::Seeded)
    }

    pub fn source(self) -> Box<dyn NoiseSource + Send> {
        match self {
            Self::Random => Box::new(RandomNoise::from_entropy()),
            Self::Seeded(seed) => Box::new(RandomNoise::seeded(seed)),
            Self::Flat => Box::new(FlatNoise),
        }
    }
}
