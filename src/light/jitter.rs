//! Edge dithering: nudges band edges by up to one pixel per row

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub enum Jitter {
    /// Crisp edges; output is fully deterministic
    Off,
    Dither(Pcg32),
}

impl Jitter {
    pub fn seeded(seed: u64) -> Self {
        Jitter::Dither(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::seeded(rand::random::<u64>())
    }

    /// -1, 0 or +1 with equal probability
    #[inline]
    pub fn nudge(&mut self) -> i32 {
        match self {
            Jitter::Off => 0,
            Jitter::Dither(rng) => rng.random_range(-1..=1),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Jitter::Dither(_))
    }
}
