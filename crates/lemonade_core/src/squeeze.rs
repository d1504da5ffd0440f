//! Where squeeze targets come from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::{instrument, trace};

/// Inclusive range every squeeze target is drawn from.
pub const SQUEEZE_TARGET_RANGE: RangeInclusive<u32> = 2..=4;

/// A source of squeeze targets.
///
/// Called exactly once each time a lemon is picked. Implementations must
/// return a value inside [`SQUEEZE_TARGET_RANGE`].
pub trait SqueezeSource {
    /// Draws the number of squeezes the next lemon needs.
    fn draw_target(&mut self) -> u32;
}

/// Uniform squeeze targets backed by a [`StdRng`].
///
/// Seeding is optional: a seeded source replays the same sequence of
/// targets, an unseeded one draws from OS entropy.
#[derive(Debug, Clone)]
pub struct RandomSqueeze {
    rng: StdRng,
}

impl RandomSqueeze {
    /// Creates a source from an optional seed.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Creates a reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl Default for RandomSqueeze {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SqueezeSource for RandomSqueeze {
    fn draw_target(&mut self) -> u32 {
        let target = self.rng.random_range(SQUEEZE_TARGET_RANGE);
        trace!(squeeze_target = target, "Drew squeeze target");
        target
    }
}

impl<S: SqueezeSource + ?Sized> SqueezeSource for &mut S {
    fn draw_target(&mut self) -> u32 {
        (**self).draw_target()
    }
}
