//! Uniform random choice: the default policy.

use mz_core::{Direction, EntityRng};

use crate::{Decision, DirectionPolicy};

/// Picks uniformly among the valid directions using the entity's RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl DirectionPolicy for RandomPolicy {
    fn choose(&mut self, ctx: &Decision<'_>, rng: &mut EntityRng) -> Direction {
        rng.choose(ctx.valid).copied().unwrap_or(Direction::Stop)
    }
}
