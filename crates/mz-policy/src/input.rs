//! Player-controlled policy.

use mz_core::{Direction, EntityRng};

use crate::{Decision, DirectionPolicy};

/// Follows [`WorldView::input`](crate::WorldView::input).
///
/// At each node: take the requested direction if it is open, otherwise keep
/// going straight if that is open, otherwise take the first valid direction.
/// At a dead end that is the way back, so the player bounces off the wall.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputPolicy;

impl DirectionPolicy for InputPolicy {
    fn choose(&mut self, ctx: &Decision<'_>, _rng: &mut EntityRng) -> Direction {
        let requested = ctx.world.input;
        if requested != Direction::Stop && ctx.is_valid(requested) {
            requested
        } else if ctx.is_valid(ctx.direction) {
            ctx.direction
        } else {
            ctx.first_valid()
        }
    }
}
