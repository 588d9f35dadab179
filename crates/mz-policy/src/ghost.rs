//! Goal-seeking ghost AI.
//!
//! At each node a ghost looks one edge ahead in every open direction and
//! takes the one whose far node is closest (straight-line) to its goal.
//! The goal depends on [`GhostMode`]:
//!
//! | Mode         | Goal                                               |
//! |--------------|----------------------------------------------------|
//! | `Scatter`    | `scatter_goal`, a fixed corner                     |
//! | `Chase`      | derived from the player by the ghost's `ChaseRule` |
//! | `Frightened` | none: uniform random choice                       |

use tracing::trace;

use mz_core::{Direction, EntityRng, TILE_WIDTH, Vector2};

use crate::{Decision, DirectionPolicy, GhostMode, RandomPolicy};

/// How a ghost turns the player's state into a chase goal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChaseRule {
    /// Aim at the player.
    Direct,
    /// Aim `tiles` tiles ahead of the player along its heading.
    Ahead { tiles: f32 },
}

#[derive(Clone, Debug)]
pub struct GhostPolicy {
    pub scatter_goal: Vector2,
    pub chase: ChaseRule,
}

impl GhostPolicy {
    pub fn new(scatter_goal: Vector2, chase: ChaseRule) -> Self {
        Self { scatter_goal, chase }
    }

    /// The point this ghost is steering toward, or `None` when frightened.
    ///
    /// Without a player, chase falls back to the scatter corner.
    pub fn goal(&self, ctx: &Decision<'_>) -> Option<Vector2> {
        let world = ctx.world;
        match world.ghost_mode {
            GhostMode::Frightened => None,
            GhostMode::Scatter    => Some(self.scatter_goal),
            GhostMode::Chase      => Some(match (world.player_position, self.chase) {
                (None, _) => self.scatter_goal,
                (Some(p), ChaseRule::Direct) => p,
                (Some(p), ChaseRule::Ahead { tiles }) => {
                    p + world.player_direction.delta() * (tiles * TILE_WIDTH)
                }
            }),
        }
    }
}

impl DirectionPolicy for GhostPolicy {
    fn choose(&mut self, ctx: &Decision<'_>, rng: &mut EntityRng) -> Direction {
        let Some(goal) = self.goal(ctx) else {
            return RandomPolicy.choose(ctx, rng);
        };

        // Strict `<` keeps the earliest cardinal on ties.
        let mut best: Option<(Direction, f32)> = None;
        for &d in ctx.valid {
            let Some(pos) = ctx.neighbor_position(d) else { continue };
            let dist = pos.distance_squared(goal);
            if best.is_none_or(|(_, b)| dist < b) {
                best = Some((d, dist));
            }
        }

        match best {
            Some((d, _)) => d,
            None => {
                trace!(node = %ctx.node, "no reachable candidate, taking first valid");
                ctx.first_valid()
            }
        }
    }
}
