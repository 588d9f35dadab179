//! The `DirectionPolicy` trait: the extension point for entity behavior.

use mz_core::{Direction, EntityRng};

use crate::{Decision, GhostPolicy, InputPolicy, RandomPolicy, ScriptedPolicy};

/// Pluggable direction choice.
///
/// Called by the navigator each time the entity reaches a node.  The
/// returned direction must be one of `ctx.valid`, which is never empty.
/// Anything else is tolerated: the navigator treats it as "no usable edge"
/// and keeps the current heading if that edge exists, otherwise stalls at
/// the node.  Only [`ScriptedPolicy`](crate::ScriptedPolicy) answers outside
/// `valid`, and only in tests.
///
/// # Thread safety
///
/// A host may update entities on a Rayon pool.  Each policy is borrowed
/// mutably by exactly one worker, so `Send` is enough.
///
/// # Example
///
/// ```rust
/// use mz_core::{Direction, EntityRng};
/// use mz_policy::{Decision, DirectionPolicy};
///
/// /// Always turn right when possible.
/// struct HugRight;
///
/// impl DirectionPolicy for HugRight {
///     fn choose(&mut self, ctx: &Decision<'_>, _rng: &mut EntityRng) -> Direction {
///         if ctx.is_valid(Direction::Right) { Direction::Right } else { ctx.first_valid() }
///     }
/// }
/// ```
pub trait DirectionPolicy: Send {
    fn choose(&mut self, ctx: &Decision<'_>, rng: &mut EntityRng) -> Direction;
}

impl<P: DirectionPolicy + ?Sized> DirectionPolicy for Box<P> {
    #[inline]
    fn choose(&mut self, ctx: &Decision<'_>, rng: &mut EntityRng) -> Direction {
        (**self).choose(ctx, rng)
    }
}

// ── Policy ────────────────────────────────────────────────────────────────────

/// The built-in policies behind one concrete type, so a host can store
/// players and ghosts side by side and still reach into a ghost's goal.
#[derive(Clone, Debug)]
pub enum Policy {
    Random(RandomPolicy),
    Input(InputPolicy),
    Ghost(GhostPolicy),
    Scripted(ScriptedPolicy),
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Random(RandomPolicy)
    }
}

impl DirectionPolicy for Policy {
    fn choose(&mut self, ctx: &Decision<'_>, rng: &mut EntityRng) -> Direction {
        match self {
            Policy::Random(p)   => p.choose(ctx, rng),
            Policy::Input(p)    => p.choose(ctx, rng),
            Policy::Ghost(p)    => p.choose(ctx, rng),
            Policy::Scripted(p) => p.choose(ctx, rng),
        }
    }
}

impl From<RandomPolicy> for Policy {
    fn from(p: RandomPolicy) -> Self { Policy::Random(p) }
}

impl From<InputPolicy> for Policy {
    fn from(p: InputPolicy) -> Self { Policy::Input(p) }
}

impl From<GhostPolicy> for Policy {
    fn from(p: GhostPolicy) -> Self { Policy::Ghost(p) }
}

impl From<ScriptedPolicy> for Policy {
    fn from(p: ScriptedPolicy) -> Self { Policy::Scripted(p) }
}
