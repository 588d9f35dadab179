//! Actor kinds and the per-actor construction recipe.

use std::fmt;

use mz_core::NodeId;
use mz_nav::Color;
use mz_policy::Policy;

/// What an actor is to the host.  The navigator does not care; the host uses
/// it for contacts, ghost-mode reversals, and the world snapshot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Player,
    Ghost,
}

impl ActorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActorKind::Player => "player",
            ActorKind::Ghost  => "ghost",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to build one actor.  Unset overrides take the builder's
/// [`NavConfig`][mz_nav::NavConfig].
#[derive(Clone, Debug)]
pub struct ActorSpec<P = Policy> {
    pub kind:           ActorKind,
    pub start:          NodeId,
    pub policy:         P,
    pub speed:          Option<f32>,
    pub color:          Option<Color>,
    pub radius:         Option<f32>,
    pub disable_portal: bool,
}

impl ActorSpec<Policy> {
    /// An actor driven by one of the built-in policies.
    pub fn new(kind: ActorKind, start: NodeId, policy: impl Into<Policy>) -> Self {
        Self::with_policy(kind, start, policy.into())
    }
}

impl<P> ActorSpec<P> {
    /// An actor driven by a host-defined policy type.
    pub fn with_policy(kind: ActorKind, start: NodeId, policy: P) -> Self {
        Self {
            kind,
            start,
            policy,
            speed:          None,
            color:          None,
            radius:         None,
            disable_portal: false,
        }
    }

    /// Speed in 16 px tile units.
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Drawn radius.  The collide radius is left at the config default.
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Ignore portal links for this actor.
    pub fn disable_portal(mut self) -> Self {
        self.disable_portal = true;
        self
    }
}
