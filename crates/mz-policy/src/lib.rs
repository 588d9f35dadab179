//! `mz-policy`: how an entity picks its next direction at a node.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`context`]  | `Decision<'a>`, `WorldView`, `GhostMode`                     |
//! | [`policy`]   | `DirectionPolicy` trait, `Policy` enum of built-ins          |
//! | [`random`]   | `RandomPolicy`: uniform choice (the default)                |
//! | [`input`]    | `InputPolicy`: follows the host's input direction           |
//! | [`ghost`]    | `GhostPolicy`, `ChaseRule`: goal-seeking ghost AI           |
//! | [`scripted`] | `ScriptedPolicy`: fixed sequence, for deterministic tests   |
//!
//! # Design notes
//!
//! The navigator owns the *mechanism* (which directions are open, how a
//! choice becomes a target); a policy owns only the *preference*.  A policy
//! sees a read-only [`Decision`] and the entity's own RNG, so the same seed
//! always yields the same choices regardless of update order.

pub mod context;
pub mod ghost;
pub mod input;
pub mod policy;
pub mod random;
pub mod scripted;


pub use context::{Decision, GhostMode, WorldView};
pub use ghost::{ChaseRule, GhostPolicy};
pub use input::InputPolicy;
pub use policy::{DirectionPolicy, Policy};
pub use random::RandomPolicy;
pub use scripted::ScriptedPolicy;
