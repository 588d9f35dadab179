//! `mz-nav`: the moving entity that travels the maze graph.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`navigator`]  | `Navigator`: per-entity travel state and `update(dt)`    |
//! | [`appearance`] | `Appearance`, `Color`: fields a render sink reads        |
//! | [`config`]     | `NavConfig`: base speed, tile width, display defaults    |
//! | [`error`]      | `NavError`, `NavResult<T>`                                |
//!
//! # Movement model (continuous edge travel)
//!
//! A navigator is always on one edge `node → target`:
//!
//! 1. Each tick `position` advances along `direction` by `speed * dt`.
//! 2. When the distance travelled from `node` reaches the edge length, the
//!    navigator has *arrived*: `node` becomes `target`, a
//!    [`DirectionPolicy`][mz_policy::DirectionPolicy] picks among the open
//!    directions, a portal (if any) is taken, the new target is committed,
//!    and `position` snaps exactly onto the node.
//! 3. With no usable edge `target == node`; the navigator is *stalled* and
//!    re-runs the decision every tick until an edge opens up.
//!
//! The graph is never mutated; a navigator holds only `NodeId`s into it.

pub mod appearance;
pub mod config;
pub mod error;
pub mod navigator;


pub use appearance::{Appearance, Color};
pub use config::NavConfig;
pub use error::{NavError, NavResult};
pub use navigator::{Arrival, Navigator};
