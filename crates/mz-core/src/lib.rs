//! `mz-core`: foundational types for the `rust_maze` navigation core.
//!
//! This crate is a dependency of every other `mz-*` crate.  It has no `mz-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EntityId`                                  |
//! | [`vector`]      | `Vector2`                                             |
//! | [`direction`]   | `Direction`, `Link`                                   |
//! | [`time`]        | `Tick`, `FrameClock`, `SimConfig`                     |
//! | [`rng`]         | `EntityRng` (per-entity), `EntityRngs`                |
//! | [`error`]       | `MazeError`, `MazeResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Direction, Link};
pub use error::{MazeError, MazeResult};
pub use ids::{EntityId, NodeId};
pub use rng::{EntityRng, EntityRngs};
pub use time::{FrameClock, SimConfig, Tick};
pub use vector::Vector2;

/// Pixel width of one maze tile.  Speeds are expressed relative to a 16 px
/// tile, so this is also the neutral speed scale.
pub const TILE_WIDTH: f32 = 16.0;
