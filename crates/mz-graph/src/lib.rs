//! `mz-graph`: the maze node graph entities travel on.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`graph`] | `MazeNode`, `MazeGraph` (arena + R-tree), `MazeGraphBuilder`  |
//! | [`error`] | `GraphError`, `GraphResult<T>`                                |
//!
//! The graph is built once and read-only afterwards.  Navigators hold
//! `NodeId`s into it and never mutate it, so one `&MazeGraph` can be shared
//! by any number of entities, on any number of threads.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `MazeNode`.             |

pub mod error;
pub mod graph;


pub use error::{GraphError, GraphResult};
pub use graph::{MazeGraph, MazeGraphBuilder, MazeNode};
