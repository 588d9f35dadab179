//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `MazeError` as one
//! variant where they need to surface core failures.

use thiserror::Error;

use crate::EntityId;

/// The top-level error type for `mz-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `mz-*` crates.
pub type MazeResult<T> = Result<T, MazeError>;
