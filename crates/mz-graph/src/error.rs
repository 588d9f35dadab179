//! Graph error type.

use thiserror::Error;

use mz_core::{Link, NodeId};

/// Errors produced while building a `MazeGraph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    UnknownNode(NodeId),

    #[error("{from} has a {link:?} link to missing node {to}")]
    DanglingLink { from: NodeId, link: Link, to: NodeId },
}

pub type GraphResult<T> = Result<T, GraphError>;
