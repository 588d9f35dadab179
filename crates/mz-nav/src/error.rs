use mz_core::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("start node {0} is not in the graph")]
    StartNodeMissing(NodeId),
}

pub type NavResult<T> = Result<T, NavError>;
