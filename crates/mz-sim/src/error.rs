use mz_core::MazeError;
use mz_nav::NavError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] MazeError),

    #[error("actor {index}: {source}")]
    Actor {
        index:  usize,
        #[source]
        source: NavError,
    },

    #[cfg(feature = "parallel")]
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
