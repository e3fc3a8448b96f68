use quadtree::QuadtreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntityError {
    #[error("entity limit must be at least 1")]
    InvalidLimit,
    #[error(transparent)]
    Quadtree(#[from] QuadtreeError),
}
