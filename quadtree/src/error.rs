use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidCapacity,
    InvalidBounds { width: f32, height: f32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidCapacity => {
                write!(f, "node capacity must be at least 1")
            }
            QuadtreeError::InvalidBounds { width, height } => {
                write!(
                    f,
                    "boundary width/height must be finite and positive (width: {}, height: {})",
                    width, height
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
