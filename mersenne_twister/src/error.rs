use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MtError {
    /// Seeding input the algorithm has no defined behavior for, such as an
    /// empty key.
    InvalidInput(&'static str),
    /// A generator state that could not have come out of seeding.
    InvalidState(&'static str),
}

impl fmt::Display for MtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MtError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            MtError::InvalidState(msg) => write!(f, "invalid state: {}", msg),
        }
    }
}

impl Error for MtError {}
