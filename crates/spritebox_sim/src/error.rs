//! Simulation error types

use std::fmt;

/// Error type for simulation set-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Object size does not fit the boundary, or a dimension is not positive
    InvalidConfiguration {
        size: i32,
        width: i32,
        height: i32,
    },
    /// Speed limit is negative or would let one tick jump past the free space
    InvalidSpeed {
        max_speed: i32,
        limit: i32,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidConfiguration { size, width, height } => write!(
                f,
                "Invalid configuration: object size {} does not fit a {}x{} boundary",
                size, width, height
            ),
            SimError::InvalidSpeed { max_speed, limit } => write!(
                f,
                "Invalid speed: max speed {} is outside 0..={}",
                max_speed, limit
            ),
        }
    }
}

impl std::error::Error for SimError {}
