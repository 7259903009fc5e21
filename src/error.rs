//! Error types for water surface construction.

use core::fmt;

/// Errors that can occur while building a water surface.
///
/// Only construction is failable; per-frame calls never return errors.
#[derive(Debug, Clone, PartialEq)]
pub enum WaterError {
    /// The strip needs at least two joints to define a curve.
    TooFewJoints { count: usize },
    /// Width must be positive and finite.
    InvalidWidth,
}

impl fmt::Display for WaterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterError::TooFewJoints { count } => {
                write!(f, "water surface needs at least 2 joints (got {})", count)
            }
            WaterError::InvalidWidth => write!(f, "width must be positive and finite"),
        }
    }
}
