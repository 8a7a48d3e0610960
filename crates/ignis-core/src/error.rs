//! Error types shared across the workspace.

use std::error::Error;
use std::fmt;

/// Errors from core type conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A raw byte did not map to any [`CellState`](crate::CellState)
    /// discriminant.
    InvalidCellState {
        /// The rejected byte.
        value: u8,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellState { value } => {
                write!(f, "invalid cell state discriminant {value}")
            }
        }
    }
}

impl Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_bad_value() {
        let msg = CoreError::InvalidCellState { value: 9 }.to_string();
        assert!(msg.contains('9'));
    }
}
