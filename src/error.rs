//! Errors raised by grid construction and flood fills.

use thiserror::Error;

/// Invalid input to a grid constructor or a fill.
///
/// Every variant describes a caller mistake. Validation always runs before
/// the grid is touched, so a returned error means no pixel was changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    #[error("grid must be non-empty, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("pixel buffer holds {actual} values, expected {expected} for a {width}x{height} grid")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("seed ({x}, {y}) lies outside the {width}x{height} grid")]
    SeedOutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("a {width}x{height} grid exceeds addressable memory")]
    TooLarge { width: usize, height: usize },

    #[error("expected {expected} channels per pixel, got {actual}")]
    ChannelCount { expected: usize, actual: usize },
}

impl FillError {
    /// Classification hook for bindings and callers that branch on error
    /// kind rather than on the variant.
    ///
    /// Every current variant is a caller mistake, so this is always true.
    /// A future variant for a non-argument failure would return false here,
    /// which keeps caller branches stable.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

pub type FillResult<T> = Result<T, FillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = FillError::SeedOutOfBounds { x: -1, y: 3, width: 4, height: 2 };
        assert_eq!(err.to_string(), "seed (-1, 3) lies outside the 4x2 grid");

        let err = FillError::BufferSize { width: 3, height: 3, expected: 9, actual: 8 };
        assert!(err.to_string().contains("expected 9"));
        assert!(err.is_invalid_argument());

        let err = FillError::TooLarge { width: usize::MAX, height: 2 };
        assert!(err.to_string().contains("exceeds addressable memory"));
        assert!(err.is_invalid_argument());
    }
}
