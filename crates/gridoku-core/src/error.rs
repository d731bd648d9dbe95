//! Parse failures for puzzle text.

/// Errors that can occur when parsing puzzle text into a [`Grid`].
///
/// Parsing is all-or-nothing: an error means no grid was produced.
///
/// [`Grid`]: crate::Grid
///
/// # Examples
///
/// ```
/// use gridoku_core::{Grid, ParseError};
///
/// let err = "53..7....".parse::<Grid>().unwrap_err();
/// assert!(matches!(err, ParseError::Size(_)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseError {
    /// The input does not have the 9x9 shape.
    #[display("malformed puzzle: {_0}")]
    Size(#[from] SizeMismatch),
    /// A cell holds something other than `.` or a digit `1`-`9`.
    #[display("invalid character {ch:?} at row {row}, column {col}")]
    Character {
        /// Zero-based row of the offending cell.
        row: usize,
        /// Zero-based column of the offending cell.
        col: usize,
        /// The offending character.
        ch: char,
    },
}

/// Detail of a [`ParseError::Size`]: which dimension is off, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SizeMismatch {
    /// The input has the wrong number of lines.
    #[display("expected {expected} lines, got {found}")]
    Lines {
        /// The required line count.
        expected: usize,
        /// The line count actually seen.
        found: usize,
    },
    /// A line has the wrong number of characters.
    #[display("expected {expected} characters on line {row}, got {found}")]
    Width {
        /// Zero-based index of the offending line.
        row: usize,
        /// The required character count.
        expected: usize,
        /// The character count actually seen.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ParseError::Size(SizeMismatch::Lines {
            expected: 9,
            found: 7,
        });
        assert_eq!(err.to_string(), "malformed puzzle: expected 9 lines, got 7");

        let err = ParseError::Size(SizeMismatch::Width {
            row: 3,
            expected: 9,
            found: 11,
        });
        assert_eq!(
            err.to_string(),
            "malformed puzzle: expected 9 characters on line 3, got 11"
        );

        let err = ParseError::Character {
            row: 0,
            col: 4,
            ch: 'x',
        };
        assert_eq!(err.to_string(), "invalid character 'x' at row 0, column 4");
    }

    #[test]
    fn test_size_mismatch_converts() {
        let detail = SizeMismatch::Lines {
            expected: 9,
            found: 0,
        };
        let err: ParseError = detail.into();
        assert_eq!(err, ParseError::Size(detail));
    }
}
