//! Parse errors.

/// Why source text could not be turned into a parse tree.
///
/// Every variant carries the byte offset it was detected at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected character '{ch}'")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unexpected '{found}'")]
    UnexpectedDelimiter { found: char, offset: usize },

    #[error("expected '{expected}' to close '{open}', found '{found}'")]
    MismatchedDelimiter {
        open: char,
        expected: char,
        found: char,
        offset: usize,
    },

    #[error("unclosed '{open}'")]
    UnclosedDelimiter { open: char, offset: usize },
}

impl ParseError {
    /// Byte offset of the offending input.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedChar { offset, .. }
            | ParseError::UnexpectedDelimiter { offset, .. }
            | ParseError::MismatchedDelimiter { offset, .. }
            | ParseError::UnclosedDelimiter { offset, .. } => *offset,
        }
    }
}
