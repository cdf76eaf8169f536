//! Errors for media type parsing and validation

use std::fmt;

/// The kind of token that was expected.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Type,
    Subtype,
    ParameterName,
    ParameterValue,
}

impl TokenKind {
    /// Human readable label used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Subtype => "subtype",
            Self::ParameterName => "parameter name",
            Self::ParameterValue => "parameter value",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An error encountered while parsing or validating a media type.
///
/// Positions are 0-based indices of characters (not bytes) in `input`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    Blank,
    InvalidCharacter { pos: usize, ch: char, input: String },
    MissingToken { token: TokenKind, pos: usize, input: String },
    UnterminatedQuote { pos: usize, input: String },
    /// A comma was found by a parser that only accepts a single value.
    UnexpectedSeparator { pos: usize, input: String },
}

impl ParseError {
    /// The position of the error in the input, if there is one.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        use ParseError::*;
        match self {
            Blank => None,
            InvalidCharacter { pos, .. }
            | MissingToken { pos, .. }
            | UnterminatedQuote { pos, .. }
            | UnexpectedSeparator { pos, .. } => Some(*pos),
        }
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseError::*;
        match self {
            Blank => f.write_str("media type must not be empty or blank"),
            InvalidCharacter { pos, ch, input } => write!(
                f,
                "invalid character {:?} at index {} in {:?}",
                ch, pos, input,
            ),
            MissingToken { token, pos, input } => {
                write!(f, "missing {} at index {} in {:?}", token, pos, input)
            }
            UnterminatedQuote { pos, input } => write!(
                f,
                "unterminated quoted parameter value at index {} in {:?}",
                pos, input,
            ),
            UnexpectedSeparator { pos, input } => write!(
                f,
                "invalid character ',' at index {} in {:?} (expected a single \
                media type)",
                pos, input,
            ),
        }
    }
}

/// A `Result` with a [`ParseError`] error type.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;
