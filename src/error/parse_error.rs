use std::fmt;

use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the parser can record.
pub enum ParseError {
    /// The next token was not of the kind the grammar requires here.
    UnexpectedPeek {
        /// The kind of the token that was found.
        received: TokenKind,
        /// The kind of the token that was required.
        expected: TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with this kind of token.
    NoPrefixParser {
        /// The kind of the offending token.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    InvalidInteger {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Returns the source line the error was recorded on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedPeek { line, .. }
            | Self::NoPrefixParser { line, .. }
            | Self::InvalidInteger { line, .. } => *line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedPeek { received,
                                   expected,
                                   .. } => write!(f,
                                                  "invalid peek token type: received {received}, expected {expected}"),
            Self::NoPrefixParser { kind, .. } => {
                write!(f, "no prefix parse function for {kind} found")
            },
            Self::InvalidInteger { literal, .. } => {
                write!(f, "could not parse {literal} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// The ordered batch of errors recorded while parsing one source text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// Returns the error messages in the order they were found.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "line {}: {error}", error.line())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
