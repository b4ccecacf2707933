use logos::Logos;

use crate::interpreter::token::{LexerExtras, Token, TokenKind};

/// Turns source text into tokens, one per call to [`Lexer::next_token`].
///
/// Whitespace is skipped between tokens. Characters that cannot start any
/// token are returned as [`TokenKind::Illegal`] tokens carrying the offending
/// text, so lexing itself never fails.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("var x = 5;").map(|token| token.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Var, TokenKind::Identifier, TokenKind::Assign, TokenKind::Int,
///             TokenKind::Semicolon]);
/// ```
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, TokenKind>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras::default()) }
    }

    /// Produces the next token.
    ///
    /// Once the input is exhausted every further call returns an
    /// [`TokenKind::Eof`] token with an empty literal.
    pub fn next_token(&mut self) -> Token {
        let next = self.inner.next();
        let line = self.inner.extras.line;

        match next {
            Some(Ok(TokenKind::String)) => {
                let slice = self.inner.slice();
                Token::new(TokenKind::String,
                           string_contents(slice),
                           line - slice.matches('\n').count())
            },
            Some(Ok(kind)) => Token::new(kind, self.inner.slice(), line),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice(), line),
            None => Token::new(TokenKind::Eof, "", line),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Strips the quotes from a string literal slice.
///
/// The closing quote is optional because unterminated literals run to the end
/// of the input.
fn string_contents(slice: &str) -> &str {
    let body = slice.strip_prefix('"').unwrap_or(slice);
    body.strip_suffix('"').unwrap_or(body)
}
