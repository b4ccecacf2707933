use crate::{
    ast::{Expression, Identifier},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Advances past the peek token if it has the expected kind.
    ///
    /// This is the only way the parser consumes punctuation it requires, so
    /// every "missing token" diagnostic comes from here.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedPeek` naming the token actually found,
    /// without advancing.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.peek_is(expected) {
            self.next_token();
            return Ok(());
        }

        Err(ParseError::UnexpectedPeek { received: self.peek.kind,
                                         expected,
                                         line: self.peek.line })
    }

    /// Parses a comma-separated list of expressions up to a closing token.
    ///
    /// Shared by array literals and call arguments. An immediately
    /// encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)? closing`
    ///
    /// # Parameters
    /// - `closing`: The token that terminates the list (`]` or `)`).
    ///
    /// # Returns
    /// The parsed expressions, with the current token on `closing`.
    ///
    /// # Errors
    /// Returns a `ParseError` if an element fails to parse or the list is not
    /// terminated by `closing`.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self, closing: TokenKind) -> ParseResult<Vec<Expression>> {
        let mut items = Vec::new();
        if self.peek_is(closing) {
            self.next_token();
            return Ok(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses the parameter list of a function literal.
    ///
    /// Expects the current token to be `(`. Every parameter must be a plain
    /// identifier.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedPeek` on anything other than
    /// identifiers separated by commas and closed by `)`.
    pub(in crate::interpreter::parser) fn parse_function_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier::new(self.current.literal.clone()));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Identifier)?;
            parameters.push(Identifier::new(self.current.literal.clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }
}
