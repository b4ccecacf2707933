use crate::{
    ast::{Identifier, Statement},
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a single statement starting at the current token.
    ///
    /// A statement may be one of:
    /// - a variable declaration: `var <name> = <expression>;`
    /// - a return statement: `return <expression>;`
    /// - an expression used as a statement.
    ///
    /// The trailing semicolon is optional in every form. On success the
    /// current token is the last token of the statement.
    ///
    /// # Errors
    /// Returns the first `ParseError` found inside the statement.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current.kind {
            TokenKind::Var => self.parse_var_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_var_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(TokenKind::Identifier)?;
        let name = Identifier::new(self.current.literal.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        self.skip_semicolon();
        Ok(Statement::Var { name, value })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        self.skip_semicolon();
        Ok(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        self.skip_semicolon();
        Ok(Statement::Expression(expression))
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
