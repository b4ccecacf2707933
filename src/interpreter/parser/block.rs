use crate::{
    ast::BlockStatement,
    interpreter::{parser::core::Parser, token::TokenKind},
};

impl Parser<'_> {
    /// Parses a brace-delimited sequence of statements.
    ///
    /// Expects the current token to be `{` and leaves it on the closing `}`
    /// (or on end of input if the block is never closed). Statements that
    /// fail to parse are recorded and skipped, like at the top level.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut block = BlockStatement::default();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => block.statements.push(statement),
                Err(error) => self.record(error),
            }
            self.next_token();
        }

        block
    }
}
