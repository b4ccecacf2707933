use std::rc::Rc;

use crate::{
    ast::{Expression, FunctionLiteral, Identifier, PrefixOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::TokenKind,
    },
};

impl Parser<'_> {
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(Identifier::new(self.current.literal.clone())))
    }

    /// Parses a decimal integer literal.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidInteger` if the digits do not fit in a
    /// 64-bit signed integer.
    pub(in crate::interpreter::parser) fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        self.current
            .literal
            .parse::<i64>()
            .map(Expression::Integer)
            .map_err(|_| ParseError::InvalidInteger { literal: self.current.literal.clone(),
                                                      line:    self.current.line, })
    }

    pub(in crate::interpreter::parser) fn parse_string_literal(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Str(self.current.literal.clone()))
    }

    pub(in crate::interpreter::parser) fn parse_boolean(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Boolean(self.current_is(TokenKind::True)))
    }

    /// Parses `!<expression>` or `-<expression>`.
    ///
    /// The operand is parsed at prefix precedence, so `-a * b` is
    /// `((-a) * b)`.
    pub(in crate::interpreter::parser) fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let operator = if self.current_is(TokenKind::Bang) {
            PrefixOperator::Bang
        } else {
            PrefixOperator::Minus
        };

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { operator,
                                right: Box::new(right) })
    }

    /// Parses a parenthesized expression. Grouping leaves no node of its own
    /// in the tree.
    pub(in crate::interpreter::parser) fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expression)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedPeek` if a parenthesis or brace is
    /// missing.
    pub(in crate::interpreter::parser) fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        let condition = self.parse_parenthesized_condition()?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Parses `while (<condition>) { ... }`.
    pub(in crate::interpreter::parser) fn parse_while_expression(&mut self) -> ParseResult<Expression> {
        let condition = self.parse_parenthesized_condition()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();

        Ok(Expression::While { condition: Box::new(condition),
                               body })
    }

    /// Parses `fn(<parameters>) { ... }`.
    pub(in crate::interpreter::parser) fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();

        Ok(Expression::Function(Rc::new(FunctionLiteral { parameters, body })))
    }

    pub(in crate::interpreter::parser) fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        self.parse_expression_list(TokenKind::RBracket)
            .map(Expression::Array)
    }

    /// Parses `{<key>: <value>, ...}`.
    ///
    /// Keys may be arbitrary expressions; whether they are hashable is only
    /// known at run time. A trailing comma is not accepted.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedPeek` if a `:` is missing after a key,
    /// or if a pair is followed by anything but `,` or `}`.
    pub(in crate::interpreter::parser) fn parse_hash_literal(&mut self) -> ParseResult<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Ok(Expression::Hash(pairs))
    }

    fn parse_parenthesized_condition(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(condition)
    }
}
