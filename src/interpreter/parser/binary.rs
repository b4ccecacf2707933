use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{
        parser::core::{ParseResult, Parser, Precedence},
        token::TokenKind,
    },
};

/// The infix parse function registered for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infix {
    /// A binary operator: `left <op> right`.
    Operator(InfixOperator),
    /// A call: `left(arguments)`.
    Call,
    /// An index: `left[index]`.
    Index,
}

impl Infix {
    /// Returns the infix parse function for `kind`, or `None` if the token
    /// cannot continue an expression.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Option<Self> {
        let operator = match kind {
            TokenKind::Plus => InfixOperator::Plus,
            TokenKind::Minus => InfixOperator::Minus,
            TokenKind::Asterisk => InfixOperator::Asterisk,
            TokenKind::Slash => InfixOperator::Slash,
            TokenKind::Lt => InfixOperator::Lt,
            TokenKind::Gt => InfixOperator::Gt,
            TokenKind::Equal => InfixOperator::Equal,
            TokenKind::NotEqual => InfixOperator::NotEqual,
            TokenKind::LParen => return Some(Self::Call),
            TokenKind::LBracket => return Some(Self::Index),
            _ => return None,
        };
        Some(Self::Operator(operator))
    }
}

impl Parser<'_> {
    /// Parses the right operand of a binary operator.
    ///
    /// Expects the current token to be the operator. The right operand is
    /// parsed at the operator's own precedence, which groups chains of equal
    /// precedence to the left: `a - b - c` is `((a - b) - c)`.
    pub(in crate::interpreter::parser) fn parse_infix_expression(&mut self,
                                                                 left: Expression,
                                                                 operator: InfixOperator)
                                                                 -> ParseResult<Expression> {
        let precedence = Precedence::of(self.current.kind);
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix { left: Box::new(left),
                               operator,
                               right: Box::new(right) })
    }

    /// Parses the argument list of a call whose callee is `function`.
    pub(in crate::interpreter::parser) fn parse_call_expression(&mut self,
                                                                function: Expression)
                                                                -> ParseResult<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Ok(Expression::Call { function: Box::new(function),
                              arguments })
    }

    /// Parses `[<index>]` following `left`.
    pub(in crate::interpreter::parser) fn parse_index_expression(&mut self,
                                                                 left: Expression)
                                                                 -> ParseResult<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expression::Index { left:  Box::new(left),
                               index: Box::new(index), })
    }
}
