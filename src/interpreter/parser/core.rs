use crate::{
    ast::{Expression, Program},
    error::{ParseError, ParseErrors},
    interpreter::{
        lexer::Lexer,
        parser::binary::Infix,
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Signature of the functions that parse an expression starting at the
/// current token.
pub(in crate::interpreter::parser) type PrefixParseFn<'source> =
    fn(&mut Parser<'source>) -> ParseResult<Expression>;

/// Binding power of operators, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that does not continue an expression.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `!` and `-`
    Prefix,
    /// Calls `f(x)` and indexing `a[i]`
    Call,
}

impl Precedence {
    /// Returns the precedence a token has when it appears in infix position.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Equal | TokenKind::NotEqual => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen | TokenKind::LBracket => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Builds a syntax tree from source text.
///
/// The parser pulls tokens from a [`Lexer`] with one token of lookahead.
/// Errors never abort the parse: they are recorded, the offending statement
/// is skipped, and parsing resumes with the next token. Callers must check
/// [`Parser::errors`] before trusting the returned program.
///
/// # Example
/// ```
/// use monkey::interpreter::parser::core::Parser;
///
/// let mut parser = Parser::new("if (x > 1) { x } else { 1 + }");
/// let _program = parser.parse_program();
///
/// let messages: Vec<String> = parser.errors().iter().map(ToString::to_string).collect();
/// assert_eq!(messages, ["no prefix parse function for RBRACE found"]);
/// ```
pub struct Parser<'source> {
    lexer:   Lexer<'source>,
    /// The token being parsed.
    pub(in crate::interpreter::parser) current: Token,
    /// The token after `current`.
    pub(in crate::interpreter::parser) peek:    Token,
    errors:  Vec<ParseError>,
}

impl<'source> Parser<'source> {
    /// Creates a parser positioned at the first token of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Self { lexer,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Parses the whole input.
    ///
    /// Statements that fail to parse are left out of the program and their
    /// errors are recorded.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => self.record(error),
            }
            self.next_token();
        }

        tracing::debug!(statements = program.statements.len(),
                        errors = self.errors.len(),
                        "parsed program");
        program
    }

    /// Returns the errors recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Hands over the recorded errors, leaving the parser's list empty.
    pub fn take_errors(&mut self) -> ParseErrors {
        ParseErrors(std::mem::take(&mut self.errors))
    }

    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// The current token's prefix function produces the left operand. While
    /// the next token is an infix operator binding tighter than `precedence`,
    /// it is consumed and its infix function extends the left operand. Equal
    /// precedence stops the loop, which makes binary operators
    /// left-associative.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let Some(prefix) = Self::prefix_parser(self.current.kind) else {
            return Err(ParseError::NoPrefixParser { kind: self.current.kind,
                                                    line: self.current.line, });
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            let Some(infix) = Infix::of(self.peek.kind) else {
                return Ok(left);
            };

            self.next_token();
            left = match infix {
                Infix::Operator(operator) => self.parse_infix_expression(left, operator)?,
                Infix::Call => self.parse_call_expression(left)?,
                Infix::Index => self.parse_index_expression(left)?,
            };
        }

        Ok(left)
    }

    /// Returns the prefix parse function registered for `kind`, if any.
    fn prefix_parser(kind: TokenKind) -> Option<PrefixParseFn<'source>> {
        let parser: PrefixParseFn<'source> = match kind {
            TokenKind::Identifier => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::String => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::While => Self::parse_while_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::LBracket => Self::parse_array_literal,
            TokenKind::LBrace => Self::parse_hash_literal,
            _ => return None,
        };
        Some(parser)
    }

    /// Advances by one token.
    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(in crate::interpreter::parser) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    pub(in crate::interpreter::parser) fn record(&mut self, error: ParseError) {
        tracing::trace!(%error, "recorded parse error");
        self.errors.push(error);
    }
}
