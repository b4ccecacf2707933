use logos::Logos;

/// Represents the kind of a lexical token.
///
/// The lexer is generated from the attributes on this enum. Keywords are
/// declared as literal tokens, so they take priority over the identifier
/// pattern whenever the whole word matches (`fn` is a keyword, `fnord` is an
/// identifier).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// A character that does not start any valid token.
    Illegal,
    /// End of input. Produced forever once the source is exhausted.
    Eof,

    /// Identifier tokens, such as `x` or `new_adder`.
    #[regex(r"[a-zA-Z_]+")]
    Identifier,
    /// Integer literal tokens, such as `42`. There is no sign and no decimal
    /// point.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens, such as `"hello"`.
    ///
    /// An unterminated literal silently runs to the end of the input.
    #[regex(r#""[^"]*"?"#, count_newlines, allow_greedy = true)]
    String,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,

    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `fn`
    #[token("fn")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `var`
    #[token("var")]
    Var,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `while`
    #[token("while")]
    While,

    /// Line feeds. Never emitted, only counted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Keeps the line counter accurate across string literals spanning lines.
fn count_newlines(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex.extras.line += lex.slice().matches('\n').count();
    true
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Identifier => "IDENTIFIER",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Bang => "BANG",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::Semicolon => "SEMICOLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Function => "FUNCTION",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Var => "VAR",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::While => "WHILE",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
        };
        write!(f, "{name}")
    }
}

/// A minimal but meaningful unit of source text.
///
/// `literal` holds the exact text the token was produced from, except for
/// string literals, where it holds the contents without the surrounding
/// quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind:    TokenKind,
    /// The literal text captured for the token.
    pub literal: String,
    /// The source line the token starts on.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Plus, "+", 1);
    /// assert_eq!(token.to_string(), "PLUS(+)");
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.literal)
    }
}
