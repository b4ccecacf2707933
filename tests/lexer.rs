use monkey::interpreter::{
    lexer::Lexer,
    token::{Token, TokenKind},
};
use pretty_assertions::assert_eq;

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(source).map(|token| (token.kind, token.literal))
                      .collect()
}

fn expect(source: &str, expected: &[(TokenKind, &str)]) {
    let expected: Vec<(TokenKind, String)> = expected.iter()
                                                     .map(|(kind, literal)| (*kind, (*literal).to_string()))
                                                     .collect();

    assert_eq!(kinds_and_literals(source), expected);
}

#[test]
fn single_character_tokens() {
    use TokenKind::*;

    expect("=+(){},;",
           &[(Assign, "="),
             (Plus, "+"),
             (LParen, "("),
             (RParen, ")"),
             (LBrace, "{"),
             (RBrace, "}"),
             (Comma, ","),
             (Semicolon, ";")]);
    expect("!-/*<>[]:",
           &[(Bang, "!"),
             (Minus, "-"),
             (Slash, "/"),
             (Asterisk, "*"),
             (Lt, "<"),
             (Gt, ">"),
             (LBracket, "["),
             (RBracket, "]"),
             (Colon, ":")]);
}

#[test]
fn two_character_operators_need_lookahead() {
    use TokenKind::*;

    expect("== != = ! =!",
           &[(Equal, "=="),
             (NotEqual, "!="),
             (Assign, "="),
             (Bang, "!"),
             (Assign, "="),
             (Bang, "!")]);
    expect("10 == 10; 10 != 9;",
           &[(Int, "10"),
             (Equal, "=="),
             (Int, "10"),
             (Semicolon, ";"),
             (Int, "10"),
             (NotEqual, "!="),
             (Int, "9"),
             (Semicolon, ";")]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::*;

    expect("fn if else return var true false while",
           &[(Function, "fn"),
             (If, "if"),
             (Else, "else"),
             (Return, "return"),
             (Var, "var"),
             (True, "true"),
             (False, "false"),
             (While, "while")]);
    expect("fnord iffy variable _private while_loop",
           &[(Identifier, "fnord"),
             (Identifier, "iffy"),
             (Identifier, "variable"),
             (Identifier, "_private"),
             (Identifier, "while_loop")]);
}

#[test]
fn identifiers_stop_at_digits() {
    use TokenKind::*;

    expect("abc123", &[(Identifier, "abc"), (Int, "123")]);
}

#[test]
fn strings() {
    use TokenKind::*;

    expect("\"foobar\" \"foo bar\" \"\"",
           &[(String, "foobar"), (String, "foo bar"), (String, "")]);
    expect("\"a\" + \"b\"", &[(String, "a"), (Plus, "+"), (String, "b")]);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    use TokenKind::*;

    expect("var s = \"abc; x",
           &[(Var, "var"), (Identifier, "s"), (Assign, "="), (String, "abc; x")]);
}

#[test]
fn illegal_characters_become_tokens() {
    use TokenKind::*;

    expect("5 $ 5", &[(Int, "5"), (Illegal, "$"), (Int, "5")]);
    expect("@", &[(Illegal, "@")]);
}

#[test]
fn full_program() {
    use TokenKind::*;

    let source = "var five = 5;
var add = fn(x, y) {
  x + y;
};
var result = add(five, 10);
if (5 < 10) { return true; } else { return false; }
while (x) { x }
{\"foo\": \"bar\"}[0]";

    expect(source,
           &[(Var, "var"),
             (Identifier, "five"),
             (Assign, "="),
             (Int, "5"),
             (Semicolon, ";"),
             (Var, "var"),
             (Identifier, "add"),
             (Assign, "="),
             (Function, "fn"),
             (LParen, "("),
             (Identifier, "x"),
             (Comma, ","),
             (Identifier, "y"),
             (RParen, ")"),
             (LBrace, "{"),
             (Identifier, "x"),
             (Plus, "+"),
             (Identifier, "y"),
             (Semicolon, ";"),
             (RBrace, "}"),
             (Semicolon, ";"),
             (Var, "var"),
             (Identifier, "result"),
             (Assign, "="),
             (Identifier, "add"),
             (LParen, "("),
             (Identifier, "five"),
             (Comma, ","),
             (Int, "10"),
             (RParen, ")"),
             (Semicolon, ";"),
             (If, "if"),
             (LParen, "("),
             (Int, "5"),
             (Lt, "<"),
             (Int, "10"),
             (RParen, ")"),
             (LBrace, "{"),
             (Return, "return"),
             (True, "true"),
             (Semicolon, ";"),
             (RBrace, "}"),
             (Else, "else"),
             (LBrace, "{"),
             (Return, "return"),
             (False, "false"),
             (Semicolon, ";"),
             (RBrace, "}"),
             (While, "while"),
             (LParen, "("),
             (Identifier, "x"),
             (RParen, ")"),
             (LBrace, "{"),
             (Identifier, "x"),
             (RBrace, "}"),
             (LBrace, "{"),
             (String, "foo"),
             (Colon, ":"),
             (String, "bar"),
             (RBrace, "}"),
             (LBracket, "["),
             (Int, "0"),
             (RBracket, "]")]);
}

#[test]
fn tokens_carry_line_numbers() {
    let lines: Vec<usize> = Lexer::new("a\nb\n\n  c\r\nd").map(|token| token.line).collect();

    assert_eq!(lines, [1, 2, 4, 5]);
}

#[test]
fn multiline_string_reports_its_first_line() {
    let tokens: Vec<Token> = Lexer::new("\"a\nb\" x").collect();

    assert_eq!(tokens,
               [Token::new(TokenKind::String, "a\nb", 1), Token::new(TokenKind::Identifier, "x", 2)]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn empty_input_is_end_of_input() {
    assert_eq!(Lexer::new("").next_token().kind, TokenKind::Eof);
    assert_eq!(Lexer::new(" \t\r\n ").next_token().kind, TokenKind::Eof);
}

#[test]
fn token_display() {
    assert_eq!(Token::new(TokenKind::Identifier, "five", 1).to_string(), "IDENTIFIER(five)");
    assert_eq!(TokenKind::NotEqual.to_string(), "NOT_EQUAL");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}
