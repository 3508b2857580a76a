use std::fmt;

use logos::Logos;

/// Represents a lexical token in calculator input.
///
/// This vocabulary is intentionally distinct from the script tokenizer's:
/// the calculator understands numbers, variables, the four arithmetic
/// operators, and assignment — nothing else. Any unmatched character is a
/// lexing error, which the evaluator reports as a fatal condition.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
pub enum CalcToken {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Assign,
    /// Variable name tokens, such as `x`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Variable(String),
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Assign => write!(f, "="),
            Self::Variable(name) => write!(f, "{name}"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits.
/// - `None`: If the digit run overflows `i64` (the token then lexes as an
///   error and the evaluator reports it).
fn parse_integer(lex: &logos::Lexer<CalcToken>) -> Option<i64> {
    lex.slice().parse().ok()
}
