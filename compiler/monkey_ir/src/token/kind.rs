//! Token kinds for Monkey.

use std::fmt;

/// Token kinds for Monkey.
///
/// Payload-free: the source text of identifiers and literals lives in
/// [`Token::literal`](super::Token::literal).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Identifier: `foo`, `add_two`
    Ident,
    /// Integer literal: `42`
    Int,
    /// String literal: `"hello"` (literal holds the contents without quotes)
    Str,

    // Operators
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Lt,
    Gt,
    Bang,
    EqEq,
    NotEq,

    // Delimiters
    Comma,
    Colon,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,

    /// End of input. Always the last token of a stream.
    Eof,
    /// Input the lexer could not match.
    Illegal,
}

impl TokenKind {
    /// Name of this kind as it appears in parser diagnostics.
    ///
    /// Punctuation renders as its symbol, everything else as an upper-case tag.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Str => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Bang => "!",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
