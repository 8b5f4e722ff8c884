//! Lexer for Monkey source text.
//!
//! Scanning is done by a `logos`-generated DFA over [`RawToken`]; the public
//! [`Lexer`] wraps it and produces owned [`Token`]s with spans. The stream
//! always ends with exactly one `Eof` token. Input that matches no rule
//! becomes an `Illegal` token rather than an error, so the parser can report
//! it in context.

use logos::Logos;
use monkey_ir::{Span, Token, TokenKind};
use tracing::debug;

/// Raw token produced by the generated scanner.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    // Keywords
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // Operators
    #[token("=")]
    Assign,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Delimiters
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Literals
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""[^"]*""#)]
    Str,
    /// A string missing its closing quote; runs to end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedStr,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Function => TokenKind::Function,
            RawToken::Let => TokenKind::Let,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::Return => TokenKind::Return,
            RawToken::Assign => TokenKind::Assign,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Int => TokenKind::Int,
            RawToken::Str => TokenKind::Str,
            RawToken::UnterminatedStr => TokenKind::Illegal,
            RawToken::Ident => TokenKind::Ident,
        }
    }
}

/// Pull-based token source over a string slice.
///
/// Yields every token of the input followed by a single `Eof`, then `None`.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    source_len: u32,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
            // Sources past 4 GiB lose positions, not tokens.
            source_len: u32::try_from(source.len()).unwrap_or(u32::MAX),
            finished: false,
        }
    }

    fn current_span(&self) -> Span {
        Span::try_from_range(self.inner.span()).unwrap_or_default()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let Some(result) = self.inner.next() else {
            self.finished = true;
            return Some(Token::eof(self.source_len));
        };

        let span = self.current_span();
        let slice = self.inner.slice();
        let token = match result {
            Ok(RawToken::Str) => Token::new(TokenKind::Str, &slice[1..slice.len() - 1], span),
            Ok(raw) => Token::new(TokenKind::from(raw), slice, span),
            Err(()) => Token::new(TokenKind::Illegal, slice, span),
        };
        Some(token)
    }
}

/// Tokenize an entire source string, ending with `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    debug!(count = tokens.len(), "lexed source");
    tokens
}
