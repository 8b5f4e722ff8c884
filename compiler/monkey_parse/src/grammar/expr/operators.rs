//! Precedence table and operator matching.
//!
//! Dispatch is a static `match` on the token kind; nothing is registered
//! at runtime.

use monkey_ir::{BinaryOp, PrefixOp, TokenKind};

/// Binding power, lowest to highest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

/// How a token continues an expression already parsed to its left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum InfixRule {
    Binary(BinaryOp),
    Call,
    Index,
}

impl InfixRule {
    /// The infix rule for a token, or `None` if it cannot continue an expression.
    pub(crate) fn for_token(kind: TokenKind) -> Option<InfixRule> {
        let rule = match kind {
            TokenKind::EqEq => InfixRule::Binary(BinaryOp::Eq),
            TokenKind::NotEq => InfixRule::Binary(BinaryOp::NotEq),
            TokenKind::Lt => InfixRule::Binary(BinaryOp::Lt),
            TokenKind::Gt => InfixRule::Binary(BinaryOp::Gt),
            TokenKind::Plus => InfixRule::Binary(BinaryOp::Add),
            TokenKind::Minus => InfixRule::Binary(BinaryOp::Sub),
            TokenKind::Star => InfixRule::Binary(BinaryOp::Mul),
            TokenKind::Slash => InfixRule::Binary(BinaryOp::Div),
            TokenKind::LParen => InfixRule::Call,
            TokenKind::LBracket => InfixRule::Index,
            _ => return None,
        };
        Some(rule)
    }

    pub(crate) fn precedence(self) -> Precedence {
        match self {
            InfixRule::Binary(BinaryOp::Eq | BinaryOp::NotEq) => Precedence::Equals,
            InfixRule::Binary(BinaryOp::Lt | BinaryOp::Gt) => Precedence::LessGreater,
            InfixRule::Binary(BinaryOp::Add | BinaryOp::Sub) => Precedence::Sum,
            InfixRule::Binary(BinaryOp::Mul | BinaryOp::Div) => Precedence::Product,
            InfixRule::Call => Precedence::Call,
            InfixRule::Index => Precedence::Index,
        }
    }
}

pub(crate) fn match_prefix_op(kind: TokenKind) -> Option<PrefixOp> {
    match kind {
        TokenKind::Bang => Some(PrefixOp::Not),
        TokenKind::Minus => Some(PrefixOp::Neg),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(Precedence::Lowest < Precedence::Equals);
        assert!(Precedence::Equals < Precedence::LessGreater);
        assert!(Precedence::LessGreater < Precedence::Sum);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Product < Precedence::Prefix);
        assert!(Precedence::Prefix < Precedence::Call);
        assert!(Precedence::Call < Precedence::Index);
    }

    fn precedence_of(kind: TokenKind) -> Option<Precedence> {
        InfixRule::for_token(kind).map(InfixRule::precedence)
    }

    #[test]
    fn token_precedences() {
        assert_eq!(precedence_of(TokenKind::NotEq), Some(Precedence::Equals));
        assert_eq!(precedence_of(TokenKind::Gt), Some(Precedence::LessGreater));
        assert_eq!(precedence_of(TokenKind::Minus), Some(Precedence::Sum));
        assert_eq!(precedence_of(TokenKind::Slash), Some(Precedence::Product));
        assert_eq!(precedence_of(TokenKind::LParen), Some(Precedence::Call));
        assert_eq!(precedence_of(TokenKind::LBracket), Some(Precedence::Index));
    }

    #[test]
    fn non_operators_have_no_infix_rule() {
        for kind in [
            TokenKind::Semicolon,
            TokenKind::Bang,
            TokenKind::RParen,
            TokenKind::Comma,
            TokenKind::Int,
            TokenKind::Eof,
        ] {
            assert_eq!(InfixRule::for_token(kind), None, "{kind}");
        }
    }
}
