//! Canonical rendering of AST nodes.
//!
//! Every prefix and infix expression is fully parenthesized, so the
//! rendering shows exactly how the parser grouped operators:
//! `-a * b` renders as `((-a) * b)` and `a + b[0]` as `(a + (b[0]))`.
//! Blocks render as their statements concatenated, without braces.

use std::fmt::{self, Display, Formatter, Write as _};

use monkey_stack::ensure_sufficient_stack;

use super::{Block, Expr, ExprKind, Identifier, Program, Stmt, StmtKind};

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|stmt| write!(f, "{stmt}"))
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|stmt| write!(f, "{stmt}"))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {name} = {value};"),
            StmtKind::Return(value) => write!(f, "return {value};"),
            StmtKind::Expression(expr) => write!(f, "{expr}"),
            StmtKind::Block(block) => write!(f, "{block}"),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_kind(f))
    }
}

impl Expr {
    fn fmt_kind(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Ident(name) => f.write_str(name),
            ExprKind::Int(value) => write!(f, "{value}"),
            ExprKind::Str(value) => {
                f.write_char('"')?;
                f.write_str(value)?;
                f.write_char('"')
            }
            ExprKind::Bool(value) => write!(f, "{value}"),
            ExprKind::Prefix { op, operand } => write!(f, "({op}{operand})"),
            ExprKind::Infix { op, left, right } => write!(f, "({left} {op} {right})"),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alt) = alternative {
                    write!(f, "else {alt}")?;
                }
                Ok(())
            }
            ExprKind::Function { params, body } => {
                f.write_str("fn(")?;
                write_list(f, params)?;
                write!(f, ") {body}")
            }
            ExprKind::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_list(f, args)?;
                f.write_char(')')
            }
            ExprKind::Array(elements) => {
                f.write_char('[')?;
                write_list(f, elements)?;
                f.write_char(']')
            }
            ExprKind::Index { collection, index } => write!(f, "({collection}[{index}])"),
            ExprKind::Hash(pairs) => {
                f.write_char('{')?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_char('}')
            }
        }
    }
}
