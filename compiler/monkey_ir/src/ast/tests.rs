use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;

fn expr(kind: ExprKind) -> Expr {
    Expr::new(kind, Span::DUMMY)
}

fn ident(name: &str) -> Expr {
    expr(ExprKind::Ident(name.to_string()))
}

fn int(value: i64) -> Expr {
    expr(ExprKind::Int(value))
}

fn expr_stmt(e: Expr) -> Stmt {
    Stmt::new(StmtKind::Expression(e), Span::DUMMY)
}

#[test]
fn let_statement_renders_with_semicolon() {
    let program = Program {
        statements: vec![Stmt::new(
            StmtKind::Let {
                name: Identifier::new("myVar", Span::DUMMY),
                value: ident("anotherVar"),
            },
            Span::DUMMY,
        )],
    };
    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn operators_are_fully_parenthesized() {
    let neg = expr(ExprKind::Prefix {
        op: PrefixOp::Neg,
        operand: Box::new(ident("a")),
    });
    let product = expr(ExprKind::Infix {
        op: BinaryOp::Mul,
        left: Box::new(neg),
        right: Box::new(ident("b")),
    });
    assert_eq!(product.to_string(), "((-a) * b)");
}

#[test]
fn function_literal_renders_params_and_body() {
    let body = Block {
        statements: vec![expr_stmt(expr(ExprKind::Infix {
            op: BinaryOp::Add,
            left: Box::new(ident("x")),
            right: Box::new(int(2)),
        }))],
        span: Span::DUMMY,
    };
    let func = expr(ExprKind::Function {
        params: Rc::from(vec![
            Identifier::new("x", Span::DUMMY),
            Identifier::new("y", Span::DUMMY),
        ]),
        body: Rc::new(body),
    });
    assert_eq!(func.to_string(), "fn(x, y) (x + 2)");
}

#[test]
fn if_else_renders_both_branches() {
    let if_expr = expr(ExprKind::If {
        condition: Box::new(expr(ExprKind::Infix {
            op: BinaryOp::Lt,
            left: Box::new(ident("x")),
            right: Box::new(ident("y")),
        })),
        consequence: Block {
            statements: vec![expr_stmt(ident("x"))],
            span: Span::DUMMY,
        },
        alternative: Some(Block {
            statements: vec![expr_stmt(ident("y"))],
            span: Span::DUMMY,
        }),
    });
    assert_eq!(if_expr.to_string(), "if(x < y) xelse y");
}

#[test]
fn collections_and_calls() {
    let call = expr(ExprKind::Call {
        callee: Box::new(ident("add")),
        args: vec![int(1), expr(ExprKind::Str("two".to_string()))],
    });
    assert_eq!(call.to_string(), "add(1, \"two\")");

    let index = expr(ExprKind::Index {
        collection: Box::new(expr(ExprKind::Array(vec![int(1), int(2)]))),
        index: Box::new(int(0)),
    });
    assert_eq!(index.to_string(), "([1, 2][0])");

    let hash = expr(ExprKind::Hash(vec![
        (expr(ExprKind::Str("one".to_string())), int(1)),
        (expr(ExprKind::Bool(true)), int(2)),
    ]));
    assert_eq!(hash.to_string(), "{\"one\":1, true:2}");
}

#[test]
fn return_and_nested_block() {
    let stmt = Stmt::new(
        StmtKind::Block(Block {
            statements: vec![Stmt::new(StmtKind::Return(int(5)), Span::DUMMY)],
            span: Span::DUMMY,
        }),
        Span::DUMMY,
    );
    assert_eq!(stmt.to_string(), "return 5;");
}

#[test]
fn deep_nesting_renders_and_drops() {
    let depth = 200_000;
    let mut nested = expr(ExprKind::Bool(true));
    for _ in 0..depth {
        nested = expr(ExprKind::Prefix {
            op: PrefixOp::Not,
            operand: Box::new(nested),
        });
    }
    let rendered = nested.to_string();
    assert_eq!(rendered.len(), depth * 3 + "true".len());
    assert!(rendered.starts_with("(!(!"));
    assert!(rendered.ends_with("true))"));
    drop(nested);
}
