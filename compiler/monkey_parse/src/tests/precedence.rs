//! Operator precedence and associativity, checked through the fully
//! parenthesized rendering of each parsed program.

use pretty_assertions::assert_eq;

use super::parse_source;

#[test]
fn operator_precedence_parsing() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        (
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g))",
        ),
        (
            "a * [1, 2, 3, 4][b * c] * d",
            "((a * ([1, 2, 3, 4][(b * c)])) * d)",
        ),
        (
            "add(a * b[2], b[1], 2 * [1, 2][1])",
            "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
        ),
        ("a[0][1]", "((a[0])[1])"),
        ("f(1)(2)", "f(1)(2)"),
        ("-f(x)", "(-f(x))"),
        ("-a[0]", "(-(a[0]))"),
    ];

    for (source, expected) in cases {
        let output = parse_source(source);
        assert!(
            !output.has_errors(),
            "errors for {source:?}: {:?}",
            output.messages()
        );
        assert_eq!(output.program.to_string(), expected, "source: {source:?}");
    }
}

#[test]
fn semicolon_ends_expression() {
    let output = parse_source("a; + b");
    // `+ b` cannot start an expression, so it is reported separately.
    assert_eq!(output.program.to_string(), "ab");
    assert_eq!(output.messages(), vec!["no prefix parse function for +"]);
}
