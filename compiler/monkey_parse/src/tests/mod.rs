//! Parser tests.
//!
//! - `parser`: statements, literals and the shape of each production
//! - `precedence`: operator binding checked through canonical rendering
//! - `errors`: diagnostic messages and recovery
//! - `properties`: proptest round-trips through the canonical form

use crate::{parse, ParseOutput};

mod precedence;

fn parse_source(source: &str) -> ParseOutput {
    parse(monkey_lexer::lex(source))
}
