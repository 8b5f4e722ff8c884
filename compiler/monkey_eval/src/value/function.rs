//! Closure values.

use std::fmt;
use std::rc::Rc;

use monkey_ir::{Block, Identifier};

use crate::Environment;

/// A user function together with the environment it was defined in.
///
/// Parameters and body are shared with the AST node that produced the
/// closure. The captured environment is shared with every other closure
/// defined in the same scope, so bindings added later are visible.
#[derive(Clone)]
pub struct FunctionValue {
    pub params: Rc<[Identifier]>,
    pub body: Rc<Block>,
    pub env: Environment,
}

impl FunctionValue {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

// The captured environment may contain this function, so it is left out.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.params.iter().map(|p| p.name.as_str()).collect();
        f.debug_struct("FunctionValue")
            .field("params", &params)
            .field("body", &self.body.to_string())
            .finish_non_exhaustive()
    }
}
