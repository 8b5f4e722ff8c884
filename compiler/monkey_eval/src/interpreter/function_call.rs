//! Function call evaluation.

use super::Interpreter;
use crate::errors::{
    not_callable, recursion_limit_exceeded, wrong_arg_count, ControlAction, EvalError,
};
use crate::value::FunctionValue;
use crate::{Environment, EvalResult, Value};

impl Interpreter {
    /// Apply `callee` to already-evaluated arguments.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = callee.type_name(), argc = args.len())
    )]
    pub(super) fn eval_call(&mut self, callee: &Value, args: &[Value]) -> EvalResult {
        match callee {
            Value::Function(func) => self.call_function(func, args),
            Value::Builtin(builtin) => Ok(builtin.call(args, &self.print_handler)?),
            _ => Err(not_callable(callee).into()),
        }
    }

    fn call_function(&mut self, func: &FunctionValue, args: &[Value]) -> EvalResult {
        if args.len() != func.arity() {
            return Err(wrong_arg_count(func.arity(), args.len()).into());
        }
        self.check_recursion_limit()?;

        let call_env = Environment::new_enclosed(&func.env);
        for (param, arg) in func.params.iter().zip(args) {
            call_env.set(param.name.as_str(), arg.clone());
        }

        let caller_env = std::mem::replace(&mut self.env, call_env);
        self.call_depth += 1;
        let result = self.eval_block(&func.body);
        self.call_depth -= 1;
        self.env = caller_env;

        // A `return` stops at the function boundary.
        match result {
            Err(ControlAction::Return(value)) => Ok(value),
            other => other,
        }
    }

    fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if self.call_depth >= self.max_call_depth {
            return Err(recursion_limit_exceeded(self.max_call_depth));
        }
        Ok(())
    }
}
