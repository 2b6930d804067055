//! Tree-walking evaluator.
//!
//! Reduction is strict, eager and left to right:
//!
//! - a symbol evaluates to a copy of its binding (or an unbound-symbol error);
//! - an s-expression evaluates every child, surfaces the lowest-index error
//!   if any, collapses to its only child if it has one, and otherwise
//!   applies its first child, which must be a function, to the rest;
//! - everything else evaluates to itself.
//!
//! Recursion depth follows list nesting (plus one level per `eval`). Each
//! level runs under `ensure_sufficient_stack`, and `EvalConfig::max_depth`
//! turns runaway self-evaluation into an error value.

use plisp_stack::ensure_sufficient_stack;
use plisp_value::{not_a_function, recursion_limit, Cells, Value};

use crate::builtins::apply_builtin;
use crate::environment::Environment;

/// Default nesting limit for a single top-level evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Evaluator settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest s-expression nesting a single evaluation may reach.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate `value` against `env` with default settings.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    Evaluator::new(env).eval(value)
}

/// One evaluation pass over an explicitly borrowed environment.
///
/// The evaluator keeps no state across top-level evaluations besides what
/// builtins write into the environment.
pub struct Evaluator<'env> {
    env: &'env mut Environment,
    depth: usize,
    max_depth: usize,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Self::with_config(env, EvalConfig::default())
    }

    pub fn with_config(env: &'env mut Environment, config: EvalConfig) -> Self {
        Evaluator {
            env,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// The environment being evaluated against.
    pub fn env(&mut self) -> &mut Environment {
        self.env
    }

    /// Current s-expression nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Reduce `value` to its result.
    pub fn eval(&mut self, value: Value) -> Value {
        match value {
            Value::Symbol(name) => self.env.get(&name),
            Value::SExpr(cells) => self.nested(cells),
            other => other,
        }
    }

    fn nested(&mut self, cells: Cells) -> Value {
        if self.depth >= self.max_depth {
            return Value::from(recursion_limit(self.max_depth));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_sexpr(cells));
        self.depth -= 1;
        result
    }

    #[tracing::instrument(level = "trace", skip_all, fields(len = cells.len(), depth = self.depth))]
    fn eval_sexpr(&mut self, cells: Cells) -> Value {
        let mut cells: Cells = cells.into_iter().map(|cell| self.eval(cell)).collect();

        if let Some(index) = cells.iter().position(Value::is_error) {
            return cells.take(index);
        }

        match cells.len() {
            0 => return Value::SExpr(cells),
            1 => return cells.take(0),
            _ => {}
        }

        match cells.remove(0) {
            Value::Function(builtin) => apply_builtin(self, builtin, cells),
            head => Value::from(not_a_function(head.kind())),
        }
    }
}
