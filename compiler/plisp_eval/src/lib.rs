//! Plisp Eval - reader and tree-walking evaluator.
//!
//! # Architecture
//!
//! - `read`: generic parse tree to `Value`
//! - `Environment`: flat symbol table; binds and looks up by deep copy
//! - `Evaluator`: strict left-to-right reduction of s-expressions against
//!   an explicitly passed `Environment`
//! - `apply_builtin`: direct enum dispatch over `Builtin`
//! - `Interpreter`: owns an environment and runs source text end to end
//!
//! # Re-exports
//!
//! The value types from `plisp_value` are re-exported for convenience.

mod builtins;
mod environment;
mod evaluator;
mod interpreter;
mod reader;

pub use plisp_value::{
    Builtin, Cells, EvalError, EvalErrorKind, EvalResult, Value, ValueKind,
};

pub use builtins::apply_builtin;
pub use environment::Environment;
pub use evaluator::{eval, EvalConfig, Evaluator, DEFAULT_MAX_DEPTH};
pub use interpreter::{InterpretError, Interpreter};
pub use reader::{read, ReadError};
