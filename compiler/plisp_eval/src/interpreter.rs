//! End-to-end interpreter: source text in, value out.

use plisp_parse::{parse, ParseError, ParseNode};
use plisp_value::Value;

use crate::environment::Environment;
use crate::evaluator::{EvalConfig, Evaluator};
use crate::reader::{read, ReadError};

/// Failure before evaluation starts.
///
/// Evaluation itself never fails; its errors are `Value::Error` results.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InterpretError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Read(#[from] ReadError),
}

/// An environment with the builtins registered, plus evaluator settings.
///
/// Definitions persist across calls for the life of the interpreter.
#[derive(Clone, Debug)]
pub struct Interpreter {
    env: Environment,
    config: EvalConfig,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Interpreter {
            env: Environment::with_builtins(),
            config,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Evaluate an already-read value.
    pub fn eval(&mut self, value: Value) -> Value {
        Evaluator::with_config(&mut self.env, self.config).eval(value)
    }

    /// Read and evaluate a parse tree.
    pub fn eval_node(&mut self, node: &ParseNode) -> Result<Value, ReadError> {
        let value = read(node)?;
        Ok(self.eval(value))
    }

    /// Parse, read and evaluate one line of source.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval_str(&mut self, source: &str) -> Result<Value, InterpretError> {
        let tree = parse(source)?;
        let result = self.eval_node(&tree)?;
        if let Some(err) = result.as_error() {
            tracing::debug!(%err, "evaluated to error");
        }
        Ok(result)
    }
}
