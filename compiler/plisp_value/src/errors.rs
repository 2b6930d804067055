//! Evaluation errors.
//!
//! Errors are data. A failed lookup, a bad argument or a division by zero
//! produces a `Value::Error` that flows through reduction like any other
//! value; nothing here unwinds or aborts.
//!
//! `EvalErrorKind` keeps the structured payload (which builtin, which
//! argument index, which kinds were expected and found). Message text is
//! only produced by `Display`, at the point an error is printed.
//!
//! Factory functions (`division_by_zero()`, `type_mismatch(..)`, ...) are the
//! construction API.

use std::fmt;

use crate::builtin::Builtin;
use crate::value::{DisplayNumber, Value, ValueKind};

/// Result of a fallible evaluation step.
///
/// Builtins are written against this type so validation can use `?`; the
/// evaluator folds `Err` back into `Value::Error` at the dispatch boundary.
pub type EvalResult = Result<Value, EvalError>;

/// Structured error category.
#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    // Reading
    InvalidNumber {
        text: String,
    },

    // Evaluation
    UnboundSymbol {
        name: String,
    },
    NotAFunction {
        got: ValueKind,
    },
    RecursionLimit {
        limit: usize,
    },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    NonIntegralModulo {
        lhs: f64,
        rhs: f64,
    },

    // Builtin contracts
    ArityMismatch {
        builtin: Builtin,
        expected: usize,
        got: usize,
    },
    TooFewArguments {
        builtin: Builtin,
        min: usize,
        got: usize,
    },
    TypeMismatch {
        builtin: Builtin,
        index: usize,
        expected: ValueKind,
        got: ValueKind,
    },
    EmptyList {
        builtin: Builtin,
        index: usize,
    },
    NonSymbolBinding {
        got: ValueKind,
    },
    BindingCountMismatch {
        symbols: usize,
        values: usize,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Reading
            Self::InvalidNumber { text } => write!(f, "invalid number '{text}'"),

            // Evaluation
            Self::UnboundSymbol { name } => write!(f, "unbound symbol '{name}'"),
            Self::NotAFunction { got } => {
                write!(f, "first element is not a function, got '{got}'")
            }
            Self::RecursionLimit { limit } => {
                write!(f, "maximum evaluation depth of {limit} exceeded")
            }

            // Arithmetic
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::ModuloByZero => write!(f, "Modulo by zero"),
            Self::NonIntegralModulo { lhs, rhs } => write!(
                f,
                "Modulo works only on integers, got x={} and y={}.",
                DisplayNumber(*lhs),
                DisplayNumber(*rhs)
            ),

            // Builtin contracts
            Self::ArityMismatch {
                builtin,
                expected,
                got,
            } => {
                let amount = if got > expected { "many" } else { "few" };
                write!(
                    f,
                    "Function '{builtin}' passed too {amount} arguments! Got {got}, expected {expected}."
                )
            }
            Self::TooFewArguments { builtin, min, got } => write!(
                f,
                "Function '{builtin}' passed too few arguments! Got {got}, expected at least {min}."
            ),
            Self::TypeMismatch {
                builtin,
                index,
                expected,
                got,
            } => write!(
                f,
                "Function '{builtin}' passed incorrect type at index {index}! Got {got}, expected {expected}."
            ),
            Self::EmptyList { builtin, index } => {
                write!(f, "Function '{builtin}' passed {{}} as argument at index {index}!")
            }
            Self::NonSymbolBinding { got } => write!(
                f,
                "Function 'def' cannot define non-symbol. Got {got} and expected {}.",
                ValueKind::Symbol
            ),
            Self::BindingCountMismatch { symbols, values } => write!(
                f,
                "Function 'def' cannot define incorrect number of values to symbols. Got {symbols} symbols and {values} values."
            ),
        }
    }
}

/// An evaluation error, carried inside `Value::Error`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: EvalErrorKind,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        Self { kind }
    }

    /// The structured category of this error.
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Reading Errors

/// A numeric literal that does not fit an `f64`.
#[cold]
pub fn invalid_number(text: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumber {
        text: text.to_string(),
    })
}

// Evaluation Errors

/// Symbol with no binding in the environment.
#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    })
}

/// Reduced s-expression whose head is not a function.
#[cold]
pub fn not_a_function(got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction { got })
}

/// Nesting deeper than the configured evaluation limit.
#[cold]
pub fn recursion_limit(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

// Arithmetic Errors

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Remainder with a zero divisor.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Remainder with a non-integral operand.
#[cold]
pub fn non_integral_modulo(lhs: f64, rhs: f64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonIntegralModulo { lhs, rhs })
}

// Builtin Contract Errors

/// Wrong number of arguments for a fixed-arity builtin.
#[cold]
pub fn arity_mismatch(builtin: Builtin, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        builtin,
        expected,
        got,
    })
}

/// Too few arguments for a variadic builtin.
#[cold]
pub fn too_few_arguments(builtin: Builtin, min: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooFewArguments { builtin, min, got })
}

/// Argument of the wrong kind.
#[cold]
pub fn type_mismatch(builtin: Builtin, index: usize, expected: ValueKind, got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        builtin,
        index,
        expected,
        got,
    })
}

/// `{}` where a non-empty list is required.
#[cold]
pub fn empty_list(builtin: Builtin, index: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyList { builtin, index })
}

/// Non-symbol inside the binding list of `def`.
#[cold]
pub fn non_symbol_binding(got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonSymbolBinding { got })
}

/// `def` with a different number of symbols and values.
#[cold]
pub fn binding_count_mismatch(symbols: usize, values: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BindingCountMismatch { symbols, values })
}
