//! Runtime values for the plisp interpreter.
//!
//! # Construction
//!
//! Values are built through factory methods:
//!
//! ```text
//! let n = Value::number(5.0);
//! let s = Value::symbol("head");
//! let q = Value::qexpr([Value::number(1.0), Value::number(2.0)]);
//! ```
//!
//! # Copy and Release
//!
//! `Clone` is the deep copy: numbers and function values are copied
//! bitwise, strings are duplicated, and lists clone every child. `Drop` is
//! the matching recursive release. Since no subtree ever has two owners,
//! neither operation needs reference counts.

mod cells;

use std::fmt;

use plisp_stack::ensure_sufficient_stack;

pub use cells::Cells;

use crate::builtin::Builtin;
use crate::errors::EvalError;

/// Whether a number has no fractional part.
///
/// Numbers are always `f64`; integer-ness is derived from the value by
/// comparing it to its ceiling.
#[inline]
pub fn is_integral(n: f64) -> bool {
    n.ceil() == n
}

/// Runtime value.
///
/// `PartialEq` is host-side structural equality. The language itself never
/// compares values; functions compare by which builtin they name.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Double-precision number.
    Number(f64),
    /// Error produced while reading or evaluating.
    Error(EvalError),
    /// Identifier awaiting resolution.
    Symbol(String),
    /// Primitive operation.
    Function(Builtin),
    /// Expression: reduced by evaluating children, then applying the head.
    SExpr(Cells),
    /// Quoted list: evaluates to itself.
    QExpr(Cells),
}

impl Value {
    // Factory methods

    /// Create a number.
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a symbol.
    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create a function value for a builtin.
    #[inline]
    pub fn function(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }

    /// Create an s-expression from the given children.
    pub fn sexpr(cells: impl IntoIterator<Item = Value>) -> Self {
        Value::SExpr(cells.into_iter().collect())
    }

    /// Create a q-expression from the given children.
    pub fn qexpr(cells: impl IntoIterator<Item = Value>) -> Self {
        Value::QExpr(cells.into_iter().collect())
    }

    /// Create `()`, the "no value" result.
    #[inline]
    pub fn empty_sexpr() -> Self {
        Value::SExpr(Cells::new())
    }

    /// Create `{}`.
    #[inline]
    pub fn empty_qexpr() -> Self {
        Value::QExpr(Cells::new())
    }

    // Inspection

    /// The variant of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Error(_) => ValueKind::Error,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Function(_) => ValueKind::Function,
            Value::SExpr(_) => ValueKind::SExpr,
            Value::QExpr(_) => ValueKind::QExpr,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    #[inline]
    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Children of either list variant.
    pub fn cells(&self) -> Option<&Cells> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Mutable children of either list variant.
    pub fn cells_mut(&mut self) -> Option<&mut Cells> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Builtin> for Value {
    fn from(builtin: Builtin) -> Self {
        Value::Function(builtin)
    }
}

/// The variant of a value, without its payload.
///
/// Used in error messages to name what was expected and what was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Error,
    Symbol,
    Function,
    SExpr,
    QExpr,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "Number",
            ValueKind::Error => "Error",
            ValueKind::Symbol => "Symbol",
            ValueKind::Function => "Function",
            ValueKind::SExpr => "S-Expression",
            ValueKind::QExpr => "Q-Expression",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Prints a number the way the printer does: no decimals when integral,
/// two decimals otherwise.
#[derive(Clone, Copy, Debug)]
pub struct DisplayNumber(pub f64);

impl fmt::Display for DisplayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if is_integral(n) {
            write!(f, "{n:.0}")
        } else {
            write!(f, "{n:.2}")
        }
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &Cells, open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        ensure_sufficient_stack(|| write!(f, "{cell}"))?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", DisplayNumber(*n)),
            Value::Error(err) => write!(f, "Error {err}"),
            Value::Symbol(name) => f.write_str(name),
            Value::Function(_) => f.write_str("<function>"),
            Value::SExpr(cells) => write_cells(f, cells, '(', ')'),
            Value::QExpr(cells) => write_cells(f, cells, '{', '}'),
        }
    }
}

#[cfg(test)]
mod tests;
