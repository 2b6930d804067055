//! Plisp Value - the runtime data model of the plisp interpreter.
//!
//! This crate provides:
//! - `Value`: the closed set of runtime data (number, error, symbol,
//!   function, s-expression, q-expression)
//! - `Cells`: the owned child sequence of the two list variants
//! - `Builtin`: the primitive operations, by name
//! - `EvalError` / `EvalErrorKind`: structured errors carried by `Value::Error`
//!
//! # Ownership
//!
//! Every list owns its children outright. Nothing is shared: handing a value
//! to another owner either moves it or clones the whole subtree, and dropping
//! a list drops everything below it. The evaluator and the environment rely
//! on this to treat values as plain data.
//!
//! # Printing
//!
//! `Display` on `Value` is the printer. It never mutates the value.

mod builtin;
mod errors;
mod value;

pub use builtin::Builtin;
pub use errors::{
    arity_mismatch, binding_count_mismatch, division_by_zero, empty_list, invalid_number,
    modulo_by_zero, non_integral_modulo, non_symbol_binding, not_a_function, recursion_limit,
    too_few_arguments, type_mismatch, unbound_symbol, EvalError, EvalErrorKind, EvalResult,
};
pub use value::{is_integral, Cells, DisplayNumber, Value, ValueKind};
