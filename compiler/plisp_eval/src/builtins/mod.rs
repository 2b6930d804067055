//! Builtin application.
//!
//! Every builtin takes ownership of its already-evaluated arguments and
//! returns one new value. Validation is layered (argument count, then
//! argument kinds, then non-empty lists) and stops at the first failure;
//! the arguments are dropped along with the error.
//!
//! Builtins are written as `fn(..) -> EvalResult` so checks compose with
//! `?`. `apply_builtin` is the one place an `Err` turns back into a
//! `Value::Error`.

mod arithmetic;
mod lists;

use plisp_value::{
    arity_mismatch, binding_count_mismatch, empty_list, non_symbol_binding, too_few_arguments,
    type_mismatch, Builtin, Cells, EvalError, EvalResult, Value, ValueKind,
};

use crate::environment::Environment;
use crate::evaluator::Evaluator;

use self::arithmetic::ArithOp;

/// Apply `builtin` to `args`.
#[tracing::instrument(level = "trace", skip_all, fields(builtin = %builtin))]
pub fn apply_builtin(evaluator: &mut Evaluator<'_>, builtin: Builtin, args: Cells) -> Value {
    tracing::debug!(args = args.len(), "applying builtin");
    let result = match builtin {
        Builtin::Add => arithmetic::fold(ArithOp::Add, args),
        Builtin::Sub => arithmetic::fold(ArithOp::Sub, args),
        Builtin::Mul => arithmetic::fold(ArithOp::Mul, args),
        Builtin::Div => arithmetic::fold(ArithOp::Div, args),
        Builtin::Mod => arithmetic::fold(ArithOp::Mod, args),
        Builtin::List => Ok(lists::list(args)),
        Builtin::Head => lists::head(args),
        Builtin::Tail => lists::tail(args),
        Builtin::Init => lists::init(args),
        Builtin::Len => lists::len(args),
        Builtin::Join => lists::join(args),
        Builtin::Eval => eval_quoted(evaluator, args),
        Builtin::Def => define(evaluator.env(), args),
    };
    result.unwrap_or_else(Value::from)
}

// Argument validation

/// Require exactly `expected` arguments.
fn expect_arity(builtin: Builtin, args: &Cells, expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(arity_mismatch(builtin, expected, args.len()))
    }
}

/// Require argument `index` to be of kind `expected`.
fn expect_kind(
    builtin: Builtin,
    args: &Cells,
    index: usize,
    expected: ValueKind,
) -> Result<(), EvalError> {
    match args.get(index) {
        Some(arg) if arg.kind() == expected => Ok(()),
        Some(arg) => Err(type_mismatch(builtin, index, expected, arg.kind())),
        None => Err(too_few_arguments(builtin, index + 1, args.len())),
    }
}

/// Require argument `index` to be a list with at least one child.
fn expect_non_empty(builtin: Builtin, args: &Cells, index: usize) -> Result<(), EvalError> {
    match args.get(index).and_then(Value::cells) {
        Some(cells) if cells.is_empty() => Err(empty_list(builtin, index)),
        _ => Ok(()),
    }
}

/// Move the children out of a value already checked to be a q-expression.
fn into_quoted(builtin: Builtin, index: usize, value: Value) -> Result<Cells, EvalError> {
    match value {
        Value::QExpr(cells) => Ok(cells),
        other => Err(type_mismatch(builtin, index, ValueKind::QExpr, other.kind())),
    }
}

// Evaluation and definition

/// `eval {..}`: evaluate a q-expression as an s-expression.
fn eval_quoted(evaluator: &mut Evaluator<'_>, args: Cells) -> EvalResult {
    expect_arity(Builtin::Eval, &args, 1)?;
    expect_kind(Builtin::Eval, &args, 0, ValueKind::QExpr)?;

    let cells = into_quoted(Builtin::Eval, 0, args.take(0))?;
    Ok(evaluator.eval(Value::SExpr(cells)))
}

/// `def {a b ..} va vb ..`: bind each symbol to the value in the same
/// position. Returns `()`.
fn define(env: &mut Environment, args: Cells) -> EvalResult {
    expect_kind(Builtin::Def, &args, 0, ValueKind::QExpr)?;

    let mut args = args.into_iter();
    let symbols = match args.next() {
        Some(first) => into_quoted(Builtin::Def, 0, first)?,
        None => return Err(too_few_arguments(Builtin::Def, 1, 0)),
    };
    let names = symbols
        .iter()
        .map(|symbol| {
            symbol
                .as_symbol()
                .ok_or_else(|| non_symbol_binding(symbol.kind()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(binding_count_mismatch(names.len(), values.len()));
    }

    for (name, value) in names.into_iter().zip(&values) {
        tracing::debug!(name, "define");
        env.put(name, value);
    }
    Ok(Value::empty_sexpr())
}

#[cfg(test)]
mod tests;
