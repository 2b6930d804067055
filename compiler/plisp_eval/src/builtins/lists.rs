//! List builtins: `list head tail init len join`.

use plisp_value::{Builtin, Cells, EvalError, EvalResult, Value, ValueKind};

use super::{expect_arity, expect_kind, expect_non_empty, into_quoted};

/// Validate the argument of a unary list builtin and move its children out.
fn single_list(builtin: Builtin, args: Cells, non_empty: bool) -> Result<Cells, EvalError> {
    expect_arity(builtin, &args, 1)?;
    expect_kind(builtin, &args, 0, ValueKind::QExpr)?;
    if non_empty {
        expect_non_empty(builtin, &args, 0)?;
    }
    into_quoted(builtin, 0, args.take(0))
}

/// `list a b ..`: the arguments themselves, as a q-expression.
pub(super) fn list(args: Cells) -> Value {
    Value::QExpr(args)
}

/// `head {a b ..}`: `{a}`.
pub(super) fn head(args: Cells) -> EvalResult {
    let mut cells = single_list(Builtin::Head, args, true)?;
    cells.truncate(1);
    Ok(Value::QExpr(cells))
}

/// `tail {a b ..}`: `{b ..}`.
pub(super) fn tail(args: Cells) -> EvalResult {
    let mut cells = single_list(Builtin::Tail, args, true)?;
    cells.remove(0);
    Ok(Value::QExpr(cells))
}

/// `init {.. y z}`: `{.. y}`.
pub(super) fn init(args: Cells) -> EvalResult {
    let mut cells = single_list(Builtin::Init, args, true)?;
    cells.truncate_last();
    Ok(Value::QExpr(cells))
}

/// `len {..}`: number of children. `len {}` is 0.
#[allow(
    clippy::cast_precision_loss,
    reason = "list lengths stay far below 2^53"
)]
pub(super) fn len(args: Cells) -> EvalResult {
    let cells = single_list(Builtin::Len, args, false)?;
    Ok(Value::number(cells.len() as f64))
}

/// `join {a} {b c} ..`: concatenation in argument order. No arguments
/// gives `{}`.
pub(super) fn join(args: Cells) -> EvalResult {
    for index in 0..args.len() {
        expect_kind(Builtin::Join, &args, index, ValueKind::QExpr)?;
    }

    let mut joined = Cells::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.join(into_quoted(Builtin::Join, index, arg)?);
    }
    Ok(Value::QExpr(joined))
}
