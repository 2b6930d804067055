//! Arithmetic builtins: `+ - * / %`.

use plisp_value::{
    division_by_zero, is_integral, modulo_by_zero, non_integral_modulo, too_few_arguments,
    type_mismatch, Builtin, Cells, EvalError, EvalResult, Value, ValueKind,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    fn builtin(self) -> Builtin {
        match self {
            ArithOp::Add => Builtin::Add,
            ArithOp::Sub => Builtin::Sub,
            ArithOp::Mul => Builtin::Mul,
            ArithOp::Div => Builtin::Div,
            ArithOp::Mod => Builtin::Mod,
        }
    }

    fn apply(self, x: f64, y: f64) -> Result<f64, EvalError> {
        match self {
            ArithOp::Add => Ok(x + y),
            ArithOp::Sub => Ok(x - y),
            ArithOp::Mul => Ok(x * y),
            ArithOp::Div => {
                if y == 0.0 {
                    Err(division_by_zero())
                } else {
                    Ok(x / y)
                }
            }
            ArithOp::Mod => {
                if !is_integral(x) || !is_integral(y) {
                    Err(non_integral_modulo(x, y))
                } else if y == 0.0 {
                    Err(modulo_by_zero())
                } else {
                    // Truncating remainder; exact for integral operands.
                    Ok(x % y)
                }
            }
        }
    }
}

/// Fold every argument left to right with `op`. A lone argument to `-` is
/// negated.
pub(super) fn fold(op: ArithOp, args: Cells) -> EvalResult {
    let builtin = op.builtin();
    let numbers = args
        .iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.as_number()
                .ok_or_else(|| type_mismatch(builtin, index, ValueKind::Number, arg.kind()))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(too_few_arguments(builtin, 1, 0));
    };

    if op == ArithOp::Sub && rest.is_empty() {
        return Ok(Value::number(-first));
    }

    rest.iter()
        .try_fold(first, |acc, &y| op.apply(acc, y))
        .map(Value::number)
}
