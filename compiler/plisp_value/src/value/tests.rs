use super::*;
use crate::errors::division_by_zero;
use pretty_assertions::assert_eq;

#[test]
fn test_number_display() {
    assert_eq!(Value::number(5.0).to_string(), "5");
    assert_eq!(Value::number(-3.0).to_string(), "-3");
    assert_eq!(Value::number(2.5).to_string(), "2.50");
    assert_eq!(Value::number(1.0 / 3.0).to_string(), "0.33");
    assert_eq!(Value::number(100_000.0).to_string(), "100000");
}

#[test]
fn test_integral() {
    assert!(is_integral(4.0));
    assert!(is_integral(-4.0));
    assert!(!is_integral(4.5));
    assert!(!is_integral(-0.5));
}

#[test]
fn test_atom_display() {
    assert_eq!(Value::symbol("head").to_string(), "head");
    assert_eq!(Value::function(Builtin::Add).to_string(), "<function>");
    assert_eq!(
        Value::from(division_by_zero()).to_string(),
        "Error Division by zero"
    );
}

#[test]
fn test_list_display() {
    let q = Value::qexpr([
        Value::number(1.0),
        Value::symbol("x"),
        Value::sexpr([Value::symbol("+"), Value::number(2.0)]),
    ]);
    assert_eq!(q.to_string(), "{1 x (+ 2)}");
    assert_eq!(Value::empty_sexpr().to_string(), "()");
    assert_eq!(Value::empty_qexpr().to_string(), "{}");
}

#[test]
fn test_kind() {
    assert_eq!(Value::number(1.0).kind(), ValueKind::Number);
    assert_eq!(Value::from(division_by_zero()).kind(), ValueKind::Error);
    assert_eq!(Value::symbol("x").kind(), ValueKind::Symbol);
    assert_eq!(Value::function(Builtin::Def).kind(), ValueKind::Function);
    assert_eq!(Value::empty_sexpr().kind(), ValueKind::SExpr);
    assert_eq!(Value::empty_qexpr().kind(), ValueKind::QExpr);
}

#[test]
fn test_clone_is_deep() {
    let original = Value::qexpr([Value::qexpr([Value::number(1.0)])]);
    let mut copy = original.clone();

    if let Some(inner) = copy.cells_mut() {
        inner.push(Value::symbol("added"));
    }

    assert_eq!(original.to_string(), "{{1}}");
    assert_eq!(copy.to_string(), "{{1} added}");
}

#[test]
fn test_cells_remove_preserves_order() {
    let mut cells: Cells = (1..=4).map(|n| Value::number(f64::from(n))).collect();
    let removed = cells.remove(1);

    assert_eq!(removed, Value::number(2.0));
    assert_eq!(
        cells.as_slice(),
        &[Value::number(1.0), Value::number(3.0), Value::number(4.0)]
    );
}

#[test]
fn test_cells_take() {
    let cells: Cells = ["a", "b", "c"].into_iter().map(Value::symbol).collect();
    assert_eq!(cells.take(2), Value::symbol("c"));
}

#[test]
fn test_cells_join() {
    let mut left = Cells::from(vec![Value::number(1.0)]);
    let right = Cells::from(vec![Value::number(2.0), Value::number(3.0)]);
    left.join(right);

    assert_eq!(Value::QExpr(left).to_string(), "{1 2 3}");
}

#[test]
fn test_cells_truncate() {
    let mut cells: Cells = (0..3).map(|n| Value::number(f64::from(n))).collect();
    cells.truncate_last();
    assert_eq!(cells.len(), 2);
    cells.truncate(1);
    assert_eq!(cells.as_slice(), &[Value::number(0.0)]);
}

#[test]
fn test_accessors() {
    assert_eq!(Value::number(2.0).as_number(), Some(2.0));
    assert_eq!(Value::symbol("x").as_number(), None);
    assert_eq!(Value::symbol("x").as_symbol(), Some("x"));
    assert!(Value::from(division_by_zero()).is_error());
    assert!(Value::number(0.0).cells().is_none());
    assert_eq!(Value::empty_qexpr().cells().map(Cells::len), Some(0));
}

fn deep_qexpr(depth: usize) -> Value {
    let mut value = Value::empty_qexpr();
    for _ in 0..depth {
        value = Value::qexpr([value]);
    }
    value
}

#[test]
fn test_deep_value_clone_compare_print_drop() {
    let depth = 200_000;
    let value = deep_qexpr(depth);
    let copy = value.clone();
    assert_eq!(copy, value);

    let printed = value.to_string();
    assert_eq!(printed.len(), 2 * (depth + 1));
    assert!(printed.starts_with("{{{"));

    drop(copy);
    drop(value);
}

#[test]
fn test_deep_values_differing_at_the_bottom() {
    let mut left = Value::number(1.0);
    let mut right = Value::number(2.0);
    for _ in 0..100_000 {
        left = Value::sexpr([left]);
        right = Value::sexpr([right]);
    }
    assert!(left != right);
}

#[test]
fn test_function_equality_is_builtin_identity() {
    assert_eq!(Value::function(Builtin::Add), Value::function(Builtin::Add));
    assert!(Value::function(Builtin::Add) != Value::function(Builtin::Sub));
    assert!(Value::function(Builtin::Head) != Value::symbol("head"));
}
