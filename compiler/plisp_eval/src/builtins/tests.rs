use super::*;
use crate::reader::read;
use plisp_parse::parse;
use plisp_value::EvalErrorKind;
use pretty_assertions::assert_eq;

fn run(env: &mut Environment, source: &str) -> Value {
    let tree = parse(source).unwrap_or_else(|err| panic!("parse failed: {err}"));
    let value = read(&tree).unwrap_or_else(|err| panic!("read failed: {err}"));
    Evaluator::new(env).eval(value)
}

fn run_fresh(source: &str) -> Value {
    run(&mut Environment::with_builtins(), source)
}

fn printed(source: &str) -> String {
    run_fresh(source).to_string()
}

fn error_kind(value: Value) -> EvalErrorKind {
    match value {
        Value::Error(err) => err.kind().clone(),
        other => panic!("expected error, got {other}"),
    }
}

fn apply_direct(builtin: Builtin, args: Vec<Value>) -> Value {
    let mut env = Environment::with_builtins();
    let mut evaluator = Evaluator::new(&mut env);
    apply_builtin(&mut evaluator, builtin, Cells::from(args))
}

// Arithmetic

#[test]
fn test_arithmetic_folds_left_to_right() {
    assert_eq!(printed("+ 1 2 3"), "6");
    assert_eq!(printed("- 10 4 3"), "3");
    assert_eq!(printed("* 2 3 4"), "24");
    assert_eq!(printed("/ 10 4"), "2.50");
    assert_eq!(printed("/ 8 2 2"), "2");
    assert_eq!(printed("+ 1 (* 2 3)"), "7");
}

#[test]
fn test_unary_minus_negates() {
    assert_eq!(run_fresh("- 5"), Value::number(-5.0));
    assert_eq!(run_fresh("- (- 5)"), Value::number(5.0));
}

#[test]
fn test_single_argument_other_ops_return_it() {
    assert_eq!(run_fresh("+ 5"), Value::number(5.0));
    assert_eq!(run_fresh("/ 5"), Value::number(5.0));
}

#[test]
fn test_named_aliases() {
    assert_eq!(printed("add 1 2"), "3");
    assert_eq!(printed("sub 1 2"), "-1");
    assert_eq!(printed("mul 4 2"), "8");
    assert_eq!(printed("div 9 3"), "3");
    assert_eq!(printed("mod 9 4"), "1");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(error_kind(run_fresh("/ 10 0")), EvalErrorKind::DivisionByZero);
    assert_eq!(printed("/ 10 0"), "Error Division by zero");
    assert_eq!(error_kind(run_fresh("/ 10 2 0")), EvalErrorKind::DivisionByZero);
}

#[test]
fn test_modulo() {
    assert_eq!(run_fresh("% 7 2"), Value::number(1.0));
    assert_eq!(run_fresh("% -7 2"), Value::number(-1.0));
    assert_eq!(run_fresh("% 17 5 2"), Value::number(0.0));
}

#[test]
fn test_modulo_rejects_fractions() {
    assert_eq!(
        error_kind(run_fresh("% 7.5 2")),
        EvalErrorKind::NonIntegralModulo { lhs: 7.5, rhs: 2.0 }
    );
    assert_eq!(
        printed("% 7.5 2"),
        "Error Modulo works only on integers, got x=7.50 and y=2."
    );
}

#[test]
fn test_modulo_by_zero() {
    assert_eq!(error_kind(run_fresh("% 7 0")), EvalErrorKind::ModuloByZero);
    // Integrality is checked before the zero divisor.
    assert!(matches!(
        error_kind(run_fresh("% 7.5 0")),
        EvalErrorKind::NonIntegralModulo { .. }
    ));
}

#[test]
fn test_arithmetic_type_mismatch() {
    assert_eq!(
        error_kind(run_fresh("+ 1 {2}")),
        EvalErrorKind::TypeMismatch {
            builtin: Builtin::Add,
            index: 1,
            expected: ValueKind::Number,
            got: ValueKind::QExpr,
        }
    );
    // Every argument is checked before any division happens.
    assert!(matches!(
        error_kind(run_fresh("/ 1 0 {}")),
        EvalErrorKind::TypeMismatch { index: 2, .. }
    ));
}

#[test]
fn test_arithmetic_without_arguments() {
    assert_eq!(
        error_kind(apply_direct(Builtin::Add, vec![])),
        EvalErrorKind::TooFewArguments {
            builtin: Builtin::Add,
            min: 1,
            got: 0,
        }
    );
}

// Lists

#[test]
fn test_list_quotes_arguments() {
    assert_eq!(printed("list 1 2 3"), "{1 2 3}");
    assert_eq!(printed("list (+ 1 1) {x}"), "{2 {x}}");
    assert_eq!(printed("list + 1"), "{<function> 1}");
}

#[test]
fn test_head_tail_init() {
    assert_eq!(printed("head {1 2 3}"), "{1}");
    assert_eq!(printed("tail {1 2 3}"), "{2 3}");
    assert_eq!(printed("init {1 2 3}"), "{1 2}");
    assert_eq!(printed("tail {1}"), "{}");
    assert_eq!(printed("init {1}"), "{}");
    assert_eq!(printed("head {{a b} c}"), "{{a b}}");
}

#[test]
fn test_list_ops_reject_empty() {
    for (source, builtin) in [
        ("head {}", Builtin::Head),
        ("tail {}", Builtin::Tail),
        ("init {}", Builtin::Init),
    ] {
        assert_eq!(
            error_kind(run_fresh(source)),
            EvalErrorKind::EmptyList { builtin, index: 0 }
        );
    }
    assert_eq!(
        printed("head {}"),
        "Error Function 'head' passed {} as argument at index 0!"
    );
}

#[test]
fn test_list_ops_reject_non_lists() {
    assert_eq!(
        error_kind(run_fresh("tail 5")),
        EvalErrorKind::TypeMismatch {
            builtin: Builtin::Tail,
            index: 0,
            expected: ValueKind::QExpr,
            got: ValueKind::Number,
        }
    );
    assert_eq!(
        printed("head 5"),
        "Error Function 'head' passed incorrect type at index 0! Got Number, expected Q-Expression."
    );
}

#[test]
fn test_list_ops_check_arity() {
    assert_eq!(
        error_kind(run_fresh("head {1} {2}")),
        EvalErrorKind::ArityMismatch {
            builtin: Builtin::Head,
            expected: 1,
            got: 2,
        }
    );
    assert_eq!(
        printed("len {1} {2}"),
        "Error Function 'len' passed too many arguments! Got 2, expected 1."
    );
}

#[test]
fn test_len() {
    assert_eq!(run_fresh("len {1 2 3}"), Value::number(3.0));
    assert_eq!(run_fresh("len {}"), Value::number(0.0));
    assert_eq!(run_fresh("len {{1 2} 3}"), Value::number(2.0));
}

#[test]
fn test_join() {
    assert_eq!(printed("join {1} {2 3} {}"), "{1 2 3}");
    assert_eq!(printed("join {a}"), "{a}");
    assert_eq!(
        error_kind(run_fresh("join {1} 2")),
        EvalErrorKind::TypeMismatch {
            builtin: Builtin::Join,
            index: 1,
            expected: ValueKind::QExpr,
            got: ValueKind::Number,
        }
    );
}

#[test]
fn test_join_without_arguments() {
    assert_eq!(apply_direct(Builtin::Join, vec![]), Value::empty_qexpr());
}

// Eval

#[test]
fn test_eval_quoted() {
    assert_eq!(run_fresh("eval {+ 1 2}"), Value::number(3.0));
    assert_eq!(run_fresh("eval (list + 1 2)"), Value::number(3.0));
    assert_eq!(printed("eval {head (list 1 2)}"), "{1}");
    assert_eq!(run_fresh("eval {}"), Value::empty_sexpr());
    assert_eq!(run_fresh("eval {5}"), Value::number(5.0));
}

#[test]
fn test_eval_rejects_non_quoted() {
    assert!(matches!(
        error_kind(run_fresh("eval 5")),
        EvalErrorKind::TypeMismatch {
            builtin: Builtin::Eval,
            expected: ValueKind::QExpr,
            ..
        }
    ));
    assert!(matches!(
        error_kind(run_fresh("eval {1} {2}")),
        EvalErrorKind::ArityMismatch { builtin: Builtin::Eval, .. }
    ));
}

// Def

#[test]
fn test_def_binds_in_order() {
    let mut env = Environment::with_builtins();
    assert_eq!(run(&mut env, "def {x y} 1 2"), Value::empty_sexpr());
    assert_eq!(run(&mut env, "+ x y"), Value::number(3.0));
}

#[test]
fn test_def_rebinds() {
    let mut env = Environment::with_builtins();
    run(&mut env, "def {x} 1");
    run(&mut env, "def {x} 2");
    assert_eq!(run(&mut env, "x"), Value::number(2.0));
}

#[test]
fn test_def_stores_copies() {
    let mut env = Environment::with_builtins();
    run(&mut env, "def {a} {1 2 3}");
    assert_eq!(printed_in(&mut env, "tail a"), "{2 3}");
    assert_eq!(printed_in(&mut env, "a"), "{1 2 3}");
}

#[test]
fn test_def_can_shadow_builtins() {
    let mut env = Environment::with_builtins();
    run(&mut env, "def {head} tail");
    assert_eq!(printed_in(&mut env, "head {1 2}"), "{2}");
}

#[test]
fn test_def_binds_quoted_code() {
    let mut env = Environment::with_builtins();
    run(&mut env, "def {f} {+ 1 2}");
    assert_eq!(run(&mut env, "eval f"), Value::number(3.0));
}

#[test]
fn test_def_errors() {
    assert_eq!(
        error_kind(run_fresh("def {x} 1 2")),
        EvalErrorKind::BindingCountMismatch {
            symbols: 1,
            values: 2,
        }
    );
    assert_eq!(
        error_kind(run_fresh("def {1} 2")),
        EvalErrorKind::NonSymbolBinding {
            got: ValueKind::Number,
        }
    );
    assert!(matches!(
        error_kind(run_fresh("def 1 2")),
        EvalErrorKind::TypeMismatch {
            builtin: Builtin::Def,
            index: 0,
            ..
        }
    ));
    assert_eq!(
        error_kind(apply_direct(Builtin::Def, vec![])),
        EvalErrorKind::TooFewArguments {
            builtin: Builtin::Def,
            min: 1,
            got: 0,
        }
    );
}

#[test]
fn test_failed_def_binds_nothing() {
    let mut env = Environment::with_builtins();
    let before = env.len();
    run(&mut env, "def {a 1} 2 3");
    run(&mut env, "def {a b} 2");
    assert_eq!(env.len(), before);
    assert!(env.lookup("a").is_none());
}

#[test]
fn test_def_messages() {
    assert_eq!(
        printed("def {1} 2"),
        "Error Function 'def' cannot define non-symbol. Got Number and expected Symbol."
    );
    assert_eq!(
        printed("def {a b} 2"),
        "Error Function 'def' cannot define incorrect number of values to symbols. Got 2 symbols and 1 values."
    );
}

fn printed_in(env: &mut Environment, source: &str) -> String {
    run(env, source).to_string()
}

#[test]
fn test_no_comparison_builtin() {
    assert_eq!(
        error_kind(run_fresh("== + +")),
        EvalErrorKind::UnboundSymbol {
            name: "==".to_string(),
        }
    );
}
