use crate::parser::infix_to_postfix;
use crate::rpneval::{EvalErr, MathContext};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

#[test]
fn test_eval1() {
    fuzzy_eq!(MathContext::new().eval("62/3-").unwrap(), 0.0);
}

#[test]
fn test_eval2() {
    let expr = infix_to_postfix("3+4*2/(1-5)^2^3").unwrap();
    fuzzy_eq!(MathContext::new().eval(&expr).unwrap(), 3.0001220703125);
}

#[test]
fn test_eval3() {
    fuzzy_eq!(MathContext::new().eval("232^^").unwrap(), 512.0);
    fuzzy_eq!(MathContext::new().eval("23^2^").unwrap(), 64.0);
}

#[test]
fn test_eval4() {
    let expr = infix_to_postfix("(3+4)*3").unwrap();
    fuzzy_eq!(MathContext::new().eval(&expr).unwrap(), 21.0);
    fuzzy_eq!(MathContext::new().eval("7").unwrap(), 7.0);
    fuzzy_eq!(MathContext::new().eval("9 2 /").unwrap(), 4.5);
}

#[test]
fn with_vars() {
    let mut cx = MathContext::new();
    cx.setvar('x', 1.5);
    cx.setvar('y', -2.0);
    fuzzy_eq!(cx.eval("xy*3+").unwrap(), 0.0);
    assert_eq!(cx.getvar('y'), Some(-2.0));
    assert_eq!(cx.eval("xz+"), Err(EvalErr::UnknownVar('z')));
}

#[test]
fn bad_eval() {
    let cx = MathContext::new();
    assert_eq!(cx.eval("50/"), Err(EvalErr::DivisionByZero));
    assert_eq!(cx.eval("1+2"), Err(EvalErr::InsufficientOperands(Some('+'))));
    assert_eq!(cx.eval("1-"), Err(EvalErr::InsufficientOperands(Some('-'))));
    assert_eq!(cx.eval("12+3+4"), Err(EvalErr::InsufficientOperands(None)));
    assert_eq!(cx.eval("12%"), Err(EvalErr::InvalidOperator('%')));
    assert_eq!(cx.eval(""), Err(EvalErr::EmptyResult));
}

#[test]
fn bad_power() {
    let cx = MathContext::new();
    assert_eq!(cx.eval("001-^"), Err(EvalErr::DivisionByZero));
    assert_eq!(cx.eval("01-12/^"), Err(EvalErr::NotFinite('^')));
    assert_eq!(cx.eval("99^9^9^"), Err(EvalErr::NotFinite('^')));
    fuzzy_eq!(cx.eval("12-3^").unwrap(), -1.0);
    fuzzy_eq!(cx.eval("20^").unwrap(), 1.0);
}

#[test]
fn round_trip_value() {
    use crate::parser::postfix_to_infix;
    let cx = MathContext::new();
    let cases = [
        ("1+2*3", 7.0),
        ("(8-2)/3", 2.0),
        ("9-4-3", 2.0),
        ("2*(3+4)-5/5", 13.0),
        ("8/4/2", 1.0),
    ];
    for (expr, expected) in cases {
        let postfix = infix_to_postfix(expr).unwrap();
        let rebuilt = infix_to_postfix(&postfix_to_infix(&postfix).unwrap()).unwrap();
        fuzzy_eq!(cx.eval(&postfix).unwrap(), expected);
        fuzzy_eq!(cx.eval(&rebuilt).unwrap(), expected);
    }
}
