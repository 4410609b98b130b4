use crate::stack::Stack;
use crate::token::{tokenize, Token};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum EvalErr {
    DivisionByZero,
    // the operator short of operands, None when operands are left over
    InsufficientOperands(Option<char>),
    InvalidOperator(char),
    UnknownVar(char),
    NotFinite(char),
    EmptyResult,
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalErr::DivisionByZero => write!(f, "Division by zero"),
            EvalErr::InsufficientOperands(Some(op)) =>
                write!(f, "Operator '{}' needs two operands", op),
            EvalErr::InsufficientOperands(None) =>
                write!(f, "Operands left without an operator"),
            EvalErr::InvalidOperator(c) => write!(f, "Invalid operator '{}'", c),
            EvalErr::UnknownVar(v) => write!(f, "Unknown variable '{}'", v),
            EvalErr::NotFinite(op) => write!(f, "Operator '{}' has no finite result", op),
            EvalErr::EmptyResult => write!(f, "Nothing to evaluate"),
        }
    }
}

impl std::error::Error for EvalErr {}

/// Bindings for the single-letter operands of a postfix expression.
/// Digit operands always stand for their own value.
#[derive(Clone, Debug, Default)]
pub struct MathContext(pub HashMap<char, f64>);

impl MathContext {
    pub fn new() -> MathContext {
        MathContext(HashMap::new())
    }

    pub fn setvar(&mut self, var: char, val: f64) {
        self.0.insert(var, val);
    }

    pub fn getvar(&self, var: char) -> Option<f64> {
        self.0.get(&var).cloned()
    }

    fn operand(&self, ch: char) -> Result<f64, EvalErr> {
        match ch.to_digit(10) {
            Some(digit) => Ok(digit as f64),
            None => self.getvar(ch).ok_or(EvalErr::UnknownVar(ch)),
        }
    }

    pub fn eval(&self, postfix: &str) -> Result<f64, EvalErr> {
        let mut operands = Stack::<f64>::new();

        for token in tokenize(postfix) {
            match token {
                Token::Operand(c) => operands.push(self.operand(c)?),
                Token::Operator(op) => {
                    let r = operands.pop().ok_or(EvalErr::InsufficientOperands(Some(op)))?;
                    let l = operands.pop().ok_or(EvalErr::InsufficientOperands(Some(op)))?;
                    let result = match op {
                        '+' => l + r,
                        '-' => l - r,
                        '*' => l * r,
                        '/' if r == 0.0 => return Err(EvalErr::DivisionByZero),
                        '/' => l / r,
                        '^' if l == 0.0 && r < 0.0 => return Err(EvalErr::DivisionByZero),
                        '^' => l.powf(r),
                        _ => return Err(EvalErr::InvalidOperator(op)),
                    };
                    if !result.is_finite() {
                        return Err(EvalErr::NotFinite(op));
                    }
                    debug!("{} {} {} = {}", l, op, r, result);
                    operands.push(result);
                }
                Token::OParen => return Err(EvalErr::InvalidOperator('(')),
                Token::CParen => return Err(EvalErr::InvalidOperator(')')),
                Token::Unknown(c) => return Err(EvalErr::InvalidOperator(c)),
            }
        }
        let result = operands.pop().ok_or(EvalErr::EmptyResult)?;
        if !operands.is_empty() {
            return Err(EvalErr::InsufficientOperands(None));
        }
        Ok(result)
    }
}
