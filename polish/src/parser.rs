use crate::operator;
use crate::stack::Stack;
use crate::token::{tokenize, Token};
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum ParseError {
    MissingOParen,
    MissingCParen,
    InvalidOperator(char),
    // the operator short of operands, None when operands are left over
    InsufficientOperands(Option<char>),
    EmptyResult,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::MissingOParen => write!(f, "Missing opening paren"),
            ParseError::MissingCParen => write!(f, "Missing closing paren"),
            ParseError::InvalidOperator(c) => write!(f, "Invalid operator '{}'", c),
            ParseError::InsufficientOperands(Some(op)) =>
                write!(f, "Operator '{}' needs two operands", op),
            ParseError::InsufficientOperands(None) =>
                write!(f, "Operands left without an operator"),
            ParseError::EmptyResult => write!(f, "Nothing to convert"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Shunting-yard conversion of single-character infix tokens to postfix.
pub fn infix_to_postfix(expr: &str) -> Result<String, ParseError> {
    let mut out = String::new();
    let mut stack = Stack::<char>::new();

    for token in tokenize(expr) {
        match token {
            Token::Operand(c) => out.push(c),
            Token::OParen => stack.push('('),
            Token::CParen => {
                while !stack.is_empty() && stack.top() != '(' {
                    if let Some(op) = stack.pop() {
                        out.push(op);
                    }
                }
                // peel matching OParen
                if stack.pop().is_none() {
                    return Err(ParseError::MissingOParen);
                }
            }
            Token::Operator(op) => {
                while !stack.is_empty() && operator::pops_before(stack.top(), op) {
                    if let Some(top) = stack.pop() {
                        debug!("pop {} for {}", top, op);
                        out.push(top);
                    }
                }
                stack.push(op);
            }
            Token::Unknown(c) => return Err(ParseError::InvalidOperator(c)),
        }
    }
    while let Some(top) = stack.pop() {
        match top {
            '(' => return Err(ParseError::MissingCParen),
            op => out.push(op),
        }
    }
    if out.is_empty() {
        return Err(ParseError::EmptyResult);
    }
    debug!("{} => {}", expr, out);
    Ok(out)
}

/// Rebuild a fully parenthesized infix string out of a postfix one.
pub fn postfix_to_infix(expr: &str) -> Result<String, ParseError> {
    let mut fragments = Stack::<String>::new();

    for token in tokenize(expr) {
        match token {
            Token::Operand(c) => fragments.push(c.to_string()),
            Token::Operator(op) => {
                let rhs = fragments.pop().ok_or(ParseError::InsufficientOperands(Some(op)))?;
                let lhs = fragments.pop().ok_or(ParseError::InsufficientOperands(Some(op)))?;
                fragments.push(format!("({}{}{})", lhs, op, rhs));
            }
            Token::OParen => return Err(ParseError::InvalidOperator('(')),
            Token::CParen => return Err(ParseError::InvalidOperator(')')),
            Token::Unknown(c) => return Err(ParseError::InvalidOperator(c)),
        }
        debug!("fragments: {:?}", fragments.iter().collect::<Vec<_>>());
    }
    let infix = fragments.pop().ok_or(ParseError::EmptyResult)?;
    if !fragments.is_empty() {
        return Err(ParseError::InsufficientOperands(None));
    }
    Ok(infix)
}
