#![deny(warnings)]

macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

mod stack;
pub use stack::Stack;

mod token;
pub use token::{tokenize, Notation, Token};

pub mod operator;
pub use operator::Assoc;

pub mod parser;
pub use parser::ParseError;
pub use parser::{infix_to_postfix, postfix_to_infix};

mod rpneval;
pub use rpneval::{EvalErr, MathContext};
#[cfg(test)]
mod rpneval_test;

mod expression;
pub use expression::{ExprError, Expression};
