use crate::parser::{self, ParseError};
use crate::rpneval::{EvalErr, MathContext};
use crate::token::Notation;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum ExprError {
    Parse(ParseError),
    Eval(EvalErr),
}

impl From<ParseError> for ExprError {
    fn from(e: ParseError) -> Self { ExprError::Parse(e) }
}

impl From<EvalErr> for ExprError {
    fn from(e: EvalErr) -> Self { ExprError::Eval(e) }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExprError::Parse(e) => write!(f, "Parse error: {}", e),
            ExprError::Eval(e) => write!(f, "Eval error: {}", e),
        }
    }
}

impl std::error::Error for ExprError {}

/// An input string in its declared notation plus the conversion to the
/// other notation once it has been computed.
#[derive(Clone, Debug)]
pub struct Expression {
    notation: Notation,
    infix: Option<String>,
    postfix: Option<String>,
}

impl Expression {
    pub fn new(input: &str, notation: Notation) -> Expression {
        let input = Some(input.to_string());
        match notation {
            Notation::Infix => Expression{notation, infix: input, postfix: None},
            Notation::Postfix => Expression{notation, infix: None, postfix: input},
        }
    }

    pub fn notation(&self) -> Notation { self.notation }

    pub fn infix(&self) -> Option<&str> { self.infix.as_deref() }

    pub fn postfix(&self) -> Option<&str> { self.postfix.as_deref() }

    fn input(&self) -> &str {
        let input = match self.notation {
            Notation::Infix => &self.infix,
            Notation::Postfix => &self.postfix,
        };
        input.as_deref().unwrap_or_default()
    }

    /// Convert the declared input to the other notation. Always recomputed
    /// from the input, the result replaces whatever was cached.
    pub fn convert(&mut self) -> Result<String, ParseError> {
        match self.notation {
            Notation::Infix => {
                let postfix = parser::infix_to_postfix(self.input())?;
                self.postfix = Some(postfix.clone());
                Ok(postfix)
            }
            Notation::Postfix => {
                let infix = parser::postfix_to_infix(self.input())?;
                self.infix = Some(infix.clone());
                Ok(infix)
            }
        }
    }

    pub fn evaluate(&mut self) -> Result<f64, ExprError> {
        self.eval_with(&MathContext::new())
    }

    /// Evaluate the postfix form, converting an infix input first if that
    /// hasn't happened yet.
    pub fn eval_with(&mut self, cx: &MathContext) -> Result<f64, ExprError> {
        if self.postfix.is_none() {
            self.convert()?;
        }
        match self.postfix {
            Some(ref postfix) => Ok(cx.eval(postfix)?),
            None => Err(ExprError::Parse(ParseError::EmptyResult)),
        }
    }
}
