use crate::operator;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Token {
    Operand(char),
    Operator(char),
    OParen,
    CParen,
    Unknown(char),
}

impl From<char> for Token {
    fn from(ch: char) -> Token {
        match ch {
            '(' => Token::OParen,
            ')' => Token::CParen,
            c if c.is_ascii_alphanumeric() => Token::Operand(c),
            c if operator::is_operator(c) => Token::Operator(c),
            c => Token::Unknown(c),
        }
    }
}

/// Every token is a single character, blanks are skipped.
pub fn tokenize(expr: &str) -> impl Iterator<Item = Token> + '_ {
    expr.chars().filter(|c| !c.is_whitespace()).map(Token::from)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Notation {
    Infix,
    Postfix,
}

impl Notation {
    /// Character-set validation for raw user input. Infix accepts operands,
    /// operators and parens, postfix the same minus the parens. Returns the
    /// first offending character, or '\0' if there's nothing to convert.
    pub fn check(&self, expr: &str) -> Result<(), char> {
        let mut seen = false;
        for token in tokenize(expr) {
            seen = true;
            match (self, token) {
                (_, Token::Operand(_)) | (_, Token::Operator(_)) => (),
                (Notation::Infix, Token::OParen) | (Notation::Infix, Token::CParen) => (),
                (Notation::Postfix, Token::OParen) => return Err('('),
                (Notation::Postfix, Token::CParen) => return Err(')'),
                (_, Token::Unknown(c)) => return Err(c),
            }
        }
        if seen { Ok(()) } else { Err('\0') }
    }
}

impl FromStr for Notation {
    type Err = String;
    fn from_str(s: &str) -> Result<Notation, String> {
        match s.trim().to_lowercase().as_str() {
            "1" | "in" | "infix" => Ok(Notation::Infix),
            "2" | "post" | "postfix" | "rpn" => Ok(Notation::Postfix),
            other => Err(format!("Unknown notation: {}", other)),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notation::Infix => write!(f, "infix"),
            Notation::Postfix => write!(f, "postfix"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
