use std::{error, fmt};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LexError {
    InvalidChar(char),
    /// A `<` or `>` that is not immediately doubled.
    MalformedShift(char),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LexError::InvalidChar(c) => write!(f, "Encountered invalid token '{}'", c),
            LexError::MalformedShift(c) => write!(f, "Expected '{}{}'", c, c),
        }
    }
}

impl error::Error for LexError {}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenError {
    NotNumeric,
    OutOfRange,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenError::NotNumeric => write!(f, "operator token is not a numeric value"),
            TokenError::OutOfRange => write!(f, "integer literal does not fit in 64 bits"),
        }
    }
}

impl error::Error for TokenError {}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ParseError {
    MismatchedParens,
    NoPrecedence(String),
    MissingOperand(String),
    NotUnary(String),
    OperandCount(usize),
    InvalidLiteral(String, TokenError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::MismatchedParens => write!(f, "Mismatched parentheses"),
            ParseError::NoPrecedence(op) => write!(f, "Invalid operator '{}' given.", op),
            ParseError::MissingOperand(op) => write!(f, "Operator '{}' has no operand", op),
            ParseError::NotUnary(op) => {
                write!(f, "Operator '{}' cannot be used as a unary operator", op)
            }
            ParseError::OperandCount(count) => write!(
                f,
                "An internal parser error has occurred: expected 1 operand, found {}",
                count
            ),
            ParseError::InvalidLiteral(lit, err) => write!(f, "Invalid literal '{}': {}", lit, err),
        }
    }
}

impl error::Error for ParseError {}
