use std::{error, fmt};

use crate::parse::{
    error::{LexError, ParseError},
    CharPos, Span, Spanned,
};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum EvalError {
    NegativeShift(i64),
    DivisionByZero,
    InexactDivision { dividend: i64, divisor: i64 },
    Overflow(&'static str),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::NegativeShift(amount) => write!(f, "Cannot shift by negative amount {}", amount),
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::InexactDivision { dividend, divisor } => write!(
                f,
                "{} / {} does not produce an integer result",
                dividend, divisor
            ),
            EvalError::Overflow(op) => write!(f, "Integer overflow in '{}'", op),
        }
    }
}

impl error::Error for EvalError {}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Lex(err) => write!(f, "{}", err),
            ErrorKind::Parse(err) => write!(f, "{}", err),
            ErrorKind::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl From<LexError> for ErrorKind {
    fn from(err: LexError) -> Self {
        ErrorKind::Lex(err)
    }
}

impl From<ParseError> for ErrorKind {
    fn from(err: ParseError) -> Self {
        ErrorKind::Parse(err)
    }
}

impl From<EvalError> for ErrorKind {
    fn from(err: EvalError) -> Self {
        ErrorKind::Eval(err)
    }
}

/// Failure of a single `parse` call, carrying the text that was entered.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CalcError {
    pub source: String,
    pub span: Span,
    pub kind: ErrorKind,
}

impl CalcError {
    pub fn new(source: &str, err: Spanned<ErrorKind>) -> Self {
        CalcError {
            source: source.to_owned(),
            span: err.span,
            kind: err.node,
        }
    }

    pub fn position(&self) -> CharPos {
        self.span.start
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ErrorKind::Lex(err) => format!("{} at {}", err, self.position()),
            kind => kind.to_string(),
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error parsing expression '{}': {}",
            self.source,
            self.message()
        )
    }
}

impl error::Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_message_contains_position() {
        let err = CalcError::new(
            "1 $ 2",
            Spanned::new(2, 2, ErrorKind::from(LexError::InvalidChar('$'))),
        );

        assert_eq!(2, err.position());
        assert_eq!(
            "Error parsing expression '1 $ 2': Encountered invalid token '$' at 2",
            err.to_string()
        );
    }

    #[test]
    fn test_eval_error_message() {
        let err = CalcError::new(
            "10/4",
            Spanned::new(
                0,
                3,
                ErrorKind::from(EvalError::InexactDivision {
                    dividend: 10,
                    divisor: 4,
                }),
            ),
        );

        assert_eq!("10 / 4 does not produce an integer result", err.message());
    }
}
