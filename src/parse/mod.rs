use std::hash;

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

use self::{error::LexError, token::Token};
use crate::error::ErrorKind;

pub type Scanned<'src> = Result<Spanned<Token<'src>>, Spanned<LexError>>;
pub type CharPos = usize;

/// Inclusive byte range inside the input line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: CharPos,
    pub end: CharPos,
}

impl Span {
    pub fn new(start: CharPos, end: CharPos) -> Self {
        Span { start, end }
    }

    /// Covers both spans, used when a reduction merges its operands.
    pub fn to(self, other: Span) -> Self {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[derive(Debug)]
pub struct Spanned<T> {
    pub span: Span,
    pub node: T,
}

impl<T> Spanned<T> {
    pub fn new(start: CharPos, end: CharPos, node: T) -> Self {
        let span = Span { start, end };

        Spanned { span, node }
    }

    pub fn from_span(span: Span, node: T) -> Self {
        Self { span, node }
    }
}

impl From<Spanned<LexError>> for Spanned<ErrorKind> {
    fn from(err: Spanned<LexError>) -> Self {
        let span = err.span;
        Self {
            span,
            node: ErrorKind::from(err.node),
        }
    }
}

impl<T: Clone> Clone for Spanned<T> {
    fn clone(&self) -> Self {
        Self {
            span: self.span,
            node: self.node.clone(),
        }
    }
}

impl<T: Copy> Copy for Spanned<T> {}

impl<T: hash::Hash> hash::Hash for Spanned<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl<T: PartialEq> PartialEq for Spanned<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.span == other.span
    }
}

impl<T: PartialEq> Eq for Spanned<T> {}

#[cfg(test)]
mod tests {
    use super::{lexer::lex, parser::Parser, Span};

    #[test]
    fn test_span_to_covers_both_spans() {
        let left = Span::new(4, 6);
        let right = Span::new(0, 1);

        assert_eq!(Span::new(0, 6), left.to(right));
        assert_eq!(Span::new(0, 6), right.to(left));
    }

    #[test]
    fn test_lex_then_parse_single_number() {
        let source = "42";
        let tokens = lex(source).unwrap();
        let expr = Parser::new(source).parse(tokens).unwrap();

        assert_eq!(42, expr.value());
    }
}
