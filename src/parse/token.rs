use std::fmt;

use super::error::TokenError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Integer,

    // Operators
    And,    // &
    Or,     // |
    Xor,    // ^
    Not,    // ~
    LShift, // <<
    RShift, // >>
    Plus,   // +
    Minus,  // -
    Times,  // *
    Divide, // /
    Modulo, // %

    LParen, // (
    RParen, // )
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Token<'src> {
    pub lexeme: &'src str,
    pub kind: TokenKind,
}

impl<'src> Token<'src> {
    pub fn new(lexeme: &'src str, kind: TokenKind) -> Self {
        Token { lexeme, kind }
    }

    pub fn to_integer(&self) -> Result<i64, TokenError> {
        if self.kind != TokenKind::Integer {
            return Err(TokenError::NotNumeric);
        }

        self.lexeme.parse().map_err(|_| TokenError::OutOfRange)
    }

    pub fn precedence(&self) -> Option<Precedence> {
        self.kind.precedence()
    }
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Assoc {
    Left,
    Right,
}

/// Binding strength of an operator. A lower `level` binds tighter.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Precedence {
    pub level: usize,
    pub assoc: Assoc,
}

/// Operator levels, tightest binding first.
pub static PRECEDENCE: [&[(TokenKind, Assoc)]; 7] = [
    &[(TokenKind::Not, Assoc::Right)],
    &[
        (TokenKind::Times, Assoc::Left),
        (TokenKind::Divide, Assoc::Left),
        (TokenKind::Modulo, Assoc::Left),
    ],
    &[(TokenKind::LShift, Assoc::Left), (TokenKind::RShift, Assoc::Left)],
    &[(TokenKind::Plus, Assoc::Left), (TokenKind::Minus, Assoc::Left)],
    &[(TokenKind::And, Assoc::Left)],
    &[(TokenKind::Xor, Assoc::Left)],
    &[(TokenKind::Or, Assoc::Left)],
];

impl TokenKind {
    pub fn precedence(self) -> Option<Precedence> {
        PRECEDENCE.iter().enumerate().find_map(|(level, ops)| {
            ops.iter()
                .find(|(kind, _)| *kind == self)
                .map(|&(_, assoc)| Precedence { level, assoc })
        })
    }

    pub fn is_paren(self) -> bool {
        self == TokenKind::LParen || self == TokenKind::RParen
    }

    /// Only bitwise not is reduced as unary regardless of how many
    /// operands are waiting.
    pub fn is_unary_only(self) -> bool {
        self == TokenKind::Not
    }

    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '&' => TokenKind::And,
            '|' => TokenKind::Or,
            '^' => TokenKind::Xor,
            '~' => TokenKind::Not,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Times,
            '/' => TokenKind::Divide,
            '%' => TokenKind::Modulo,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ => return None,
        })
    }
}
