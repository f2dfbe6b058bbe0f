use std::fmt;

use super::token::TokenKind;
use crate::error::EvalError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Plus,
    Negate,
    Not,
}

impl UnaryOp {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Negate,
            TokenKind::Not => UnaryOp::Not,
            _ => return None,
        })
    }

    pub fn apply(self, operand: i64) -> Result<i64, EvalError> {
        match self {
            UnaryOp::Plus => Ok(operand),
            UnaryOp::Negate => operand
                .checked_mul(-1)
                .ok_or(EvalError::Overflow(self.symbol())),
            UnaryOp::Not => Ok(!operand),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Negate => "-",
            UnaryOp::Not => "~",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
}

impl BinaryOp {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::And => BinaryOp::And,
            TokenKind::Or => BinaryOp::Or,
            TokenKind::Xor => BinaryOp::Xor,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Times => BinaryOp::Mul,
            TokenKind::Divide => BinaryOp::Div,
            TokenKind::Modulo => BinaryOp::Mod,
            TokenKind::LShift => BinaryOp::Shl,
            TokenKind::RShift => BinaryOp::Shr,
            _ => return None,
        })
    }

    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        let overflow = EvalError::Overflow(self.symbol());

        match self {
            BinaryOp::And => Ok(left & right),
            BinaryOp::Or => Ok(left | right),
            BinaryOp::Xor => Ok(left ^ right),
            BinaryOp::Add => left.checked_add(right).ok_or(overflow),
            BinaryOp::Sub => left.checked_sub(right).ok_or(overflow),
            BinaryOp::Mul => left.checked_mul(right).ok_or(overflow),
            BinaryOp::Div => divide(left, right),
            BinaryOp::Mod => modulo(left, right),
            BinaryOp::Shl => shift_left(left, right),
            BinaryOp::Shr => shift_right(left, right),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }

    /// The right operand of a shift is a bit count, not a bit pattern.
    pub fn is_shift(self) -> bool {
        self == BinaryOp::Shl || self == BinaryOp::Shr
    }
}

/// Only exact quotients are integers; anything else is rejected.
fn divide(dividend: i64, divisor: i64) -> Result<i64, EvalError> {
    if divisor == 0 {
        return Err(EvalError::DivisionByZero);
    }

    let rem = dividend
        .checked_rem(divisor)
        .ok_or(EvalError::Overflow("/"))?;
    if rem != 0 {
        return Err(EvalError::InexactDivision { dividend, divisor });
    }

    dividend.checked_div(divisor).ok_or(EvalError::Overflow("/"))
}

/// Floored modulo: a non-zero result takes the sign of the divisor.
fn modulo(left: i64, right: i64) -> Result<i64, EvalError> {
    if right == 0 {
        return Err(EvalError::DivisionByZero);
    }

    let rem = left.checked_rem(right).ok_or(EvalError::Overflow("%"))?;
    if rem != 0 && (rem < 0) != (right < 0) {
        Ok(rem + right)
    } else {
        Ok(rem)
    }
}

fn shift_amount(amount: i64) -> Result<u32, EvalError> {
    if amount < 0 {
        return Err(EvalError::NegativeShift(amount));
    }

    Ok(amount.min(i64::from(u32::MAX)) as u32)
}

fn shift_left(value: i64, amount: i64) -> Result<i64, EvalError> {
    let amount = shift_amount(amount)?;
    if value == 0 {
        return Ok(0);
    }
    if amount >= i64::BITS {
        return Err(EvalError::Overflow("<<"));
    }

    let shifted = value << amount;
    if shifted >> amount != value {
        return Err(EvalError::Overflow("<<"));
    }

    Ok(shifted)
}

fn shift_right(value: i64, amount: i64) -> Result<i64, EvalError> {
    let amount = shift_amount(amount)?;
    if amount >= i64::BITS {
        return Ok(if value < 0 { -1 } else { 0 });
    }

    Ok(value >> amount)
}

/// An expression node. Compound nodes store the value they evaluate to,
/// so a tree can only be built out of expressions that evaluate.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Numeric(i64),
    Unary {
        operand: Box<Expr>,
        op: UnaryOp,
        value: i64,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
        value: i64,
    },
}

impl Expr {
    pub fn unary(operand: Expr, op: UnaryOp) -> Result<Self, EvalError> {
        let value = op.apply(operand.value())?;

        Ok(Expr::Unary {
            operand: Box::new(operand),
            op,
            value,
        })
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Result<Self, EvalError> {
        let value = op.apply(left.value(), right.value())?;

        Ok(Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            value,
        })
    }

    pub fn value(&self) -> i64 {
        match self {
            Expr::Numeric(value) => *value,
            Expr::Unary { value, .. } | Expr::Binary { value, .. } => *value,
        }
    }

    pub fn is_compound(&self) -> bool {
        !matches!(self, Expr::Numeric(_))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Numeric(value) => write!(f, "{}", value),
            Expr::Unary { operand, op, .. } => write!(f, "{}{}", op.symbol(), operand),
            Expr::Binary {
                left, op, right, ..
            } => write!(f, "({} {} {})", left, op.symbol(), right),
        }
    }
}
