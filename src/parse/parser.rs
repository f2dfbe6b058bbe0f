use super::{
    ast::*,
    error::ParseError,
    token::*,
    *,
};
use crate::error::ErrorKind;

type ParseResult<T> = Result<T, Spanned<ErrorKind>>;

/// How an operator is reduced, decided by how many operands are waiting.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    pub fn of(kind: TokenKind, available: usize) -> Self {
        if available >= 2 && !kind.is_unary_only() {
            Arity::Binary
        } else {
            Arity::Unary
        }
    }
}

/// Shunting-yard parser. The operand and operator stacks live only for the
/// duration of one `parse` call.
pub struct Parser<'src> {
    pub(crate) source: &'src str,
    postfix: Option<Vec<&'src str>>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Parser {
            source,
            postfix: None,
        }
    }

    /// Also records the output queue in postfix order.
    pub fn with_postfix(source: &'src str) -> Self {
        Parser {
            source,
            postfix: Some(vec![]),
        }
    }

    pub fn postfix(&self) -> Option<String> {
        self.postfix.as_ref().map(|queue| queue.join(" "))
    }
}

impl<'src> Parser<'src> {
    pub fn parse(&mut self, tokens: Vec<Spanned<Token<'src>>>) -> ParseResult<Expr> {
        if let Some(queue) = self.postfix.as_mut() {
            queue.clear();
        }

        let mut tree: Vec<Spanned<Expr>> = vec![];
        let mut stack: Vec<Spanned<Token<'src>>> = vec![];

        for token in tokens {
            match token.node.kind {
                TokenKind::Integer => {
                    let value = token.node.to_integer().map_err(|err| {
                        let lexeme = token.node.lexeme.to_owned();
                        make_err(token.span, ParseError::InvalidLiteral(lexeme, err))
                    })?;
                    self.add_to_queue(token.node);
                    tree.push(Spanned::from_span(token.span, Expr::Numeric(value)));
                }
                TokenKind::LParen => stack.push(token),
                TokenKind::RParen => self.close_paren(&mut tree, &mut stack, token.span)?,
                _ => {
                    let new_prec = precedence_of(&token)?;
                    while let Some(top) = stack.last() {
                        if top.node.kind == TokenKind::LParen || !should_pop(top, new_prec)? {
                            break;
                        }
                        if let Some(op) = stack.pop() {
                            self.reduce(&mut tree, op)?;
                        }
                    }
                    stack.push(token);
                }
            }
        }

        while let Some(op) = stack.pop() {
            if op.node.kind.is_paren() {
                return Err(make_err(op.span, ParseError::MismatchedParens));
            }
            self.reduce(&mut tree, op)?;
        }

        if tree.len() != 1 {
            let span = Span::new(0, self.source.len().saturating_sub(1));
            return Err(make_err(span, ParseError::OperandCount(tree.len())));
        }

        let root = tree.pop().map(|expr| expr.node);
        root.ok_or_else(|| make_err(Span::new(0, 0), ParseError::OperandCount(0)))
    }

    fn close_paren(
        &mut self,
        tree: &mut Vec<Spanned<Expr>>,
        stack: &mut Vec<Spanned<Token<'src>>>,
        span: Span,
    ) -> ParseResult<()> {
        while let Some(op) = stack.pop() {
            if op.node.kind == TokenKind::LParen {
                // the parenthesised operand now covers the parens too
                if let Some(top) = tree.last_mut() {
                    top.span = top.span.to(op.span).to(span);
                }
                return Ok(());
            }
            self.reduce(tree, op)?;
        }

        Err(make_err(span, ParseError::MismatchedParens))
    }

    fn reduce(&mut self, tree: &mut Vec<Spanned<Expr>>, op: Spanned<Token<'src>>) -> ParseResult<()> {
        let arity = Arity::of(op.node.kind, tree.len());
        log::debug!(
            "reducing '{}' as {:?} with {} operand(s) available",
            op.node,
            arity,
            tree.len()
        );

        let second = tree.pop().ok_or_else(|| {
            make_err(op.span, ParseError::MissingOperand(op.node.lexeme.to_owned()))
        })?;

        let expr = match arity {
            Arity::Binary => {
                let first = tree.pop().ok_or_else(|| {
                    make_err(op.span, ParseError::MissingOperand(op.node.lexeme.to_owned()))
                })?;
                let bin_op = BinaryOp::from_kind(op.node.kind).ok_or_else(|| {
                    make_err(op.span, ParseError::NoPrecedence(op.node.lexeme.to_owned()))
                })?;
                let span = first.span.to(second.span);
                let expr = Expr::binary(first.node, bin_op, second.node)
                    .map_err(|err| Spanned::from_span(span, ErrorKind::from(err)))?;
                Spanned::from_span(span, expr)
            }
            Arity::Unary => {
                let un_op = UnaryOp::from_kind(op.node.kind).ok_or_else(|| {
                    make_err(op.span, ParseError::NotUnary(op.node.lexeme.to_owned()))
                })?;
                let span = op.span.to(second.span);
                let expr = Expr::unary(second.node, un_op)
                    .map_err(|err| Spanned::from_span(span, ErrorKind::from(err)))?;
                Spanned::from_span(span, expr)
            }
        };

        self.add_to_queue(op.node);
        tree.push(expr);
        Ok(())
    }

    fn add_to_queue(&mut self, token: Token<'src>) {
        if let Some(queue) = self.postfix.as_mut() {
            queue.push(token.lexeme);
        }
    }
}

fn make_err(span: Span, err: ParseError) -> Spanned<ErrorKind> {
    Spanned::from_span(span, ErrorKind::from(err))
}

fn precedence_of(token: &Spanned<Token>) -> ParseResult<Precedence> {
    token
        .node
        .precedence()
        .ok_or_else(|| make_err(token.span, ParseError::NoPrecedence(token.node.lexeme.to_owned())))
}

/// Whether the operator on top of the stack is reduced before `new` is
/// pushed.
fn should_pop(top: &Spanned<Token>, new: Precedence) -> ParseResult<bool> {
    let top = precedence_of(top)?;

    Ok(match top.assoc {
        Assoc::Left => new.level >= top.level,
        Assoc::Right => new.level > top.level,
    })
}

#[cfg(test)]
mod tests {
    use super::super::lexer::lex;
    use super::*;
    use crate::error::EvalError;

    fn parse(source: &str) -> ParseResult<Expr> {
        let tokens = lex(source).map_err(Spanned::<ErrorKind>::from)?;
        Parser::new(source).parse(tokens)
    }

    fn parse_err(source: &str) -> ErrorKind {
        parse(source).unwrap_err().node
    }

    #[test]
    fn test_parsing_number_in_parentheses_should_just_return_number() {
        assert_eq!(Expr::Numeric(42), parse("((((42))))").unwrap());
    }

    #[test]
    fn test_parsing_binary_operations_should_have_correct_precedence() {
        let expr = parse("3+4*2").unwrap();
        assert_eq!("(3 + (4 * 2))", expr.to_string());
        assert_eq!(11, expr.value());

        let expr = parse("(3+4)*2").unwrap();
        assert_eq!("((3 + 4) * 2)", expr.to_string());
        assert_eq!(14, expr.value());

        let expr = parse("1 | 2 ^ 3 & 4 + 5 << 6 * 7").unwrap();
        assert_eq!("(1 | (2 ^ (3 & (4 + (5 << (6 * 7))))))", expr.to_string());
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!("((8 - 2) - 1)", parse("8 - 2 - 1").unwrap().to_string());
        assert_eq!(5, parse("8 - 2 - 1").unwrap().value());
        assert_eq!("((64 >> 2) >> 1)", parse("64 >> 2 >> 1").unwrap().to_string());
        assert_eq!("((12 / 3) * 2)", parse("12 / 3 * 2").unwrap().to_string());
    }

    #[test]
    fn test_bitwise_not() {
        assert_eq!(-6, parse("~5").unwrap().value());
        assert_eq!("~~5", parse("~~5").unwrap().to_string());
        assert_eq!(5, parse("~~5").unwrap().value());

        let expr = parse("2*~3").unwrap();
        assert_eq!("(2 * ~3)", expr.to_string());
        assert_eq!(-8, expr.value());
    }

    #[test]
    fn test_not_is_unary_even_with_two_operands() {
        let expr = parse("1 & ~0").unwrap();
        assert_eq!("(1 & ~0)", expr.to_string());
        assert_eq!(1, expr.value());
    }

    #[test]
    fn test_unary_minus_and_plus_by_operand_count() {
        let expr = parse("-(3)").unwrap();
        assert_eq!("-3", expr.to_string());
        assert_eq!(-3, expr.value());

        assert_eq!(5, parse("+5").unwrap().value());
        assert_eq!(5, parse("3 - -2").unwrap().value());
    }

    #[test]
    fn test_signed_literal() {
        assert_eq!(Expr::Numeric(-5), parse("-5").unwrap());
    }

    #[test]
    fn test_absorbed_minus_leaves_two_operands() {
        assert_eq!(
            ErrorKind::Parse(ParseError::OperandCount(2)),
            parse_err("1-2")
        );
        assert_eq!(-1, parse("1 - 2").unwrap().value());
    }

    #[test]
    fn test_mismatched_parentheses() {
        assert_eq!(
            Spanned::new(0, 0, ErrorKind::Parse(ParseError::MismatchedParens)),
            parse("(3+4").unwrap_err()
        );
        assert_eq!(
            Spanned::new(3, 3, ErrorKind::Parse(ParseError::MismatchedParens)),
            parse("3+4)").unwrap_err()
        );
        assert_eq!(ErrorKind::Parse(ParseError::MismatchedParens), parse_err(")("));
    }

    #[test]
    fn test_binary_only_operator_reduced_as_unary_fails() {
        assert_eq!(
            ErrorKind::Parse(ParseError::NotUnary("*".to_owned())),
            parse_err("* 3")
        );
        assert_eq!(
            ErrorKind::Parse(ParseError::NotUnary("*".to_owned())),
            parse_err("2*+3")
        );
    }

    #[test]
    fn test_operator_without_operand_fails() {
        assert_eq!(
            ErrorKind::Parse(ParseError::MissingOperand("~".to_owned())),
            parse_err("~")
        );
        assert_eq!(
            ErrorKind::Parse(ParseError::MissingOperand("+".to_owned())),
            parse_err("()+")
        );
    }

    #[test]
    fn test_empty_input_has_no_operand() {
        assert_eq!(ErrorKind::Parse(ParseError::OperandCount(0)), parse_err(""));
        assert_eq!(ErrorKind::Parse(ParseError::OperandCount(0)), parse_err("()"));
    }

    #[test]
    fn test_evaluation_failure_is_spanned_over_operands() {
        assert_eq!(
            Spanned::new(
                4,
                9,
                ErrorKind::Eval(EvalError::InexactDivision {
                    dividend: 10,
                    divisor: 4
                })
            ),
            parse("1 + 10 / 4").unwrap_err()
        );
        assert_eq!(
            ErrorKind::Eval(EvalError::NegativeShift(-1)),
            parse_err("1 << (0 - 1)")
        );
    }

    #[test]
    fn test_invalid_literal() {
        assert_eq!(
            ErrorKind::Parse(ParseError::InvalidLiteral(
                "99999999999999999999".to_owned(),
                super::super::error::TokenError::OutOfRange
            )),
            parse_err("99999999999999999999")
        );
    }

    #[test]
    fn test_postfix_queue() {
        let source = "(1 + 2) * ~3";
        let tokens = lex(source).unwrap();
        let mut parser = Parser::with_postfix(source);
        parser.parse(tokens).unwrap();

        assert_eq!(Some("1 2 + 3 ~ *".to_owned()), parser.postfix());
        assert_eq!(None, Parser::new(source).postfix());
    }

    #[test]
    fn test_arity_of() {
        assert_eq!(Arity::Binary, Arity::of(TokenKind::Minus, 2));
        assert_eq!(Arity::Unary, Arity::of(TokenKind::Minus, 1));
        assert_eq!(Arity::Unary, Arity::of(TokenKind::Not, 3));
    }
}
