pub mod cli;
pub mod error;
pub mod format;
pub mod parse;
pub mod render;

pub use self::{
    error::{CalcError, ErrorKind, EvalError},
    format::BinaryFormatter,
    parse::ast::{BinaryOp, Expr, UnaryOp},
};

use self::parse::{lexer::lex, parser::Parser, Spanned};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// A successfully parsed expression and the integer it evaluates to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Evaluation {
    pub tree: Expr,
    pub value: i64,
}

impl Evaluation {
    pub fn render(&self) -> String {
        self.tree.render()
    }
}

/// Lexes, parses and evaluates one expression.
pub fn parse(text: &str) -> Result<Evaluation, CalcError> {
    run(text, Parser::new(text)).map(|(evaluation, _)| evaluation)
}

/// Like [`parse`], also returning the expression in postfix notation.
pub fn parse_with_postfix(text: &str) -> Result<(Evaluation, String), CalcError> {
    run(text, Parser::with_postfix(text))
        .map(|(evaluation, postfix)| (evaluation, postfix.unwrap_or_default()))
}

fn run<'src>(
    text: &'src str,
    mut parser: Parser<'src>,
) -> Result<(Evaluation, Option<String>), CalcError> {
    let tokens = lex(text).map_err(|err| CalcError::new(text, Spanned::from(err)))?;
    let tree = parser
        .parse(tokens)
        .map_err(|err| CalcError::new(text, err))?;

    let value = tree.value();
    log::debug!("'{}' evaluated to {}", text, value);

    Ok((Evaluation { tree, value }, parser.postfix()))
}

#[cfg(test)]
fn init_logger() {
    let _ = env_logger::builder()
        .format_timestamp(None)
        .format_target(false)
        .is_test(true)
        .try_init();
}
