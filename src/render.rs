use crate::{format::BinaryFormatter, parse::ast::Expr};

/// Columns reserved left of the bits for the operator symbol.
const GUTTER: usize = 4;

/// Renders the evaluation of `expr` as a bit diagram. Compound operands are
/// rendered first, each followed by a blank line, and every node aligns
/// only its own operands and result.
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Numeric(value) => BinaryFormatter::single_format(*value),
        Expr::Unary { operand, op, value } => {
            let mut lines = derivations(&[operand.as_ref()]);
            let fmt = BinaryFormatter::new(&[operand.value(), *value]);
            let width = fmt.digits() + GUTTER;

            lines.push(expr.to_string());
            lines.push(format!(
                "{:^gutter$}{}",
                op.symbol(),
                fmt.format(operand.value()),
                gutter = GUTTER
            ));
            lines.push("-".repeat(width));
            lines.push(format!("{:>width$}", fmt.format(*value), width = width));

            lines.join("\n")
        }
        Expr::Binary {
            left,
            op,
            right,
            value,
        } => {
            let mut lines = derivations(&[left.as_ref(), right.as_ref()]);
            let fmt = BinaryFormatter::new(&[left.value(), right.value(), *value]);
            let width = fmt.digits() + GUTTER;

            let right_bits = if op.is_shift() {
                right.value().to_string()
            } else {
                fmt.format(right.value())
            };

            lines.push(expr.to_string());
            lines.push(format!("{:>width$}", fmt.format(left.value()), width = width));
            lines.push(format!(
                "{:^gutter$}{:>digits$}",
                op.symbol(),
                right_bits,
                gutter = GUTTER,
                digits = fmt.digits()
            ));
            lines.push("-".repeat(width));
            lines.push(format!("{:>width$}", fmt.format(*value), width = width));

            lines.join("\n")
        }
    }
}

fn derivations(children: &[&Expr]) -> Vec<String> {
    let mut lines = vec![];
    for child in children.iter().filter(|c| c.is_compound()) {
        lines.push(render(child));
        lines.push(String::new());
    }
    lines
}

impl Expr {
    pub fn render(&self) -> String {
        render(self)
    }
}
