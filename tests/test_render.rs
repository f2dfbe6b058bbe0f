use bitcalc::*;

fn render(expr: &str) -> String {
    parse(expr).unwrap().render()
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let evaluation = parse("3+4*2").unwrap();
    assert_eq!(11, evaluation.value);
    assert_eq!(
        "(4 * 2)
    00000100
 *  00000010
------------
    00001000

(3 + (4 * 2))
    00000011
 +  00001000
------------
    00001011",
        evaluation.render()
    );
}

#[test]
fn test_parentheses_override_precedence() {
    let evaluation = parse("(3+4)*2").unwrap();
    assert_eq!(14, evaluation.value);
    assert_eq!(
        "(3 + 4)
    00000011
 +  00000100
------------
    00000111

((3 + 4) * 2)
    00000111
 *  00000010
------------
    00001110",
        evaluation.render()
    );
}

#[test]
fn test_bitwise_complement() {
    let evaluation = parse("~5").unwrap();
    assert_eq!(-6, evaluation.value);
    assert_eq!(
        "~5
 ~   00000101
-------------
    -00000110",
        evaluation.render()
    );
}

#[test]
fn test_shift_amount_is_rendered_in_decimal() {
    let evaluation = parse("8>>2").unwrap();
    assert_eq!(2, evaluation.value);
    assert_eq!(
        "(8 >> 2)
    00001000
 >>        2
------------
    00000010",
        evaluation.render()
    );
}

#[test]
fn test_signed_literal_renders_as_single_value() {
    let evaluation = parse("-5").unwrap();
    assert_eq!(-5, evaluation.value);
    assert_eq!(Expr::Numeric(-5), evaluation.tree);
    assert_eq!("-00000101", evaluation.render());
}

#[test]
fn test_negative_operand_adds_sign_column() {
    assert_eq!(
        "(5 & -3)
     00000101
 &  -00000011
-------------
     00000101",
        render("5 & -3")
    );
}

#[test]
fn test_each_level_has_its_own_width() {
    let evaluation = parse("1 << 8 | 3").unwrap();
    assert_eq!(259, evaluation.value);
    assert_eq!(
        "(1 << 8)
    0000000000000001
 <<                8
--------------------
    0000000100000000

((1 << 8) | 3)
    0000000100000000
 |  0000000000000011
--------------------
    0000000100000011",
        evaluation.render()
    );
}

#[test]
fn test_unary_minus_on_group() {
    let evaluation = parse("-(3)").unwrap();
    assert_eq!(-3, evaluation.value);
    assert_eq!(
        "-3
 -   00000011
-------------
    -00000011",
        evaluation.render()
    );
}

#[test]
fn test_exact_division_and_modulo() {
    assert_eq!(5, parse("10 / 2").unwrap().value);
    assert_eq!(2, parse("-7 % 3").unwrap().value);
    assert_eq!(6, parse("(12 ^ 10) & 6").unwrap().value);
}
