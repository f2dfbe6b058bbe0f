use std::io::{self, Write};

use super::{error::CalcError, parse::Span};

use ansi_term::Colour::Red;
use unicode_width::UnicodeWidthStr;

pub fn print_error<W: Write>(msg: &str, writer: &mut W) -> io::Result<()> {
    writer.write_all(msg.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn report_error<W: Write>(err: &CalcError, writer: &mut W) -> io::Result<()> {
    print_error(&format_error(&err.source, err.span, &err.message()), writer)
}

pub fn format_error(source: &str, span: Span, msg: &str) -> String {
    format!("error: {}\n{}", msg, err_to_string(source, span))
}

/// Display width of the text before `start`.
fn find_dist(source: &str, start: usize) -> usize {
    let start = start.min(source.len());
    UnicodeWidthStr::width(&source[..start])
}

pub fn err_to_string(source: &str, span: Span) -> String {
    let end = source
        .get(span.end..)
        .and_then(|rest| rest.chars().next())
        .map_or(source.len(), |c| span.end + c.len_utf8());
    let start = span.start.min(end);

    let len = UnicodeWidthStr::width(&source[start..end]).max(1);
    let dist = find_dist(source, start);

    let marker = format!("{}{}", " ".repeat(dist), "^".repeat(len));

    format!("  |\n1 |{}\n  |{}", source, Red.paint(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_points_at_span() {
        let msg = format_error("1 + $", Span::new(4, 4), "Encountered invalid token '$' at 4");

        assert_eq!(
            "error: Encountered invalid token '$' at 4\n  |\n1 |1 + $\n  |\u{1b}[31m    ^\u{1b}[0m",
            msg
        );
    }

    #[test]
    fn test_marker_covers_multiple_columns() {
        let msg = err_to_string("(10 / 4)", Span::new(1, 6));

        assert_eq!("  |\n1 |(10 / 4)\n  |\u{1b}[31m ^^^^^^\u{1b}[0m", msg);
    }

    #[test]
    fn test_marker_on_empty_source() {
        let msg = err_to_string("", Span::new(0, 0));

        assert_eq!("  |\n1 |\n  |\u{1b}[31m^\u{1b}[0m", msg);
    }

    #[test]
    fn test_marker_under_wide_char() {
        let msg = err_to_string("1 + 日", Span::new(4, 4));

        assert_eq!("  |\n1 |1 + 日\n  |\u{1b}[31m    ^^\u{1b}[0m", msg);
    }

    #[test]
    fn test_print_error_appends_newline() {
        let mut out = vec![];
        print_error("oops", &mut out).unwrap();

        assert_eq!(b"oops\n".to_vec(), out);
    }
}
