use clap::{App, Arg, ArgMatches};
use std::io::{self, BufRead, Write};

use bitcalc::{cli::report_error, parse_with_postfix, AUTHOR, DESCRIPTION, NAME, VERSION};

fn main() -> io::Result<()> {
    env_logger::init();
    init_ansi();

    let args = parse_args();
    let postfix = args.is_present("postfix");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut err_writer = stderr.lock();

    if let Some(exprs) = args.values_of("expression") {
        let mut failed = false;
        for expr in exprs {
            failed |= !evaluate(expr, postfix, &mut out, &mut err_writer)?;
        }

        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    start_repl(postfix, &mut out, &mut err_writer)
}

fn init_ansi() {
    #[cfg(windows)]
    {
        if let Err(code) = ansi_term::enable_ansi_support() {
            eprintln!(
                "Could not initialise windows ansi support. Error code: {}",
                code
            );
        }
    }
}

/// Prints the diagram and value of `expr`, or its diagnostic. Returns
/// whether the expression evaluated.
fn evaluate<W: Write, E: Write>(
    expr: &str,
    postfix: bool,
    out: &mut W,
    err_writer: &mut E,
) -> io::Result<bool> {
    match parse_with_postfix(expr) {
        Ok((evaluation, rpn)) => {
            writeln!(out)?;
            writeln!(out, "{}", evaluation.render())?;
            writeln!(out, "{}", evaluation.value)?;
            if postfix {
                writeln!(out, "postfix: {}", rpn)?;
            }
            writeln!(out)?;
            out.flush()?;
            Ok(true)
        }
        Err(err) => {
            report_error(&err, err_writer)?;
            Ok(false)
        }
    }
}

fn start_repl<W: Write, E: Write>(postfix: bool, out: &mut W, err_writer: &mut E) -> io::Result<()> {
    writeln!(
        out,
        "{} v{} - a visual calculator for bitwise expressions",
        NAME, VERSION
    )?;
    writeln!(out, "Use Ctrl+C to quit.\n")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        write!(out, ">>> ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(out)?;
                return Ok(());
            }
        };

        let expr = line.trim();
        if expr.is_empty() {
            continue;
        }

        evaluate(expr, postfix, out, err_writer)?;
    }
}

pub fn parse_args<'a>() -> ArgMatches<'a> {
    App::new(NAME)
        .version(VERSION)
        .author(AUTHOR)
        .about(DESCRIPTION)
        .arg(
            Arg::with_name("postfix")
                .short("p")
                .long("postfix")
                .help("also print the expression in postfix notation"),
        )
        .arg(
            Arg::with_name("expression")
                .multiple(true)
                .allow_hyphen_values(true)
                .help("expressions to evaluate; starts a prompt when omitted"),
        )
        .get_matches()
}
