use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    process::ExitCode,
};

use clap::Parser;
use flatcalc::{evaluate_tokens, format_tokens, tokenize};
use log::{LevelFilter, info, warn};

/// flatcalc evaluates infix arithmetic expressions such as `(1 + 2) * -3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats `contents` as the path of a file holding one expression per
    /// line. Blank lines and lines starting with `#` are skipped.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Prints the normalized token sequence before each result.
    #[arg(short, long)]
    tokens: bool,

    /// Logs every reduction round.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate. Expressions are read from stdin, one per
    /// line, when omitted.
    #[arg(allow_hyphen_values = true)]
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new().filter_level(default_level)
                              .parse_default_env()
                              .init();

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let failures = match &args.contents {
        Some(path) if args.file => match File::open(path) {
            Ok(file) => run_lines(BufReader::new(file), args.tokens, &mut out, &mut err),
            Err(e) => {
                eprintln!("Failed to read the input file '{path}': {e}");
                return ExitCode::FAILURE;
            },
        },
        Some(expression) => {
            run(expression, args.tokens, &mut out, &mut err).map(|ok| usize::from(!ok))
        },
        None => run_lines(io::stdin().lock(), args.tokens, &mut out, &mut err),
    };

    match failures {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            info!("{failures} expression(s) failed");
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("Failed to write the results: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Evaluates every expression line of `reader` as soon as it is read.
///
/// Blank lines and lines starting with `#` are skipped. A line that cannot be
/// read (for instance because it is not valid UTF-8) is reported on `err` and
/// counted as a failure, and reading continues with the next line.
///
/// # Returns
/// - `Ok(usize)`: The number of lines that failed.
/// - `Err(io::Error)`: If writing to `out` or `err` fails.
fn run_lines<R: BufRead>(reader: R,
                         show_tokens: bool,
                         out: &mut impl Write,
                         err: &mut impl Write)
                         -> io::Result<usize> {
    let mut failures = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("skipping unreadable line {}", index + 1);
                writeln!(err, "line {}: {e}", index + 1)?;
                failures += 1;
                continue;
            },
        };

        let expression = line.trim();
        if expression.is_empty() || expression.starts_with('#') {
            continue;
        }
        if !run(expression, show_tokens, out, err)? {
            failures += 1;
        }
    }

    Ok(failures)
}

/// Evaluates one expression, printing the result to `out` or the error to
/// `err`. Returns whether evaluation succeeded.
fn run(expression: &str,
       show_tokens: bool,
       out: &mut impl Write,
       err: &mut impl Write)
       -> io::Result<bool> {
    let tokens = match tokenize(expression) {
        Ok(tokens) => tokens,
        Err(e) => {
            writeln!(err, "{expression}: {e}")?;
            return Ok(false);
        },
    };

    if show_tokens {
        writeln!(out, "tokens = {}", format_tokens(&tokens))?;
    }

    match evaluate_tokens(tokens) {
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(true)
        },
        Err(e) => {
            writeln!(err, "{expression}: {e}")?;
            Ok(false)
        },
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    fn run_input(input: &[u8], show_tokens: bool) -> (usize, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = run_lines(Cursor::new(input), show_tokens, &mut out, &mut err).unwrap();
        (failures, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let (failures, out, err) = run_input(b"# sums\n\n  1 + 1\n   \n  # (\n2 * 3\n", false);
        assert_eq!(failures, 0);
        assert_eq!(out, "2\n6\n");
        assert_eq!(err, "");
    }

    #[test]
    fn failing_line_does_not_stop_the_rest() {
        let (failures, out, err) = run_input(b"1 + 1\n2 ^ 3\n(4)\n", false);
        assert_eq!(failures, 1);
        assert_eq!(out, "2\n4\n");
        assert!(err.starts_with("2 ^ 3: Error at column 3"), "{err}");
    }

    #[test]
    fn unreadable_line_is_counted_and_skipped() {
        let (failures, out, err) = run_input(b"1+1\n\xff\n2+2\n", false);
        assert_eq!(failures, 1);
        assert_eq!(out, "2\n4\n");
        assert!(err.starts_with("line 2: "), "{err}");
    }

    #[test]
    fn tokens_are_printed_before_the_result() {
        let (failures, out, _) = run_input(b"-(2 + 3)\n", true);
        assert_eq!(failures, 0);
        assert_eq!(out, "tokens = ( -1 * ( 2 + 3 ) )\n-5\n");
    }

    #[test]
    fn single_expression_is_not_treated_as_a_comment() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert!(!run("# 1", false, &mut out, &mut err).unwrap());
        assert!(out.is_empty());
        assert!(!err.is_empty());
    }
}
