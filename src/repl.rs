use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        evaluator::core::{Evaluator, LineOutcome},
        lexer::{TokenSource, Tokenizer},
    },
};

/// Runs an interactive session until the input stream ends.
///
/// Before every line the prompt is written to `out` (preceded by a blank line,
/// and skipped entirely when `config.prompt` is `None`). Each result is written
/// to `out` in fixed-point notation; each error is written to `err` as
/// `ERROR: <description>`, after which the rest of the offending line is
/// dropped and the session carries on with the next line.
///
/// # Errors
/// Returns an error if reading `input` or writing either output fails.
///
/// # Example
/// ```
/// use shuntcalc::{config::Config, repl::run_session};
///
/// let config = Config { prompt: None, ..Config::default() };
/// let (mut out, mut err) = (Vec::new(), Vec::new());
///
/// run_session(&config, "2+3*4\n5/0\n".as_bytes(), &mut out, &mut err).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "14.000000\n");
/// assert_eq!(String::from_utf8(err).unwrap(), "ERROR: division by 0\n");
/// ```
pub fn run_session<R, O, E>(config: &Config, input: R, out: &mut O, err: &mut E) -> io::Result<()>
    where R: BufRead,
          O: Write,
          E: Write
{
    info!("session started");

    let mut tokens = Tokenizer::with_config(input, config);
    let mut evaluator = Evaluator::new(config);
    let mut lines = 0usize;

    prompt(config, out)?;
    loop {
        match evaluator.evaluate_line(&mut tokens) {
            Ok(LineOutcome::Value(value)) => writeln!(out, "{}", config.format_value(value))?,
            Ok(LineOutcome::Empty) => {},
            Ok(LineOutcome::EndOfInput) => break,
            Err(EvalError::Io(e)) => return Err(e),
            Err(e) => {
                out.flush()?;
                writeln!(err, "ERROR: {e}")?;
                err.flush()?;
                tokens.discard_line();
                debug!("discarded the rest of line {}", lines + 1);
            },
        }
        lines += 1;
        prompt(config, out)?;
    }

    if config.prompt.is_some() {
        writeln!(out)?;
    }
    out.flush()?;

    info!("session ended after {lines} lines");
    Ok(())
}

fn prompt<O: Write>(config: &Config, out: &mut O) -> io::Result<()> {
    if let Some(prompt) = &config.prompt {
        write!(out, "\n{prompt}")?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(config: &Config, input: &str) -> (String, String) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        run_session(config, input.as_bytes(), &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn prompts_before_every_line() {
        let (out, err) = session(&Config::default(), "1+1\n\n");
        assert_eq!(out, "\n> 2.000000\n\n> \n> \n");
        assert_eq!(err, "");
    }

    #[test]
    fn errors_go_to_the_error_channel() {
        let config = Config { prompt: None,
                              ..Config::default() };
        let (out, err) = session(&config, "1+)\n3+4\n8 / (4 - 4)\n");
        assert_eq!(out, "7.000000\n");
        assert_eq!(err, "ERROR: expected number or '('\nERROR: division by 0\n");
    }

    #[test]
    fn custom_precision_and_prompt() {
        let config = Config { precision: 2,
                              prompt: Some("calc> ".to_string()),
                              ..Config::default() };
        let (out, _) = session(&config, "1/3\n");
        assert_eq!(out, "\ncalc> 0.33\n\ncalc> \n");
    }

    #[test]
    fn empty_input_just_prompts_once() {
        let (out, err) = session(&Config::default(), "");
        assert_eq!(out, "\n> \n");
        assert_eq!(err, "");
    }

    #[test]
    fn invalid_utf8_is_reported_and_the_session_continues() {
        let config = Config { prompt: None,
                              ..Config::default() };
        let (mut out, mut err) = (Vec::new(), Vec::new());
        run_session(&config, &b"1+\xff\n3+4\n"[..], &mut out, &mut err).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "7.000000\n");
        assert_eq!(String::from_utf8(err).unwrap(), "ERROR: expected number or '('\n");
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn read_failures_end_the_session() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let input = io::BufReader::new(FailingReader);
        let result = run_session(&Config::default(), input, &mut out, &mut err);
        assert_eq!(result.unwrap_err().to_string(), "disk on fire");
        assert!(err.is_empty());
    }
}
