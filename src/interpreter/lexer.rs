use std::io::BufRead;

use log::trace;
use logos::Logos;

use crate::{
    config::Config,
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
};

/// One of the four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a classified token handed to the evaluator.
///
/// Tokens are produced one at a time by a [`TokenSource`] and have no identity
/// beyond the evaluator step that consumes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `2.5` or `.5`.
    Number(f64),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// One of `+ - * /`.
    Operator(Operator),
    /// The end of a physical input line.
    LineEnd,
    /// The end of the whole input stream.
    StreamEnd,
    /// Any other character. Whether it is acceptable is up to the evaluator.
    Unknown(char),
}

/// The raw lexical layer underneath [`Tokenizer`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    /// Numeric literals. The integer form is extended by a fraction only when
    /// a digit follows the point.
    #[regex(r"[0-9]+", lex_number)]
    #[regex(r"\.[0-9]+", parse_float)]
    Number(f64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// Line terminators.
    #[token("\n")]
    #[token("\r\n")]
    NewLine,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// Parses an integer part and, if the point is followed by a digit, the
/// fraction after it.
///
/// A point that is not followed by a digit is left in the input and becomes a
/// token of its own.
fn lex_number(lex: &mut logos::Lexer<Lexeme>) -> Option<f64> {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') && rest.get(1).is_some_and(u8::is_ascii_digit) {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + digits);
    }
    parse_float(lex)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &mut logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Anything that can hand the evaluator its next token.
pub trait TokenSource {
    /// Returns the next token, advancing past exactly the characters that
    /// belong to it.
    ///
    /// # Errors
    /// Returns [`EvalError::TokenTooLong`] for an oversized numeric literal and
    /// [`EvalError::Io`] if the underlying stream fails.
    fn next_token(&mut self) -> EvalResult<Token>;

    /// Drops whatever is left of the current physical line.
    fn discard_line(&mut self);
}

/// Pull-based tokenizer over a buffered character stream.
///
/// The stream is read one physical line at a time; tokens are then lexed out
/// of that line on demand.
pub struct Tokenizer<R> {
    reader:        R,
    bytes:         Vec<u8>,
    line:          String,
    pos:           usize,
    max_token_len: usize,
}

impl<R: BufRead> Tokenizer<R> {
    /// Creates a tokenizer reading from `reader`, rejecting numeric literals
    /// longer than `max_token_len` characters.
    pub const fn new(reader: R, max_token_len: usize) -> Self {
        Self { reader,
               bytes: Vec::new(),
               line: String::new(),
               pos: 0,
               max_token_len }
    }

    /// Creates a tokenizer with the limits of `config`.
    pub const fn with_config(reader: R, config: &Config) -> Self {
        Self::new(reader, config.max_token_len)
    }

    /// Reads the next physical line into the buffer. Returns `false` at the end
    /// of the stream.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD and later
    /// surface as [`Token::Unknown`].
    fn fill(&mut self) -> EvalResult<bool> {
        self.bytes.clear();
        self.pos = 0;
        let read = self.reader.read_until(b'\n', &mut self.bytes)?;
        self.line = String::from_utf8_lossy(&self.bytes).into_owned();
        Ok(read > 0)
    }

    /// Lexes one token from the unread part of the buffered line.
    ///
    /// # Returns
    /// - `Some((len, token))`: the token, or the error it raised, and how many
    ///   bytes it spans including any whitespace skipped before it.
    /// - `None`: only whitespace, which logos skips, is left on the line.
    fn scan(&self) -> Option<(usize, EvalResult<Token>)> {
        let rest = &self.line[self.pos..];
        let mut lexer = Lexeme::lexer(rest);

        let lexeme = lexer.next()?;
        let span = lexer.span();

        let Ok(lexeme) = lexeme else {
            return rest[span.start..].chars()
                                     .next()
                                     .map(|c| (span.start + c.len_utf8(), Ok(Token::Unknown(c))));
        };

        let token = match lexeme {
            Lexeme::Number(_) if lexer.slice().len() > self.max_token_len => {
                Err(EvalError::TokenTooLong { max: self.max_token_len })
            },
            Lexeme::Number(value) => Ok(Token::Number(value)),
            Lexeme::LParen => Ok(Token::LeftParen),
            Lexeme::RParen => Ok(Token::RightParen),
            Lexeme::Plus => Ok(Token::Operator(Operator::Add)),
            Lexeme::Minus => Ok(Token::Operator(Operator::Sub)),
            Lexeme::Star => Ok(Token::Operator(Operator::Mul)),
            Lexeme::Slash => Ok(Token::Operator(Operator::Div)),
            Lexeme::NewLine => Ok(Token::LineEnd),
            // Whitespace is skipped inside logos and never emitted.
            Lexeme::Ignored => return None,
        };

        Some((span.end, token))
    }
}

impl<R: BufRead> TokenSource for Tokenizer<R> {
    fn next_token(&mut self) -> EvalResult<Token> {
        loop {
            if self.pos >= self.line.len() && !self.fill()? {
                trace!("token: {:?}", Token::StreamEnd);
                return Ok(Token::StreamEnd);
            }

            if let Some((len, token)) = self.scan() {
                self.pos += len;
                trace!("token: {token:?}");
                return token;
            }
            self.pos = self.line.len();
        }
    }

    // A line whose error was raised on its terminator has already been fully
    // consumed, so there is nothing left to drop in that case.
    fn discard_line(&mut self) {
        self.pos = self.line.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new(source.as_bytes(), 100);
        let mut out = Vec::new();
        loop {
            let token = tokenizer.next_token().unwrap();
            out.push(token);
            if token == Token::StreamEnd {
                return out;
            }
        }
    }

    #[test]
    fn classifies_every_kind() {
        assert_eq!(tokens("(1 + 2)*3/4-x\n"),
                   vec![Token::LeftParen,
                        Token::Number(1.0),
                        Token::Operator(Operator::Add),
                        Token::Number(2.0),
                        Token::RightParen,
                        Token::Operator(Operator::Mul),
                        Token::Number(3.0),
                        Token::Operator(Operator::Div),
                        Token::Number(4.0),
                        Token::Operator(Operator::Sub),
                        Token::Unknown('x'),
                        Token::LineEnd,
                        Token::StreamEnd]);
    }

    #[test]
    fn decimal_literals() {
        assert_eq!(tokens(".5 2.25 10"),
                   vec![Token::Number(0.5),
                        Token::Number(2.25),
                        Token::Number(10.0),
                        Token::StreamEnd]);
    }

    #[test]
    fn point_without_following_digit_is_unknown() {
        assert_eq!(tokens("3.+2"),
                   vec![Token::Number(3.0),
                        Token::Unknown('.'),
                        Token::Operator(Operator::Add),
                        Token::Number(2.0),
                        Token::StreamEnd]);
        assert_eq!(tokens(". 5"), vec![Token::Unknown('.'), Token::Number(5.0), Token::StreamEnd]);
    }

    #[test]
    fn second_point_starts_a_new_literal() {
        assert_eq!(tokens("1.5.5"), vec![Token::Number(1.5), Token::Number(0.5), Token::StreamEnd]);
    }

    #[test]
    fn whitespace_only_separates() {
        assert_eq!(tokens(" \t 12\t3  \n"),
                   vec![Token::Number(12.0), Token::Number(3.0), Token::LineEnd, Token::StreamEnd]);
    }

    #[test]
    fn crlf_is_a_line_end() {
        assert_eq!(tokens("1\r\n2\r"),
                   vec![Token::Number(1.0),
                        Token::LineEnd,
                        Token::Number(2.0),
                        Token::Unknown('\r'),
                        Token::StreamEnd]);
    }

    #[test]
    fn non_ascii_is_unknown() {
        assert_eq!(tokens("1×2"),
                   vec![Token::Number(1.0), Token::Unknown('×'), Token::Number(2.0), Token::StreamEnd]);
    }

    #[test]
    fn literal_at_the_limit_is_accepted() {
        let mut tokenizer = Tokenizer::new("12345\n".as_bytes(), 5);
        assert_eq!(tokenizer.next_token().unwrap(), Token::Number(12345.0));
        assert_eq!(tokenizer.next_token().unwrap(), Token::LineEnd);
    }

    #[test]
    fn oversized_literal_is_rejected() {
        let mut tokenizer = Tokenizer::new("123.45 + 1\n7\n".as_bytes(), 5);
        assert!(matches!(tokenizer.next_token(), Err(EvalError::TokenTooLong { max: 5 })));
        assert_eq!(tokenizer.next_token().unwrap(), Token::Operator(Operator::Add));
        tokenizer.discard_line();
        assert_eq!(tokenizer.next_token().unwrap(), Token::Number(7.0));
    }

    #[test]
    fn discard_drops_the_rest_of_the_line() {
        let mut tokenizer = Tokenizer::new("1 + 2\n3\n".as_bytes(), 100);
        assert_eq!(tokenizer.next_token().unwrap(), Token::Number(1.0));
        tokenizer.discard_line();
        assert_eq!(tokenizer.next_token().unwrap(), Token::Number(3.0));
        assert_eq!(tokenizer.next_token().unwrap(), Token::LineEnd);
        tokenizer.discard_line();
        assert_eq!(tokenizer.next_token().unwrap(), Token::StreamEnd);
    }

    #[test]
    fn invalid_utf8_is_an_unknown_character() {
        let mut tokenizer = Tokenizer::new(&b"1+\xff\n2\n"[..], 100);
        assert_eq!(tokenizer.next_token().unwrap(), Token::Number(1.0));
        assert_eq!(tokenizer.next_token().unwrap(), Token::Operator(Operator::Add));
        assert_eq!(tokenizer.next_token().unwrap(), Token::Unknown(char::REPLACEMENT_CHARACTER));
        assert_eq!(tokenizer.next_token().unwrap(), Token::LineEnd);
        assert_eq!(tokenizer.next_token().unwrap(), Token::Number(2.0));
    }
}
