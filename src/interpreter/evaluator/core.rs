use log::{debug, trace};

use crate::{
    config::Config,
    error::{EvalError, StackKind, SyntaxError},
    interpreter::{
        evaluator::{
            precedence::{Incoming, Pending, should_pop},
            stack::BoundedStack,
        },
        lexer::{Operator, Token, TokenSource},
    },
};

/// Result type used by the tokenizer and the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// What a successfully evaluated line produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineOutcome {
    /// The line reduced to a single number.
    Value(f64),
    /// The line was empty.
    Empty,
    /// The input stream ended while an operand was expected. Whatever was
    /// pending on the line is dropped.
    EndOfInput,
}

/// Stores the state of one shunting-yard evaluation session.
///
/// The session consists of the operand stack, the operator stack and the
/// "expecting an operand" mode. It is scoped to a single line: after every
/// line, successful or not, it is back to empty stacks expecting an operand.
///
/// ## Usage
///
/// An `Evaluator` is created once and fed one line at a time with
/// [`Evaluator::evaluate_line`], pulling tokens from any [`TokenSource`].
#[derive(Debug, Clone)]
pub struct Evaluator {
    operands:          BoundedStack<f64>,
    operators:         BoundedStack<Pending>,
    expecting_operand: bool,
    line_started:      bool,
}

impl Evaluator {
    /// Creates an evaluator with the stack capacities of `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { operands:          BoundedStack::new(StackKind::Operand, config.operand_capacity),
               operators:         BoundedStack::new(StackKind::Operator,
                                                    config.operator_capacity),
               expecting_operand: true,
               line_started:      false, }
    }

    /// Evaluates one line, pulling tokens until a line end or the end of the
    /// stream.
    ///
    /// Whatever the outcome, the session is reset before returning, so the
    /// next call starts from empty stacks expecting an operand. Dropping the
    /// unread rest of a failed line is left to the caller (see
    /// [`TokenSource::discard_line`]).
    ///
    /// # Errors
    /// Returns an [`EvalError`] if the line is malformed, overflows a stack,
    /// divides by zero, contains an oversized literal, or if reading fails.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::{
    ///     config::Config,
    ///     interpreter::{
    ///         evaluator::core::{Evaluator, LineOutcome},
    ///         lexer::Tokenizer,
    ///     },
    /// };
    ///
    /// let config = Config::default();
    /// let mut evaluator = Evaluator::new(&config);
    /// let mut tokens = Tokenizer::with_config("2 + 3 * 4\n\n".as_bytes(), &config);
    ///
    /// assert_eq!(evaluator.evaluate_line(&mut tokens).unwrap(), LineOutcome::Value(14.0));
    /// assert_eq!(evaluator.evaluate_line(&mut tokens).unwrap(), LineOutcome::Empty);
    /// assert_eq!(evaluator.evaluate_line(&mut tokens).unwrap(), LineOutcome::EndOfInput);
    /// ```
    pub fn evaluate_line<S>(&mut self, source: &mut S) -> EvalResult<LineOutcome>
        where S: TokenSource + ?Sized
    {
        let outcome = self.run_line(source);
        match &outcome {
            Ok(outcome) => debug!("line evaluated: {outcome:?}"),
            Err(e) => debug!("line failed, resetting session: {e}"),
        }
        self.reset();
        outcome
    }

    /// Empties both stacks and goes back to expecting an operand.
    pub fn reset(&mut self) {
        self.operands.clear();
        self.operators.clear();
        self.expecting_operand = true;
        self.line_started = false;
    }

    fn run_line<S>(&mut self, source: &mut S) -> EvalResult<LineOutcome>
        where S: TokenSource + ?Sized
    {
        loop {
            let token = source.next_token()?;
            let first = !self.line_started;
            self.line_started = true;

            if self.expecting_operand {
                if let Some(outcome) = self.accept_operand(token, first)? {
                    return Ok(outcome);
                }
            } else if let Some(outcome) = self.accept_operator(token)? {
                return Ok(outcome);
            }
        }
    }

    /// Handles a token while an operand is expected.
    fn accept_operand(&mut self, token: Token, first: bool) -> EvalResult<Option<LineOutcome>> {
        match token {
            Token::Number(value) => {
                self.operands.push(value)?;
                self.expecting_operand = false;
            },
            Token::LeftParen => self.operators.push(Pending::Open)?,
            // -x is evaluated as 0 - x
            Token::Operator(Operator::Sub) => {
                self.operands.push(0.0)?;
                self.operators.push(Pending::Binary(Operator::Sub))?;
            },
            Token::Operator(Operator::Add) => {},
            Token::Operator(op) => return Err(SyntaxError::NotUnary { op }.into()),
            Token::StreamEnd => return Ok(Some(LineOutcome::EndOfInput)),
            Token::LineEnd if first => return Ok(Some(LineOutcome::Empty)),
            Token::RightParen | Token::LineEnd | Token::Unknown(_) => {
                return Err(SyntaxError::ExpectedOperand.into());
            },
        }
        Ok(None)
    }

    /// Handles a token while an operator, `)` or the line end is expected.
    fn accept_operator(&mut self, token: Token) -> EvalResult<Option<LineOutcome>> {
        let incoming = match token {
            Token::Operator(op) => Incoming::Operator(op),
            Token::RightParen => Incoming::Close,
            Token::LineEnd => Incoming::LineEnd,
            _ => return Err(SyntaxError::ExpectedOperator.into()),
        };

        self.reduce(incoming)?;

        match incoming {
            Incoming::Operator(op) => {
                self.operators.push(Pending::Binary(op))?;
                self.expecting_operand = true;
                Ok(None)
            },
            Incoming::Close => match self.operators.pop() {
                Some(Pending::Open) => Ok(None),
                _ => Err(SyntaxError::UnmatchedClose.into()),
            },
            Incoming::LineEnd => match self.operands.len() {
                0 => Ok(Some(LineOutcome::Empty)),
                1 => Ok(self.operands.pop().map(LineOutcome::Value)),
                // Unreachable while each pushed operator consumes two operands.
                _ => Err(SyntaxError::TrailingOperands.into()),
            },
        }
    }

    /// Applies every pending operator that must be popped before `incoming`.
    fn reduce(&mut self, incoming: Incoming) -> EvalResult<()> {
        while let Some(&top) = self.operators.peek()
              && should_pop(top, incoming)
        {
            let Pending::Binary(op) = top else {
                return Err(SyntaxError::UnmatchedOpen.into());
            };
            self.operators.pop();

            let (left, right) = self.pop_operands()?;
            let value = op.apply(left, right)?;
            trace!("reduced {left} {op} {right} = {value}");
            self.operands.push(value)?;
        }
        Ok(())
    }

    /// Pops the right operand, then the left one.
    ///
    /// The state machine only pushes a binary operator after an operand and
    /// only reduces after another one, so the underflow is never raised for
    /// well-formed token streams. It guards that invariant.
    fn pop_operands(&mut self) -> EvalResult<(f64, f64)> {
        if self.operands.len() < 2 {
            return Err(EvalError::StackUnderflow);
        }
        match (self.operands.pop(), self.operands.pop()) {
            (Some(right), Some(left)) => Ok((left, right)),
            _ => Err(EvalError::StackUnderflow),
        }
    }
}
