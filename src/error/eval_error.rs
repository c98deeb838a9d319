use crate::error::SyntaxError;

/// Identifies one of the two evaluator stacks in overflow reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    /// The stack of numbers awaiting combination.
    Operand,
    /// The stack of pending operators and open parentheses.
    Operator,
}

impl std::fmt::Display for StackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand => write!(f, "number"),
            Self::Operator => write!(f, "symbol"),
        }
    }
}

#[derive(Debug)]
/// Represents all errors that can occur while tokenizing or evaluating a line.
///
/// Every variant except [`EvalError::Io`] is local to the line it was raised
/// on: the session discards the rest of that line, resets the evaluator and
/// carries on with the next one.
pub enum EvalError {
    /// A push would have exceeded the capacity of a stack.
    StackOverflow {
        /// The stack that was full.
        which: StackKind,
    },
    /// A reduction needed two operands but fewer were available.
    StackUnderflow,
    /// The line is malformed.
    Syntax(SyntaxError),
    /// Attempted division by exactly zero.
    DivisionByZero,
    /// A numeric literal was longer than the configured maximum.
    TokenTooLong {
        /// The maximum accepted literal length, in characters.
        max: usize,
    },
    /// Reading from the input stream failed.
    Io(std::io::Error),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackOverflow { which } => write!(f, "{which} stack overflowed"),
            Self::StackUnderflow => write!(f, "number stack underflowed"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::DivisionByZero => write!(f, "division by 0"),
            Self::TokenTooLong { .. } => write!(f, "max token size exceeded"),
            Self::Io(e) => write!(f, "failed to read input: {e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SyntaxError> for EvalError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<std::io::Error> for EvalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
