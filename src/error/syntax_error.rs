use crate::interpreter::lexer::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all the ways a line can be syntactically malformed.
pub enum SyntaxError {
    /// An operator other than `+` or `-` appeared where an operand was
    /// expected.
    NotUnary {
        /// The offending operator.
        op: Operator,
    },
    /// A number or `(` was expected but something else was found.
    ExpectedOperand,
    /// An operator, `)` or the end of the line was expected but something
    /// else was found.
    ExpectedOperator,
    /// A `)` was found with no open parenthesis left to match it.
    UnmatchedClose,
    /// The line ended while a `(` was still open.
    UnmatchedOpen,
    /// The line was fully reduced but more than one number remained.
    TrailingOperands,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotUnary { op } => write!(f, "{op} is not an unary operator"),
            Self::ExpectedOperand => write!(f, "expected number or '('"),
            Self::ExpectedOperator => write!(f, "expected operator, ')' or newline"),
            Self::UnmatchedClose => write!(f, "unmatched ')'"),
            Self::UnmatchedOpen => write!(f, "unmatched '('"),
            Self::TrailingOperands => write!(f, "number stack ended with more than one number"),
        }
    }
}

impl std::error::Error for SyntaxError {}
