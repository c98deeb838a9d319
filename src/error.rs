/// Syntax errors.
///
/// Defines the ways a line can be malformed: a token of the wrong kind for the
/// current evaluator mode, a misused unary operator, unbalanced parentheses,
/// or operands left over once the line has been reduced.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains every error the tokenizer and the evaluator can raise while working
/// on a line, including stack overflow and underflow, division by zero,
/// oversized numeric literals and failing reads from the input stream.
pub mod eval_error;

pub use eval_error::{EvalError, StackKind};
pub use syntax_error::SyntaxError;
