/// Core evaluation logic and session management.
///
/// Contains the evaluator state machine, the per-line driver and the reset
/// performed after every line.
pub mod core;

/// Binary operator application.
///
/// Computes the result of `+ - * /` on two operands and reports division by
/// zero.
pub mod binary;

/// Operator priorities.
///
/// Decides whether a pending operator must be applied before an incoming
/// operator, `)` or line end is handled.
pub mod precedence;

/// Fixed-capacity stacks.
///
/// Backs the operand and operator stacks, turning any push past capacity into
/// an overflow error.
pub mod stack;
