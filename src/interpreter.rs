/// The evaluator module runs the shunting-yard engine.
///
/// The evaluator pulls tokens one at a time, keeps an operand stack and an
/// operator stack, and reduces them into a single value per line according to
/// operator priority and associativity. It is the core of the calculator.
///
/// # Responsibilities
/// - Tracks whether an operand or an operator is expected next.
/// - Applies pending operators as soon as a lower-priority token arrives.
/// - Reports syntax, stack and arithmetic errors and resets after each of them.
pub mod evaluator;
/// The lexer module tokenizes the input stream for the evaluator.
///
/// The lexer reads raw text one physical line at a time and classifies it into
/// numbers, parentheses, operators, line and stream terminators, and unknown
/// characters.
///
/// # Responsibilities
/// - Skips horizontal whitespace.
/// - Reads decimal literals with one character of lookahead after the point.
/// - Rejects oversized numeric literals.
pub mod lexer;
