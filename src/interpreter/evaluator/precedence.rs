use crate::interpreter::lexer::Operator;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// An open parenthesis waiting for its `)`.
    Open,
    /// A binary operator waiting for its right operand to be complete.
    Binary(Operator),
}

/// A token that triggers the reduction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incoming {
    Operator(Operator),
    Close,
    LineEnd,
}

impl Operator {
    /// Returns the priority of this operator: 2 for `+ -`, 3 for `* /`.
    #[must_use]
    pub const fn priority(self) -> i8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
        }
    }

    /// Whether equal-priority neighbours must be applied left to right.
    ///
    /// Only `-` and `/` answer `true`. A tie between `+` or `*` on the stack
    /// and an incoming operator of the same tier does not pop.
    #[must_use]
    pub const fn is_left_associative(self) -> bool {
        matches!(self, Self::Sub | Self::Div)
    }
}

impl Pending {
    #[must_use]
    pub const fn priority(self) -> i8 {
        match self {
            Self::Open => 0,
            Self::Binary(op) => op.priority(),
        }
    }
}

impl Incoming {
    #[must_use]
    pub const fn priority(self) -> i8 {
        match self {
            Self::LineEnd => -1,
            Self::Close => 1,
            Self::Operator(op) => op.priority(),
        }
    }
}

/// Decides whether `top` must be popped off the operator stack before
/// `incoming` is handled.
///
/// # Example
/// ```
/// use shuntcalc::interpreter::{
///     evaluator::precedence::{Incoming, Pending, should_pop},
///     lexer::Operator,
/// };
///
/// // `*` binds tighter than `+`.
/// assert!(should_pop(Pending::Binary(Operator::Mul), Incoming::Operator(Operator::Add)));
/// // `-` is left associative, `+` does not force a pop on a tie.
/// assert!(should_pop(Pending::Binary(Operator::Sub), Incoming::Operator(Operator::Add)));
/// assert!(!should_pop(Pending::Binary(Operator::Add), Incoming::Operator(Operator::Sub)));
/// ```
#[must_use]
pub const fn should_pop(top: Pending, incoming: Incoming) -> bool {
    let (top_priority, incoming_priority) = (top.priority(), incoming.priority());
    top_priority > incoming_priority
    || (top_priority == incoming_priority
        && matches!(top, Pending::Binary(op) if op.is_left_associative()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    #[test]
    fn every_operator_yields_to_line_end_and_close() {
        for op in ALL {
            assert!(should_pop(Pending::Binary(op), Incoming::LineEnd));
            assert!(should_pop(Pending::Binary(op), Incoming::Close));
        }
    }

    #[test]
    fn open_paren_only_outranks_line_end() {
        assert!(should_pop(Pending::Open, Incoming::LineEnd));
        assert!(!should_pop(Pending::Open, Incoming::Close));
        for op in ALL {
            assert!(!should_pop(Pending::Open, Incoming::Operator(op)));
        }
    }

    #[test]
    fn ties_pop_only_for_sub_and_div() {
        use Operator::{Add, Div, Mul, Sub};

        assert!(should_pop(Pending::Binary(Sub), Incoming::Operator(Sub)));
        assert!(should_pop(Pending::Binary(Sub), Incoming::Operator(Add)));
        assert!(should_pop(Pending::Binary(Div), Incoming::Operator(Mul)));
        assert!(!should_pop(Pending::Binary(Add), Incoming::Operator(Add)));
        assert!(!should_pop(Pending::Binary(Add), Incoming::Operator(Sub)));
        assert!(!should_pop(Pending::Binary(Mul), Incoming::Operator(Div)));
    }

    #[test]
    fn lower_tier_never_pops_for_higher_tier() {
        assert!(!should_pop(Pending::Binary(Operator::Sub), Incoming::Operator(Operator::Mul)));
        assert!(!should_pop(Pending::Binary(Operator::Add), Incoming::Operator(Operator::Div)));
    }
}
