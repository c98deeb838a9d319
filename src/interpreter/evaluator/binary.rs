use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, lexer::Operator},
};

impl Operator {
    /// Applies this operator to `left` and `right`.
    ///
    /// Division by exactly zero is reported instead of producing an infinity
    /// or NaN. Overflow of the `f64` range is not checked and yields an
    /// infinity.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] if the operator is `/` and `right`
    /// is zero.
    ///
    /// # Example
    /// ```
    /// use shuntcalc::{error::EvalError, interpreter::lexer::Operator};
    ///
    /// assert_eq!(Operator::Sub.apply(8.0, 4.0).unwrap(), 4.0);
    /// assert!(matches!(Operator::Div.apply(5.0, 0.0), Err(EvalError::DivisionByZero)));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        Ok(match self {
               Self::Add => left + right,
               Self::Sub => left - right,
               Self::Mul => left * right,
               Self::Div => {
                   if right == 0.0 {
                       return Err(EvalError::DivisionByZero);
                   }
                   left / right
               },
           })
    }
}
