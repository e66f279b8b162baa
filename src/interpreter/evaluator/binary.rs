use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary operation.
    ///
    /// Both operands evaluate first, left before right, so an error in the
    /// left operand surfaces before the right operand runs at all. Division
    /// checks the evaluated right operand against zero before dividing;
    /// exponentiation delegates to [`f64::powf`] and accepts whatever that
    /// produces, including `NaN` for results outside the reals.
    ///
    /// # Parameters
    /// - `op`: The operator to apply.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// The value of the operation.
    ///
    /// # Errors
    /// `DivisionByZero` when dividing by an operand that evaluated to zero,
    /// plus any error raised while evaluating the operands.
    ///
    /// # Example
    /// ```
    /// use contar::{ast::{BinaryOperator, Expr},
    ///              interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    /// let result = context.eval_binary(BinaryOperator::Add,
    ///                                  &Expr::Number(3.0),
    ///                                  &Expr::Number(4.0));
    /// assert_eq!(result.unwrap(), 7.0);
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &Expr,
                       right: &Expr)
                       -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }

                Ok(left / right)
            },
            BinaryOperator::Pow => Ok(left.powf(right)),
        }
    }
}
