use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a unary operation.
    ///
    /// Unary plus returns the operand unchanged; unary minus negates it.
    ///
    /// # Parameters
    /// - `op`: The prefix operator to apply.
    /// - `expr`: Operand expression.
    ///
    /// # Returns
    /// The value of the operation.
    ///
    /// # Errors
    /// Any error raised while evaluating the operand.
    ///
    /// # Example
    /// ```
    /// use contar::{ast::{Expr, UnaryOperator},
    ///              interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    /// let result = context.eval_unary(UnaryOperator::Minus, &Expr::Number(5.0));
    /// assert_eq!(result.unwrap(), -5.0);
    /// ```
    pub fn eval_unary(&self, op: UnaryOperator, expr: &Expr) -> EvalResult<f64> {
        let value = self.eval(expr)?;

        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Minus => Ok(-value),
        }
    }
}
