use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates `and` / `or` on two evaluated operands.
    ///
    /// Returns the operand that decides the result rather than a boolean:
    /// `0 or 'x'` is `'x'` and `0 and 'x'` is `0`. Any operator other than
    /// `and` is treated as `or`.
    ///
    /// ```
    /// use spy::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let zero = Value::Integer(0);
    /// let text = Value::from("x");
    /// assert_eq!(Context::eval_logic(BinaryOperator::Or, &zero, &text), text);
    /// assert_eq!(Context::eval_logic(BinaryOperator::And, &zero, &text), zero);
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let decided_by_left = match op {
            BinaryOperator::And => !left.is_truthy(),
            _ => left.is_truthy(),
        };
        if decided_by_left { left.clone() } else { right.clone() }
    }
}
