use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Number, Value},
    },
};

impl Context {
    /// Evaluates a unary operation.
    ///
    /// - `+x` and `-x` accept numbers; a boolean operand becomes an integer.
    /// - `~x` accepts integers and booleans.
    /// - `not x` accepts anything and returns a boolean.
    ///
    /// # Errors
    /// - `UnsupportedOperand` for strings and `None` under `+`, `-` and `~`.
    /// - `Overflow` for `-x` when `x` is the smallest integer.
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         expr: &Expr,
                         line: usize)
                         -> EvalResult<Value> {
        let value = self.eval(expr)?;
        Self::eval_unary(op, &value, line)
    }

    /// Applies a unary operator to an evaluated operand.
    ///
    /// # Example
    /// ```
    /// use spy::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::BitNot, &Value::Integer(5), 1).unwrap(),
    ///            Value::Integer(-6));
    /// assert_eq!(Context::eval_unary(UnaryOperator::Not, &Value::Str(String::new()), 1).unwrap(),
    ///            Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        let unsupported = || RuntimeError::UnsupportedOperand { op:      op.to_string(),
                                                                operand: value.type_name(),
                                                                line };
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOperator::Plus => match value.as_number() {
                Some(Number::Int(n)) => Ok(Value::Integer(n)),
                Some(Number::Float(x)) => Ok(Value::Float(x)),
                None => Err(unsupported()),
            },
            UnaryOperator::Negate => match value.as_number() {
                Some(Number::Int(n)) => n.checked_neg()
                                         .map(Value::Integer)
                                         .ok_or(RuntimeError::Overflow { line }),
                Some(Number::Float(x)) => Ok(Value::Float(-x)),
                None => Err(unsupported()),
            },
            UnaryOperator::BitNot => value.as_integer()
                                          .map(|n| Value::Integer(!n))
                                          .ok_or_else(unsupported),
        }
    }
}
