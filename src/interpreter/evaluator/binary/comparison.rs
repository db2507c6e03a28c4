use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Number, Value},
    },
};

/// Orders two numbers, comparing an integer with a float as floats.
///
/// Returns `None` when either side is NaN.
fn compare_numbers(a: Number, b: Number) -> Option<Ordering> {
    match (a, b) {
        (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
        (a, b) => a.as_float().partial_cmp(&b.as_float()),
    }
}

/// Equality as used by `==`: numbers compare by value across `int`, `float`
/// and `bool`; everything else must match in type and value.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => compare_numbers(a, b) == Some(Ordering::Equal),
        _ => left == right,
    }
}

impl Context {
    /// Evaluates `==`, `!=`, `<`, `<=`, `>` and `>=`.
    ///
    /// Equality is defined between any two values. Ordering works between
    /// numbers (booleans included) and between strings. Comparisons involving
    /// NaN are false.
    ///
    /// Chained comparisons are not special: `1 < 2 < 3` compares `True` with
    /// `3`.
    ///
    /// # Errors
    /// `UnsupportedOperands` when ordering values of incompatible types, or
    /// for an operator that is not a comparison.
    ///
    /// # Example
    /// ```
    /// use spy::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal,
    ///                                       &Value::Integer(1),
    ///                                       &Value::Float(1.0),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less,
    ///                                       &Value::Bool(true),
    ///                                       &Value::Integer(3),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, Less, LessEqual, NotEqual};

        let unsupported = || RuntimeError::UnsupportedOperands { op: op.to_string(),
                                                                 left: left.type_name(),
                                                                 right: right.type_name(),
                                                                 line };
        if !op.is_comparison() {
            return Err(unsupported());
        }

        let ordering = match op {
            Equal => return Ok(Value::Bool(values_equal(left, right))),
            NotEqual => return Ok(Value::Bool(!values_equal(left, right))),
            _ => match (left, right) {
                (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
                _ => match (left.as_number(), right.as_number()) {
                    (Some(a), Some(b)) => compare_numbers(a, b),
                    _ => return Err(unsupported()),
                },
            },
        };

        let result = ordering.is_some_and(|ordering| match op {
                                  Less => ordering.is_lt(),
                                  LessEqual => ordering.is_le(),
                                  Greater => ordering.is_gt(),
                                  _ => ordering.is_ge(),
                              });
        Ok(Value::Bool(result))
    }

    /// Evaluates `is` and `is not`.
    ///
    /// Values are identical when they have the same type and are equal, so
    /// `1 is 1` holds but `1 is 1.0f` and `1 is True` do not.
    #[must_use]
    pub fn eval_identity(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let identical = left.type_name() == right.type_name() && values_equal(left, right);
        Value::Bool(identical == (op == BinaryOperator::Is))
    }

    /// Evaluates `in` and `not in`.
    ///
    /// Strings are the only container: `a in b` tests whether `a` is a
    /// substring of `b`.
    ///
    /// # Errors
    /// `UnsupportedOperands` unless both operands are strings.
    pub fn eval_membership(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let (Value::Str(needle), Value::Str(haystack)) = (left, right) else {
            return Err(RuntimeError::UnsupportedOperands { op: op.to_string(),
                                                           left: left.type_name(),
                                                           right: right.type_name(),
                                                           line });
        };
        let contained = haystack.contains(needle.as_str());
        Ok(Value::Bool(contained == (op == BinaryOperator::In)))
    }
}
