use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `&`, `|`, `^`, `<<` and `>>`.
    ///
    /// Operands must be integers or booleans. `&`, `|` and `^` on two
    /// booleans give a boolean; every other case gives an integer.
    ///
    /// # Errors
    /// - `UnsupportedOperands` for floats, strings and `None`, and for an
    ///   operator that is not bitwise.
    /// - `NegativeShiftCount` for a shift by a negative amount.
    /// - `Overflow` when a left shift loses bits.
    ///
    /// # Example
    /// ```
    /// use spy::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_bitwise(BinaryOperator::LeftShift,
    ///                                    &Value::Integer(3),
    ///                                    &Value::Integer(4),
    ///                                    1);
    /// assert_eq!(result.unwrap(), Value::Integer(48));
    ///
    /// let result = Context::eval_bitwise(BinaryOperator::BitXor,
    ///                                    &Value::Bool(true),
    ///                                    &Value::Bool(true),
    ///                                    1);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_bitwise(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> EvalResult<Value> {
        use BinaryOperator::{BitAnd, BitOr, BitXor, LeftShift, RightShift};

        let unsupported = || RuntimeError::UnsupportedOperands { op: op.to_string(),
                                                                 left: left.type_name(),
                                                                 right: right.type_name(),
                                                                 line };
        if !op.is_bitwise() {
            return Err(unsupported());
        }

        if let (Value::Bool(a), Value::Bool(b)) = (left, right)
           && matches!(op, BitAnd | BitOr | BitXor)
        {
            return Ok(Value::Bool(match op {
                                      BitAnd => a & b,
                                      BitOr => a | b,
                                      _ => a ^ b,
                                  }));
        }

        let (Some(a), Some(b)) = (left.as_integer(), right.as_integer()) else {
            return Err(unsupported());
        };

        let result = match op {
            BitAnd => a & b,
            BitOr => a | b,
            BitXor => a ^ b,
            LeftShift => shift_left(a, shift_count(b, line)?, line)?,
            RightShift => shift_right(a, shift_count(b, line)?),
            _ => unreachable!(),
        };
        Ok(Value::Integer(result))
    }
}

fn shift_count(count: i64, line: usize) -> EvalResult<u32> {
    if count < 0 {
        return Err(RuntimeError::NegativeShiftCount { line });
    }
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}

fn shift_left(value: i64, count: u32, line: usize) -> EvalResult<i64> {
    if value == 0 {
        return Ok(0);
    }
    if count >= i64::BITS {
        return Err(RuntimeError::Overflow { line });
    }
    i64::try_from(i128::from(value) << count).map_err(|_| RuntimeError::Overflow { line })
}

/// Arithmetic shift; the result rounds toward negative infinity.
const fn shift_right(value: i64, count: u32) -> i64 {
    if count >= i64::BITS {
        if value < 0 { -1 } else { 0 }
    } else {
        value >> count
    }
}
