use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Number, Value},
    },
    util::num::{floor_div_f64, floor_div_i64, floor_mod_f64, floor_mod_i64},
};

/// Longest string, in bytes, that `+` and `*` may build.
pub const MAX_STRING_LEN: usize = 1 << 30;

impl Context {
    /// Evaluates an arithmetic operation.
    ///
    /// Strings support `+` with another string and `*` with an integer.
    /// Numbers follow these rules, with booleans counting as `0` and `1`:
    /// - two integers give an integer, except `/` which always gives a float
    ///   and `**` with a negative exponent;
    /// - any float operand makes the result a float;
    /// - `//` and `%` round toward negative infinity, so the remainder takes
    ///   the sign of the divisor.
    ///
    /// # Errors
    /// - `UnsupportedOperands` for any other combination of types, and for an
    ///   operator that is not arithmetic.
    /// - `DivisionByZero` for `/`, `//` and `%` by zero, and for zero raised to
    ///   a negative power.
    /// - `Overflow` when an integer result does not fit in 64 bits.
    /// - `StringTooLong` when a string result would exceed [`MAX_STRING_LEN`].
    ///
    /// # Example
    /// ```
    /// use spy::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Mod,
    ///                                       &Value::Integer(-7),
    ///                                       &Value::Integer(3),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Integer(2));
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Mul,
    ///                                       &Value::from("ab"),
    ///                                       &Value::Integer(3),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::from("ababab"));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let unsupported = || RuntimeError::UnsupportedOperands { op: op.to_string(),
                                                                 left: left.type_name(),
                                                                 right: right.type_name(),
                                                                 line };

        if !op.is_arithmetic() {
            return Err(unsupported());
        }

        match (left, right) {
            (Value::Str(a), Value::Str(b)) if op == BinaryOperator::Add => {
                if a.len() + b.len() > MAX_STRING_LEN {
                    return Err(RuntimeError::StringTooLong { limit: MAX_STRING_LEN,
                                                             line });
                }
                return Ok(Value::Str(format!("{a}{b}")));
            },
            (Value::Str(s), count) | (count, Value::Str(s)) if op == BinaryOperator::Mul => {
                let count = count.as_integer().ok_or_else(unsupported)?;
                return Self::repeat_string(s, count, line);
            },
            _ => {},
        }

        let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
            return Err(unsupported());
        };
        match (a, b) {
            (Number::Int(a), Number::Int(b)) => Self::eval_integer_op(op, a, b, line),
            _ => Self::eval_float_op(op, a.as_float(), b.as_float(), line),
        }
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        if matches!(op, Div | FloorDiv | Mod) && b == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => {
                return Ok(Value::Float(Number::Int(a).as_float() / Number::Int(b).as_float()));
            },
            FloorDiv => floor_div_i64(a, b),
            Mod => floor_mod_i64(a, b),
            Pow => match u32::try_from(b) {
                Ok(exponent) => a.checked_pow(exponent),
                Err(_) if b < 0 => {
                    return Self::eval_float_op(Pow,
                                               Number::Int(a).as_float(),
                                               Number::Int(b).as_float(),
                                               line);
                },
                Err(_) => match a {
                    0 | 1 => Some(a),
                    -1 => Some(if b % 2 == 0 { 1 } else { -1 }),
                    _ => None,
                },
            },
            _ => unreachable!(),
        };
        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }

    #[allow(clippy::float_cmp)]
    fn eval_float_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        if matches!(op, Div | FloorDiv | Mod) && b == 0.0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        Ok(Value::Float(match op {
                            Add => a + b,
                            Sub => a - b,
                            Mul => a * b,
                            Div => a / b,
                            FloorDiv => floor_div_f64(a, b),
                            Mod => floor_mod_f64(a, b),
                            Pow => {
                                if a == 0.0 && b < 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                let result = a.powf(b);
                                if result.is_infinite() && a.is_finite() && b.is_finite() {
                                    return Err(RuntimeError::Overflow { line });
                                }
                                result
                            },
                            _ => unreachable!(),
                        }))
    }

    /// `s * count`; a count of zero or less gives the empty string.
    fn repeat_string(s: &str, count: i64, line: usize) -> EvalResult<Value> {
        let Ok(count) = usize::try_from(count) else {
            return Ok(Value::Str(String::new()));
        };
        if s.len().checked_mul(count).is_none_or(|len| len > MAX_STRING_LEN) {
            return Err(RuntimeError::StringTooLong { limit: MAX_STRING_LEN,
                                                     line });
        }
        Ok(Value::Str(s.repeat(count)))
    }
}
