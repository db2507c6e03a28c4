use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation node.
    ///
    /// `and` and `or` short-circuit: the right operand is only evaluated when
    /// the left one does not decide the result. Every other operator
    /// evaluates the left operand, then the right one, then applies
    /// [`Context::eval_binary`].
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<Value> {
        let left = self.eval(left)?;
        match op {
            BinaryOperator::And if !left.is_truthy() => Ok(left),
            BinaryOperator::Or if left.is_truthy() => Ok(left),
            _ => {
                let right = self.eval(right)?;
                Self::eval_binary(op, &left, &right, line)
            },
        }
    }

    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator: arithmetic, bitwise, comparison or logic.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use spy::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    /// let line = 1;
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, line);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, &left, &right, line);
    /// assert_eq!(result.unwrap(), Value::Float(0.75));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, FloorDiv, Greater, GreaterEqual, In, Is,
            IsNot, LeftShift, Less, LessEqual, Mod, Mul, NotEqual, NotIn, Or, Pow, RightShift, Sub,
        };

        match op {
            Add | Sub | Mul | Div | FloorDiv | Mod | Pow => {
                Self::eval_arithmetic(op, left, right, line)
            },
            BitAnd | BitOr | BitXor | LeftShift | RightShift => {
                Self::eval_bitwise(op, left, right, line)
            },
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            Is | IsNot => Ok(Self::eval_identity(op, left, right)),
            In | NotIn => Self::eval_membership(op, left, right, line),
            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}
