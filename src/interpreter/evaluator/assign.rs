use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr, TypeSpec, VarDeclaration},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        symbols::Symbol,
        value::core::{Number, TypeName, Value},
    },
};

/// Fits `value` to a declared type.
///
/// - `var` accepts any value and resolves to the value's own type.
/// - `float` accepts an integer and converts it.
/// - Any other type must equal the value's type exactly.
///
/// Returns the (possibly converted) value and the resolved type. This is the
/// only coercion the language performs, shared by assignment and compound
/// assignment.
///
/// # Errors
/// `TypeMismatch` naming the value's type and the declared type.
///
/// # Example
/// ```
/// use spy::{
///     ast::TypeSpec,
///     interpreter::{
///         evaluator::assign::widen,
///         value::core::{TypeName, Value},
///     },
/// };
///
/// let float = TypeSpec::Named(TypeName::Float);
/// assert_eq!(widen(Value::Integer(5), float, 1).unwrap(),
///            (Value::Float(5.0), TypeName::Float));
/// assert_eq!(widen(Value::Integer(5), TypeSpec::Var, 1).unwrap(),
///            (Value::Integer(5), TypeName::Int));
/// assert!(widen(Value::Float(3.5), TypeSpec::Named(TypeName::Int), 1).is_err());
/// ```
pub fn widen(value: Value, declared: TypeSpec, line: usize) -> EvalResult<(Value, TypeName)> {
    let expected = match declared {
        TypeSpec::Var => {
            let resolved = value.type_name();
            return Ok((value, resolved));
        },
        TypeSpec::Named(expected) => expected,
    };

    match (expected, value) {
        (TypeName::Float, Value::Integer(n)) => {
            Ok((Value::Float(Number::Int(n).as_float()), TypeName::Float))
        },
        (expected, value) if value.type_name() == expected => Ok((value, expected)),
        (expected, value) => Err(RuntimeError::TypeMismatch { found: value.type_name(),
                                                              expected,
                                                              line }),
    }
}

impl Context {
    /// Evaluates `name: type = value`.
    ///
    /// The value is evaluated and widened to the declared type, then the
    /// symbol and the value are recorded together. Nothing is recorded if any
    /// step fails.
    ///
    /// A target without a type clause reuses the type already recorded for the
    /// name.
    ///
    /// # Returns
    /// The value that was stored.
    pub fn eval_assign(&mut self,
                       target: &VarDeclaration,
                       value: &Expr,
                       line: usize)
                       -> EvalResult<Value> {
        let value = self.eval(value)?;
        let declared = match target.declared_type {
            Some(declared) => declared,
            None => TypeSpec::Named(self.symbols.lookup(&target.name, line)?.type_name()),
        };
        let (value, type_name) = widen(value, declared, line)?;

        self.symbols.define(Symbol::Variable { name: target.name.clone(),
                                               type_name });
        self.memory.store(&target.name, Some(value.clone()));
        debug!(name = %target.name, %type_name, %value, "stored");
        Ok(value)
    }

    /// Evaluates `name op= value`.
    ///
    /// The checks run in this order, and the first failure aborts the
    /// statement with the variable unchanged:
    /// 1. The target must not carry a type clause.
    /// 2. The name must exist, and must hold a value.
    /// 3. The right-hand side, once widened, must have the recorded type.
    /// 4. The result of the operation, once widened, must have the recorded
    ///    type as well, so `x /= 2` on an `int` is rejected.
    ///
    /// # Returns
    /// The new value of the variable.
    pub fn eval_compound_assign(&mut self,
                                target: &VarDeclaration,
                                op: BinaryOperator,
                                value: &Expr,
                                line: usize)
                                -> EvalResult<Value> {
        let name = &target.name;
        if let Some(declared) = target.declared_type {
            return Err(RuntimeError::CompoundAssignmentWithType { name: name.clone(),
                                                                  declared,
                                                                  line });
        }

        let current = match self.memory.get(name) {
            Some(Some(current)) => current.clone(),
            Some(None) => {
                return Err(RuntimeError::UnassignedVariable { name: name.clone(),
                                                              line });
            },
            None => {
                return Err(RuntimeError::UnknownVariable { name: name.clone(),
                                                           line });
            },
        };
        let recorded = TypeSpec::Named(self.symbols.lookup(name, line)?.type_name());

        let rhs = self.eval(value)?;
        let (rhs, _) = widen(rhs, recorded, line)?;

        let result = Self::eval_binary(op, &current, &rhs, line)?;
        let (result, _) = widen(result, recorded, line)?;

        self.memory.store(name, Some(result.clone()));
        debug!(%name, %result, "updated");
        Ok(result)
    }

    /// Evaluates a bare declaration, `name: type`.
    ///
    /// Records the type and leaves the variable without a value, replacing any
    /// value it held.
    ///
    /// # Errors
    /// `UninitializedImplicitType` for `name: var`, whose type can only come
    /// from a value.
    pub fn eval_declaration(&mut self, declaration: &VarDeclaration) -> EvalResult<()> {
        let name = &declaration.name;
        let type_name = match declaration.declared_type {
            Some(TypeSpec::Named(type_name)) => type_name,
            Some(TypeSpec::Var) | None => {
                return Err(RuntimeError::UninitializedImplicitType { name: name.clone(),
                                                                     line: declaration.line, });
            },
        };

        self.symbols.define(Symbol::Variable { name: name.clone(),
                                               type_name });
        self.memory.store(name, None);
        debug!(%name, %type_name, "declared");
        Ok(())
    }
}
