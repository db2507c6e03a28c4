use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Expr, FunctionDef, Program, Statement},
    error::RuntimeError,
    interpreter::{memory::Memory, symbols::SymbolTable, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the whole interpreter state: the variable store, the
/// symbol table and the defined functions. Nothing is shared between two
/// contexts, so independent programs can run side by side on separate
/// instances.
///
/// ## Usage
///
/// `Context` is created once and reused across programs. Running a second
/// program against the same context sees every variable the first one left
/// behind, which is how the interactive prompt keeps state between lines.
pub struct Context {
    /// Current value of every variable, in first-assignment order.
    pub(crate) memory:    Memory,
    /// Declared type of every variable, after the built-in types.
    pub(crate) symbols:   SymbolTable,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    pub(crate) functions: HashMap<String, FunctionDef>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty variable store and a
    /// symbol table holding only the built-in types.
    #[must_use]
    pub fn new() -> Self {
        Self { memory:    Memory::default(),
               symbols:   SymbolTable::new(),
               functions: HashMap::new(), }
    }

    /// Runs every statement of `program` in order.
    ///
    /// Evaluation stops at the first error. Statements that completed before
    /// it keep their effects; the failing statement leaves no trace.
    ///
    /// # Returns
    /// The value produced by the last statement that produced one, or `None`
    /// if no statement did.
    ///
    /// # Example
    /// ```
    /// use spy::interpreter::{
    ///     evaluator::core::Context,
    ///     parser::core::Parser,
    ///     value::core::Value,
    /// };
    ///
    /// let program = Parser::new("a: int = 2; b: var = a * 21").unwrap()
    ///                                                         .parse()
    ///                                                         .unwrap();
    /// let mut context = Context::new();
    /// assert_eq!(context.interpret(&program).unwrap(), Some(Value::Integer(42)));
    /// ```
    pub fn interpret(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        self.eval_statements(&program.statements)
    }

    fn eval_statements(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        let mut result = None;
        for statement in statements {
            if let Some(value) = self.eval_statement(statement)? {
                result = Some(value);
            }
        }
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// Assignments and compound assignments yield the value that was stored;
    /// declarations, function definitions and empty statements yield `None`.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Assign { target, value, line } => {
                debug!(name = %target.name, line, "assign");
                self.eval_assign(target, value, *line).map(Some)
            },
            Statement::CompoundAssign { target,
                                        op,
                                        value,
                                        line, } => {
                debug!(name = %target.name, %op, line, "compound assign");
                self.eval_compound_assign(target, *op, value, *line)
                    .map(Some)
            },
            Statement::Declaration(declaration) => {
                self.eval_declaration(declaration)?;
                Ok(None)
            },
            Statement::Function(def) => {
                self.define_function(def)?;
                Ok(None)
            },
            Statement::NoOp => Ok(None),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, variables, unary and binary operations.
    ///
    /// # Example
    /// ```
    /// use spy::{
    ///     ast::{BinaryOperator, Expr, LiteralValue},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: LiteralValue::Integer(7),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::FloorDiv,
    ///                             right: Box::new(Expr::Literal { value: LiteralValue::Integer(-2),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Integer(-4));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
        }
    }

    /// Reads a variable.
    ///
    /// A declared variable without a value reads as `None`.
    ///
    /// # Errors
    /// `UnknownVariable` if the name was never declared or assigned.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        match self.memory.get(name) {
            Some(Some(value)) => Ok(value.clone()),
            Some(None) => Ok(Value::None),
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// The variable store.
    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// The symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Returns the function defined under `name`, if any.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }
}
