use tracing::debug;

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Registers a function definition.
    ///
    /// Only the definition is stored; the body is never run and cannot be
    /// called.
    ///
    /// # Errors
    /// `FunctionAlreadyDefined` if a function with the same name exists.
    pub fn define_function(&mut self, def: &FunctionDef) -> EvalResult<()> {
        if self.functions.contains_key(&def.name) {
            return Err(RuntimeError::FunctionAlreadyDefined { name: def.name.clone(),
                                                              line: def.line, });
        }
        debug!(name = %def.name, statements = def.body.len(), "defined function");
        self.functions.insert(def.name.clone(), def.clone());
        Ok(())
    }
}
