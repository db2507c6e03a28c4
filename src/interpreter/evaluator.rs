/// Core evaluation logic and context management.
///
/// Contains the evaluation context (variable store, symbol table and function
/// table), statement dispatch and variable lookup.
pub mod core;

/// Assignment evaluation.
///
/// Typed assignments, compound assignments and bare declarations, all built
/// on the shared `widen` rule.
pub mod assign;

/// Binary operator evaluation logic.
///
/// Arithmetic, bitwise, comparison, identity, membership and logical
/// operators.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Function definitions.
///
/// Registers definitions in the context; bodies are never run.
pub mod function;
