/// Runtime values and their type tags.
///
/// Defines the `Value` enum stored in the variable store and the `TypeName`
/// tag recorded in the symbol table, together with truthiness, numeric
/// coercion and the display format used when dumping memory.
pub mod core;
