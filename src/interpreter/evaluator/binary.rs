/// Dispatch from operator to handler, and short-circuit evaluation of
/// `and`/`or` operands.
pub mod core;

/// `+`, `-`, `*`, `/`, `//`, `%` and `**`.
pub mod arithmetic;

/// `&`, `|`, `^`, `<<` and `>>` on integers and booleans.
pub mod bitwise;

/// Equality, ordering, identity and membership.
pub mod comparison;

/// `and` and `or` on already evaluated operands.
pub mod logic;
