/// Core parser state and entry points.
///
/// Holds the [`core::Parser`] struct, which pulls tokens from the scanner on
/// demand, and the `ParseResult` alias shared by every parsing routine.
pub mod core;

/// Binary operator parsing.
///
/// One routine per precedence level, from `or` down to `**`.
pub mod binary;

/// Unary operator and primary expression parsing.
///
/// Handles prefix operators, the `not` that applies to comparisons,
/// parenthesized expressions, literals and variable references.
pub mod unary;

/// Statement parsing.
///
/// Implements statement lists, declarations, assignments, compound
/// assignments and function definitions.
pub mod statement;
