/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the program statement by statement, evaluates
/// expressions, enforces declared types and records every variable in the
/// variable store and the symbol table.
///
/// # Responsibilities
/// - Evaluates expressions with the language's operator semantics.
/// - Checks assignments against declared types, widening `int` to `float`.
/// - Reports name, type, declaration and arithmetic errors.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and string literals, identifiers, keywords and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The memory module holds variable values.
///
/// An insertion-ordered map from names to values, where a declared but never
/// assigned variable holds no value.
pub mod memory;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the scanner one at a time and constructs a
/// [`crate::ast::Program`]. It stops at the first token that does not fit the
/// grammar.
pub mod parser;
/// The symbols module records the declared type of every name.
///
/// The symbol table is kept apart from the variable store and is seeded with
/// the built-in types.
pub mod symbols;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, floats, strings, booleans and `None`, with their type tags,
/// truthiness rules and display format.
pub mod value;
