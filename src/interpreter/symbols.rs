use std::collections::HashMap;

use tracing::debug;

use crate::{error::RuntimeError, interpreter::value::core::TypeName};

/// An entry in the symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A built-in type, registered under its own name.
    Builtin(TypeName),
    /// A variable and the type it was declared with.
    Variable {
        /// The variable name.
        name:      String,
        /// The resolved type (never `var`).
        type_name: TypeName,
    },
}

impl Symbol {
    /// The name the symbol is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(type_name) => type_name.as_str(),
            Self::Variable { name, .. } => name,
        }
    }

    /// The type the symbol stands for.
    #[must_use]
    pub const fn type_name(&self) -> TypeName {
        match self {
            Self::Builtin(type_name) | Self::Variable { type_name, .. } => *type_name,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<class '{}'>", self.type_name())
    }
}

/// Registry of declared types, kept apart from the variable values.
///
/// Symbols are listed in the order they were first defined. A new table
/// already holds the built-in types.
///
/// # Example
/// ```
/// use spy::interpreter::{
///     symbols::{Symbol, SymbolTable},
///     value::core::TypeName,
/// };
///
/// let mut table = SymbolTable::new();
/// table.define(Symbol::Variable { name:      "x".to_string(),
///                                 type_name: TypeName::Int, });
/// assert_eq!(table.lookup("x", 1).unwrap().type_name(), TypeName::Int);
/// assert!(table.lookup("y", 1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index:   HashMap<String, usize>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table seeded with the built-in types.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self { symbols: Vec::new(),
                               index:   HashMap::new(), };
        for builtin in TypeName::BUILTINS {
            table.define(Symbol::Builtin(builtin));
        }
        table
    }

    /// Inserts `symbol`, replacing any symbol of the same name in place.
    pub fn define(&mut self, symbol: Symbol) {
        debug!(name = symbol.name(), type_name = %symbol.type_name(), "define symbol");
        if let Some(&slot) = self.index.get(symbol.name()) {
            self.symbols[slot] = symbol;
        } else {
            self.index.insert(symbol.name().to_string(), self.symbols.len());
            self.symbols.push(symbol);
        }
    }

    /// Returns the symbol registered under `name`.
    ///
    /// # Errors
    /// `MissingTypeDeclaration` if `name` was never defined.
    pub fn lookup(&self, name: &str, line: usize) -> Result<&Symbol, RuntimeError> {
        self.get(name)
            .ok_or_else(|| RuntimeError::MissingTypeDeclaration { name: name.to_string(),
                                                                  line })
    }

    /// Returns the symbol registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&slot| &self.symbols[slot])
    }

    /// Iterates over the symbols in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Number of symbols, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for a table built with [`SymbolTable::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl std::fmt::Display for SymbolTable {
    /// Renders `Symbols:` followed by one `<'name' <class 'type'>>` line per
    /// symbol.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbols:")?;
        for symbol in &self.symbols {
            write!(f, "\n<'{}' {symbol}>", symbol.name())?;
        }
        Ok(())
    }
}
