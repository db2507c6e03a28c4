use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// The variable store: names mapped to their current values.
///
/// Entries keep the order in which names were first stored. An entry holding
/// `None` is a variable that was declared without a value.
///
/// # Example
/// ```
/// use spy::interpreter::{memory::Memory, value::core::Value};
///
/// let mut memory = Memory::default();
/// memory.store("b", Some(Value::Integer(5)));
/// memory.store("a", Some(Value::Float(5.0)));
/// memory.store("b", Some(Value::Integer(6)));
/// memory.store("c", None);
///
/// assert_eq!(memory.to_string(), "{'b': 6, 'a': 5.0, 'c': None}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Memory {
    entries: Vec<(String, Option<Value>)>,
    index:   HashMap<String, usize>,
}

impl Memory {
    /// Sets `name` to `value`, keeping its original position if it exists.
    pub fn store(&mut self, name: &str, value: Option<Value>) {
        if let Some(&slot) = self.index.get(name) {
            self.entries[slot].1 = value;
        } else {
            self.index.insert(name.to_string(), self.entries.len());
            self.entries.push((name.to_string(), value));
        }
    }

    /// Looks up `name`.
    ///
    /// The outer `Option` tells whether the name exists, the inner one whether
    /// it holds a value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<&Value>> {
        self.index
            .get(name)
            .map(|&slot| self.entries[slot].1.as_ref())
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Display for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(value) => write!(f, "'{name}': {value}")?,
                None => write!(f, "'{name}': None")?,
            }
        }
        write!(f, "}}")
    }
}
