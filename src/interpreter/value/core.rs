/// The type tag of a runtime value.
///
/// These are the names a program can write after `:` (apart from the `var`
/// wildcard) and the tags recorded in the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `str`
    Str,
    /// `bool`
    Bool,
    /// `NoneType`
    NoneType,
}

impl TypeName {
    /// All built-in types, in the order they are seeded into a symbol table.
    pub const BUILTINS: [Self; 5] = [Self::Int, Self::Float, Self::Str, Self::Bool, Self::NoneType];

    /// The keyword naming this type in source code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bool => "bool",
            Self::NoneType => "NoneType",
        }
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a runtime value in the interpreter.
///
/// Every variable holds one of these. Booleans double as the integers `0` and
/// `1` wherever arithmetic, bitwise or ordering operators need a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// `True` or `False`.
    Bool(bool),
    /// `None`, also what a declared but never assigned variable reads as.
    None,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// A number extracted from a value for arithmetic.
///
/// Booleans are folded into `Int` so that every numeric operator only has to
/// handle two cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integer (or boolean) operand.
    Int(i64),
    /// A floating-point operand.
    Float(f64),
}

impl Number {
    /// Converts the number to `f64`, rounding integers beyond 2^53 to the
    /// nearest float.
    ///
    /// ```
    /// use spy::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Int(3).as_float(), 3.0);
    /// assert_eq!(Number::Int(9_007_199_254_740_993).as_float(), 9_007_199_254_740_992.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(x) => x,
        }
    }
}

impl Value {
    /// Returns the runtime type tag of the value.
    ///
    /// ```
    /// use spy::interpreter::value::core::{TypeName, Value};
    ///
    /// assert_eq!(Value::Float(5.0).type_name(), TypeName::Float);
    /// assert_eq!(Value::None.type_name(), TypeName::NoneType);
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> TypeName {
        match self {
            Self::Integer(_) => TypeName::Int,
            Self::Float(_) => TypeName::Float,
            Self::Str(_) => TypeName::Str,
            Self::Bool(_) => TypeName::Bool,
            Self::None => TypeName::NoneType,
        }
    }

    /// Truthiness used by `and`, `or` and `not`.
    ///
    /// `0`, `0.0`, `""`, `False` and `None` are false; everything else is true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(x) => *x != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::None => false,
        }
    }

    /// Returns the value as a number, or `None` for strings and `None`.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(n) => Some(Number::Int(*n)),
            Self::Bool(b) => Some(Number::Int(*b as i64)),
            Self::Float(x) => Some(Number::Float(*x)),
            Self::Str(_) | Self::None => None,
        }
    }

    /// Returns the value as an integer if it is an integer or a boolean.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Bool(b) => Some(*b as i64),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) if x.is_nan() => write!(f, "nan"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::None => write!(f, "None"),
        }
    }
}
