use crate::interpreter::value::core::{TypeName, Value};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code. Evaluating a literal yields the matching [`Value`] unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A float literal, written with the `f` suffix.
    Float(f64),
    /// A string literal without its quotes.
    Str(String),
    /// `True` or `False`.
    Bool(bool),
    /// `None`.
    None,
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::None => Self::None,
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every node records the source line it starts on for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant.
    Literal {
        /// The literal value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A reference to a variable.
    Variable {
        /// The name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation such as `-x` or `not x`.
    UnaryOp {
        /// The operator.
        op:   UnaryOperator,
        /// The operand.
        expr: Box<Expr>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation such as `a + b` or `a is not b`.
    BinaryOp {
        /// The left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    BinaryOperator,
        /// The right operand.
        right: Box<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// The type written after `:` in a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSpec {
    /// One of the built-in types.
    Named(TypeName),
    /// `var`: take the type of the assigned value.
    Var,
}

impl std::fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Var => write!(f, "var"),
        }
    }
}

/// The left-hand side of an assignment: a name with an optional type clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDeclaration {
    /// The name of the variable.
    pub name:          String,
    /// The type clause, if one was written.
    pub declared_type: Option<TypeSpec>,
    /// Line number in the source code.
    pub line:          usize,
}

/// A function definition: `def name(): { ... }`.
///
/// The body is kept as parsed but never executed.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name: String,
    /// The statements between the braces, in source order.
    pub body: Vec<Statement>,
    /// Line number in the source code.
    pub line: usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name: type = value`
    Assign {
        /// The declared target.
        target: VarDeclaration,
        /// The value being assigned.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `name op= value`
    CompoundAssign {
        /// The target; a type clause here is rejected when evaluated.
        target: VarDeclaration,
        /// The binary operation applied in place (e.g. `Add` for `+=`).
        op:     BinaryOperator,
        /// The right-hand operand.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `name: type` with no value.
    Declaration(VarDeclaration),
    /// A function definition.
    Function(FunctionDef),
    /// An empty statement.
    NoOp,
}

/// A whole program: statements in execution order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, bitwise, comparison, identity,
/// membership and logical operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    LeftShift,
    /// Right shift (`>>`)
    RightShift,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Identity (`is`)
    Is,
    /// Negated identity (`is not`)
    IsNot,
    /// Membership (`in`)
    In,
    /// Negated membership (`not in`)
    NotIn,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl BinaryOperator {
    /// `+`, `-`, `*`, `/`, `//`, `%` and `**`.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self,
                 Self::Add | Self::Sub | Self::Mul | Self::Div | Self::FloorDiv | Self::Mod | Self::Pow)
    }

    /// `&`, `|`, `^`, `<<` and `>>`.
    #[must_use]
    pub const fn is_bitwise(self) -> bool {
        matches!(self,
                 Self::BitAnd | Self::BitOr | Self::BitXor | Self::LeftShift | Self::RightShift)
    }

    /// `==`, `!=`, `<`, `<=`, `>` and `>=`.
    ///
    /// ```
    /// use spy::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::LessEqual.is_comparison());
    /// assert!(!BinaryOperator::Is.is_comparison());
    /// ```
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Bitwise inversion (`~x`).
    BitNot,
    /// Logical NOT (`not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, FloorDiv, Greater, GreaterEqual, In, Is,
            IsNot, LeftShift, Less, LessEqual, Mod, Mul, NotEqual, NotIn, Or, Pow, RightShift, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            LeftShift => "<<",
            RightShift => ">>",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Is => "is",
            IsNot => "is not",
            In => "in",
            NotIn => "not in",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::BitNot => "~",
            Self::Not => "not",
        };
        write!(f, "{operator}")
    }
}
