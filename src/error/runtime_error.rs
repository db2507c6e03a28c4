use crate::{ast::TypeSpec, error::ErrorKind, interpreter::value::core::TypeName};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Compound-assigned a variable that was declared but holds no value.
    UnassignedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The value's type does not match the declared or recorded type.
    TypeMismatch {
        /// Runtime type of the value.
        found:    TypeName,
        /// Type the target was declared with.
        expected: TypeName,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary operator was applied to operand types it does not support.
    UnsupportedOperands {
        /// The operator as written.
        op:    String,
        /// Type of the left operand.
        left:  TypeName,
        /// Type of the right operand.
        right: TypeName,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator was applied to an operand type it does not support.
    UnsupportedOperand {
        /// The operator as written.
        op:      String,
        /// Type of the operand.
        operand: TypeName,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// `x: var` without an initializer.
    UninitializedImplicitType {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A compound assignment that carries a `: type` clause.
    CompoundAssignmentWithType {
        /// The name of the variable.
        name:     String,
        /// The type written in the clause.
        declared: TypeSpec,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The symbol table has no type recorded for a name.
    MissingTypeDeclaration {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to define a function that already exists.
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed 64 bits.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A shift by a negative amount.
    NegativeShiftCount {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string operation would build a string longer than `limit` bytes.
    StringTooLong {
        /// The maximum length in bytes.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnassignedVariable { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::UnsupportedOperands { line, .. }
            | Self::UnsupportedOperand { line, .. }
            | Self::UninitializedImplicitType { line, .. }
            | Self::CompoundAssignmentWithType { line, .. }
            | Self::MissingTypeDeclaration { line, .. }
            | Self::FunctionAlreadyDefined { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::NegativeShiftCount { line }
            | Self::StringTooLong { line, .. } => *line,
        }
    }

    /// Classifies the error into one of the language's error families.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownVariable { .. } | Self::UnassignedVariable { .. } => ErrorKind::Name,
            Self::TypeMismatch { .. }
            | Self::UnsupportedOperands { .. }
            | Self::UnsupportedOperand { .. } => ErrorKind::Type,
            Self::UninitializedImplicitType { .. }
            | Self::CompoundAssignmentWithType { .. }
            | Self::MissingTypeDeclaration { .. }
            | Self::FunctionAlreadyDefined { .. } => ErrorKind::Declaration,
            Self::DivisionByZero { .. }
            | Self::Overflow { .. }
            | Self::NegativeShiftCount { .. }
            | Self::StringTooLong { .. } => ErrorKind::Runtime,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: name '{name}' is not defined.")
            },
            Self::UnassignedVariable { name, line } => {
                write!(f, "Error on line {line}: use of unassigned variable '{name}'.")
            },
            Self::TypeMismatch { found,
                                 expected,
                                 line, } => {
                write!(f, "Error on line {line}: Cannot assign {found} to {expected}.")
            },
            Self::UnsupportedOperands { op,
                                        left,
                                        right,
                                        line, } => write!(f,
                                                          "Error on line {line}: unsupported operand type(s) for {op}: '{left}' and '{right}'."),
            Self::UnsupportedOperand { op, operand, line } => write!(f,
                                                                     "Error on line {line}: bad operand type for unary {op}: '{operand}'."),
            Self::UninitializedImplicitType { name, line } => write!(f,
                                                                     "Error on line {line}: implicitly-typed variable '{name}' must be initialized."),
            Self::CompoundAssignmentWithType { name,
                                               declared,
                                               line, } => write!(f,
                                                                 "Error on line {line}: compound assignment to '{name}' cannot redeclare its type as '{declared}'."),
            Self::MissingTypeDeclaration { name, line } => {
                write!(f, "Error on line {line}: missing type declaration for '{name}'.")
            },
            Self::FunctionAlreadyDefined { name, line } => write!(f,
                                                                  "Error on line {line}: Function '{name}' is already defined."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::NegativeShiftCount { line } => {
                write!(f, "Error on line {line}: negative shift count.")
            },
            Self::StringTooLong { limit, line } => write!(f,
                                                          "Error on line {line}: resulting string would exceed {limit} bytes."),
        }
    }
}

impl std::error::Error for RuntimeError {}
