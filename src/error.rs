/// Lexical errors.
///
/// Raised by the scanner when the source text contains a character outside the
/// language's alphabet or a malformed literal.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens: unexpected tokens, missing separators, malformed function bodies.
/// Lexical errors surfaced while the parser pulls tokens are wrapped here too.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types raised during evaluation: name errors, type
/// mismatches, declaration errors and arithmetic failures.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Coarse classification of an [`Error`].
///
/// Lets a caller tell the error families apart without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character or malformed literal.
    Lexical,
    /// Token stream does not match the grammar.
    Syntax,
    /// Reference to a name that was never assigned.
    Name,
    /// Declared type and value type disagree.
    Type,
    /// Illegal or incomplete declaration.
    Declaration,
    /// Any other evaluation failure (division by zero, overflow, ...).
    Runtime,
}

/// Any error produced while running a source string.
#[derive(Debug)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    Parse(ParseError),
    /// The program failed during evaluation.
    Runtime(RuntimeError),
}

impl Error {
    /// Classifies the error.
    ///
    /// ```
    /// use spy::{error::ErrorKind, interpreter::evaluator::core::Context, run_source};
    ///
    /// let mut context = Context::new();
    /// let err = run_source("x: int = 3.5", &mut context).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::Lexical(_)) => ErrorKind::Lexical,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Line on which the error was detected.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Parse(ParseError::Lexical(e))
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
