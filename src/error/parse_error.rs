use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The scanner rejected the input while the parser was pulling tokens.
    Lexical(LexError),
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// What the grammar rule wanted at this point.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Two statements were not separated by `;` or a newline.
    MissingSeparator {
        /// The token that starts the second statement.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after the program should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An assignment without a `: type` clause, e.g. `x = 1`.
    MissingTypeClause {
        /// The assigned name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A control-flow statement, which the language recognizes but cannot run.
    UnsupportedStatement {
        /// The keyword starting the statement.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A function body was not closed before the end of input.
    UnterminatedBlock {
        /// The name of the function whose body is unterminated.
        name: String,
        /// The source line where the function starts.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lexical(e) => e.line(),
            Self::UnexpectedToken { line, .. }
            | Self::MissingSeparator { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::MissingTypeClause { line, .. }
            | Self::UnsupportedStatement { line, .. }
            | Self::UnterminatedBlock { line, .. } => *line,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::Lexical(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),

            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Error on line {line}: invalid syntax. Expected {expected}, found {found}."),

            Self::MissingSeparator { token, line } => write!(f,
                                                             "Error on line {line}: invalid syntax. Missing ';' or newline before {token}."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: invalid syntax. Extra tokens after program: {token}."),

            Self::MissingTypeClause { name, line } => write!(f,
                                                             "Error on line {line}: invalid syntax. Assignment to '{name}' needs a type, e.g. {name}: var = ..."),

            Self::UnsupportedStatement { keyword, line } => write!(f,
                                                                   "Error on line {line}: '{keyword}' statements are not supported."),

            Self::UnterminatedBlock { name, line } => write!(f,
                                                             "Error on line {line}: body of function '{name}' is missing its closing '}}'."),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            _ => None,
        }
    }
}
