#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// A character that starts no token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A numeric literal with a fractional part but no `f` suffix, e.g. `3.5`.
    MissingFloatSuffix {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An integer literal that does not fit in 64 bits.
    IntegerTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A string literal without its closing quote.
    UnterminatedString {
        /// The source line where the string starts.
        line: usize,
    },
}

impl LexError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidCharacter { line, .. }
            | Self::MissingFloatSuffix { line, .. }
            | Self::IntegerTooLarge { line, .. }
            | Self::UnterminatedString { line } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, line } => write!(f,
                                                                 "Error on line {line}: invalid character '{}' (U+{:04X}).",
                                                                 character.escape_default(),
                                                                 u32::from(*character)),
            Self::MissingFloatSuffix { literal, line } => write!(f,
                                                                 "Error on line {line}: invalid numeric literal '{literal}'. Float literals need an 'f' suffix, e.g. {literal}f."),
            Self::IntegerTooLarge { literal, line } => {
                write!(f, "Error on line {line}: integer literal '{literal}' is too large.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: unterminated string literal.")
            },
        }
    }
}

impl std::error::Error for LexError {}
