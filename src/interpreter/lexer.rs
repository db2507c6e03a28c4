use logos::{Filter, Lexer, Logos};
use tracing::trace;

use crate::error::LexError;

/// Result type used by the scanner.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// The reserved-word table is the set of `#[token]` keywords below; logos
/// gives them priority over the identifier pattern. Operators are resolved by
/// longest match, so `**=` wins over `**` and `*`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
pub enum Token {
    /// Float literal tokens, such as `5f`, `3.14f` or `2.f`.
    #[regex(r"[0-9]+(\.[0-9]*)?f", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    #[regex(r"[0-9]+\.[0-9]*", reject_unsuffixed_float)]
    Integer(i64),
    /// String literal tokens, delimited by `"` or `'`, without escapes.
    #[regex(r#""[^"]*""#, parse_string, allow_greedy = true)]
    #[regex(r"'[^']*'", parse_string, allow_greedy = true)]
    #[regex(r#""[^"]*"#, reject_unterminated_string, allow_greedy = true)]
    #[regex(r"'[^']*", reject_unterminated_string, allow_greedy = true)]
    Str(String),
    /// `True` or `False`.
    #[token("True", |_| true)]
    #[token("False", |_| false)]
    Bool(bool),
    /// `None`
    #[token("None")]
    NoneLiteral,

    /// `int`
    #[token("int")]
    IntType,
    /// `float`
    #[token("float")]
    FloatType,
    /// `str`
    #[token("str")]
    StrType,
    /// `bool`
    #[token("bool")]
    BoolType,
    /// `NoneType`
    #[token("NoneType")]
    NoneType,
    /// `var`
    #[token("var")]
    Var,

    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `is`
    #[token("is")]
    Is,
    /// `in`
    #[token("in")]
    In,
    /// `is not`, fused by the [`Scanner`].
    IsNot,
    /// `not in`, fused by the [`Scanner`].
    NotIn,
    /// `if`
    #[token("if")]
    If,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `def`
    #[token("def")]
    Def,

    /// Identifier tokens: a letter followed by letters or digits.
    #[regex(r"[A-Za-z][A-Za-z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `%`
    #[token("%")]
    Percent,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `~`
    #[token("~")]
    Tilde,
    /// `^`
    #[token("^")]
    Caret,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,

    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,

    /// `=`
    #[token("=")]
    Assign,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `//=`
    #[token("//=")]
    DoubleSlashAssign,
    /// `%=`
    #[token("%=")]
    PercentAssign,
    /// `**=`
    #[token("**=")]
    DoubleStarAssign,
    /// `&=`
    #[token("&=")]
    AmpersandAssign,
    /// `|=`
    #[token("|=")]
    PipeAssign,
    /// `^=`
    #[token("^=")]
    CaretAssign,
    /// `<<=`
    #[token("<<=")]
    ShiftLeftAssign,
    /// `>>=`
    #[token(">>=")]
    ShiftRightAssign,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line break.
    #[token("\n", newline)]
    NewLine,
    /// Whitespace at the start of a line, carrying its width.
    /// Whitespace anywhere else is skipped.
    #[regex(r"[ \t\r\f]+", indent_or_skip)]
    Indent(usize),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,

    /// End of input. Never matched by logos; produced by the [`Scanner`].
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(x) => write!(f, "float literal {x:?}"),
            Self::Integer(n) => write!(f, "integer literal {n}"),
            Self::Str(s) => write!(f, "string literal '{s}'"),
            Self::Bool(true) => write!(f, "'True'"),
            Self::Bool(false) => write!(f, "'False'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::NewLine => write!(f, "newline"),
            Self::Indent(width) => write!(f, "indent of width {width}"),
            Self::Comment => write!(f, "comment"),
            Self::Eof => write!(f, "end of input"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

impl Token {
    /// Source spelling of keyword, operator and punctuation tokens.
    ///
    /// Literal-carrying tokens return an empty string; use `Display` for
    /// those.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::NoneLiteral => "None",
            Self::IntType => "int",
            Self::FloatType => "float",
            Self::StrType => "str",
            Self::BoolType => "bool",
            Self::NoneType => "NoneType",
            Self::Var => "var",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Is => "is",
            Self::In => "in",
            Self::IsNot => "is not",
            Self::NotIn => "not in",
            Self::If => "if",
            Self::While => "while",
            Self::For => "for",
            Self::Def => "def",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Percent => "%",
            Self::DoubleStar => "**",
            Self::Tilde => "~",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Assign => "=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::StarAssign => "*=",
            Self::SlashAssign => "/=",
            Self::DoubleSlashAssign => "//=",
            Self::PercentAssign => "%=",
            Self::DoubleStarAssign => "**=",
            Self::AmpersandAssign => "&=",
            Self::PipeAssign => "|=",
            Self::CaretAssign => "^=",
            Self::ShiftLeftAssign => "<<=",
            Self::ShiftRightAssign => ">>=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::NewLine => "\n",
            Self::Float(_)
            | Self::Integer(_)
            | Self::Str(_)
            | Self::Bool(_)
            | Self::Identifier(_)
            | Self::Indent(_)
            | Self::Comment
            | Self::Eof => "",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Failure reported by a logos callback.
///
/// Carries no position; the [`Scanner`] attaches the slice and line when it
/// converts the fault into a [`LexError`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFault {
    /// No token pattern matches at this position.
    #[default]
    Unrecognized,
    /// A numeric literal with a `.` but no `f` suffix.
    MissingFloatSuffix,
    /// An integer literal that does not fit in an `i64`.
    IntegerTooLarge,
    /// A string literal without its closing quote.
    UnterminatedString,
}

impl LexFault {
    fn into_error(self, slice: &str, line: usize) -> LexError {
        match self {
            Self::Unrecognized => {
                LexError::InvalidCharacter { character: slice.chars().next().unwrap_or_default(),
                                             line }
            },
            Self::MissingFloatSuffix => LexError::MissingFloatSuffix { literal: slice.to_string(),
                                                                       line },
            Self::IntegerTooLarge => LexError::IntegerTooLarge { literal: slice.to_string(),
                                                                 line },
            Self::UnterminatedString => LexError::UnterminatedString { line },
        }
    }
}

/// Parses a float literal, dropping its `f` suffix.
fn parse_float(lex: &Lexer<Token>) -> Result<f64, LexFault> {
    let slice = lex.slice();
    slice[..slice.len() - 1].parse()
                            .map_err(|_| LexFault::MissingFloatSuffix)
}

/// Parses an integer literal in base 10.
fn parse_integer(lex: &Lexer<Token>) -> Result<i64, LexFault> {
    lex.slice().parse().map_err(|_| LexFault::IntegerTooLarge)
}

/// A literal with a fractional part must carry the `f` suffix.
fn reject_unsuffixed_float(_: &Lexer<Token>) -> Result<i64, LexFault> {
    Err(LexFault::MissingFloatSuffix)
}

/// Strips the quotes from a string literal.
///
/// Strings may span lines, so the line counter advances by the number of
/// newlines inside.
fn parse_string(lex: &mut Lexer<Token>) -> String {
    let slice = lex.slice();
    let content = slice[1..slice.len() - 1].to_string();
    lex.extras.line += content.matches('\n').count();
    content
}

fn reject_unterminated_string(_: &Lexer<Token>) -> Result<String, LexFault> {
    Err(LexFault::UnterminatedString)
}

fn newline(lex: &mut Lexer<Token>) {
    lex.extras.line += 1;
}

/// Emits an `Indent` for whitespace that starts a line, skips it otherwise.
fn indent_or_skip(lex: &Lexer<Token>) -> Filter<usize> {
    let start = lex.span().start;
    if start == 0 || lex.source().as_bytes()[start - 1] == b'\n' {
        Filter::Emit(lex.slice().chars().count())
    } else {
        Filter::Skip
    }
}

/// Converts source text into tokens on demand.
///
/// The scanner is lazy and non-restartable: each call to
/// [`Scanner::next_token`] consumes input, and once the input is exhausted it
/// keeps returning [`Token::Eof`]. It also fuses the two-word operators
/// `is not` and `not in` into single tokens, which needs one token of
/// internal lookahead.
///
/// # Example
/// ```
/// use spy::interpreter::lexer::{Scanner, Token};
///
/// let mut scanner = Scanner::new("x: int = 2 ** 3");
/// assert_eq!(scanner.next_token().unwrap().0, Token::Identifier("x".to_string()));
/// assert_eq!(scanner.next_token().unwrap().0, Token::Colon);
/// assert_eq!(scanner.next_token().unwrap().0, Token::IntType);
/// assert_eq!(scanner.next_token().unwrap().0, Token::Assign);
/// assert_eq!(scanner.next_token().unwrap().0, Token::Integer(2));
/// assert_eq!(scanner.next_token().unwrap().0, Token::DoubleStar);
/// assert_eq!(scanner.next_token().unwrap().0, Token::Integer(3));
/// assert_eq!(scanner.next_token().unwrap().0, Token::Eof);
/// assert_eq!(scanner.next_token().unwrap().0, Token::Eof);
/// ```
pub struct Scanner<'src> {
    lexer:    Lexer<'src, Token>,
    /// A token read ahead while checking for a two-word operator.
    pending:  Option<(Token, usize)>,
    /// Set once the iterator has yielded `Eof`.
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Token::lexer_with_extras(source, LexerExtras::default()),
               pending:  None,
               finished: false, }
    }

    /// Returns the next token together with the line it starts on.
    ///
    /// # Errors
    /// Returns a [`LexError`] for characters outside the language, float
    /// literals without the `f` suffix, oversized integers and unterminated
    /// strings.
    pub fn next_token(&mut self) -> LexResult<(Token, usize)> {
        let (token, line) = match self.pending.take() {
            Some(pending) => pending,
            None => self.raw_next()?,
        };

        match token {
            Token::Is => self.fuse((token, line), &Token::Not, Token::IsNot),
            Token::Not => self.fuse((token, line), &Token::In, Token::NotIn),
            _ => Ok((token, line)),
        }
    }

    /// Replaces `first` by `fused` if the following token is `second`.
    fn fuse(&mut self,
            first: (Token, usize),
            second: &Token,
            fused: Token)
            -> LexResult<(Token, usize)> {
        let next = self.raw_next()?;
        if &next.0 == second {
            Ok((fused, first.1))
        } else {
            self.pending = Some(next);
            Ok(first)
        }
    }

    fn raw_next(&mut self) -> LexResult<(Token, usize)> {
        let line = self.lexer.extras.line;
        match self.lexer.next() {
            None => Ok((Token::Eof, self.lexer.extras.line)),
            Some(Ok(token)) => {
                trace!(?token, line, "scanned token");
                Ok((token, line))
            },
            Some(Err(fault)) => Err(fault.into_error(self.lexer.slice(), line)),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = LexResult<(Token, usize)>;

    /// Yields every token up to and including the first `Eof`, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        if matches!(item, Ok((Token::Eof, _)) | Err(_)) {
            self.finished = true;
        }
        Some(item)
    }
}
