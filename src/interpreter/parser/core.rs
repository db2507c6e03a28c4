use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Scanner, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over a lazily scanned token stream.
///
/// The parser holds exactly one token of lookahead, the *current* token, and
/// pulls the next one from its [`Scanner`] whenever it consumes a token. It
/// never backtracks; the first token that does not fit the grammar aborts the
/// parse.
///
/// # Example
/// ```
/// use spy::{
///     ast::Statement,
///     interpreter::parser::core::Parser,
/// };
///
/// let program = Parser::new("a: int = 1; b: var = a + 2").unwrap()
///                                                        .parse()
///                                                        .unwrap();
/// assert_eq!(program.statements.len(), 2);
/// assert!(matches!(program.statements[0], Statement::Assign { .. }));
/// ```
pub struct Parser<'src> {
    scanner:             Scanner<'src>,
    /// The token under examination.
    pub(crate) current:  Token,
    /// The line the current token starts on.
    pub(crate) line:     usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token of `source`.
    ///
    /// # Errors
    /// Returns `ParseError::Lexical` if the first token cannot be scanned.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut scanner = Scanner::new(source);
        let (current, line) = scanner.next_token()?;
        Ok(Self { scanner,
                  current,
                  line })
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Grammar: `program := statement_list EOF`
    ///
    /// # Errors
    /// - Any lexical or syntax error met along the way.
    /// - `UnexpectedTrailingTokens` if tokens remain after the statement list.
    pub fn parse(&mut self) -> ParseResult<Program> {
        let statements = self.parse_statement_list()?;
        if self.current != Token::Eof {
            return Err(ParseError::UnexpectedTrailingTokens { token: self.current.to_string(),
                                                              line:  self.line, });
        }
        debug!(statements = statements.len(), "parsed program");
        Ok(Program { statements })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing.
    /// It begins at the lowest-precedence level, logical OR, and recursively
    /// descends through the precedence hierarchy.
    ///
    /// Grammar: `expression := logical_or`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_logical_or()
    }

    /// Moves to the next token and returns the one that was current.
    pub(crate) fn advance(&mut self) -> ParseResult<Token> {
        let (next, line) = self.scanner.next_token()?;
        self.line = line;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it equals `expected`.
    ///
    /// # Errors
    /// `UnexpectedToken` naming `expected` and the token actually found.
    pub(crate) fn eat(&mut self, expected: &Token) -> ParseResult<()> {
        if &self.current == expected {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(&expected.to_string()))
        }
    }

    /// Builds an `UnexpectedToken` error at the current token.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found:    self.current.to_string(),
                                      line:     self.line, }
    }
}
