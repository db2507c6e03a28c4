use crate::{
    ast::{BinaryOperator, FunctionDef, Statement, TypeSpec, VarDeclaration},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
        value::core::TypeName,
    },
};

/// Maps a compound-assignment token to the operator it applies.
const fn compound_operator(token: &Token) -> Option<BinaryOperator> {
    let op = match token {
        Token::PlusAssign => BinaryOperator::Add,
        Token::MinusAssign => BinaryOperator::Sub,
        Token::StarAssign => BinaryOperator::Mul,
        Token::SlashAssign => BinaryOperator::Div,
        Token::DoubleSlashAssign => BinaryOperator::FloorDiv,
        Token::PercentAssign => BinaryOperator::Mod,
        Token::DoubleStarAssign => BinaryOperator::Pow,
        Token::AmpersandAssign => BinaryOperator::BitAnd,
        Token::PipeAssign => BinaryOperator::BitOr,
        Token::CaretAssign => BinaryOperator::BitXor,
        Token::ShiftLeftAssign => BinaryOperator::LeftShift,
        Token::ShiftRightAssign => BinaryOperator::RightShift,
        _ => return None,
    };
    Some(op)
}

impl Parser<'_> {
    /// Parses statements separated by `;` or newlines.
    ///
    /// The rule is: `statement_list := statement ((";" | NEWLINE) statement)*`
    ///
    /// # Errors
    /// `MissingSeparator` if an identifier directly follows the list, as in
    /// `a: int = 1 b: int = 2`.
    pub fn parse_statement_list(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = vec![self.parse_statement()?];
        while matches!(self.current, Token::Semicolon | Token::NewLine) {
            self.advance()?;
            statements.push(self.parse_statement()?);
        }

        if let Token::Identifier(_) = self.current {
            return Err(ParseError::MissingSeparator { token: self.current.to_string(),
                                                      line:  self.line, });
        }
        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a function definition, starting with `def`.
    /// - a declaration, assignment or compound assignment, starting with a name.
    /// - nothing at all, which yields [`Statement::NoOp`].
    ///
    /// Indentation before the statement is skipped. `if`, `while` and `for`
    /// are reserved but rejected.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        while let Token::Indent(_) = self.current {
            self.advance()?;
        }

        match self.current {
            Token::Def => self.parse_function_definition(),
            Token::Identifier(_) => self.parse_assignment(),
            Token::If | Token::While | Token::For => {
                Err(ParseError::UnsupportedStatement { keyword: self.current.symbol().to_string(),
                                                       line:    self.line, })
            },
            _ => Ok(Statement::NoOp),
        }
    }

    /// Parses a statement that starts with a variable name.
    ///
    /// Forms:
    /// ```text
    ///     name: type = expression      Assign
    ///     name [: type] op= expression CompoundAssign
    ///     name: type                   Declaration
    /// ```
    ///
    /// # Errors
    /// - `MissingTypeClause` for `name = expression`.
    /// - `UnexpectedToken` for a bare name or a malformed type clause.
    pub fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let line = self.line;
        let name = self.parse_identifier()?;

        let declared_type = if self.current == Token::Colon {
            self.advance()?;
            Some(self.parse_type_spec()?)
        } else {
            None
        };
        let target = VarDeclaration { name,
                                      declared_type,
                                      line };

        if self.current == Token::Assign {
            if target.declared_type.is_none() {
                return Err(ParseError::MissingTypeClause { name: target.name,
                                                           line });
            }
            self.advance()?;
            let value = self.parse_expression()?;
            return Ok(Statement::Assign { target,
                                          value,
                                          line });
        }

        if let Some(op) = compound_operator(&self.current) {
            self.advance()?;
            let value = self.parse_expression()?;
            return Ok(Statement::CompoundAssign { target,
                                                  op,
                                                  value,
                                                  line });
        }

        if target.declared_type.is_some() {
            Ok(Statement::Declaration(target))
        } else {
            Err(self.unexpected("':' or an assignment operator"))
        }
    }

    /// Parses a function definition.
    ///
    /// The rule is: `def_stmt := "def" identifier "(" ")" ":" "{" statement_list "}"`
    ///
    /// # Errors
    /// - `UnterminatedBlock` if input ends before the closing `}`.
    /// - `UnexpectedToken` for any other deviation from the rule.
    pub fn parse_function_definition(&mut self) -> ParseResult<Statement> {
        let line = self.line;
        self.eat(&Token::Def)?;
        let name = self.parse_identifier()?;
        self.eat(&Token::LParen)?;
        self.eat(&Token::RParen)?;
        self.eat(&Token::Colon)?;
        self.eat(&Token::LBrace)?;

        let body = self.parse_statement_list()?;

        match self.current {
            Token::RBrace => {
                self.advance()?;
                Ok(Statement::Function(FunctionDef { name, body, line }))
            },
            Token::Eof => Err(ParseError::UnterminatedBlock { name, line }),
            _ => Err(self.unexpected("'}'")),
        }
    }

    /// Parses the type after `:`.
    ///
    /// The rule is: `type := "int" | "float" | "str" | "bool" | "NoneType" | "var"`
    pub fn parse_type_spec(&mut self) -> ParseResult<TypeSpec> {
        let spec = match self.current {
            Token::IntType => TypeSpec::Named(TypeName::Int),
            Token::FloatType => TypeSpec::Named(TypeName::Float),
            Token::StrType => TypeSpec::Named(TypeName::Str),
            Token::BoolType => TypeSpec::Named(TypeName::Bool),
            Token::NoneType => TypeSpec::Named(TypeName::NoneType),
            Token::Var => TypeSpec::Var,
            _ => return Err(self.unexpected("a type")),
        };
        self.advance()?;
        Ok(spec)
    }

    /// Consumes an identifier and returns its name.
    pub fn parse_identifier(&mut self) -> ParseResult<String> {
        if let Token::Identifier(_) = self.current
           && let Token::Identifier(name) = self.advance()?
        {
            return Ok(name);
        }
        Err(self.unexpected("an identifier"))
    }
}

