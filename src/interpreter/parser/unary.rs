use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a `not` applied to a comparison.
    ///
    /// This `not` sits below the comparison level, so `not a < b` negates the
    /// result of `a < b`.
    ///
    /// The rule is: `logical_not := "not" logical_not | comparison`
    pub fn parse_logical_not(&mut self) -> ParseResult<Expr> {
        if self.current == Token::Not {
            let line = self.line;
            self.advance()?;
            let expr = self.parse_logical_not()?;
            return Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                                      expr: Box::new(expr),
                                      line });
        }
        self.parse_comparison()
    }

    /// Parses a factor, the tightest-binding expression.
    ///
    /// The rule is:
    /// ```text
    /// factor := ("+" | "-" | "~" | "not") factor
    ///         | "(" expression ")"
    ///         | literal
    ///         | identifier
    /// ```
    ///
    /// # Errors
    /// `UnexpectedToken` if the current token cannot start an expression, or if
    /// a parenthesized expression is not closed.
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        let line = self.line;

        let op = match self.current {
            Token::Plus => Some(UnaryOperator::Plus),
            Token::Minus => Some(UnaryOperator::Negate),
            Token::Tilde => Some(UnaryOperator::BitNot),
            Token::Not => Some(UnaryOperator::Not),
            _ => None,
        };
        if let Some(op) = op {
            self.advance()?;
            let expr = self.parse_factor()?;
            return Ok(Expr::UnaryOp { op,
                                      expr: Box::new(expr),
                                      line });
        }

        let value = match &self.current {
            Token::LParen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.eat(&Token::RParen)?;
                return Ok(expr);
            },
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                return Ok(Expr::Variable { name, line });
            },
            Token::Integer(n) => LiteralValue::Integer(*n),
            Token::Float(x) => LiteralValue::Float(*x),
            Token::Str(s) => LiteralValue::Str(s.clone()),
            Token::Bool(b) => LiteralValue::Bool(*b),
            Token::NoneLiteral => LiteralValue::None,
            _ => return Err(self.unexpected("an expression")),
        };
        self.advance()?;
        Ok(Expr::Literal { value, line })
    }
}

