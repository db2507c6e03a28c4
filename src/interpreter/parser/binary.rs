use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token to the binary operator it spells, if any.
///
/// `not` on its own is unary and maps to `None`; the two-word operators arrive
/// already fused by the scanner.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    let op = match token {
        Token::Plus => BinaryOperator::Add,
        Token::Minus => BinaryOperator::Sub,
        Token::Star => BinaryOperator::Mul,
        Token::Slash => BinaryOperator::Div,
        Token::DoubleSlash => BinaryOperator::FloorDiv,
        Token::Percent => BinaryOperator::Mod,
        Token::DoubleStar => BinaryOperator::Pow,
        Token::Ampersand => BinaryOperator::BitAnd,
        Token::Pipe => BinaryOperator::BitOr,
        Token::Caret => BinaryOperator::BitXor,
        Token::ShiftLeft => BinaryOperator::LeftShift,
        Token::ShiftRight => BinaryOperator::RightShift,
        Token::EqualEqual => BinaryOperator::Equal,
        Token::BangEqual => BinaryOperator::NotEqual,
        Token::Less => BinaryOperator::Less,
        Token::LessEqual => BinaryOperator::LessEqual,
        Token::Greater => BinaryOperator::Greater,
        Token::GreaterEqual => BinaryOperator::GreaterEqual,
        Token::Is => BinaryOperator::Is,
        Token::IsNot => BinaryOperator::IsNot,
        Token::In => BinaryOperator::In,
        Token::NotIn => BinaryOperator::NotIn,
        Token::And => BinaryOperator::And,
        Token::Or => BinaryOperator::Or,
        _ => return None,
    };
    Some(op)
}

impl Parser<'_> {
    /// Parses one left-associative precedence level.
    ///
    /// Repeatedly parses an operand with `operand` and folds it into the
    /// expression while the current token is one of `operators`.
    fn parse_left_assoc(&mut self,
                        operand: fn(&mut Self) -> ParseResult<Expr>,
                        operators: &[BinaryOperator])
                        -> ParseResult<Expr> {
        let mut left = operand(self)?;
        loop {
            if let Some(op) = token_to_binary_operator(&self.current)
               && operators.contains(&op)
            {
                let line = self.line;
                self.advance()?;
                let right = operand(self)?;
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        line };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses logical OR expressions.
    ///
    /// The rule is: `logical_or := logical_and ("or" logical_and)*`
    pub fn parse_logical_or(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_logical_and, &[BinaryOperator::Or])
    }

    /// Parses logical AND expressions.
    ///
    /// The rule is: `logical_and := logical_not ("and" logical_not)*`
    pub fn parse_logical_and(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_logical_not, &[BinaryOperator::And])
    }

    /// Parses comparison chains.
    ///
    /// Comparisons are plain left-associative binary operators, so `a < b < c`
    /// is `(a < b) < c` and compares the boolean result of `a < b` with `c`.
    ///
    /// The rule is: `comparison := bit_or (cmp_op bit_or)*` where `cmp_op` is
    /// one of `== != < <= > >= is "is not" in "not in"`.
    pub fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_bit_or,
                              &[BinaryOperator::Equal,
                                BinaryOperator::NotEqual,
                                BinaryOperator::Less,
                                BinaryOperator::LessEqual,
                                BinaryOperator::Greater,
                                BinaryOperator::GreaterEqual,
                                BinaryOperator::Is,
                                BinaryOperator::IsNot,
                                BinaryOperator::In,
                                BinaryOperator::NotIn])
    }

    /// `bit_or := bit_xor ("|" bit_xor)*`
    pub fn parse_bit_or(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_bit_xor, &[BinaryOperator::BitOr])
    }

    /// `bit_xor := bit_and ("^" bit_and)*`
    pub fn parse_bit_xor(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_bit_and, &[BinaryOperator::BitXor])
    }

    /// `bit_and := shift ("&" shift)*`
    pub fn parse_bit_and(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_shift, &[BinaryOperator::BitAnd])
    }

    /// Parses shift expressions.
    ///
    /// The rule is: `shift := additive (("<<" | ">>") additive)*`
    pub fn parse_shift(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_additive,
                              &[BinaryOperator::LeftShift, BinaryOperator::RightShift])
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `additive := term (("+" | "-") term)*`
    pub fn parse_additive(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_term, &[BinaryOperator::Add, BinaryOperator::Sub])
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `term := exponent (("*" | "/" | "//" | "%") exponent)*`
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_exponent,
                              &[BinaryOperator::Mul,
                                BinaryOperator::Div,
                                BinaryOperator::FloorDiv,
                                BinaryOperator::Mod])
    }

    /// Parses exponentiation expressions.
    ///
    /// Each operand is a factor, so repeated `**` groups to the left:
    /// `2 ** 3 ** 2` parses as `(2 ** 3) ** 2`.
    ///
    /// The rule is: `exponent := factor ("**" factor)*`
    pub fn parse_exponent(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(Self::parse_factor, &[BinaryOperator::Pow])
    }
}

