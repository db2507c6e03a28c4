use spy::{
    error::LexError,
    interpreter::lexer::{Scanner, Token},
};

fn tokens(source: &str) -> Vec<Token> {
    Scanner::new(source).map(|item| item.map(|(token, _)| token))
                        .collect::<Result<_, _>>()
                        .unwrap_or_else(|e| panic!("failed to scan {source:?}: {e}"))
}

fn scan_error(source: &str) -> LexError {
    Scanner::new(source).find_map(Result::err)
                        .unwrap_or_else(|| panic!("{source:?} scanned without error"))
}

#[test]
fn end_of_input_repeats() {
    let mut scanner = Scanner::new("x");
    assert_eq!(scanner.next_token().unwrap().0, Token::Identifier("x".to_string()));
    for _ in 0..3 {
        assert_eq!(scanner.next_token().unwrap().0, Token::Eof);
    }
}

#[test]
fn operators_use_longest_match() {
    assert_eq!(tokens("**= ** * //= // / <<= << <= < >>= >> >= > == = !="),
               [Token::DoubleStarAssign,
                Token::DoubleStar,
                Token::Star,
                Token::DoubleSlashAssign,
                Token::DoubleSlash,
                Token::Slash,
                Token::ShiftLeftAssign,
                Token::ShiftLeft,
                Token::LessEqual,
                Token::Less,
                Token::ShiftRightAssign,
                Token::ShiftRight,
                Token::GreaterEqual,
                Token::Greater,
                Token::EqualEqual,
                Token::Assign,
                Token::BangEqual,
                Token::Eof]);
}

#[test]
fn numbers() {
    assert_eq!(tokens("42 5f 3.25f 2.f"),
               [Token::Integer(42),
                Token::Float(5.0),
                Token::Float(3.25),
                Token::Float(2.0),
                Token::Eof]);
    assert!(matches!(scan_error("3.5"), LexError::MissingFloatSuffix { .. }));
    assert!(matches!(scan_error("3."), LexError::MissingFloatSuffix { .. }));
    assert!(matches!(scan_error("9223372036854775808"), LexError::IntegerTooLarge { .. }));
}

#[test]
fn strings_keep_their_content() {
    assert_eq!(tokens(r#"'it''s' "a 'b'" ''"#),
               [Token::Str("it".to_string()),
                Token::Str("s".to_string()),
                Token::Str("a 'b'".to_string()),
                Token::Str(String::new()),
                Token::Eof]);
    assert!(matches!(scan_error("\"never closed"), LexError::UnterminatedString { line: 1 }));
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(tokens("int integer var True Truth None NoneType x1"),
               [Token::IntType,
                Token::Identifier("integer".to_string()),
                Token::Var,
                Token::Bool(true),
                Token::Identifier("Truth".to_string()),
                Token::NoneLiteral,
                Token::NoneType,
                Token::Identifier("x1".to_string()),
                Token::Eof]);
}

#[test]
fn two_word_operators_are_fused() {
    assert_eq!(tokens("a is not b not in c is nothing not x"),
               [Token::Identifier("a".to_string()),
                Token::IsNot,
                Token::Identifier("b".to_string()),
                Token::NotIn,
                Token::Identifier("c".to_string()),
                Token::Is,
                Token::Identifier("nothing".to_string()),
                Token::Not,
                Token::Identifier("x".to_string()),
                Token::Eof]);
}

#[test]
fn indentation_only_at_line_start() {
    assert_eq!(tokens("  a  =\n\tb # note\nc"),
               [Token::Indent(2),
                Token::Identifier("a".to_string()),
                Token::Assign,
                Token::NewLine,
                Token::Indent(1),
                Token::Identifier("b".to_string()),
                Token::NewLine,
                Token::Identifier("c".to_string()),
                Token::Eof]);
}

#[test]
fn lines_are_tracked() {
    let lines: Vec<usize> = Scanner::new("a\n\nb 'x\ny' c").map(|item| item.unwrap().1)
                                                          .collect();
    // a, \n, \n, b, 'x\ny', c, Eof
    assert_eq!(lines, [1, 1, 2, 3, 3, 4, 4]);
}

#[test]
fn invalid_characters_report_code_point() {
    let err = scan_error("a\n@");
    assert_eq!(err, LexError::InvalidCharacter { character: '@',
                                                 line:      2, });
    assert!(err.to_string().contains("U+0040"), "{err}");
}
