use proptest::prelude::*;
use spy::{
    error::{ErrorKind, LexError},
    interpreter::{
        evaluator::core::Context,
        lexer::{Scanner, Token},
        value::core::Value,
    },
    run_source,
};

proptest! {
    #[test]
    fn integer_literals_scan_to_their_value(n in 0..=i64::MAX) {
        let source = n.to_string();
        let mut scanner = Scanner::new(&source);
        prop_assert_eq!(scanner.next_token().unwrap().0, Token::Integer(n));
        prop_assert_eq!(scanner.next_token().unwrap().0, Token::Eof);
    }

    #[test]
    fn unsuffixed_fractions_are_rejected(whole in "[0-9]{1,8}", fraction in "[0-9]{0,8}") {
        let source = format!("{whole}.{fraction}");
        let result = Scanner::new(&source).next_token();
        let is_missing_suffix = matches!(result, Err(LexError::MissingFloatSuffix { .. }));
        prop_assert!(is_missing_suffix);
    }

    #[test]
    fn suffixed_fractions_scan_as_floats(whole in "[0-9]{1,8}", fraction in "[0-9]{0,8}") {
        let source = format!("{whole}.{fraction}f");
        let expected: f64 = format!("{whole}.{fraction}").parse().unwrap();
        prop_assert_eq!(Scanner::new(&source).next_token().unwrap().0, Token::Float(expected));
    }

    #[test]
    fn scanning_never_panics(source in "\\PC{0,64}") {
        for item in Scanner::new(&source).take(256) {
            if item.is_err() {
                break;
            }
        }
    }

    #[test]
    fn floor_division_and_modulo_agree(a in -1_000_000i64..1_000_000, b in -1000i64..1000) {
        prop_assume!(b != 0);
        let mut context = Context::new();
        let source = format!("q: var = ({a}) // ({b}); r: var = ({a}) % ({b})");
        run_source(&source, &mut context).unwrap();

        let Some(Some(Value::Integer(q))) = context.memory().get("q").map(|v| v.cloned()) else {
            panic!("q is not an integer");
        };
        let Some(Some(Value::Integer(r))) = context.memory().get("r").map(|v| v.cloned()) else {
            panic!("r is not an integer");
        };
        prop_assert_eq!(q * b + r, a);
        prop_assert!(r == 0 || (r < 0) == (b < 0));
    }

    #[test]
    fn int_into_float_always_widens(n in -1_000_000i64..1_000_000) {
        let mut context = Context::new();
        let value = run_source(&format!("x: float = {n}"), &mut context).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = Value::Float(n as f64);
        prop_assert_eq!(value, Some(expected));
    }

    #[test]
    fn float_into_int_is_a_type_error(n in -1_000i64..1_000) {
        let mut context = Context::new();
        let err = run_source(&format!("x: int = {n}.5f"), &mut context).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Type);
    }
}
