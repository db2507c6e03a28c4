use std::fs;

use spy::{
    ast::BinaryOperator,
    error::{ErrorKind, RuntimeError},
    interpreter::{
        evaluator::binary::arithmetic::MAX_STRING_LEN,
        evaluator::core::Context,
        value::core::{TypeName, Value},
    },
    run_source,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "spy"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut context = Context::new();
        if let Err(e) = run_source(&code, &mut context) {
            panic!("Demo {path:?} failed:\n{code}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn run(src: &str) -> Context {
    let mut context = Context::new();
    if let Err(e) = run_source(src, &mut context) {
        panic!("Script failed: {e}\n{src}");
    }
    context
}

fn assert_success(src: &str) {
    run(src);
}

fn assert_failure(src: &str, kind: ErrorKind) {
    let mut context = Context::new();
    match run_source(src, &mut context) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error kind for {src:?}: {e}"),
    }
}

fn value_of(context: &Context, name: &str) -> Option<Value> {
    context.memory().get(name).flatten().cloned()
}

fn type_of(context: &Context, name: &str) -> TypeName {
    context.symbols()
           .get(name)
           .unwrap_or_else(|| panic!("no symbol for {name}"))
           .type_name()
}

#[test]
fn regression_program_with_integer_intermediate() {
    let context = run("a: var = 5f; b: int = 5; c: int = b + b // 5 * 10; d: float = a // c");

    assert_eq!(value_of(&context, "a"), Some(Value::Float(5.0)));
    assert_eq!(type_of(&context, "a"), TypeName::Float);
    assert_eq!(value_of(&context, "b"), Some(Value::Integer(5)));
    assert_eq!(type_of(&context, "b"), TypeName::Int);
    assert_eq!(value_of(&context, "c"), Some(Value::Integer(15)));
    assert_eq!(value_of(&context, "d"), Some(Value::Float(0.0)));
    assert_eq!(type_of(&context, "d"), TypeName::Float);
}

#[test]
fn regression_program_rejects_float_into_int() {
    let mut context = Context::new();
    let err = run_source("a: var = 5f; b: int = 5; c: int = a + b // 5 * 10; d: float = a // c",
                         &mut context).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(value_of(&context, "a"), Some(Value::Float(5.0)));
    assert_eq!(value_of(&context, "b"), Some(Value::Integer(5)));
    assert!(context.memory().get("c").is_none());
    assert!(context.memory().get("d").is_none());
}

#[test]
fn regression_program_with_implicit_intermediate() {
    let context = run("a: var = 5f; b: int = 5; c: var = a + b // 5 * 10; d: float = a // c");
    assert_eq!(value_of(&context, "c"), Some(Value::Float(15.0)));
    assert_eq!(value_of(&context, "d"), Some(Value::Float(0.0)));
}

#[test]
fn declared_type_mismatch_names_both_types() {
    let mut context = Context::new();
    let err = run_source("x: int = 3.5f", &mut context).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    let message = err.to_string();
    assert!(message.contains("float") && message.contains("int"), "{message}");
    assert!(context.memory().get("x").is_none());
    assert!(context.symbols().get("x").is_none());
}

#[test]
fn integers_widen_to_float_only() {
    let context = run("x: float = 2\ny: float = True + 1");
    assert_eq!(value_of(&context, "x"), Some(Value::Float(2.0)));
    assert_eq!(value_of(&context, "y"), Some(Value::Float(2.0)));

    assert_failure("x: int = True", ErrorKind::Type);
    assert_failure("x: float = True", ErrorKind::Type);
    assert_failure("x: str = 1", ErrorKind::Type);
    assert_failure("x: bool = None", ErrorKind::Type);
}

#[test]
fn var_takes_the_runtime_type() {
    let context = run("s: var = 'text'\nn: var = None\nb: var = 1 < 2");
    assert_eq!(type_of(&context, "s"), TypeName::Str);
    assert_eq!(type_of(&context, "n"), TypeName::NoneType);
    assert_eq!(type_of(&context, "b"), TypeName::Bool);
}

#[test]
fn compound_assignments() {
    let context = run("x: int = 2\nx += 3\nx *= 4\nx -= 1\nx //= 2\nx %= 5\nx **= 2");
    assert_eq!(value_of(&context, "x"), Some(Value::Integer(16)));

    let context = run("x: float = 7\nx //= 2\ny: float = 1\ny /= 4");
    assert_eq!(value_of(&context, "x"), Some(Value::Float(3.0)));
    assert_eq!(value_of(&context, "y"), Some(Value::Float(0.25)));

    let context = run("x: int = 12\nx &= 10\nx |= 1\nx ^= 3\nx <<= 2\nx >>= 1");
    assert_eq!(value_of(&context, "x"), Some(Value::Integer(20)));

    let context = run("s: str = 'ab'\ns += 'cd'");
    assert_eq!(value_of(&context, "s"), Some(Value::from("abcd")));
}

#[test]
fn compound_assignment_type_errors_leave_the_value() {
    let mut context = Context::new();
    run_source("x: int = 3", &mut context).unwrap();

    let err = run_source("x += 2.0f", &mut context).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(value_of(&context, "x"), Some(Value::Integer(3)));

    let err = run_source("x /= 2", &mut context).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(value_of(&context, "x"), Some(Value::Integer(3)));

    let err = run_source("x += 2.0", &mut context).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lexical);
}

#[test]
fn compound_assignment_requires_an_assigned_variable() {
    assert_failure("x += 1", ErrorKind::Name);
    assert_failure("x: int\nx += 1", ErrorKind::Name);
    assert_failure("x: int = 1\nx: int += 1", ErrorKind::Declaration);

    let mut context = Context::new();
    let err = run_source("x: int = 1\nx: float -= 1", &mut context).unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 2: compound assignment to 'x' cannot redeclare its type as 'float'.");
    assert_eq!(value_of(&context, "x"), Some(Value::Integer(1)));
}

#[test]
fn bare_declarations() {
    let context = run("x: int\ny: var = x");
    assert_eq!(type_of(&context, "x"), TypeName::Int);
    assert_eq!(context.memory().get("x"), Some(None));
    assert_eq!(value_of(&context, "y"), Some(Value::None));

    assert_failure("x: var", ErrorKind::Declaration);
}

#[test]
fn unknown_names_abort_the_statement() {
    let mut context = Context::new();
    let err = run_source("a: int = 1\nb: int = a + missing\nc: int = 3", &mut context).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Name);
    assert_eq!(err.line(), 2);
    assert_eq!(value_of(&context, "a"), Some(Value::Integer(1)));
    assert!(context.memory().get("b").is_none());
    assert!(context.memory().get("c").is_none());
}

#[test]
fn reassignment_keeps_the_recorded_type() {
    let mut context = Context::new();
    run_source("x: float = 1", &mut context).unwrap();
    let symbols = context.symbols().len();

    run_source("x: float = 2", &mut context).unwrap();
    assert_eq!(type_of(&context, "x"), TypeName::Float);
    assert_eq!(value_of(&context, "x"), Some(Value::Float(2.0)));
    assert_eq!(context.symbols().len(), symbols);
    assert_eq!(context.memory().len(), 1);
}

#[test]
fn chained_comparisons_compare_the_boolean() {
    let context = run("r: var = 1 < 2 < 3\ns: var = 3 > 2 > 1\nt: var = 1 == 1 == 1");
    assert_eq!(value_of(&context, "r"), Some(Value::Bool(true)));
    assert_eq!(value_of(&context, "s"), Some(Value::Bool(false)));
    assert_eq!(value_of(&context, "t"), Some(Value::Bool(true)));
}

#[test]
fn arithmetic_follows_floor_semantics() {
    let context = run("a: var = -7 // 2\nb: var = -7 % 3\nc: var = 7.5f // 2\nd: var = 7 / 2\n\
                       e: var = 7 % -3\nf: var = -7.5f % 2");
    assert_eq!(value_of(&context, "a"), Some(Value::Integer(-4)));
    assert_eq!(value_of(&context, "b"), Some(Value::Integer(2)));
    assert_eq!(value_of(&context, "c"), Some(Value::Float(3.0)));
    assert_eq!(value_of(&context, "d"), Some(Value::Float(3.5)));
    assert_eq!(value_of(&context, "e"), Some(Value::Integer(-2)));
    assert_eq!(value_of(&context, "f"), Some(Value::Float(0.5)));
}

#[test]
fn exponentiation() {
    let context = run("a: var = 2 ** 10\nb: var = 2 ** -2\nc: var = -2 ** 2\nd: var = 2 ** 3 ** 2");
    assert_eq!(value_of(&context, "a"), Some(Value::Integer(1024)));
    assert_eq!(value_of(&context, "b"), Some(Value::Float(0.25)));
    assert_eq!(value_of(&context, "c"), Some(Value::Integer(4)));
    assert_eq!(value_of(&context, "d"), Some(Value::Integer(64)));
}

#[test]
fn arithmetic_errors() {
    assert_failure("x: var = 1 / 0", ErrorKind::Runtime);
    assert_failure("x: var = 1 // 0", ErrorKind::Runtime);
    assert_failure("x: var = 1.5f % 0", ErrorKind::Runtime);
    assert_failure("x: var = 9223372036854775807 + 1", ErrorKind::Runtime);
    assert_failure("x: var = 2 ** 64", ErrorKind::Runtime);
    assert_failure("x: var = 1 << -1", ErrorKind::Runtime);
    assert_failure("x: var = 99999999999999999999", ErrorKind::Lexical);
}

#[test]
fn large_integers_round_to_nearest_float() {
    let context = run("x: float = 9007199254740993\n\
                       y: var = 9007199254740993 / 1\n\
                       z: var = 9007199254740993 < 1.5f\n\
                       w: var = 9223372036854775807 * 1.0f");
    assert_eq!(value_of(&context, "x"), Some(Value::Float(9_007_199_254_740_992.0)));
    assert_eq!(type_of(&context, "x"), TypeName::Float);
    assert_eq!(value_of(&context, "y"), Some(Value::Float(9_007_199_254_740_992.0)));
    assert_eq!(value_of(&context, "z"), Some(Value::Bool(false)));
    assert_eq!(value_of(&context, "w"), Some(Value::Float(9_223_372_036_854_775_808.0)));
}

#[test]
fn string_results_are_bounded() {
    let mut context = Context::new();
    let err = run_source("s: var = 'ab' * 1000000000000", &mut context).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Runtime);
    assert!(err.to_string().contains(&MAX_STRING_LEN.to_string()), "{err}");
    assert!(context.memory().get("s").is_none());

    assert_failure("s: var = 'x' * 9223372036854775807", ErrorKind::Runtime);
    assert_failure("s: var = 1073741825 * 'x'", ErrorKind::Runtime);
    assert_success("s: var = 'x' * 1024; t: var = s + s");
}

#[test]
fn operator_families_reject_foreign_operators() {
    let one = Value::Integer(1);

    let result = Context::eval_arithmetic(BinaryOperator::Equal, &one, &one, 3);
    assert!(matches!(result, Err(RuntimeError::UnsupportedOperands { line: 3, .. })));

    let result = Context::eval_bitwise(BinaryOperator::Add, &one, &one, 3);
    assert!(matches!(result, Err(RuntimeError::UnsupportedOperands { line: 3, .. })));

    let result = Context::eval_comparison(BinaryOperator::Pow, &one, &one, 3);
    assert!(matches!(result, Err(RuntimeError::UnsupportedOperands { line: 3, .. })));
}

#[test]
fn operand_types_are_checked() {
    assert_failure("x: var = 'a' + 1", ErrorKind::Type);
    assert_failure("x: var = 'a' - 'b'", ErrorKind::Type);
    assert_failure("x: var = 1.5f & 1", ErrorKind::Type);
    assert_failure("x: var = 'a' < 1", ErrorKind::Type);
    assert_failure("x: var = -'a'", ErrorKind::Type);
    assert_failure("x: var = ~None", ErrorKind::Type);
    assert_failure("x: var = 1 in 'abc'", ErrorKind::Type);
}

#[test]
fn strings() {
    let context = run("a: var = 'sp' + \"y\"\nb: var = 'ab' * 3\nc: var = 2 * 'x'\nd: var = 'ab' * -1\n\
                       e: var = 'a' < 'b'");
    assert_eq!(value_of(&context, "a"), Some(Value::from("spy")));
    assert_eq!(value_of(&context, "b"), Some(Value::from("ababab")));
    assert_eq!(value_of(&context, "c"), Some(Value::from("xx")));
    assert_eq!(value_of(&context, "d"), Some(Value::from("")));
    assert_eq!(value_of(&context, "e"), Some(Value::Bool(true)));
}

#[test]
fn identity_and_membership() {
    let context = run("a: var = 1 is 1\nb: var = 1 is 1.0f\nc: var = 1 is not True\n\
                       d: var = None is None\ne: var = 'py' in 'spy'\nf: var = 'q' not in 'spy'");
    assert_eq!(value_of(&context, "a"), Some(Value::Bool(true)));
    assert_eq!(value_of(&context, "b"), Some(Value::Bool(false)));
    assert_eq!(value_of(&context, "c"), Some(Value::Bool(true)));
    assert_eq!(value_of(&context, "d"), Some(Value::Bool(true)));
    assert_eq!(value_of(&context, "e"), Some(Value::Bool(true)));
    assert_eq!(value_of(&context, "f"), Some(Value::Bool(true)));
}

#[test]
fn logical_operators_short_circuit() {
    let context = run("a: var = 0 and missing\nb: var = 'x' or missing\nc: var = 0 or ''\n\
                       d: var = not 0\ne: var = 2 and 3");
    assert_eq!(value_of(&context, "a"), Some(Value::Integer(0)));
    assert_eq!(value_of(&context, "b"), Some(Value::from("x")));
    assert_eq!(value_of(&context, "c"), Some(Value::from("")));
    assert_eq!(value_of(&context, "d"), Some(Value::Bool(true)));
    assert_eq!(value_of(&context, "e"), Some(Value::Integer(3)));

    assert_failure("x: var = 1 and missing", ErrorKind::Name);
}

#[test]
fn bitwise_on_booleans_stays_boolean() {
    let context = run("a: var = True & False\nb: var = True | 1\nc: var = ~True");
    assert_eq!(value_of(&context, "a"), Some(Value::Bool(false)));
    assert_eq!(value_of(&context, "b"), Some(Value::Integer(1)));
    assert_eq!(value_of(&context, "c"), Some(Value::Integer(-2)));
}

#[test]
fn functions_are_registered_not_run() {
    let context = run("def setup(): {\n    total: int = 0\n    total += 1\n}\nafter: int = 1");
    assert!(context.function("setup").is_some());
    assert!(context.memory().get("total").is_none());
    assert_eq!(value_of(&context, "after"), Some(Value::Integer(1)));

    assert_failure("def f(): {}\ndef f(): {}", ErrorKind::Declaration);
    assert_failure("def f(): {\n a: int = 1\n", ErrorKind::Syntax);
}

#[test]
fn syntax_errors() {
    assert_failure("x = 1", ErrorKind::Syntax);
    assert_failure("a: int = 1 b: int = 2", ErrorKind::Syntax);
    assert_failure("a: int = (1 + 2", ErrorKind::Syntax);
    assert_failure("a: list = 1", ErrorKind::Syntax);
    assert_failure("if a", ErrorKind::Syntax);
    assert_failure("a: int = 1 2", ErrorKind::Syntax);
}

#[test]
fn lexical_errors() {
    assert_failure("a: int = 3 $ 4", ErrorKind::Lexical);
    assert_failure("a: float = 1.5", ErrorKind::Lexical);
    assert_failure("a: str = 'open", ErrorKind::Lexical);
    assert_failure("a: bool = !True", ErrorKind::Lexical);
}

#[test]
fn separators_comments_and_indentation() {
    assert_success("");
    assert_success("\n\n;;\n");
    assert_success("# only a comment");
    let context = run("a: int = 1 # trailing comment\n    b: int = a + 1;c: int = b\n");
    assert_eq!(value_of(&context, "c"), Some(Value::Integer(2)));
}

#[test]
fn error_lines() {
    let mut context = Context::new();
    let err = run_source("a: int = 1\n\nb: str = a", &mut context).unwrap_err();
    assert_eq!(err.line(), 3);
    assert!(err.to_string().starts_with("Error on line 3:"), "{err}");

    let err = run_source("s: str = 'multi\nline'\nt: int = @", &mut context).unwrap_err();
    assert_eq!(err.line(), 3);
}

#[test]
fn state_dump_formats() {
    let context = run("b: int = 5\na: var = 5f\nc: str = 'x'\nd: bool\nb += 1");

    assert_eq!(context.memory().to_string(), "{'b': 6, 'a': 5.0, 'c': 'x', 'd': None}");

    let symbols = context.symbols().to_string();
    let lines: Vec<&str> = symbols.lines().collect();
    assert_eq!(lines,
               ["Symbols:",
                "<'int' <class 'int'>>",
                "<'float' <class 'float'>>",
                "<'str' <class 'str'>>",
                "<'bool' <class 'bool'>>",
                "<'NoneType' <class 'NoneType'>>",
                "<'b' <class 'int'>>",
                "<'a' <class 'float'>>",
                "<'c' <class 'str'>>",
                "<'d' <class 'bool'>>"]);
}

#[test]
fn contexts_are_independent() {
    let mut first = Context::new();
    let mut second = Context::new();
    run_source("x: int = 1", &mut first).unwrap();

    assert!(run_source("y: int = x", &mut second).is_err());
    assert_eq!(run_source("y: int = x + 1", &mut first).unwrap(), Some(Value::Integer(2)));
}

#[test]
fn result_is_last_produced_value() {
    let mut context = Context::new();
    assert_eq!(run_source("a: int = 1\nb: int\n", &mut context).unwrap(),
               Some(Value::Integer(1)));
    assert_eq!(run_source("b: int", &mut context).unwrap(), None);
}
