use std::fs;

use calcite::{
    Interpreter,
    error::{Error, ParseError, RuntimeError},
    interpreter::parser::core::MAX_NESTING_DEPTH,
    run_script,
};
use walkdir::WalkDir;

#[test]
fn session_transcripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut interpreter = Interpreter::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim_start().starts_with('#') || line.trim().is_empty() {
                continue;
            }
            count += 1;
            let (input, expected) =
                line.rsplit_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>' in {line:?}", i + 1));
            let actual = interpreter.evaluate(input);
            if !matches_expectation(&actual, expected.trim()) {
                panic!("{path:?}:{}: {input:?} gave {actual:?}, expected {}",
                       i + 1,
                       expected.trim());
            }
        }
    }

    assert!(count > 0, "No transcript lines found in tests/scripts");
}

fn matches_expectation(actual: &Result<Option<f64>, Error>, expected: &str) -> bool {
    match (actual, expected) {
        (Ok(None), "none") => true,
        (Err(Error::Parse(ParseError::Lexical { .. })), "lexical")
        | (Err(Error::Parse(ParseError::TrailingOperator { .. })), "trailing-operator")
        | (Err(Error::Parse(ParseError::MalformedAssignment { .. })), "malformed-assignment")
        | (Err(Error::Parse(ParseError::UnexpectedToken { .. })), "unexpected-token")
        | (Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. })), "unexpected-end")
        | (Err(Error::Parse(ParseError::ExpectedClosingParen { .. })), "expected-closing-paren")
        | (Err(Error::Parse(ParseError::UnmatchedClosingParen { .. })), "unmatched-closing-paren")
        | (Err(Error::Parse(ParseError::NestingTooDeep { .. })), "nesting-too-deep")
        | (Err(Error::Runtime(RuntimeError::UnknownVariable { .. })), "unknown-variable") => true,
        (Ok(Some(value)), expected) => match expected.parse::<f64>() {
            Ok(number) if number.is_nan() => value.is_nan(),
            Ok(number) if number.is_infinite() => *value == number,
            Ok(number) => (value - number).abs() < 1e-9,
            Err(_) => false,
        },
        _ => false,
    }
}

fn eval(src: &str) -> Result<Option<f64>, Error> {
    Interpreter::new().evaluate(src)
}

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(Some(value)) => assert!((value - expected).abs() < 1e-9,
                                   "{src:?} gave {value}, expected {expected}"),
        other => panic!("{src:?} gave {other:?}, expected {expected}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = eval(src) {
        panic!("{src:?} succeeded with {value:?} but was expected to fail")
    }
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 + 3 * 4 - 5", 9.0);
    assert_value("20 / 2 % 3", 1.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("1 + 2 * 3 - 4 / 2 + 6 % 4", 7.0);
    assert_value("8 / 4 / 2", 1.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("4 * (2 + 3)", 20.0);
    assert_value("((1 + 2) * (3 + 4))", 21.0);
    assert_value("(8) / (2 + 2) * (3)", 6.0);
    assert_value("(10 - (2 * (1 + 1))) / (3 - 1)", 3.0);
    assert_value("(((7)))", 7.0);
}

#[test]
fn numeric_literals() {
    assert_value("7", 7.0);
    assert_value(".5 + .25", 0.75);
    assert_value("3.25 * 4", 13.0);
    assert_value("  42\t", 42.0);
}

#[test]
fn unary_minus() {
    assert_value("-3", -3.0);
    assert_value("2 - -3", 5.0);
    assert_value("-2 * 3", -6.0);
    assert_value("--4", 4.0);
    assert_value("-(1 + 2) * 2", -6.0);

    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.evaluate("x = -1").unwrap(), Some(-1.0));
    assert_eq!(interpreter.variable("x"), Some(-1.0));
}

#[test]
fn native_float_semantics() {
    assert_eq!(eval("1 / 0").unwrap(), Some(f64::INFINITY));
    assert!(eval("0 / 0").unwrap().is_some_and(f64::is_nan));
    assert_value("7.5 % 2", 1.5);
    assert_value("-7 % 3", -1.0);
}

#[test]
fn assignment_persists_across_calls() {
    let mut interpreter = Interpreter::new();
    assert_eq!(interpreter.evaluate("x = 5").unwrap(), Some(5.0));
    assert_eq!(interpreter.evaluate("x + 1").unwrap(), Some(6.0));
    assert_eq!(interpreter.evaluate("x = x * 2").unwrap(), Some(10.0));
    assert_eq!(interpreter.evaluate("y = (x + 2) / 4").unwrap(), Some(3.0));
    assert_eq!(interpreter.variables(), vec![("x", 10.0), ("y", 3.0)]);
}

#[test]
fn instances_do_not_share_variables() {
    let mut first = Interpreter::new();
    let mut second = Interpreter::new();

    first.evaluate("shared = 1").unwrap();
    assert!(matches!(second.evaluate("shared"),
                     Err(Error::Runtime(RuntimeError::UnknownVariable { .. }))));
    assert_eq!(second.variable("shared"), None);
}

#[test]
fn unknown_variable_is_error() {
    let err = eval("y + 1").unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::UnknownVariable { name:   "y".to_string(),
                                                              column: 1, }));
}

#[test]
fn failed_assignment_leaves_store_untouched() {
    let mut interpreter = Interpreter::new();
    interpreter.evaluate("x = 1").unwrap();

    assert!(interpreter.evaluate("x = y + 1").is_err());
    assert!(interpreter.evaluate("z = y").is_err());
    assert!(interpreter.evaluate("x = (2").is_err());

    assert_eq!(interpreter.variables(), vec![("x", 1.0)]);
}

#[test]
fn blank_input_is_empty_result() {
    let mut interpreter = Interpreter::new();
    interpreter.evaluate("a = 3").unwrap();

    for blank in ["", " ", "\t  \t", "\n"] {
        assert_eq!(interpreter.evaluate(blank).unwrap(), None);
    }
    assert_eq!(interpreter.variables(), vec![("a", 3.0)]);
}

#[test]
fn read_only_evaluation_is_idempotent() {
    let mut interpreter = Interpreter::new();
    interpreter.evaluate("n = 4").unwrap();

    let first = interpreter.evaluate("n * n - 1").unwrap();
    let second = interpreter.evaluate("n * n - 1").unwrap();
    assert_eq!(first, Some(15.0));
    assert_eq!(first, second);
    assert_eq!(interpreter.variables(), vec![("n", 4.0)]);
}

#[test]
fn trailing_operator_is_error() {
    for src in ["1 +", "2 * 3 -", "x =", "(1 + 2) %", "-", "4 /"] {
        assert!(matches!(eval(src), Err(Error::Parse(ParseError::TrailingOperator { .. }))),
                "{src:?} should end with an operator error");
    }
    assert_eq!(eval("1 + 2 *").unwrap_err(),
               Error::Parse(ParseError::TrailingOperator { operator: "*".to_string(),
                                                           column:   7, }));
}

#[test]
fn malformed_assignment_is_error() {
    for src in ["x y = 1", "= 1", "2 = 3", "x = y = 1", "(x) = 1", "x + 1 = 2"] {
        assert!(matches!(eval(src), Err(Error::Parse(ParseError::MalformedAssignment { .. }))),
                "{src:?} should be a malformed assignment");
    }
}

#[test]
fn lexical_error_reports_the_character() {
    assert_eq!(eval("2 $ 3").unwrap_err(),
               Error::Parse(ParseError::Lexical { token:  "$".to_string(),
                                                  column: 3, }));
    assert_failure("1.");
    assert_failure("x^2");
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert!(matches!(eval("(1 + 2"),
                     Err(Error::Parse(ParseError::ExpectedClosingParen { column: 1 }))));
    assert!(matches!(eval("1 + 2)"),
                     Err(Error::Parse(ParseError::UnmatchedClosingParen { column: 6 }))));
    assert!(matches!(eval(") + 1"),
                     Err(Error::Parse(ParseError::UnmatchedClosingParen { column: 1 }))));
    assert!(matches!(eval("x = ) * 2"),
                     Err(Error::Parse(ParseError::UnmatchedClosingParen { column: 5 }))));
    assert!(matches!(eval("(1 + )"), Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(matches!(eval("("), Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(eval("()"), Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn malformed_expressions_are_errors() {
    assert_failure("2 3");
    assert_failure("* 2");
    assert_failure("+1");
    assert_failure("x (1)");
    assert_failure("2 * * 3");
}

#[test]
fn errors_render_with_column() {
    let message = eval("total * 2").unwrap_err().to_string();
    assert_eq!(message, "Error at column 1: Unknown variable 'total'.");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    assert_eq!(run_script(&script, false).unwrap(), Some(4.25));
}

#[test]
fn script_stops_at_first_error() {
    assert!(run_script("a = 1\nb + 1\na = 2", false).is_err());
    assert_eq!(run_script("\n\n", false).unwrap(), None);
}

#[test]
fn long_flat_expressions_evaluate() {
    let terms = 100_000;

    let sum = vec!["1"; terms].join(" + ");
    assert_value(&sum, 100_000.0);

    let product = vec!["1"; terms].join(" * ");
    assert_value(&product, 1.0);

    let mixed = vec!["2 * 3 - 5"; terms].join(" + ");
    assert_value(&mixed, 100_000.0);

    let negations = format!("{}4", "-".repeat(terms));
    assert_value(&negations, 4.0);
    let negations = format!("{}4", "-".repeat(terms + 1));
    assert_value(&negations, -4.0);
}

#[test]
fn long_flat_assignment_persists() {
    let mut interpreter = Interpreter::new();
    let rhs = vec!["0.5"; 50_000].join(" + ");
    assert_eq!(interpreter.evaluate(&format!("half = {rhs}")).unwrap(), Some(25_000.0));
    assert_eq!(interpreter.evaluate("half / 1000").unwrap(), Some(25.0));
}

#[test]
fn nesting_depth_is_limited() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_value(&nested(MAX_NESTING_DEPTH), 1.0);
    assert_value(&format!("2 * {}", nested(MAX_NESTING_DEPTH)), 2.0);

    assert_eq!(eval(&nested(MAX_NESTING_DEPTH + 1)).unwrap_err(),
               Error::Parse(ParseError::NestingTooDeep { column: MAX_NESTING_DEPTH + 1,
                                                         limit:  MAX_NESTING_DEPTH, }));
    assert!(matches!(eval(&nested(100_000)),
                     Err(Error::Parse(ParseError::NestingTooDeep { .. }))));
}
