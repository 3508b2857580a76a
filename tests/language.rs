use std::fs;

use tinc::{
    ast::{Expr, Stmt},
    interpreter::tokenizer::{TokenKind, Tokenizer},
    parse_script, run_calc, run_script,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "tinc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match run_script(&source) {
            Ok(run) => {
                assert!(run.diagnostics.is_empty(),
                        "Demo {path:?} produced diagnostics: {:?}",
                        run.diagnostics);
            },
            Err(e) => panic!("Demo {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn assert_success(src: &str) {
    if let Err(e) = run_script(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_script(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn print_emits_the_expression_rendering() {
    let run = run_script("print 1 + 2").unwrap();
    assert_eq!(run.output, vec!["(1 + 2)"]);
    assert!(run.diagnostics.is_empty());
}

#[test]
fn if_statement_parses_condition_and_body() {
    let parsed = parse_script("if x > 0 { print x }");
    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.statements.len(), 1);

    let Stmt::If { condition, body } = &parsed.statements[0] else {
        panic!("expected an if statement, found {:?}", parsed.statements[0]);
    };
    assert_eq!(condition.to_string(), "(x > 0)");
    assert_eq!(body.len(), 1);
    assert!(matches!(body[0], Stmt::Print { .. }));
}

#[test]
fn declaration_renders_with_its_keyword() {
    let parsed = parse_script("int x = 5");
    assert_eq!(parsed.statements[0].to_string(), "int x = 5");

    let parsed = parse_script("double d = 1 + 2");
    assert_eq!(parsed.statements[0].to_string(), "double d = (1 + 2)");
}

#[test]
fn expression_tier_is_left_associative() {
    let parsed = parse_script("print 1 + 2 - 3");
    assert_eq!(parsed.statements[0].to_string(), "print(((1 + 2) - 3))");
}

#[test]
fn taken_and_skipped_branches() {
    let run = run_script("int x = 5\nif x > 3 { print x }").unwrap();
    assert_eq!(run.output, vec!["x"]);

    let run = run_script("int x = 2\nif x > 3 { print x }").unwrap();
    assert!(run.output.is_empty());
}

#[test]
fn char_initializes_an_int_as_its_code_point() {
    assert_success("int x = 'a'\nif x > 96 { print x }");
}

#[test]
fn redeclaration_with_same_kind_rebinds() {
    assert_success("int x = 1\nint x = 2");
}

#[test]
fn redeclaration_with_different_kind_is_fatal() {
    assert_failure("char c = 'a'\nint c = 5");
}

#[test]
fn kind_mismatch_in_initializer_is_fatal() {
    assert_failure("char c = 5");
}

#[test]
fn undeclared_variable_reference_is_fatal() {
    assert_failure("x + 1");
    assert_failure("if y > 0 { }");
    assert_failure("int x = missing");
}

#[test]
fn print_does_not_evaluate_its_expression() {
    // The rendering is the output, so an unbound name prints fine.
    let run = run_script("print x").unwrap();
    assert_eq!(run.output, vec!["x"]);
}

#[test]
fn dropped_declaration_is_tolerated_and_diagnosed() {
    let run = run_script("int = 5").unwrap();
    assert!(run.output.is_empty());
    assert!(!run.diagnostics.is_empty());
}

#[test]
fn missing_assignment_reparses_the_tail() {
    // `int x 5` drops the declaration; the stray `5` parses as an
    // expression statement and evaluates harmlessly.
    let run = run_script("int x 5").unwrap();
    assert!(!run.diagnostics.is_empty());
}

#[test]
fn unterminated_char_literal_degrades() {
    let run = run_script("print 'a").unwrap();
    assert!(run.output.is_empty());
    assert!(!run.diagnostics.is_empty());
}

#[test]
fn brace_less_if_body_is_empty() {
    let parsed = parse_script("if x > 0 print x");
    let Stmt::If { body, .. } = &parsed.statements[0] else {
        panic!("expected an if statement");
    };
    assert!(body.is_empty());
    assert!(!parsed.diagnostics.is_empty());
    // The statements after the missing brace parse at the top level.
    assert_eq!(parsed.statements.len(), 2);
}

#[test]
fn reserved_keywords_are_consumed_without_stalling() {
    let run = run_script("for\nprint 1").unwrap();
    assert_eq!(run.output, vec!["1"]);
    assert!(!run.diagnostics.is_empty());
}

#[test]
fn literal_rendering_round_trips() {
    let parsed = parse_script("print 'a'\nprint 42\nprint x");
    let rendered: Vec<String> = parsed.statements
                                      .iter()
                                      .map(|s| {
                                          let Stmt::Print { expression } = s else {
                                              panic!("expected print statements");
                                          };
                                          expression.to_string()
                                      })
                                      .collect();

    for (text, kind, carried) in [(&rendered[0], TokenKind::CharLiteral, "a"),
                                  (&rendered[1], TokenKind::Number, "42"),
                                  (&rendered[2], TokenKind::Identifier, "x")]
    {
        let (tokens, diagnostics) = Tokenizer::new(text).tokenize();
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].text, carried);
        assert_eq!(tokens.len(), 2, "expected one token plus the terminator");
    }
}

#[test]
fn number_literal_keeps_raw_text_through_the_tree() {
    let parsed = parse_script("print 007");
    let Stmt::Print { expression } = &parsed.statements[0] else {
        panic!("expected a print statement");
    };
    assert_eq!(expression, &Expr::NumberLiteral { text: "007".to_string() });
    assert_eq!(expression.to_string(), "007");
}

#[test]
fn calc_precedence_and_variables() {
    let output = run_calc("x = 2 * 3 + 4\nx").unwrap();
    assert_eq!(output, vec!["10"]);

    let output = run_calc("a = 10\nb = a / 2\na - b * 2").unwrap();
    assert_eq!(output, vec!["0"]);
}

#[test]
fn calc_division_by_zero_is_fatal() {
    assert!(run_calc("y = 5 / 0").is_err());
}

#[test]
fn calc_unknown_variable_is_fatal() {
    assert!(run_calc("ghost + 1").is_err());
}

#[test]
fn calc_rejects_foreign_characters() {
    assert!(run_calc("1 + (2 * 3)").is_err());
}

#[test]
fn calc_blank_lines_are_skipped() {
    let output = run_calc("\n\nx = 1\n\nx\n").unwrap();
    assert_eq!(output, vec!["1"]);
}
