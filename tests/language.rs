use std::fs;

use falsey::{
    error::{Error, RuntimeErrorKind},
    interpreter::{
        evaluator::core::{Evaluator, RunOptions},
        lexer::tokenize,
        value::core::{Number, StackValue},
    },
    run, run_to_string,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_code_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_to_string(&code, "") {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_code_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```false") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs a program to completion and returns its output and final stack,
/// bottom first.
fn evaluate(src: &str, input: &str) -> (String, Vec<StackValue>) {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Script did not lex: {e}"));
    let mut evaluator = Evaluator::new_run(src, input.as_bytes(), Vec::new(), RunOptions::default());
    if let Err(e) = evaluator.run(tokens) {
        panic!("Script failed: {e}");
    }

    let stack = evaluator.stack().iter().cloned().collect();
    let output = String::from_utf8(evaluator.into_output()).expect("output is UTF-8");
    (output, stack)
}

fn numbers(values: &[i64]) -> Vec<StackValue> {
    values.iter().copied().map(StackValue::number).collect()
}

fn assert_output(src: &str, expected: &str) {
    match run_to_string(src, "") {
        Ok(output) => assert_eq!(output, expected, "unexpected output for {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> RuntimeErrorKind {
    match run_to_string(src, "") {
        Ok(output) => panic!("Script succeeded but was expected to fail, printed {output:?}"),
        Err(Error::Runtime(e)) => e.kind,
        Err(e) => panic!("Expected a runtime error, got: {e}"),
    }
}

#[test]
fn addition_prints_sum() {
    assert_output("1 2+.", "3");
}

#[test]
fn string_literal_prints_verbatim_and_leaves_stack_empty() {
    let (output, stack) = evaluate("\"Hello\"", "");
    assert_eq!(output, "Hello");
    assert!(stack.is_empty());
}

#[test]
fn duplicate_then_multiply_squares() {
    assert_output("5$*.", "25");
}

#[test]
fn read_loop_stops_at_newline() {
    let (output, stack) = evaluate("0[$10=~][^]#%", "hi\nignored\n");
    assert_eq!(output, "");
    assert_eq!(stack, numbers(&[0, 104, 105]));
}

#[test]
fn recursive_factorial_through_variable() {
    assert_output("[$1=$[\\%1\\]?~[$1-f;!*]?]f:6f;!.", "720");
}

#[test]
fn number_literals_print_exactly() {
    for n in ["0", "7", "42", "1000000", "9223372036854775807"] {
        assert_output(&format!("{n}."), n);
    }
    assert_output("007.", "7");
}

#[test]
fn calling_a_block_matches_inlining_it() {
    let cases = ["3 4\\-", "1 2 3@", "5$$**", "\"x\"2 3>"];

    for body in cases {
        let inline = evaluate(&format!("9 {body}"), "");
        let called = evaluate(&format!("9 [{body}]!"), "");
        assert_eq!(inline, called, "body {body:?}");
    }
}

#[test]
fn duplicate_then_drop_is_identity() {
    let (_, stack) = evaluate("17$%", "");
    assert_eq!(stack, numbers(&[17]));
}

#[test]
fn pick_copies_value_at_depth() {
    let (_, stack) = evaluate("1 2 3 2ø", "");
    assert_eq!(stack, numbers(&[1, 2, 3, 1]));

    let (_, stack) = evaluate("1 2 3 0ø", "");
    assert_eq!(stack, numbers(&[1, 2, 3, 3]));
}

#[test]
fn loop_checks_condition_before_every_body() {
    // c counts condition calls, i counts body calls.
    assert_output("0c:0i:[c;1+c:3i;>][i;1+i:]#c;.i;.", "43");
    // A condition that is false at once never runs the body.
    assert_output("[0][\"never\"]#\"done\"", "done");
}

#[test]
fn loop_condition_nonzero_continues() {
    assert_output("3n:[n;][n;.n;1-n:]#", "321");
}

#[test]
fn comparisons_use_minus_one_for_true() {
    assert_output("2 2=.", "-1");
    assert_output("1 2=.", "0");
    assert_output("3 2>.", "-1");
    assert_output("2 3>.", "0");
}

#[test]
fn logic_operators_are_strict() {
    assert_output("1_ 1_&.", "-1");
    assert_output("1_ 0&.", "0");
    assert_output("1_ 0|.", "-1");
    assert_output("0 0|.", "0");
    assert_output("1 1&.", "0");
    assert_output("0~.", "-1");
    assert_output("5~.", "0");
}

#[test]
fn conditional_requires_exact_true() {
    assert_output("1_[\"yes\"]?", "yes");
    assert_output("0[\"yes\"]?", "");
    assert_output("1[\"yes\"]?", "");
}

#[test]
fn arithmetic_operand_order_and_truncation() {
    assert_output("10 3-.", "7");
    assert_output("7 2/.", "3");
    assert_output("7_ 2/.", "-3");
    assert_output("5_.", "-5");
}

#[test]
fn stack_shuffles() {
    assert_output("1 2\\..", "12");
    assert_output("1 2 3@...", "132");
    assert_output("1 2%.", "1");
}

#[test]
fn characters_are_printed_by_code() {
    assert_output("72,105,10,", "Hi\n");
    assert_output("252,", "ü");
}

#[test]
fn variables_are_global_and_default_to_zero() {
    assert_output("5x:x;x;*.", "25");
    assert_output("y;.", "0");
    assert_output("[7v:]!v;.", "7");
}

#[test]
fn function_handles_survive_variables_and_stack_shuffles() {
    assert_output("[\"a\"]f: f;$!!", "aa");
    assert_output("1[\"b\"]\\%!", "b");
}

#[test]
fn nested_functions_are_reentrant() {
    assert_output("[[1.]!2.]!", "12");
    assert_output("[[\"in\"]g:]f: f;!g;!g;!", "inin");
    assert_output("[[\"x\"]!]f: f;!f;!", "xx");
}

#[test]
fn comments_nest_and_literals_hide_braces() {
    assert_output("1{ outer { inner } still comment }2+.", "3");
    assert_output("\"{not a comment}\"", "{not a comment}");
    assert_output("\"two\nlines\"", "two\nlines");
}

#[test]
fn unrecognized_characters_are_skipped() {
    assert_output("1\t2 €+\r\n.", "3");
}

#[test]
fn section_dump_does_not_touch_stack() {
    let (output, stack) = evaluate("1 2§", "");
    assert_eq!(output, "");
    assert_eq!(stack, numbers(&[1, 2]));
}

#[test]
fn caret_reads_lines_and_signals_end_of_input() {
    let (_, stack) = evaluate("^^^", "A");
    assert_eq!(stack, numbers(&[65, 10, -1]));
}

#[test]
fn fetched_function_keeps_handle_flag() {
    let (_, stack) = evaluate("[1]f:f;", "");
    assert!(matches!(stack.as_slice(),
                     [StackValue::Number(Number { is_function_handle: true, .. })]));
}

#[test]
fn stack_underflow_is_error() {
    assert!(matches!(assert_failure("."), RuntimeErrorKind::StackUnderflow));
    assert!(matches!(assert_failure("1+"), RuntimeErrorKind::StackUnderflow));
}

#[test]
fn type_mismatches_are_errors() {
    assert!(matches!(assert_failure("x."), RuntimeErrorKind::TypeMismatch { .. }));
    assert!(matches!(assert_failure("1 2:"), RuntimeErrorKind::TypeMismatch { .. }));
}

#[test]
fn calling_plain_number_is_error() {
    assert!(matches!(assert_failure("5!"), RuntimeErrorKind::NotCallable { value: 5 }));
    assert!(matches!(assert_failure("1_ 3?"), RuntimeErrorKind::NotCallable { value: 3 }));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_failure("1 0/"), RuntimeErrorKind::DivisionByZero));
}

#[test]
fn pick_out_of_range_is_error() {
    assert!(matches!(assert_failure("1 5ø"),
                     RuntimeErrorKind::IndexOutOfRange { index: 5, depth: 1 }));
    assert!(matches!(assert_failure("1 1_ø"), RuntimeErrorKind::IndexOutOfRange { .. }));
}

#[test]
fn overflow_and_oversized_literals_are_errors() {
    assert!(matches!(assert_failure("9223372036854775807 1+"), RuntimeErrorKind::Overflow));
    assert!(matches!(assert_failure("99999999999999999999."),
                     RuntimeErrorKind::NumberOutOfRange { .. }));
}

#[test]
fn invalid_character_is_error() {
    assert!(matches!(assert_failure("1_,"), RuntimeErrorKind::InvalidCharacter { value: -1 }));
    assert!(matches!(assert_failure("55296,"),
                     RuntimeErrorKind::InvalidCharacter { value: 55296 }));
    assert!(matches!(assert_failure("256_,"), RuntimeErrorKind::InvalidCharacter { value: -256 }));
}

#[test]
fn unicode_letters_name_variables() {
    assert_output("1é:é;.", "1");
    assert_output("3π: 2straße: π;straße;*.", "6");
    assert_output("7x1: x1;.", "7");
}

#[test]
fn stack_renders_bottom_first_with_tags() {
    let src = "1[2]x";
    let mut evaluator = Evaluator::new_run(src, "".as_bytes(), Vec::new(), RunOptions::default());
    assert_eq!(evaluator.stack().to_string(), "[]");

    evaluator.run(tokenize(src).unwrap()).unwrap();
    assert_eq!(evaluator.stack().to_string(), "[1 fn#0 'x]");
}

#[test]
fn unbalanced_brackets_are_errors() {
    assert!(matches!(assert_failure("[1"), RuntimeErrorKind::UnclosedFunction));
    assert!(matches!(assert_failure("1]"), RuntimeErrorKind::UnmatchedFunctionClose));
}

#[test]
fn runaway_recursion_is_bounded() {
    let src = "[f;!]f:f;!";
    let tokens = tokenize(src).unwrap();
    let mut evaluator = Evaluator::new_run(src,
                                           "".as_bytes(),
                                           Vec::new(),
                                           RunOptions { max_call_depth: 50 });

    let err = evaluator.run(tokens).unwrap_err();
    assert!(matches!(err.kind, RuntimeErrorKind::StackOverflow { limit: 50 }));
}

#[test]
fn errors_carry_innermost_token_position() {
    let err = run_to_string("1 0/", "").unwrap_err();
    assert_eq!(err.to_string(), "Division by zero. @ line 1, column 4");

    // The failing `/` inside the function, not the `!` that called it.
    let err = run_to_string("[1 0/]\n  !", "").unwrap_err();
    assert_eq!(err.to_string(), "Division by zero. @ line 1, column 5");

    let err = run_to_string("\n\n  x.", "").unwrap_err();
    assert_eq!(err.to_string(),
               "Expected 'Number' on stack. Got 'Reference'. @ line 3, column 4");
}

#[test]
fn lex_errors_prevent_any_execution() {
    let mut output = Vec::new();
    let result = run("\"printed?\" 1 2+. {unclosed", "".as_bytes(), &mut output, RunOptions::default());

    let Err(Error::Lex(e)) = result else {
        panic!("expected a lexing error");
    };
    assert_eq!(e.to_string(), "Unclosed comment. @ line 1, column 18");
    assert!(output.is_empty());
}

#[test]
fn output_before_runtime_error_is_kept() {
    let mut output = Vec::new();
    let result = run("\"partial\" 1 0/", "".as_bytes(), &mut output, RunOptions::default());

    assert!(matches!(result, Err(Error::Runtime(_))));
    assert_eq!(output, b"partial");
}

#[test]
fn example_program_works() {
    let contents = fs::read_to_string("tests/example.f").unwrap();
    assert_output(&contents, "0 1 1 2 3 5 8 13 21 34 \n");
}
