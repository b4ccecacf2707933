use std::fs;

use monkey::{
    Error, evaluate,
    interpreter::{session::Interpreter, value::core::Object},
};
use walkdir::WalkDir;

/// Every ```monkey block in the book must be followed by a ```text block
/// holding the displayed result.
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

        for (i, (code, expected)) in extract_monkey_blocks(&content).into_iter().enumerate() {
            count += 1;
            let Some(expected) = expected else {
                panic!("Monkey example {} in {:?} has no expected output:\n{}", i + 1, path, code);
            };

            match evaluate(&code) {
                Ok(value) => assert_eq!(value.to_string(),
                                        expected.trim_end(),
                                        "Monkey example {} in {:?}:\n{}",
                                        i + 1,
                                        path,
                                        code),
                Err(e) => panic!("Monkey example {} in {:?} failed:\n{}\nError: {}",
                                 i + 1,
                                 path,
                                 code,
                                 e),
            }
        }
    }

    assert!(count > 0, "No Monkey examples found in book/src");
}

/// Collects each ```monkey block together with the ```text block that
/// directly follows it, if any.
fn extract_monkey_blocks(content: &str) -> Vec<(String, Option<String>)> {
    let mut blocks: Vec<(String, Option<String>)> = Vec::new();
    let mut fence: Option<String> = None;
    let mut awaiting_output = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();

        let Some(language) = fence.take() else {
            if trimmed.starts_with("```") {
                fence = Some(trimmed.trim_start_matches('`').trim().to_string());
                buf.clear();
            } else if !trimmed.is_empty() {
                awaiting_output = false;
            }
            continue;
        };

        if !trimmed.starts_with("```") {
            buf.push_str(line);
            buf.push('\n');
            fence = Some(language);
            continue;
        }

        match language.as_str() {
            "monkey" => {
                blocks.push((buf.clone(), None));
                awaiting_output = true;
            },
            "text" if awaiting_output => {
                if let Some((_, expected)) = blocks.last_mut() {
                    *expected = Some(buf.clone());
                }
                awaiting_output = false;
            },
            _ => awaiting_output = false,
        }
    }

    blocks
}

fn eval_ok(src: &str) -> Object {
    evaluate(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_value(src: &str, expected: &str) {
    assert_eq!(eval_ok(src).to_string(), expected, "script: {src}");
}

fn assert_null(src: &str) {
    assert!(eval_ok(src).is_null(), "script did not yield null: {src}");
}

fn assert_runtime_error(src: &str, message: &str) {
    match evaluate(src) {
        Err(Error::Runtime(e)) => assert_eq!(e.to_string(), message, "script: {src}"),
        Err(Error::Parse(e)) => panic!("Script did not parse: {e}\n{src}"),
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail\n{src}"),
    }
}

#[test]
fn integer_arithmetic_and_precedence() {
    assert_value("1 + 2 * 3", "7");
    assert_value("1 + (2 * 3)", "7");
    assert_value("(1 + 2) * 3", "9");
    assert_value("-5 + 10", "5");
    assert_value("10 / 3", "3");
    assert_value("-7 / 2", "-3");
    assert_value("50 / 2 * 2 + 10 - 5", "55");
    assert_value("3 * (3 * 3) + 10", "37");
    assert_value("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50");
}

#[test]
fn precedence_matches_explicit_grouping() {
    let pairs = [("2 + 3 * 4", "2 + (3 * 4)"),
                 ("2 * 3 + 4", "(2 * 3) + 4"),
                 ("10 - 4 - 3", "(10 - 4) - 3"),
                 ("100 / 10 / 5", "(100 / 10) / 5"),
                 ("1 + 2 * 3 - 4 / 2", "(1 + (2 * 3)) - (4 / 2)"),
                 ("-2 * 3", "(-2) * 3")];

    for (plain, grouped) in pairs {
        assert_eq!(eval_ok(plain), eval_ok(grouped), "{plain} vs {grouped}");
    }
}

#[test]
fn comparisons_and_booleans() {
    assert_value("1 < 2", "true");
    assert_value("1 > 2", "false");
    assert_value("1 == 1", "true");
    assert_value("1 != 1", "false");
    assert_value("true == true", "true");
    assert_value("true != false", "true");
    assert_value("(1 < 2) == true", "true");
    assert_value("(1 > 2) == true", "false");
}

#[test]
fn zero_is_falsy() {
    assert_value("!0", "true");
    assert_value("!1", "false");
    assert_value("!!5", "true");
    assert_value("!true", "false");
    assert_value("if (0) { 1 } else { 2 }", "2");
    assert_value("if (\"\") { 1 } else { 2 }", "1");
    assert_value("if ([]) { 1 } else { 2 }", "1");
}

#[test]
fn conditionals() {
    assert_value("if (true) { 10 }", "10");
    assert_value("if (1 < 2) { 10 } else { 20 }", "10");
    assert_value("if (1 > 2) { 10 } else { 20 }", "20");
    assert_null("if (false) { 10 }");
    assert_null("if (1 > 2) { 10 }");
}

#[test]
fn var_statements_bind_and_yield() {
    assert_value("var a = 5; a;", "5");
    assert_value("var a = 5 * 5; a;", "25");
    assert_value("var a = 5; var b = a; var c = a + b + 5; c;", "15");
    assert_value("var x = 5", "5");
}

#[test]
fn empty_program_is_null() {
    assert_null("");
    assert_null("   \n\t ");
}

#[test]
fn return_statements() {
    assert_value("return 10; 9;", "10");
    assert_value("9; return 2 * 5; 9;", "10");
    assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
    assert_value("var f = fn() { if (true) { return 1; } 2 }; f()", "1");
    assert_value("var f = fn(x) { return x; x + 10; }; f(10);", "10");
}

#[test]
fn return_only_leaves_the_innermost_function() {
    let src = "var inner = fn() { return 1; };
               var outer = fn() { inner(); 2 };
               outer();";

    assert_value(src, "2");
}

#[test]
fn return_from_inside_a_loop() {
    let src = "var f = fn() {
                   var i = 0;
                   while (true) {
                       var i = i + 1;
                       if (i > 3) { return i; }
                   }
               };
               f();";

    assert_value(src, "4");
}

#[test]
fn functions_and_closures() {
    assert_value("var identity = fn(x) { x; }; identity(5);", "5");
    assert_value("var double = fn(x) { x * 2; }; double(5);", "10");
    assert_value("var add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", "20");
    assert_value("fn(x) { x; }(5)", "5");
    assert_value("var newAdder = fn(x) { return fn(y) { return x + y; }; }; var addTwo = newAdder(2); addTwo(3);",
                 "5");
}

#[test]
fn closures_see_later_rebinding_of_captured_scope() {
    assert_value("var x = 1; var f = fn() { x }; var x = 2; f()", "2");
}

#[test]
fn function_scope_does_not_leak() {
    assert_value("var x = 1; var f = fn() { var x = 2; x }; f(); x", "1");
    assert_value("var f = fn(x) { x }; f(3); var x = 7; x", "7");
}

#[test]
fn recursion() {
    let src = "var fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
               fib(15);";

    assert_value(src, "610");
}

#[test]
fn higher_order_functions() {
    let src = "var map = fn(arr, f) {
                   var iter = fn(arr, accumulated) {
                       if (len(arr) == 0) {
                           accumulated
                       } else {
                           iter(rest(arr), push(accumulated, f(first(arr))));
                       }
                   };
                   iter(arr, []);
               };
               map([1, 2, 3, 4], fn(x) { x * 2 });";

    assert_value(src, "[2, 4, 6, 8]");
}

#[test]
fn while_loop_accumulates() {
    let src = "var i = 0; var sum = 0; while (i < 5) { var sum = sum + i; var i = i + 1; } sum;";

    assert_value(src, "10");
}

#[test]
fn while_loop_value() {
    assert_value("var i = 0; while (i < 3) { var i = i + 1; i * 10 }", "30");
    assert_null("while (false) { 1 }");
    assert_null("var i = 10; while (i < 3) { var i = i + 1; }");
}

#[test]
fn strings() {
    assert_value("\"Hello World!\"", "Hello World!");
    assert_value("\"Hello\" + \" \" + \"World!\"", "Hello World!");
    assert_value("len(\"\")", "0");
    assert_value("len(\"four\")", "4");
    assert_value("len(\"héllo\")", "5");
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_value("\"abc", "abc");
}

#[test]
fn arrays_and_indexing() {
    assert_value("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_value("[1, 2, 3][0]", "1");
    assert_value("[1, 2, 3][1 + 1]", "3");
    assert_value("var i = 0; [1][i];", "1");
    assert_value("var myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", "6");
    assert_value("[[1, 2], [3]][0][1]", "2");
    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][5]");
    assert_null("[1, 2, 3][-1]");
    assert_null("[][0]");
}

#[test]
fn array_builtins() {
    assert_value("len([1, 2, 3])", "3");
    assert_value("len([])", "0");
    assert_value("first([1, 2, 3])", "1");
    assert_value("last([1, 2, 3])", "3");
    assert_value("rest([1, 2, 3])", "[2, 3]");
    assert_value("rest([1])", "[]");
    assert_value("push([], 1)", "[1]");
    assert_null("first([])");
    assert_null("last([])");
    assert_null("rest([])");
}

#[test]
fn rest_does_not_modify_its_argument() {
    assert_value("var a = [1, 2]; var b = rest(a); a", "[1, 2]");
}

#[test]
fn push_mutates_in_place() {
    assert_value("var a = []; push(a, 1); len(a);", "1");
    assert_value("var a = []; var b = push(a, 1); push(b, 2); a", "[1, 2]");
    assert_value("var a = []; var b = push(a, 1); a == b", "true");
    assert_value("var a = [1]; var f = fn() { push(a, 2) }; f(); a", "[1, 2]");
}

#[test]
fn hashes() {
    assert_value("{\"one\": 1}[\"one\"]", "1");
    assert_value("{1: \"a\"}[1]", "a");
    assert_value("{true: 5}[true]", "5");
    assert_value("var key = \"k\"; {key: 2 * 2}[\"k\"]", "4");
    assert_value("{\"a\": 1, \"b\": 2}", "{a: 1, b: 2}");
    assert_value("{}", "{}");
    assert_null("{\"one\": 1}[\"two\"]");
    assert_null("{}[\"x\"]");
}

#[test]
fn hash_keys_are_typed() {
    assert_value("var h = {1: \"int\", \"1\": \"string\", true: \"bool\"}; [h[1], h[\"1\"], h[true]]",
                 "[int, string, bool]");
}

#[test]
fn duplicate_hash_keys_keep_last_value_and_first_position() {
    assert_value("{\"a\": 1, \"b\": 2, \"a\": 3}", "{a: 3, b: 2}");
}

#[test]
fn hash_literal_evaluates_every_pair_in_order() {
    let src = "var log = [];
               {len(push(log, 1)): len(push(log, 2)), len(push(log, 3)): 0};
               log";

    assert_value(src, "[1, 2, 3]");
}

#[test]
fn unusable_hash_key_aborts_before_its_value() {
    assert_runtime_error("{fn(x) { x }: nope}", "unusable as hash key: FUNCTION");

    let session = Interpreter::default();
    let error = session.run("var a = []; {[1]: push(a, 1)}").unwrap_err();

    assert_eq!(error.to_string(), "ERROR: unusable as hash key: ARRAY");
    assert_eq!(session.run("a").unwrap().to_string(), "[]");
}

#[test]
fn identity_equality() {
    assert_value("[1] == [1]", "false");
    assert_value("var a = [1]; a == a", "true");
    assert_value("var a = [1]; var b = a; a != b", "false");
    assert_value("{} == {}", "false");
    assert_value("fn() { 1 } == fn() { 1 }", "false");
    assert_value("var f = fn() { 1 }; f == f", "true");
    assert_value("len == len", "true");
}

#[test]
fn displaying_values() {
    assert_value("fn(x) { x * 2 }", "fn(x) { (x * 2) }");
    assert_value("len", "builtin function");
    assert_value("[\"a\", [true, 1]]", "[a, [true, 1]]");
    assert_value("var a = []; push(a, a)", "[[...]]");
    assert_value("var a = [0]; push(a, {\"self\": a})", "[0, {self: [...]}]");
    assert_null("puts(\"printed by the test\")");
}

#[test]
fn builtins_can_be_shadowed() {
    assert_value("var len = fn(x) { 0 }; len(\"abc\")", "0");
}

#[test]
fn runtime_error_messages() {
    assert_runtime_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("\"a\" + 1", "type mismatch: STRING + INTEGER");
    assert_runtime_error("-true", "unknown operation: -BOOLEAN");
    assert_runtime_error("-\"a\"", "unknown operation: -STRING");
    assert_runtime_error("true + false;", "unknown operation: BOOLEAN + BOOLEAN");
    assert_runtime_error("5; true + false; 5", "unknown operation: BOOLEAN + BOOLEAN");
    assert_runtime_error("if (10 > 1) { true + false; }", "unknown operation: BOOLEAN + BOOLEAN");
    assert_runtime_error("\"a\" - \"b\"", "unknown operation: STRING - STRING");
    assert_runtime_error("\"a\" == \"a\"", "unknown operation: STRING == STRING");
    assert_runtime_error("[1] + [2]", "unknown operation: ARRAY + ARRAY");
    assert_runtime_error("foobar", "identifier not found: foobar");
    assert_runtime_error("5()", "not a function: INTEGER");
    assert_runtime_error("\"f\"(1)", "not a function: STRING");
    assert_runtime_error("5[0]", "index operator not supported: INTEGER");
    assert_runtime_error("[1][true]", "index operator not supported: ARRAY");
    assert_runtime_error("{\"name\": \"Monkey\"}[fn(x) { x }];", "unusable as hash key: FUNCTION");
    assert_runtime_error("{[1]: 2}", "unusable as hash key: ARRAY");
}

#[test]
fn call_errors() {
    assert_runtime_error("var f = fn(x) { x; }; f(1, 2);",
                         "wrong arguments amount: received 2, expected 1");
    assert_runtime_error("var f = fn(x, y) { x; }; f(1);",
                         "wrong arguments amount: received 1, expected 2");
    assert_runtime_error("len(\"a\", \"b\")", "wrong arguments amount: received 2, expected 1");
    assert_runtime_error("push([])", "wrong arguments amount: received 1, expected 2");
    assert_runtime_error("len(1)", "unsupported argument type for builtin function len: INTEGER");
    assert_runtime_error("first(\"abc\")",
                         "unsupported argument type for builtin function first: STRING");
    assert_runtime_error("last(1)", "unsupported argument type for builtin function last: INTEGER");
    assert_runtime_error("rest({})", "unsupported argument type for builtin function rest: HASH");
    assert_runtime_error("push(1, 1)", "unsupported argument type for builtin function push: INTEGER");
}

#[test]
fn arithmetic_errors() {
    assert_runtime_error("1 / 0", "division by zero");
    assert_runtime_error("9223372036854775807 + 1", "integer overflow in operation +");
    assert_runtime_error("-9223372036854775807 - 2", "integer overflow in operation -");
    assert_runtime_error("9223372036854775807 * 2", "integer overflow in operation *");
    assert_runtime_error("var min = -9223372036854775807 - 1; min / -1",
                         "integer overflow in operation /");
    assert_runtime_error("var min = -9223372036854775807 - 1; -min",
                         "integer overflow in operation -");
}

#[test]
fn errors_stop_the_surrounding_block() {
    let session = Interpreter::default();
    let result = session.run("var a = []; push(a, 1); 5 + true; push(a, 2);");

    assert!(matches!(result, Err(Error::Runtime(_))));
    assert_eq!(session.run("a").unwrap().to_string(), "[1]");
}

#[test]
fn errors_display_with_prefix() {
    let error = evaluate("foobar").unwrap_err();

    assert_eq!(error.to_string(), "ERROR: identifier not found: foobar");
}

#[test]
fn syntax_errors_prevent_evaluation() {
    let session = Interpreter::default();

    match session.run("var a = 1; var = 2;") {
        Err(Error::Parse(errors)) => {
            assert_eq!(errors.messages(),
                       ["invalid peek token type: received ASSIGN, expected IDENTIFIER",
                        "no prefix parse function for ASSIGN found"]);
        },
        other => panic!("expected parse errors, got {other:?}"),
    }

    assert_eq!(session.run("a").unwrap_err().to_string(),
               "ERROR: identifier not found: a");
}

#[test]
fn session_keeps_bindings_between_runs() {
    let session = Interpreter::default();

    session.run("var add = fn(a, b) { a + b };").unwrap();
    session.run("var total = add(1, 2);").unwrap();

    assert_eq!(session.run("add(total, 4)").unwrap(), Object::from(7));
    assert!(session.env().borrow().get("total").is_some());
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.monkey").unwrap();

    assert_eq!(eval_ok(&contents).to_string(), "[1, 1, 2, 3, 5, 8, 13, 21, 34, 55]");
}
