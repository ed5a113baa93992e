// Table-driven robustness tests for the minicalc parser
//
// Every input goes through the full lexer + parser. A case either expects a
// clean tree or at least one diagnostic, optionally containing a given text.
// Panics are caught and reported as crashes.

use minicalc::error::Diagnostic;
use minicalc::parser::Parser;
use minicalc::SyntaxTree;

/// Test result for a single test case
#[derive(Debug)]
pub enum TestResult {
    Pass,
    Fail(String),
    Crash(String),
}

/// Individual test case
#[derive(Debug, Clone)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    pub should_succeed: bool,
    pub expected_error_contains: Option<String>,
}

/// Test suite containing multiple test cases
#[derive(Debug)]
pub struct TestSuite {
    pub name: String,
    pub tests: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tests: Vec::new(),
        }
    }

    pub fn add_test(&mut self, test: TestCase) {
        self.tests.push(test);
    }

    /// Run all tests in this suite
    pub fn run(&self) -> TestSuiteResults {
        let mut results = TestSuiteResults::new(&self.name);

        println!("Running test suite: {}", self.name);
        println!("{}", "=".repeat(50));

        for test in &self.tests {
            let result = run_single_test(test);
            results.add_result(&test.name, result);
        }

        results.print_summary();
        results
    }
}

/// Results for a test suite run
#[derive(Debug)]
pub struct TestSuiteResults {
    pub suite_name: String,
    pub results: Vec<(String, TestResult)>,
    pub passed: usize,
    pub failed: usize,
    pub crashed: usize,
}

impl TestSuiteResults {
    pub fn new(suite_name: &str) -> Self {
        Self {
            suite_name: suite_name.to_string(),
            results: Vec::new(),
            passed: 0,
            failed: 0,
            crashed: 0,
        }
    }

    pub fn add_result(&mut self, test_name: &str, result: TestResult) {
        match &result {
            TestResult::Pass => {
                self.passed += 1;
                println!("  ✓ {}", test_name);
            }
            TestResult::Fail(msg) => {
                self.failed += 1;
                println!("  ✗ {}: {}", test_name, msg);
            }
            TestResult::Crash(msg) => {
                self.crashed += 1;
                println!("  💥 {}: CRASHED - {}", test_name, msg);
            }
        }
        self.results.push((test_name.to_string(), result));
    }

    pub fn print_summary(&self) {
        println!();
        println!("Test Suite: {} - Summary", self.suite_name);
        println!("{}", "-".repeat(30));
        println!("Passed:  {}", self.passed);
        println!("Failed:  {}", self.failed);
        println!("Crashed: {}", self.crashed);
        println!("Total:   {}", self.results.len());
        println!();
    }

    pub fn is_all_passed(&self) -> bool {
        self.crashed == 0 && self.failed == 0
    }
}

/// Run a single test case
fn run_single_test(test: &TestCase) -> TestResult {
    let result = std::panic::catch_unwind(|| parse_input(&test.input));

    match result {
        Ok(parse_result) => match (parse_result, test.should_succeed) {
            (Ok(_), true) => TestResult::Pass,
            (Ok(_), false) => {
                TestResult::Fail("Expected diagnostics, but the line parsed cleanly".to_string())
            }
            (Err(diagnostics), false) => match &test.expected_error_contains {
                Some(expected) => {
                    if diagnostics.iter().any(|d| d.to_string().contains(expected)) {
                        TestResult::Pass
                    } else {
                        TestResult::Fail(format!(
                            "No diagnostic contains '{}', got {:?}",
                            expected,
                            diagnostics.iter().map(|d| d.to_string()).collect::<Vec<_>>()
                        ))
                    }
                }
                None => TestResult::Pass,
            },
            (Err(diagnostics), true) => TestResult::Fail(format!(
                "Expected a clean parse, but got: {}",
                diagnostics[0]
            )),
        },
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            TestResult::Crash(panic_msg)
        }
    }
}

/// Parse input and return the tree, or its diagnostics if there were any
fn parse_input(input: &str) -> Result<SyntaxTree, Vec<Diagnostic>> {
    let tree = Parser::new(input).parse();
    if tree.diagnostics.is_empty() {
        Ok(tree)
    } else {
        Err(tree.diagnostics)
    }
}

/// Test case builder for convenience
impl TestCase {
    pub fn should_succeed(name: &str, input: &str) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_string(),
            should_succeed: true,
            expected_error_contains: None,
        }
    }

    pub fn should_fail(name: &str, input: &str) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_string(),
            should_succeed: false,
            expected_error_contains: None,
        }
    }

    pub fn should_fail_with_message(name: &str, input: &str, expected_msg: &str) -> Self {
        Self {
            name: name.to_string(),
            input: input.to_string(),
            should_succeed: false,
            expected_error_contains: Some(expected_msg.to_string()),
        }
    }
}

// ============================================================================
// Test Suite Creation Functions
// ============================================================================

fn create_malformed_expressions_tests() -> TestSuite {
    let mut suite = TestSuite::new("Malformed Expressions");

    // === PARENTHESES TESTS ===

    suite.add_test(TestCase::should_fail_with_message(
        "unmatched_opening_paren",
        "(1 + 2",
        "expected <CloseParenthesisToken>",
    ));

    suite.add_test(TestCase::should_fail_with_message(
        "unmatched_opening_paren_nested",
        "((1 + 2)",
        "Unexpected Token <EndOfFileToken>, expected <CloseParenthesisToken>",
    ));

    suite.add_test(TestCase::should_fail_with_message(
        "unmatched_opening_paren_complex",
        "(1 + (2 * 3)",
        "expected <CloseParenthesisToken>",
    ));

    suite.add_test(TestCase::should_fail_with_message(
        "unmatched_closing_paren",
        "1 + 2)",
        "Unexpected Token <CloseParenthesisToken>, expected <EndOfFileToken>, at <)>",
    ));

    suite.add_test(TestCase::should_fail_with_message(
        "unmatched_closing_paren_multiple",
        "1 + 2))",
        "expected <EndOfFileToken>",
    ));

    suite.add_test(TestCase::should_fail_with_message(
        "empty_parentheses",
        "()",
        "Unexpected Token <CloseParenthesisToken>, expected <NumberToken>, at <)>",
    ));

    suite.add_test(TestCase::should_fail_with_message(
        "empty_parentheses_in_expression",
        "1 + ()",
        "expected <NumberToken>",
    ));

    suite
}

fn create_edge_case_tests() -> TestSuite {
    let mut suite = TestSuite::new("Edge Cases");

    suite.add_test(TestCase::should_fail_with_message(
        "empty_input",
        "",
        "Unexpected Token <EndOfFileToken>, expected <NumberToken>",
    ));
    suite.add_test(TestCase::should_fail("only_whitespace", "   \t  "));

    suite.add_test(TestCase::should_fail("unexpected_eof_after_operator", "1 +"));
    suite.add_test(TestCase::should_fail("unexpected_eof_in_expression", "1 + ("));

    let deep_parens = "(".repeat(100) + "1" + &")".repeat(100);
    suite.add_test(TestCase::should_succeed("deeply_nested_parens", &deep_parens));

    let too_deep_parens = "(".repeat(20_000) + "1" + &")".repeat(20_000);
    suite.add_test(TestCase::should_fail_with_message(
        "too_deeply_nested_parens",
        &too_deep_parens,
        "nested deeper than",
    ));

    let too_many_minuses = "-".repeat(20_000) + "1";
    suite.add_test(TestCase::should_fail_with_message(
        "too_many_unary_minuses",
        &too_many_minuses,
        "nested deeper than",
    ));

    suite.add_test(TestCase::should_succeed("surrounding_whitespace", "  \t42  "));

    suite
}

fn create_operator_tests() -> TestSuite {
    let mut suite = TestSuite::new("Operator Tests");

    // Missing operands
    suite.add_test(TestCase::should_succeed("unary_plus", "+ 1"));
    suite.add_test(TestCase::should_fail("missing_right_operand", "1 +"));
    suite.add_test(TestCase::should_fail("missing_both_operands", "+"));
    suite.add_test(TestCase::should_fail("missing_left_operand_of_star", "* 2"));
    suite.add_test(TestCase::should_fail("doubled_star", "1 * * 2"));

    // Prefix operators after an infix one
    suite.add_test(TestCase::should_succeed("double_plus", "1 ++ 2"));
    suite.add_test(TestCase::should_succeed("double_minus", "1 -- 2"));
    suite.add_test(TestCase::should_succeed("mixed_operators", "1 +- 2"));
    suite.add_test(TestCase::should_succeed("negated_group", "-(1 + 2)"));

    suite
}

fn create_literal_tests() -> TestSuite {
    let mut suite = TestSuite::new("Literal Tests");

    suite.add_test(TestCase::should_succeed("integer_literal", "42"));
    suite.add_test(TestCase::should_succeed("zero_literal", "0"));
    suite.add_test(TestCase::should_succeed("oversized_literal", "99999999999999"));

    suite.add_test(TestCase::should_fail("adjacent_literals", "1 2"));
    suite.add_test(TestCase::should_fail_with_message(
        "decimal_point",
        "3.14",
        "bad character input '.'",
    ));
    suite.add_test(TestCase::should_fail_with_message(
        "identifier",
        "x",
        "bad character input 'x'",
    ));

    suite
}

fn create_bad_character_tests() -> TestSuite {
    let mut suite = TestSuite::new("Bad Character Tests");

    suite.add_test(TestCase::should_fail_with_message(
        "trailing_bad_character",
        "1+@",
        "ERROR: bad character input '@'",
    ));
    suite.add_test(TestCase::should_fail_with_message(
        "bad_character_between_literals",
        "1 @ 2",
        "Unexpected Token <NumberToken>, expected <EndOfFileToken>, at <2>",
    ));
    suite.add_test(TestCase::should_fail_with_message(
        "non_ascii_character",
        "1 + é",
        "bad character input 'é'",
    ));
    suite.add_test(TestCase::should_fail_with_message(
        "comparison_operator",
        "1 < 2",
        "bad character input '<'",
    ));

    suite
}

fn create_positive_tests() -> TestSuite {
    let mut suite = TestSuite::new("Positive Tests");

    suite.add_test(TestCase::should_succeed("simple_arithmetic", "1 + 2 * 3"));
    suite.add_test(TestCase::should_succeed("parentheses", "(1 + 2) * 3"));
    suite.add_test(TestCase::should_succeed("left_associative", "8 - 3 - 2"));
    suite.add_test(TestCase::should_succeed("unary_in_product", "-2 * 3"));
    suite.add_test(TestCase::should_succeed("division_by_zero_parses", "5 / 0"));
    suite.add_test(TestCase::should_succeed("no_whitespace", "(1+2)*(3-4)/5"));

    suite
}

// ============================================================================
// Main Test Function
// ============================================================================

#[test]
fn comprehensive_parser_tests() {
    println!("minicalc Parser Robustness Test Suite");
    println!("=====================================\n");

    let suites = vec![
        create_malformed_expressions_tests(),
        create_edge_case_tests(),
        create_operator_tests(),
        create_literal_tests(),
        create_bad_character_tests(),
        create_positive_tests(),
    ];

    let mut failures = Vec::new();
    for suite in suites {
        let results = suite.run();
        if !results.is_all_passed() {
            failures.push(results.suite_name.clone());
        }
    }

    assert!(failures.is_empty(), "Suites with failures: {:?}", failures);
}
