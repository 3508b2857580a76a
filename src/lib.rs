//! # tinc
//!
//! tinc is a tiny imperative scripting language interpreter written in Rust.
//! It tokenizes, parses, and evaluates programs built from variable
//! declarations, single-tier arithmetic expressions, `print` statements, and
//! `if` blocks, and ships a second, line-oriented integer calculator mode.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Diagnostic, RuntimeError},
    interpreter::{
        calc::evaluator::Calculator,
        evaluator::core::Evaluator,
        parser::core::{ParsedProgram, Parser},
        tokenizer::Tokenizer,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Stmt` and `Expr` enums that represent the
/// syntactic structure of source code as a tree, built by the parser and
/// walked by the evaluator. Every node also carries its deterministic
/// textual rendering, used for syntax-tree dumps and as the output of
/// `print` statements.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Defines the type-keyword and operator vocabularies of the grammar.
/// - Renders every node deterministically, independent of evaluation.
pub mod ast;
/// Provides diagnostics and error types for parsing and evaluation.
///
/// This module separates the two failure modes the language has: tolerated
/// degradations (reported as diagnostics, never aborting a run) and fatal
/// evaluation conditions (aborting the current run immediately).
///
/// # Responsibilities
/// - Defines the `Diagnostic` type for malformed-but-tolerated syntax.
/// - Defines the `RuntimeError` enum for all fatal conditions.
/// - Supports standard error handling traits and human-readable reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the tokenizer, parser, evaluator, runtime
/// values, and the calculator mode to provide a complete runtime for source
/// code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: tokenizer, parser, and evaluators.
/// - Keeps the two evaluation modes (script and calculator) separate, each
///   with its own token vocabulary.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The result of a successful script run.
#[derive(Debug)]
pub struct ScriptRun {
    /// The ordered output lines the program produced (one per `print`).
    pub output:      Vec<String>,
    /// Diagnostics recorded by the tokenizer and parser.
    pub diagnostics: Vec<Diagnostic>,
}

/// Tokenizes and parses script source without evaluating it.
///
/// Parsing never fails: malformed constructs are degraded or dropped and
/// recorded as diagnostics. The returned statements render deterministically
/// via `Display`, which is how the syntax-tree dump is produced.
///
/// # Examples
/// ```
/// use tinc::parse_script;
///
/// let parsed = parse_script("if x > 0 { print x }");
/// assert_eq!(parsed.statements.len(), 1);
/// assert!(parsed.diagnostics.is_empty());
/// ```
#[must_use]
pub fn parse_script(source: &str) -> ParsedProgram {
    let (tokens, mut diagnostics) = Tokenizer::new(source).tokenize();
    let parsed = Parser::new(tokens).parse();
    diagnostics.extend(parsed.diagnostics);

    ParsedProgram { statements: parsed.statements,
                    diagnostics }
}

/// Runs script source through the full pipeline.
///
/// The source is tokenized, parsed, and evaluated in sequence; each stage
/// runs to completion before the next begins. Syntax problems degrade per
/// the grammar's forgiving rules and surface as diagnostics; only fatal
/// evaluation conditions return an error.
///
/// # Errors
/// Returns the first `RuntimeError` evaluation raises, such as a reference
/// to an undeclared variable or a redeclaration with a different kind.
///
/// # Examples
/// ```
/// use tinc::run_script;
///
/// // `print` emits the rendering of its expression.
/// let run = run_script("print 1 + 2").unwrap();
/// assert_eq!(run.output, vec!["(1 + 2)"]);
///
/// // Referencing an undeclared variable is fatal.
/// assert!(run_script("print x + 1\ny").is_err());
/// ```
pub fn run_script(source: &str) -> Result<ScriptRun, RuntimeError> {
    let parsed = parse_script(source);

    let mut evaluator = Evaluator::new();
    evaluator.run(&parsed.statements)?;

    Ok(ScriptRun { output:      evaluator.into_output(),
                   diagnostics: parsed.diagnostics, })
}

/// Runs calculator source: one statement per non-empty line.
///
/// Assignments update the integer variable store; every other statement's
/// value becomes one output line.
///
/// # Errors
/// Returns the first fatal condition: division by zero, a variable read
/// before assignment, or a token the calculator grammar cannot accept.
///
/// # Examples
/// ```
/// use tinc::run_calc;
///
/// let output = run_calc("x = 2 * 3 + 4\nx").unwrap();
/// assert_eq!(output, vec!["10"]);
///
/// // Division by zero aborts the run.
/// assert!(run_calc("y = 5 / 0").is_err());
/// ```
pub fn run_calc(source: &str) -> Result<Vec<String>, RuntimeError> {
    let mut calculator = Calculator::new();
    calculator.run(source)?;
    Ok(calculator.into_output())
}
