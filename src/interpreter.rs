/// The calculator module implements the second evaluation mode.
///
/// The calculator is a line-oriented integer evaluator with its own token
/// vocabulary and no syntax tree: statements are walked directly over the
/// token sequence with two precedence tiers (`*`/`/` binding tighter than
/// `+`/`-`).
///
/// # Responsibilities
/// - Lexes calculator input with its own, deliberately separate token set.
/// - Evaluates assignments and expressions over a persistent integer store.
/// - Raises fatal errors for division by zero, unknown variables, and
///   unexpected tokens.
pub mod calc;
/// The evaluator module executes AST nodes against a variable environment.
///
/// The evaluator traverses the statement list produced by the parser,
/// maintains the per-run variable environment, and collects the ordered
/// output lines a program produces. It is the execution engine of the
/// script mode.
///
/// # Responsibilities
/// - Executes declarations, `print`, `if`, and expression statements.
/// - Enforces the declared-kind invariant of the environment.
/// - Reports fatal conditions such as unknown variables or bad operands.
pub mod evaluator;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence through a single forward-only
/// cursor and applies recursive-descent rules with one token of lookahead.
/// Malformed constructs are degraded or dropped, never fatal; each such
/// path records a diagnostic.
///
/// # Responsibilities
/// - Converts tokens into statement and expression nodes.
/// - Resynchronizes on unrecognized input by advancing exactly one token.
/// - Accumulates diagnostics for every tolerated degradation.
pub mod parser;
/// The tokenizer module converts source text into a token sequence.
///
/// The tokenizer reads raw source text in a single left-to-right scan and
/// produces a finite token sequence terminated by exactly one end-of-input
/// token. Malformed input never fails at this layer; it is represented as
/// best-effort tokens.
///
/// # Responsibilities
/// - Classifies identifiers, keywords, numbers, character literals, and
///   symbols.
/// - Degrades unterminated character literals to symbol tokens (documented
///   quirk), recording a diagnostic.
/// - Emits exactly one `EndOfInput` token per call.
pub mod tokenizer;
/// The value module defines the runtime data types of the script mode.
///
/// This module declares the discriminated `Value` type used by the
/// evaluator, the kind tags that back the environment's declared-kind
/// invariant, and truthiness for `if` conditions.
///
/// # Responsibilities
/// - Defines the `Value` enum (integer, real, char, string).
/// - Exposes each value's kind for declaration checking.
/// - Implements display formatting and truthiness.
pub mod value;
