/// Brace-delimited statement blocks.
///
/// Parses the `{ statement* }` body of an `if` statement, tolerating a
/// missing opening brace (empty body) and unterminated blocks.
pub mod block;

/// Core parsing logic: the cursor, expressions, and primaries.
///
/// Contains the `Parser` type with its forward-only cursor, the single
/// expression tier, the primary rule with its one-token resynchronization,
/// and the `ParsedProgram` result carrying statements plus diagnostics.
pub mod core;

/// Statement parsing.
///
/// Implements the statement dispatch and the rules for variable
/// declarations, `print` statements, and `if` statements.
pub mod statement;
