/// Non-fatal diagnostics.
///
/// Defines the `Diagnostic` type emitted for malformed-but-tolerated syntax:
/// constructs the tokenizer or parser absorbs (dropped declarations,
/// discarded tokens, degraded literals) instead of failing. Diagnostics make
/// those paths observable without changing their forgiving behavior.
pub mod diagnostic;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors are fatal for the current run: division by zero, references to
/// unknown variables, invalid operands, and malformed calculator input.
pub mod runtime_error;

pub use diagnostic::{Diagnostic, Severity};
pub use runtime_error::RuntimeError;
