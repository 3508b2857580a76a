/// Binary operator evaluation.
///
/// Implements the semantics of `+`, `-`, and `>` over the runtime value
/// kinds, including numeric promotion and string concatenation.
pub mod binary;

/// Core evaluation logic: the environment and statement execution.
///
/// Contains the per-run variable environment with its declared-kind
/// invariant, the evaluator that walks the statement list, and the ordered
/// output it collects.
pub mod core;
