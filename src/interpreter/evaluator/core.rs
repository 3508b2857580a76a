use std::collections::HashMap;

use crate::{
    ast::{Expr, Stmt, TypeKeyword},
    error::RuntimeError,
    interpreter::value::{Value, ValueKind},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the fatal condition that aborted the run.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The variable environment of one evaluation run.
///
/// A mapping from name to value, created empty when evaluation starts,
/// mutated only by declarations, and discarded when the run ends. A name,
/// once bound, retains its kind: redeclaring it with a different kind is a
/// fatal error, while redeclaring with the same kind rebinds the value.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value`, enforcing the declared-kind invariant.
    ///
    /// # Errors
    /// Returns `RuntimeError::Redeclaration` if `name` is already bound to a
    /// value of a different kind.
    pub fn declare(&mut self, name: &str, value: Value) -> EvalResult<()> {
        if let Some(existing) = self.bindings.get(name)
           && existing.kind() != value.kind()
        {
            return Err(RuntimeError::Redeclaration { name:      name.to_string(),
                                                     existing:  existing.kind().as_str(),
                                                     requested: value.kind().as_str(), });
        }
        self.bindings.insert(name.to_string(), value);
        Ok(())
    }
}

/// Executes a parsed statement list against a variable environment.
///
/// The evaluator owns its environment and the ordered output lines a run
/// produces; both live exactly as long as one run. Where the output goes
/// (console, file, test buffer) is the host's concern.
pub struct Evaluator {
    environment: Environment,
    output:      Vec<String>,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates an evaluator with an empty environment and no output.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: Environment::new(),
               output:      Vec::new(), }
    }

    /// Runs a statement list to completion.
    ///
    /// Statements execute in order; the first fatal condition aborts the
    /// run. Output produced before the abort remains readable, but the
    /// environment should not be relied on afterwards.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    pub fn run(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// The environment after (or during) a run.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The output lines collected so far, in emission order.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Consumes the evaluator, keeping only its output lines.
    #[must_use]
    pub fn into_output(self) -> Vec<String> {
        self.output
    }

    /// Executes a single statement.
    ///
    /// - Declarations evaluate their initializer, coerce it to the declared
    ///   kind, and bind it.
    /// - `print` emits the deterministic rendering of its expression as one
    ///   output line.
    /// - `if` evaluates its condition and runs the body when truthy.
    /// - Expression statements are evaluated for effect; the value is
    ///   discarded.
    fn eval_statement(&mut self, statement: &Stmt) -> EvalResult<()> {
        match statement {
            Stmt::VariableDeclaration { declared_type,
                                        name,
                                        initializer, } => {
                let value = self.eval_expr(initializer)?;
                let value = coerce_to_declared(*declared_type, value, name)?;
                self.environment.declare(name, value)
            },
            Stmt::Print { expression } => {
                self.output.push(expression.to_string());
                Ok(())
            },
            Stmt::If { condition, body } => {
                if self.eval_expr(condition)?.is_truthy() {
                    for statement in body {
                        self.eval_statement(statement)?;
                    }
                }
                Ok(())
            },
            Stmt::Expression { expr } => {
                self.eval_expr(expr)?;
                Ok(())
            },
        }
    }

    /// Evaluates an expression to a value.
    ///
    /// # Errors
    /// - `UnknownVariable` for an identifier with no binding.
    /// - `NumberTooLarge` for a digit run that does not fit `i64`.
    /// - Operand errors propagated from binary evaluation.
    pub(super) fn eval_expr(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Identifier { name } => {
                self.environment
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })
            },
            Expr::NumberLiteral { text } => {
                text.parse::<i64>()
                    .map(Value::Integer)
                    .map_err(|_| RuntimeError::NumberTooLarge { text: text.clone() })
            },
            Expr::CharLiteral { value } => Ok(Value::Char(*value)),
            Expr::StringLiteral { value } => Ok(Value::Str(value.clone())),
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_binary_op(*op, &left, &right)
            },
        }
    }
}

/// Coerces an initializer value to the kind a declaration asks for.
///
/// Widening is allowed where the source language would expect it: an
/// integer initializes a `float`/`double` variable, and a character
/// initializes an `int` variable (as its code point). Every other mismatch
/// is fatal.
#[allow(clippy::cast_precision_loss)]
fn coerce_to_declared(declared_type: TypeKeyword, value: Value, name: &str) -> EvalResult<Value> {
    let declared = match declared_type {
        TypeKeyword::Int => ValueKind::Integer,
        TypeKeyword::Float | TypeKeyword::Double => ValueKind::Real,
        TypeKeyword::Char => ValueKind::Char,
        TypeKeyword::String => ValueKind::Str,
    };

    match (declared, value) {
        (ValueKind::Integer, Value::Char(c)) => Ok(Value::Integer(i64::from(c as u32))),
        (ValueKind::Real, Value::Integer(n)) => Ok(Value::Real(n as f64)),
        (declared, value) if value.kind() == declared => Ok(value),
        (declared, value) => {
            Err(RuntimeError::KindMismatch { name:     name.to_string(),
                                             declared: declared.as_str(),
                                             found:    value.kind().as_str(), })
        },
    }
}
