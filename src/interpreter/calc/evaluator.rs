use std::collections::HashMap;

use logos::Logos;

use crate::{
    error::RuntimeError,
    interpreter::{calc::lexer::CalcToken, evaluator::core::EvalResult},
};

/// The line-oriented integer calculator.
///
/// Each non-empty line of input is one statement: either an assignment
/// (`x = expr`) or a bare expression whose value becomes one output line.
/// The variable store is integer-only and persists for the whole run; only
/// assignment creates bindings.
///
/// Statements are evaluated directly over the token sequence with a cursor;
/// no syntax tree is built in this mode.
pub struct Calculator {
    variables: HashMap<String, i64>,
    output:    Vec<String>,
}

#[allow(clippy::new_without_default)]
impl Calculator {
    /// Creates a calculator with an empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(),
               output:    Vec::new(), }
    }

    /// Evaluates every line of `source`, in order.
    ///
    /// Blank lines are skipped. The first fatal condition aborts the run;
    /// output produced before the abort remains readable.
    ///
    /// # Errors
    /// - `UnexpectedToken` for characters the lexer cannot match or tokens
    ///   the grammar cannot accept.
    /// - `UnexpectedEndOfInput` for a statement missing an operand.
    /// - `DivisionByZero` when a divisor evaluates to zero.
    /// - `UnknownVariable` for reading a variable never assigned.
    pub fn run(&mut self, source: &str) -> EvalResult<()> {
        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;
            let tokens = lex_line(line, line_number)?;
            if tokens.is_empty() {
                continue;
            }
            self.eval_line(&tokens, line_number)?;
        }
        Ok(())
    }

    /// The current value of `name`, if it has been assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// The output lines collected so far, in emission order.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Consumes the calculator, keeping only its output lines.
    #[must_use]
    pub fn into_output(self) -> Vec<String> {
        self.output
    }

    /// Evaluates one statement.
    ///
    /// Grammar: `assign := Variable "=" expr` — everything else is a bare
    /// expression. Assignments update or create a binding and emit nothing;
    /// a bare expression's value is emitted as one output line. Tokens left
    /// over after either form are fatal.
    fn eval_line(&mut self, tokens: &[CalcToken], line: usize) -> EvalResult<()> {
        if let [CalcToken::Variable(name), CalcToken::Assign, rest @ ..] = tokens {
            let mut cursor = 0;
            let value = self.eval_expr(rest, &mut cursor, line)?;
            expect_consumed(rest, cursor, line)?;
            self.variables.insert(name.clone(), value);
            return Ok(());
        }

        let mut cursor = 0;
        let value = self.eval_expr(tokens, &mut cursor, line)?;
        expect_consumed(tokens, cursor, line)?;
        self.output.push(value.to_string());
        Ok(())
    }

    /// Evaluates the additive tier.
    ///
    /// Grammar: `expr := term (("+" | "-") term)*`, left-associative.
    fn eval_expr(&self, tokens: &[CalcToken], cursor: &mut usize, line: usize) -> EvalResult<i64> {
        let mut value = self.eval_term(tokens, cursor, line)?;

        while let Some(token) = tokens.get(*cursor) {
            match token {
                CalcToken::Plus => {
                    *cursor += 1;
                    value += self.eval_term(tokens, cursor, line)?;
                },
                CalcToken::Minus => {
                    *cursor += 1;
                    value -= self.eval_term(tokens, cursor, line)?;
                },
                _ => break,
            }
        }

        Ok(value)
    }

    /// Evaluates the multiplicative tier.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`, left-associative,
    /// binding tighter than the additive tier. Division uses the integer
    /// semantics of `i64`; a zero divisor is fatal.
    fn eval_term(&self, tokens: &[CalcToken], cursor: &mut usize, line: usize) -> EvalResult<i64> {
        let mut value = self.eval_factor(tokens, cursor, line)?;

        while let Some(token) = tokens.get(*cursor) {
            match token {
                CalcToken::Star => {
                    *cursor += 1;
                    value *= self.eval_factor(tokens, cursor, line)?;
                },
                CalcToken::Slash => {
                    *cursor += 1;
                    let divisor = self.eval_factor(tokens, cursor, line)?;
                    if divisor == 0 {
                        return Err(RuntimeError::DivisionByZero { line });
                    }
                    value /= divisor;
                },
                _ => break,
            }
        }

        Ok(value)
    }

    /// Evaluates a factor: a number or a variable reference.
    ///
    /// Grammar: `factor := Number | Variable`. There is no grouping and no
    /// unary minus in this mode.
    fn eval_factor(&self, tokens: &[CalcToken], cursor: &mut usize, line: usize) -> EvalResult<i64> {
        match tokens.get(*cursor) {
            Some(CalcToken::Number(n)) => {
                *cursor += 1;
                Ok(*n)
            },
            Some(CalcToken::Variable(name)) => {
                *cursor += 1;
                self.variables
                    .get(name)
                    .copied()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })
            },
            Some(token) => Err(RuntimeError::UnexpectedToken { token: token.to_string(),
                                                               line }),
            None => Err(RuntimeError::UnexpectedEndOfInput { line }),
        }
    }
}

/// Lexes one line of calculator input.
fn lex_line(line: &str, line_number: usize) -> EvalResult<Vec<CalcToken>> {
    let mut lexer = CalcToken::lexer(line);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(RuntimeError::UnexpectedToken { token: lexer.slice().to_string(),
                                                           line:  line_number, });
            },
        }
    }

    Ok(tokens)
}

/// Checks that a statement consumed its whole line.
fn expect_consumed(tokens: &[CalcToken], cursor: usize, line: usize) -> EvalResult<()> {
    match tokens.get(cursor) {
        None => Ok(()),
        Some(token) => Err(RuntimeError::UnexpectedToken { token: token.to_string(),
                                                           line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let mut calc = Calculator::new();
        calc.run("x = 2 * 3 + 4").unwrap();
        assert_eq!(calc.get("x"), Some(10));
    }

    #[test]
    fn expression_value_is_emitted() {
        let mut calc = Calculator::new();
        calc.run("x = 7\nx + 1").unwrap();
        assert_eq!(calc.output(), ["8"]);
    }

    #[test]
    fn division_by_zero_is_fatal() {
        let mut calc = Calculator::new();
        let err = calc.run("y = 5 / 0").unwrap_err();
        assert!(matches!(err, RuntimeError::DivisionByZero { line: 1 }));
    }

    #[test]
    fn unknown_variable_is_fatal() {
        let mut calc = Calculator::new();
        let err = calc.run("missing + 1").unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownVariable { .. }));
    }

    #[test]
    fn assignment_emits_nothing() {
        let mut calc = Calculator::new();
        calc.run("a = 1\nb = 2").unwrap();
        assert!(calc.output().is_empty());
    }

    #[test]
    fn trailing_tokens_are_fatal() {
        let mut calc = Calculator::new();
        let err = calc.run("1 2").unwrap_err();
        assert!(matches!(err, RuntimeError::UnexpectedToken { .. }));
    }

    #[test]
    fn division_truncates_toward_zero() {
        let mut calc = Calculator::new();
        calc.run("q = 7 / 2\nq").unwrap();
        assert_eq!(calc.output(), ["3"]);
    }
}
