use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

/// Integer view of a value: integers as themselves, characters as their
/// code points.
const fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(n) => Some(*n),
        Value::Char(c) => Some(*c as i64),
        _ => None,
    }
}

/// Real view of a value, promoting integers and characters.
#[allow(clippy::cast_precision_loss)]
const fn as_real(value: &Value) -> Option<f64> {
    match value {
        Value::Real(x) => Some(*x),
        Value::Integer(n) => Some(*n as f64),
        Value::Char(c) => Some(*c as u32 as f64),
        Value::Str(_) => None,
    }
}

impl Evaluator {
    /// Evaluates a binary operation over two values.
    ///
    /// Integer and character operands stay in integer arithmetic (characters
    /// as code points); any real operand promotes both sides to real. The
    /// comparison `>` yields integer `1` or `0`. Two strings may be
    /// concatenated with `+`; every other string combination is a fatal
    /// operand error.
    ///
    /// # Parameters
    /// - `op`: The operator (`+`, `-`, or `>`).
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    pub fn eval_binary_op(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{Add, Greater, Sub};

        if let (Value::Str(a), Value::Str(b)) = (left, right)
           && op == Add
        {
            return Ok(Value::Str(format!("{a}{b}")));
        }

        if let (Some(a), Some(b)) = (as_integer(left), as_integer(right)) {
            return Ok(match op {
                          Add => Value::Integer(a + b),
                          Sub => Value::Integer(a - b),
                          Greater => Value::Integer(i64::from(a > b)),
                      });
        }

        if let (Some(a), Some(b)) = (as_real(left), as_real(right)) {
            return Ok(match op {
                          Add => Value::Real(a + b),
                          Sub => Value::Real(a - b),
                          Greater => Value::Integer(i64::from(a > b)),
                      });
        }

        Err(RuntimeError::InvalidOperands { details: format!("{} {op} {}",
                                                             left.kind(),
                                                             right.kind()), })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_add_as_code_points() {
        let result =
            Evaluator::eval_binary_op(BinaryOperator::Add, &Value::Char('a'), &Value::Integer(1));
        assert_eq!(result.unwrap(), Value::Integer(98));
    }

    #[test]
    fn comparison_yields_integer_flag() {
        let result = Evaluator::eval_binary_op(BinaryOperator::Greater,
                                               &Value::Integer(5),
                                               &Value::Integer(3));
        assert_eq!(result.unwrap(), Value::Integer(1));
    }

    #[test]
    fn strings_concatenate_with_add() {
        let result = Evaluator::eval_binary_op(BinaryOperator::Add,
                                               &Value::Str("ab".to_string()),
                                               &Value::Str("cd".to_string()));
        assert_eq!(result.unwrap(), Value::Str("abcd".to_string()));
    }

    #[test]
    fn string_minus_string_is_an_operand_error() {
        let result = Evaluator::eval_binary_op(BinaryOperator::Sub,
                                               &Value::Str("ab".to_string()),
                                               &Value::Str("cd".to_string()));
        assert!(matches!(result, Err(RuntimeError::InvalidOperands { .. })));
    }
}
