#[derive(Debug)]
/// Represents all fatal conditions that can occur during evaluation.
///
/// Any of these aborts the current run immediately; no partial environment
/// state should be relied on afterwards.
pub enum RuntimeError {
    /// Tried to read a variable that has no binding.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the division occurred.
        line: usize,
    },
    /// Found a token the calculator grammar cannot accept at this position.
    UnexpectedToken {
        /// The offending token text.
        token: String,
        /// The source line where the token occurred.
        line:  usize,
    },
    /// A statement ended before its expression was complete.
    UnexpectedEndOfInput {
        /// The source line where input ran out.
        line: usize,
    },
    /// Redeclared a variable with a different kind than it was bound with.
    Redeclaration {
        /// The name of the variable.
        name:      String,
        /// The kind the name is already bound with.
        existing:  &'static str,
        /// The kind the new declaration asked for.
        requested: &'static str,
    },
    /// A declaration's initializer cannot be converted to the declared kind.
    KindMismatch {
        /// The declared name.
        name:     String,
        /// The kind the declaration asked for.
        declared: &'static str,
        /// The kind the initializer produced.
        found:    &'static str,
    },
    /// A binary operator was applied to operands it does not accept.
    InvalidOperands {
        /// Details about the operator and operand kinds.
        details: String,
    },
    /// A number literal does not fit the runtime integer type.
    NumberTooLarge {
        /// The literal text as written.
        text: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Unknown variable '{name}'.")
            },
            Self::DivisionByZero { line } => {
                write!(f, "Error on line {line}: Division by zero.")
            },
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::Redeclaration { name,
                                  existing,
                                  requested, } => {
                write!(f,
                       "Variable '{name}' is already declared as {existing}; cannot redeclare it as {requested}.")
            },
            Self::KindMismatch { name, declared, found } => {
                write!(f,
                       "Cannot initialize {declared} variable '{name}' from a {found} value.")
            },
            Self::InvalidOperands { details } => {
                write!(f, "Invalid operands: {details}.")
            },
            Self::NumberTooLarge { text } => {
                write!(f, "Number literal '{text}' is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
