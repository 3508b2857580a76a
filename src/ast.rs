use std::fmt;

/// The type keyword that introduces a variable declaration.
///
/// All five type keywords of the language can open a declaration. `float`
/// and `double` share a runtime representation; they remain distinct here so
/// a declaration renders with the keyword it was written with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeKeyword {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `string`
    String,
    /// `char`
    Char,
}

impl TypeKeyword {
    /// The source spelling of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Char => "char",
        }
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A binary operator of the expression tier.
///
/// The script grammar has a single left-associative precedence level; only
/// these three operators participate in it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Greater-than comparison (`>`)
    Greater,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Greater => ">",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form the grammar can produce: the four
/// primary kinds and the single binary tier over them. Each node exclusively
/// owns its children; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
    },
    /// An integer literal, kept as its raw digit text.
    NumberLiteral {
        /// The digits exactly as scanned.
        text: String,
    },
    /// A character literal.
    CharLiteral {
        /// The character between the quotes.
        value: char,
    },
    /// A string literal.
    ///
    /// The scanner never produces the token that would build this node; the
    /// variant is kept because the primary rule accepts it.
    StringLiteral {
        /// The string contents.
        value: String,
    },
    /// A binary operation (`+`, `-`, or `>`).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::NumberLiteral { text } => write!(f, "{text}"),
            Self::CharLiteral { value } => write!(f, "'{value}'"),
            Self::StringLiteral { value } => write!(f, "\"{value}\""),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// A top-level statement.
///
/// A program is a flat sequence of statements; nesting occurs only inside an
/// `if` body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A variable declaration: `int x = 5`.
    VariableDeclaration {
        /// The type keyword the declaration was written with.
        declared_type: TypeKeyword,
        /// The declared name.
        name:          String,
        /// The initializer expression after `=`.
        initializer:   Expr,
    },
    /// A print statement: `print expr`.
    Print {
        /// The expression whose rendering is emitted.
        expression: Expr,
    },
    /// An `if` statement with a brace-delimited body.
    If {
        /// The condition expression.
        condition: Expr,
        /// Statements executed when the condition is truthy.
        body:      Vec<Stmt>,
    },
    /// A bare expression used as a statement.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VariableDeclaration { declared_type,
                                        name,
                                        initializer, } => {
                write!(f, "{declared_type} {name} = {initializer}")
            },
            Self::Print { expression } => write!(f, "print({expression})"),
            Self::If { condition, body } => {
                write!(f, "if ({condition}) {{ ")?;
                for statement in body {
                    write!(f, "{statement}; ")?;
                }
                write!(f, "}}")
            },
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_renders_parenthesized() {
        let expr = Expr::BinaryOp { left:  Box::new(Expr::NumberLiteral { text: "1".to_string() }),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(Expr::NumberLiteral { text: "2".to_string() }), };
        assert_eq!(expr.to_string(), "(1 + 2)");
    }

    #[test]
    fn if_renders_body_with_semicolons() {
        let body = vec![Stmt::Print { expression: Expr::Identifier { name: "x".to_string() } }];
        let stmt = Stmt::If { condition: Expr::BinaryOp { left:  Box::new(Expr::Identifier { name: "x".to_string() }),
                                                          op:    BinaryOperator::Greater,
                                                          right: Box::new(Expr::NumberLiteral { text: "0".to_string() }), },
                              body };
        assert_eq!(stmt.to_string(), "if ((x > 0)) { print(x); }");
    }
}
