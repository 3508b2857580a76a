use crate::{
    ast::{Stmt, TypeKeyword},
    interpreter::{
        parser::core::Parser,
        tokenizer::{Keyword, TokenKind},
    },
};

impl Parser {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a variable declaration, opened by a type keyword.
    /// - a `print` statement.
    /// - an `if` statement.
    /// - an expression used as a statement.
    ///
    /// Reserved keywords with no grammar role (`for`, `goto`, `switch`, and
    /// the rest) fall through to the expression rule, where the primary rule
    /// consumes and drops them.
    ///
    /// # Returns
    /// A parsed [`Stmt`], or `None` if the construct was degraded away. The
    /// cursor always moves by at least one token, so parsing cannot stall.
    pub(super) fn parse_statement(&mut self) -> Option<Stmt> {
        if self.current().kind == TokenKind::Keyword {
            let keyword = Keyword::lookup(&self.current().text);
            match keyword {
                Some(Keyword::Int) => return self.parse_variable_declaration(TypeKeyword::Int),
                Some(Keyword::Float) => return self.parse_variable_declaration(TypeKeyword::Float),
                Some(Keyword::Double) => {
                    return self.parse_variable_declaration(TypeKeyword::Double);
                },
                Some(Keyword::String) => {
                    return self.parse_variable_declaration(TypeKeyword::String);
                },
                Some(Keyword::Char) => return self.parse_variable_declaration(TypeKeyword::Char),
                Some(Keyword::Print) => return self.parse_print_statement(),
                Some(Keyword::If) => return self.parse_if_statement(),
                _ => {},
            }
        }

        let expr = self.parse_expression()?;
        Some(Stmt::Expression { expr })
    }

    /// Parses a variable declaration.
    ///
    /// Grammar: `variableDecl := typeKeyword Identifier "=" expression`
    ///
    /// The type keyword has already been matched by the dispatcher. A
    /// missing identifier, a missing `=`, or an unparseable initializer
    /// aborts the declaration: it yields no node and parsing resumes at the
    /// point of failure.
    fn parse_variable_declaration(&mut self, declared_type: TypeKeyword) -> Option<Stmt> {
        self.advance();

        if self.current().kind != TokenKind::Identifier {
            self.warn(format!("expected identifier after '{declared_type}'; declaration dropped"));
            return None;
        }
        let name = self.current().text.clone();
        self.advance();

        if !self.match_symbol("=") {
            self.warn(format!("expected '=' after '{name}'; declaration dropped"));
            return None;
        }

        let Some(initializer) = self.parse_expression() else {
            self.warn(format!("missing initializer for '{name}'; declaration dropped"));
            return None;
        };

        Some(Stmt::VariableDeclaration { declared_type,
                                         name,
                                         initializer, })
    }

    /// Parses a print statement.
    ///
    /// Grammar: `printStmt := "print" expression`
    fn parse_print_statement(&mut self) -> Option<Stmt> {
        self.advance();

        let Some(expression) = self.parse_expression() else {
            self.warn("missing expression after 'print'; statement dropped");
            return None;
        };

        Some(Stmt::Print { expression })
    }

    /// Parses an `if` statement.
    ///
    /// Grammar: `ifStmt := "if" expression block`
    ///
    /// An unparseable condition yields no node; the body is not consumed in
    /// that case.
    fn parse_if_statement(&mut self) -> Option<Stmt> {
        self.advance();

        let Some(condition) = self.parse_expression() else {
            self.warn("invalid condition in if statement");
            return None;
        };

        let body = self.parse_block();
        Some(Stmt::If { condition, body })
    }
}
