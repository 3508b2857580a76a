use crate::{ast::Stmt, interpreter::parser::core::Parser};

impl Parser {
    /// Parses a brace-delimited block of statements.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// A missing opening brace yields an empty body (with a diagnostic, not
    /// an error). The loop terminates on `}` or at end of input; an
    /// unterminated block keeps whatever statements were parsed before the
    /// input ran out.
    pub(super) fn parse_block(&mut self) -> Vec<Stmt> {
        let mut body = Vec::new();

        if self.match_symbol("{") {
            loop {
                if self.match_symbol("}") {
                    break;
                }
                if self.current().is_end_of_input() {
                    self.warn("unterminated block at end of input");
                    break;
                }
                if let Some(statement) = self.parse_statement() {
                    body.push(statement);
                }
            }
        } else {
            self.warn("expected '{' to open a block; treating body as empty");
        }

        body
    }
}
