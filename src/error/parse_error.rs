#[derive(Debug)]
/// Represents all errors that can occur while building the AST.
pub enum ParseError {
    /// An opening parenthesis was still pending at the end of a statement.
    UnmatchedOpenParen,
    /// A closing parenthesis arrived with no matching opener on the stack.
    UnmatchedCloseParen,
    /// An operator could not find enough operands to reduce. Well-formed
    /// token streams never trigger this; it guards against malformed
    /// input like `2+`.
    MissingOperand {
        /// Lexeme of the operator being reduced.
        operator: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedOpenParen => {
                write!(f, "Unbalanced parentheses: an opening '(' was never closed.")
            },
            Self::UnmatchedCloseParen => {
                write!(f, "Unbalanced parentheses: found ')' with no matching '('.")
            },
            Self::MissingOperand { operator } => {
                write!(f, "Missing operand for '{operator}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
