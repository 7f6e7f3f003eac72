#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Referenced a symbol that was never assigned.
    UnknownSymbol {
        /// The name of the symbol.
        name: String,
    },
    /// An operator or fixed-arity function received the wrong number of
    /// arguments.
    ArgumentCountMismatch {
        /// The operator lexeme or function name.
        name:  String,
        /// How many arguments were actually supplied.
        found: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { name } => write!(f, "Unknown symbol '{name}'."),
            Self::ArgumentCountMismatch { name, found } => {
                write!(f, "Wrong argument count for '{name}': got {found}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
