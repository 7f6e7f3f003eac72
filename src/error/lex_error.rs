#[derive(Debug)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character matched none of the lexical categories.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// 1-based column of the character within the source line.
        column:    usize,
        /// The source line being tokenized.
        source:    String,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character,
                                     column,
                                     source, } => {
                writeln!(f, "Invalid character '{character}' at column {column}.")?;
                writeln!(f, "{source}")?;
                write!(f, "{}^", " ".repeat(column - 1))
            },
        }
    }
}

impl std::error::Error for LexError {}
