use logos::Logos;

use crate::error::LexError;

/// Raw lexical shapes recognized by the scanner, before the
/// context-sensitive rules run.
///
/// The number pattern is deliberately permissive: any run of digits and
/// dots starting at either is one lexeme, so `1.2.3` scans as a single
/// number. Identifiers are runs of letters and underscores of unbounded
/// length. Whitespace has no pattern on purpose — callers strip it before
/// lexing, and a stray blank is an invalid character like any other.
#[derive(Logos, Debug, Clone, PartialEq)]
enum RawToken {
    /// Numeric literal lexeme, such as `42`, `.5` or `1.2.3`.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier lexeme, such as `x` or `result`.
    #[regex(r"[A-Za-z_]+", |lex| lex.slice().to_string())]
    Ident(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
}

/// An arithmetic operator, unary or binary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Unary negation, written `-` in source and `$` internally.
    Neg,
}

impl Operator {
    /// Binding strength of the operator. Negation binds tightest, then
    /// exponentiation, then the multiplicative group, then the additive
    /// group.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Neg => 4,
            Self::Pow => 3,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// Whether a chain of this operator nests to the right. Holds for
    /// exponentiation and negation; the rest associate left.
    #[must_use]
    pub const fn is_right_associative(&self) -> bool {
        matches!(self, Self::Neg | Self::Pow)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lexeme = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Neg => "$",
        };
        write!(f, "{lexeme}")
    }
}

/// A classified lexical token, ready for the parser.
///
/// Two classifications depend on context and are applied by [`lex`] rather
/// than by the scanning patterns:
/// - `-` becomes unary negation when it starts the stream or directly
///   follows `(` or `,`; everywhere else it is binary subtraction.
/// - an identifier becomes a [`Token::Function`] the moment the scanner
///   sees `(` immediately after it.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, kept as its source lexeme.
    Number(String),
    /// An arithmetic operator.
    Operator(Operator),
    /// A variable reference.
    Symbol(String),
    /// A function name, promoted from a symbol followed by `(`.
    Function(String),
    /// The assignment `=`.
    Assign,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// The statement delimiter `:`.
    Delimiter,
}

impl Token {
    /// Binding strength used by the parser's reduction loop.
    ///
    /// Numbers are terminals and never reduced against, so they carry the
    /// maximal value. Function names bind tightest of the reducible kinds
    /// so a following argument list is consumed as theirs. Structural
    /// tokens and assignment sit at the bottom.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Number(_) => 100,
            Self::Operator(op) => op.precedence(),
            Self::Symbol(_) | Self::Function(_) => 4,
            Self::Assign | Self::OpenParen | Self::CloseParen | Self::Comma | Self::Delimiter => 0,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) => write!(f, "{text}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Symbol(name) | Self::Function(name) => write!(f, "{name}"),
            Self::Assign => write!(f, "="),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Delimiter => write!(f, ":"),
        }
    }
}

/// Whether a `-` found after `previous` negates rather than subtracts.
const fn unary_position(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::OpenParen | Token::Comma))
}

/// Tokenizes one whitespace-free source line.
///
/// A single left-to-right pass with no backtracking. Numbers and
/// identifiers are maximal-munch; `-` is disambiguated against the
/// previously emitted token; an identifier directly followed by `(` comes
/// out as a [`Token::Function`].
///
/// # Errors
/// [`LexError::InvalidCharacter`] when a character fits no category,
/// carrying the character, its 1-based column, and the source line.
///
/// # Example
/// ```
/// use numex::interpreter::lexer::{lex, Operator, Token};
///
/// let tokens = lex("-5+x").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Operator(Operator::Neg),
///                 Token::Number("5".to_string()),
///                 Token::Operator(Operator::Add),
///                 Token::Symbol("x".to_string())]);
///
/// assert!(lex("2@2").is_err());
/// ```
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut raw = RawToken::lexer(source).spanned().peekable();

    while let Some((scanned, span)) = raw.next() {
        let Ok(shape) = scanned else {
            let character = source[span.clone()].chars().next().unwrap_or('\u{fffd}');
            return Err(LexError::InvalidCharacter { character,
                                                    column: span.start + 1,
                                                    source: source.to_string() });
        };

        let token = match shape {
            RawToken::Number(text) => Token::Number(text),
            RawToken::Ident(name) => {
                if matches!(raw.peek(), Some((Ok(RawToken::LParen), _))) {
                    Token::Function(name)
                } else {
                    Token::Symbol(name)
                }
            },
            RawToken::Minus => {
                if unary_position(tokens.last()) {
                    Token::Operator(Operator::Neg)
                } else {
                    Token::Operator(Operator::Sub)
                }
            },
            RawToken::Plus => Token::Operator(Operator::Add),
            RawToken::Star => Token::Operator(Operator::Mul),
            RawToken::Slash => Token::Operator(Operator::Div),
            RawToken::Percent => Token::Operator(Operator::Mod),
            RawToken::Caret => Token::Operator(Operator::Pow),
            RawToken::Equals => Token::Assign,
            RawToken::LParen => Token::OpenParen,
            RawToken::RParen => Token::CloseParen,
            RawToken::Comma => Token::Comma,
            RawToken::Colon => Token::Delimiter,
        };
        tokens.push(token);
    }

    Ok(tokens)
}
