/// Evaluation errors.
///
/// Contains the error types that can be raised while walking the AST:
/// references to symbols that were never assigned, and operators or
/// functions invoked with the wrong number of arguments.
pub mod eval_error;
/// Lexing errors.
///
/// Defines the error raised when the tokenizer meets a character it cannot
/// classify. The error carries the offending character, its 1-based
/// column, and the source line so callers get a caret diagnostic.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the error types that can occur while building the AST:
/// unbalanced parentheses in either direction, plus a defensive variant
/// for operand-stack underflow on malformed input.
pub mod parse_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
