/// Numeric parsing helpers.
///
/// The tokenizer is deliberately permissive about number lexemes, so the
/// evaluator needs a float parser that accepts the same surface: this
/// module provides the C-`atof`-style longest-prefix parse used for
/// `Number` tokens.
pub mod num;
