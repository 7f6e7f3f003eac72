/// Parses a permissive number lexeme the way C's `atof` would: the
/// longest prefix that forms a valid float wins, and a lexeme with no
/// valid prefix is `0.0`.
///
/// The tokenizer lets runs like `1.2.3` through as a single lexeme on
/// purpose, so this is where they are given a value.
///
/// # Example
/// ```
/// use numex::util::num::parse_number;
///
/// assert_eq!(parse_number("42"), 42.0);
/// assert_eq!(parse_number("1.2.3"), 1.2);
/// assert_eq!(parse_number("."), 0.0);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    // Number lexemes are ASCII digits and dots, so byte slicing is safe.
    for end in (1..=text.len()).rev() {
        if let Ok(value) = text[..end].parse() {
            return value;
        }
    }
    0.0
}
