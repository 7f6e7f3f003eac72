//! # numex
//!
//! numex is a line-oriented arithmetic expression interpreter written in
//! Rust. It tokenizes, parses, and evaluates expressions with support for
//! the usual binary operators, unary negation, parenthesised grouping,
//! math functions, variadic `min`/`max`, and variable assignment with the
//! `:` delayed-apply delimiter (`x=2:` binds `x` before the rest of the
//! line runs).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::Evaluator, lexer::lex, parser::parse};

/// Defines the structure of parsed code.
///
/// This module declares the AST [`ast::Node`] built by the parser and
/// traversed by the evaluator, along with its postfix printer.
///
/// # Responsibilities
/// - Wraps one token per node with an ordered, LIFO-consumed child list.
/// - Makes the child consumption order a structural invariant.
/// - Flattens trees to postfix strings for diagnostics and tests.
pub mod ast;
/// The generic container library the pipeline is built on.
///
/// # Responsibilities
/// - `DynArray`: amortized-growth indexable sequence backing the rest.
/// - `Queue` / `Stack`: FIFO / LIFO adapters over the array.
/// - `HashTable`: separately-chained string-keyed map.
pub mod containers;
/// Provides one error type per pipeline stage.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Carries enough context (characters, columns, names) for diagnostics.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression execution.
///
/// # Responsibilities
/// - Coordinates the core stages: lexer, parser, and evaluator.
/// - Provides entry points for tokenizing, parsing, and evaluating.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General parsing utilities.
///
/// # Responsibilities
/// - Longest-prefix float parsing for permissive number lexemes.
pub mod util;

/// Evaluates one source line against an existing session.
///
/// Whitespace is stripped here, before tokenizing — the tokenizer itself
/// never skips it. The line is lexed, parsed into one root per
/// `:`-separated statement, and each root is evaluated in order against
/// the session's symbol table. The value of the last root is returned;
/// an assignment statement contributes the sentinel `0.0`.
///
/// # Errors
/// Returns the first lexing, parsing, or evaluation error hit; the
/// session is left usable for the next line either way.
///
/// # Examples
/// ```
/// use numex::{eval_source, interpreter::evaluator::Evaluator};
///
/// let mut session = Evaluator::new();
///
/// assert_eq!(eval_source("2 + 2 * 5", &mut session).unwrap(), 12.0);
///
/// // Assignments persist across lines of the same session.
/// eval_source("x = 2:", &mut session).unwrap();
/// assert_eq!(eval_source("x + 3", &mut session).unwrap(), 5.0);
///
/// // Referencing an unassigned symbol fails.
/// assert!(eval_source("y + 1", &mut session).is_err());
/// ```
pub fn eval_source(source: &str,
                   evaluator: &mut Evaluator)
                   -> Result<f64, Box<dyn std::error::Error>> {
    let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();

    let tokens = lex(&stripped)?;
    let roots = parse(&tokens)?;

    let mut result = 0.0;
    for root in &roots {
        result = evaluator.eval(root)?;
    }

    Ok(result)
}
