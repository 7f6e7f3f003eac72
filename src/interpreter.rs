/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks each tree post-order, consuming children in the
/// LIFO order the parser attached them, and dispatches the collected
/// arguments to operators, builtin functions, or the symbol table. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Owns the per-session symbol table mutated by assignments.
/// - Reports evaluation errors: unknown symbols and wrong argument counts.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads one whitespace-free source line and
/// produces the ordered token sequence the parser consumes. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Classifies characters into number, symbol, operator, and structural
///   tokens in a single left-to-right pass.
/// - Applies the context rules: unary-minus disambiguation and
///   symbol-to-function promotion.
/// - Reports lexical errors with the offending character and column.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser runs operator-precedence climbing over two explicit stacks,
/// producing one AST root per `:`-separated statement.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Tracks parenthesis balance and function argument lists.
/// - Establishes the child attachment order the evaluator relies on.
pub mod parser;
