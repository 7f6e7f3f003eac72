use crate::{containers::Stack, interpreter::lexer::Token};

/// An abstract syntax tree node: one token plus an owned list of children.
///
/// Children live in a [`Stack`] because consumption order is a contract,
/// not an accident of iteration: the printer and the evaluator always walk
/// children last-added-first. Operator nodes attach their right operand
/// before their left, so the LIFO walk visits left before right and binary
/// evaluation reads naturally left-to-right. Function nodes attach
/// arguments in source order, so the LIFO walk visits the *last* argument
/// first — invisible for the commutative variadics shipped here (`min`,
/// `max`), but a real ordering trap for any future non-commutative
/// variadic, so do not flip it casually.
#[derive(Debug, Clone)]
pub struct Node {
    token:    Token,
    children: Stack<Node>,
}

impl Node {
    /// Creates a leaf node holding `token`.
    #[must_use]
    pub fn new(token: Token) -> Self {
        Self { token,
               children: Stack::new(), }
    }

    /// The token this node wraps.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Appends a child. It becomes the first child consumed.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// The node's children, bottom of the stack first.
    #[must_use]
    pub const fn children(&self) -> &Stack<Self> {
        &self.children
    }

    /// Flattens the tree into a postfix string: children in LIFO order,
    /// then the node's own lexeme, with no separators.
    ///
    /// This is the cheapest external probe of tree shape and doubles as a
    /// debugging aid.
    ///
    /// # Example
    /// ```
    /// use numex::interpreter::{lexer::lex, parser::parse};
    ///
    /// let roots = parse(&lex("2*(2+2)").unwrap()).unwrap();
    /// assert_eq!(roots[0].postfix(), "222+*");
    /// ```
    #[must_use]
    pub fn postfix(&self) -> String {
        let mut out = String::new();
        self.write_postfix(&mut out);
        out
    }

    fn write_postfix(&self, out: &mut String) {
        for child in self.children.iter().rev() {
            child.write_postfix(out);
        }
        out.push_str(&self.token.to_string());
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.postfix())
    }
}
