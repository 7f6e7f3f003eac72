use crate::{
    ast::Node,
    containers::Stack,
    error::ParseError,
    interpreter::lexer::{Operator, Token},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into one AST root per statement.
///
/// The algorithm is operator-precedence climbing (shunting-yard) over two
/// explicit stacks: one of partially built [`Node`]s, one of pending
/// operator tokens. Both are local to the call and discarded once the
/// roots are produced.
///
/// Statements are separated by the `:` delimiter, so a line like
/// `x=2:y=3:x+y` yields three roots, evaluated in order against the same
/// symbol table.
///
/// # Errors
/// Unbalanced parentheses in either direction, or operand-stack underflow
/// on malformed input.
///
/// # Example
/// ```
/// use numex::interpreter::{lexer::lex, parser::parse};
///
/// let roots = parse(&lex("1+1").unwrap()).unwrap();
/// assert_eq!(roots.len(), 1);
/// assert_eq!(roots[0].postfix(), "11+");
///
/// assert!(parse(&lex("(2+2))").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Node>> {
    let mut roots = Vec::new();
    let mut operands: Stack<Node> = Stack::new();
    let mut operators: Stack<Token> = Stack::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Symbol(_) => operands.push(Node::new(token.clone())),
            Token::Function(_) => {
                // The call marker goes on the operator stack; the node the
                // arguments accumulate into goes on the operand stack.
                operands.push(Node::new(token.clone()));
                operators.push(token.clone());
            },
            Token::OpenParen => operators.push(Token::OpenParen),
            Token::CloseParen => close_group(&mut operators, &mut operands)?,
            Token::Comma => attach_argument(&mut operators, &mut operands)?,
            Token::Operator(op) => {
                shift_operator(*op, &mut operators, &mut operands)?;
            },
            Token::Assign => {
                while operators.peek().is_some_and(|top| top.precedence() > 0) {
                    reduce(&mut operators, &mut operands)?;
                }
                operators.push(Token::Assign);
            },
            Token::Delimiter => {
                if !operators.is_empty() || !operands.is_empty() {
                    roots.push(finish_statement(&mut operators, &mut operands)?);
                }
            },
        }
    }

    if !operators.is_empty() || !operands.is_empty() {
        roots.push(finish_statement(&mut operators, &mut operands)?);
    }

    Ok(roots)
}

/// Reduces pending operators that outrank `op`, then shifts `op`.
///
/// Left-associative operators reduce against equal precedence so chains
/// flatten leftward; right-associative ones (`^`, negation) use strict
/// comparison so equal-precedence chains nest instead.
fn shift_operator(op: Operator,
                  operators: &mut Stack<Token>,
                  operands: &mut Stack<Node>)
                  -> ParseResult<()> {
    let incoming = op.precedence();

    while let Some(top) = operators.peek() {
        if matches!(top, Token::OpenParen) {
            break;
        }
        let outranked = if op.is_right_associative() {
            top.precedence() > incoming
        } else {
            top.precedence() >= incoming
        };
        if !outranked {
            break;
        }
        reduce(operators, operands)?;
    }

    operators.push(Token::Operator(op));
    Ok(())
}

/// Pops the top operator and builds its node from the operand stack.
///
/// Binary operators attach the right operand before the left; negation
/// takes a single operand; assignment attaches the target symbol before
/// the value subtree. These attachment orders establish the LIFO
/// consumption contract documented on [`Node`].
fn reduce(operators: &mut Stack<Token>, operands: &mut Stack<Node>) -> ParseResult<()> {
    let Some(token) = operators.pop() else {
        return Ok(());
    };

    let node = match &token {
        Token::Operator(Operator::Neg) => {
            let operand = pop_operand(operands, &token)?;
            let mut node = Node::new(token);
            node.push_child(operand);
            node
        },
        Token::Operator(_) => {
            let right = pop_operand(operands, &token)?;
            let left = pop_operand(operands, &token)?;
            let mut node = Node::new(token);
            node.push_child(right);
            node.push_child(left);
            node
        },
        Token::Assign => {
            let value = pop_operand(operands, &token)?;
            let target = pop_operand(operands, &token)?;
            let mut node = Node::new(token);
            node.push_child(target);
            node.push_child(value);
            node
        },
        _ => return Err(ParseError::MissingOperand { operator: token.to_string() }),
    };

    operands.push(node);
    Ok(())
}

fn pop_operand(operands: &mut Stack<Node>, operator: &Token) -> ParseResult<Node> {
    operands.pop()
            .ok_or_else(|| ParseError::MissingOperand { operator: operator.to_string() })
}

/// Handles `,`: reduces the current argument down to the enclosing `(`
/// (without popping it) and attaches the result to the function node
/// being built, keeping arguments in left-to-right source order.
fn attach_argument(operators: &mut Stack<Token>, operands: &mut Stack<Node>) -> ParseResult<()> {
    drain_to_open_paren(operators, operands)?;

    // A comma outside a call has nothing to attach to; the reduced operand
    // simply stays on the stack.
    if matches!(operators.iter().rev().nth(1), Some(Token::Function(_))) {
        let argument = pop_operand(operands, &Token::Comma)?;
        let call = operands.peek_mut()
                           .ok_or(ParseError::MissingOperand { operator: ",".to_string() })?;
        call.push_child(argument);
    }

    Ok(())
}

/// Handles `)`: reduces down to the matching `(`, discards it, and if a
/// function marker sits beneath, completes the call node with its final
/// argument.
fn close_group(operators: &mut Stack<Token>, operands: &mut Stack<Node>) -> ParseResult<()> {
    drain_to_open_paren(operators, operands)?;
    let _ = operators.pop();

    if matches!(operators.peek(), Some(Token::Function(_))) {
        let marker = operators.pop()
                              .ok_or(ParseError::UnmatchedCloseParen)?;
        let argument = pop_operand(operands, &marker)?;
        let call = operands.peek_mut()
                           .ok_or(ParseError::MissingOperand { operator: marker.to_string() })?;
        call.push_child(argument);
    }

    Ok(())
}

fn drain_to_open_paren(operators: &mut Stack<Token>,
                       operands: &mut Stack<Node>)
                       -> ParseResult<()> {
    loop {
        match operators.peek() {
            None => return Err(ParseError::UnmatchedCloseParen),
            Some(Token::OpenParen) => return Ok(()),
            Some(_) => reduce(operators, operands)?,
        }
    }
}

/// Drains every pending operator and pops the finished root. An open
/// parenthesis surfacing here means the line ended before it was closed.
fn finish_statement(operators: &mut Stack<Token>,
                    operands: &mut Stack<Node>)
                    -> ParseResult<Node> {
    while let Some(top) = operators.peek() {
        if matches!(top, Token::OpenParen) {
            return Err(ParseError::UnmatchedOpenParen);
        }
        reduce(operators, operands)?;
    }

    let root = operands.pop()
                       .ok_or(ParseError::MissingOperand { operator: ":".to_string() })?;
    operands.clear();
    Ok(root)
}
