//! Parser: token stream to raw parse tree.
//!
//! The parser keeps a stack of open frames. `(` pushes a frame, `)` pops it
//! and appends the finished node to whatever is open below it (or to the
//! program root). It checks delimiter balance and that every introducer is
//! followed by a name, and nothing else.

use crate::ast::{Binder, BinderKind, Group, Node, Program};
use crate::error::{CompileError, Result, Unbalanced};
use crate::token::{Span, Token};

struct Frame {
    kind: FrameKind,
    children: Vec<Node>,
    start: usize,
}

enum FrameKind {
    Group,
    Binder(BinderKind, String),
}

impl Frame {
    fn close(self, end: usize) -> Node {
        let span = self.start..end;
        match self.kind {
            FrameKind::Group => Node::Group(Group {
                children: self.children,
                span,
            }),
            FrameKind::Binder(kind, name) => {
                let binder = Binder {
                    name,
                    children: self.children,
                    span,
                };
                match kind {
                    BinderKind::Declaration => Node::Declaration(binder),
                    BinderKind::Lambda => Node::Lambda(binder),
                }
            }
        }
    }
}

/// Parse a lexed token stream into a [`Program`].
pub fn parse(tokens: &[(Token, Span)]) -> Result<Program> {
    let mut items = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut tokens = tokens.iter().peekable();

    while let Some((token, span)) = tokens.next() {
        match token {
            Token::Open => {
                let introducer = match tokens.peek() {
                    Some((Token::Lambda, _)) => Some(BinderKind::Lambda),
                    Some((Token::Let, _)) => Some(BinderKind::Declaration),
                    _ => None,
                };
                let kind = match introducer {
                    None => FrameKind::Group,
                    Some(binder) => {
                        let intro_end = tokens.next().map_or(span.end, |(_, s)| s.end);
                        match tokens.next() {
                            Some((Token::Atom(name), _)) => FrameKind::Binder(binder, name.clone()),
                            Some((other, other_span)) => {
                                return Err(CompileError::MissingBinder {
                                    introducer: binder,
                                    found: other.describe(),
                                    offset: other_span.start,
                                });
                            }
                            None => {
                                return Err(CompileError::MissingBinder {
                                    introducer: binder,
                                    found: "end of input".to_string(),
                                    offset: intro_end,
                                });
                            }
                        }
                    }
                };
                stack.push(Frame {
                    kind,
                    children: Vec::new(),
                    start: span.start,
                });
            }
            Token::Close => {
                let frame = stack.pop().ok_or(CompileError::UnbalancedDelimiter {
                    kind: Unbalanced::Unexpected,
                    offset: span.start,
                })?;
                let node = frame.close(span.end);
                append(&mut stack, &mut items, node);
            }
            // An introducer outside the `(` position carries no structure.
            Token::Lambda => append(&mut stack, &mut items, Node::atom("λ")),
            Token::Let => append(&mut stack, &mut items, Node::atom("let")),
            Token::Atom(name) => append(&mut stack, &mut items, Node::atom(name.clone())),
        }
    }

    if let Some(frame) = stack.last() {
        return Err(CompileError::UnbalancedDelimiter {
            kind: Unbalanced::Unclosed,
            offset: frame.start,
        });
    }

    let program = Program { items };
    tracing::trace!(nodes = program.node_count(), "parsed program");
    Ok(program)
}

fn append(stack: &mut [Frame], items: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(frame) => frame.children.push(node),
        None => items.push(node),
    }
}
