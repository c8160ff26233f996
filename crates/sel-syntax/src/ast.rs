//! Raw parse tree, as produced by the parser.
//!
//! The raw tree mirrors the source grouping exactly. Groups may be empty and
//! binders may own any number of children; both are checked later by
//! [`crate::normalize`], which is also the only place applications are
//! recognised.

use crate::token::Span;
use serde::Serialize;

/// Root of a parsed source file. Item order is document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    pub items: Vec<Node>,
}

/// A node of the raw parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// `(let NAME ...)`
    Declaration(Binder),
    /// `(λ PARAM ...)`
    Lambda(Binder),
    Atom { name: String },
    /// `( ... )` that does not start with an introducer.
    Group(Group),
}

/// Which introducer opened a binder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinderKind {
    Declaration,
    Lambda,
}

impl std::fmt::Display for BinderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinderKind::Declaration => f.write_str("let"),
            BinderKind::Lambda => f.write_str("λ"),
        }
    }
}

/// A binding form: the bound name and everything up to the closing `)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binder {
    pub name: String,
    pub children: Vec<Node>,
    #[serde(skip)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub children: Vec<Node>,
    #[serde(skip)]
    pub span: Span,
}

impl Node {
    pub fn atom(name: impl Into<String>) -> Self {
        Node::Atom { name: name.into() }
    }

    /// True for the two binding forms.
    pub fn is_binder(&self) -> bool {
        matches!(self, Node::Declaration(_) | Node::Lambda(_))
    }

    /// Source span covered by this node, when it was recorded.
    pub fn span(&self) -> Option<&Span> {
        match self {
            Node::Declaration(binder) | Node::Lambda(binder) => Some(&binder.span),
            Node::Group(group) => Some(&group.span),
            Node::Atom { .. } => None,
        }
    }
}

impl Program {
    /// Number of nodes in the tree, including the root items.
    pub fn node_count(&self) -> usize {
        let mut pending: Vec<&Node> = self.items.iter().collect();
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                Node::Atom { .. } => {}
                Node::Declaration(binder) | Node::Lambda(binder) => {
                    pending.extend(binder.children.iter())
                }
                Node::Group(group) => pending.extend(group.children.iter()),
            }
        }
        count
    }
}

// Nesting depth is bounded only by the input, so subtrees are torn down from
// a work list instead of through recursive drop glue.
impl Drop for Binder {
    fn drop(&mut self) {
        dismantle(std::mem::take(&mut self.children));
    }
}

impl Drop for Group {
    fn drop(&mut self) {
        dismantle(std::mem::take(&mut self.children));
    }
}

fn dismantle(mut pending: Vec<Node>) {
    while let Some(node) = pending.pop() {
        match node {
            Node::Atom { .. } => {}
            Node::Declaration(mut binder) | Node::Lambda(mut binder) => {
                pending.append(&mut binder.children)
            }
            Node::Group(mut group) => pending.append(&mut group.children),
        }
    }
}
