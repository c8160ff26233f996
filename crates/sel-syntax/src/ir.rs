//! Normalized tree consumed by every backend.
//!
//! Built only by [`crate::normalize`]. Compared to the raw parse tree, every
//! group here is non-empty, every binder owns exactly one expression, and
//! operator/operand pairs are explicit [`Expr::Application`] nodes.

use serde::Serialize;

/// A normalized program: top-level expressions in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    pub body: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// `(let NAME VALUE)`
    Declaration { name: String, value: Box<Expr> },
    /// `(λ PARAM BODY)`
    Lambda { param: String, body: Box<Expr> },
    Atom { name: String },
    /// A group led by a binder. Its members are rendered back to back.
    Group { children: Vec<Expr> },
    /// `(OPERATOR OPERAND)`
    Application {
        operator: Box<Expr>,
        operand: Box<Expr>,
    },
}

impl Expr {
    pub fn atom(name: impl Into<String>) -> Self {
        Expr::Atom { name: name.into() }
    }

    pub fn lambda(param: impl Into<String>, body: Expr) -> Self {
        Expr::Lambda {
            param: param.into(),
            body: Box::new(body),
        }
    }

    pub fn declaration(name: impl Into<String>, value: Expr) -> Self {
        Expr::Declaration {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn apply(operator: Expr, operand: Expr) -> Self {
        Expr::Application {
            operator: Box::new(operator),
            operand: Box::new(operand),
        }
    }

    pub fn group(children: Vec<Expr>) -> Self {
        Expr::Group { children }
    }
}

impl Program {
    /// Top-level declarations as `(name, value)` pairs, in document order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.body.iter().filter_map(|expr| match expr {
            Expr::Declaration { name, value } => Some((name.as_str(), value.as_ref())),
            _ => None,
        })
    }

    /// Look up a top-level declaration by name. The last one wins.
    pub fn declaration(&self, name: &str) -> Option<&Expr> {
        self.declarations()
            .filter(|(n, _)| *n == name)
            .map(|(_, value)| value)
            .last()
    }
}

// Deeply nested trees are torn down from a work list; the derived drop glue
// would recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expr {
    /// Move every direct child into `out`, leaving empty atoms behind.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Atom { .. } => {}
            Expr::Declaration { value: child, .. } | Expr::Lambda { body: child, .. } => {
                out.push(std::mem::replace(child.as_mut(), Expr::hole()));
            }
            Expr::Application { operator, operand } => {
                out.push(std::mem::replace(operator.as_mut(), Expr::hole()));
                out.push(std::mem::replace(operand.as_mut(), Expr::hole()));
            }
            Expr::Group { children } => out.append(children),
        }
    }

    fn hole() -> Self {
        Expr::Atom {
            name: String::new(),
        }
    }
}
