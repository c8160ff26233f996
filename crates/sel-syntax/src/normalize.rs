//! One bottom-up pass from the raw parse tree to the normalized tree.
//!
//! A group whose first member is neither a declaration nor a lambda is an
//! application and must have exactly two members. Any other non-empty group
//! is kept as a sequence. Children are normalized before their parent is
//! classified, so the innermost violation is the one reported.
//!
//! The pass runs over an explicit work stack rather than the call stack, so
//! nesting depth is limited by memory only.

use crate::ast::{self, BinderKind, Node};
use crate::error::{CompileError, Result};
use crate::ir::{Expr, Program};
use crate::token::Span;

enum Task {
    /// Normalize a node, pushing its result onto the output stack.
    Visit(Node),
    /// Combine the last `count` results into a binder.
    Binder {
        kind: BinderKind,
        name: String,
        span: Span,
        count: usize,
    },
    /// Combine the last `count` results into an application or sequence.
    Group {
        sequence: bool,
        span: Span,
        count: usize,
    },
}

/// Normalize a parsed program.
pub fn normalize(program: ast::Program) -> Result<Program> {
    let mut tasks: Vec<Task> = program
        .items
        .into_iter()
        .rev()
        .map(Task::Visit)
        .collect();
    let mut done: Vec<Expr> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit(node) => visit(node, &mut tasks, &mut done)?,
            Task::Binder {
                kind,
                name,
                span,
                count,
            } => {
                let mut children = done.split_off(done.len() - count).into_iter();
                let (Some(body), None) = (children.next(), children.next()) else {
                    return Err(CompileError::MalformedBinding {
                        binder: kind,
                        name,
                        found: count,
                        span,
                    });
                };
                done.push(match kind {
                    BinderKind::Declaration => Expr::declaration(name, body),
                    BinderKind::Lambda => Expr::lambda(name, body),
                });
            }
            Task::Group {
                sequence,
                span,
                count,
            } => {
                let children = done.split_off(done.len() - count);
                if sequence {
                    done.push(Expr::group(children));
                    continue;
                }
                let mut members = children.into_iter();
                match (members.next(), members.next(), members.next()) {
                    (Some(operator), Some(operand), None) => {
                        done.push(Expr::apply(operator, operand))
                    }
                    _ => {
                        return Err(CompileError::MalformedApplication { found: count, span });
                    }
                }
            }
        }
    }

    tracing::trace!(items = done.len(), "normalized program");
    Ok(Program { body: done })
}

/// Schedule one node: leaves are finished at once, anything with children
/// queues its children ahead of the task that combines them.
fn visit(node: Node, tasks: &mut Vec<Task>, done: &mut Vec<Expr>) -> Result<()> {
    let (task, children) = match node {
        Node::Atom { name } => {
            done.push(Expr::Atom { name });
            return Ok(());
        }
        Node::Declaration(binder) => binder_task(BinderKind::Declaration, binder),
        Node::Lambda(binder) => binder_task(BinderKind::Lambda, binder),
        Node::Group(mut group) => {
            let children = std::mem::take(&mut group.children);
            let Some(first) = children.first() else {
                return Err(CompileError::MalformedGroup {
                    span: group.span.clone(),
                });
            };
            let task = Task::Group {
                sequence: first.is_binder(),
                span: group.span.clone(),
                count: children.len(),
            };
            (task, children)
        }
    };

    tasks.push(task);
    tasks.extend(children.into_iter().rev().map(Task::Visit));
    Ok(())
}

fn binder_task(kind: BinderKind, mut binder: ast::Binder) -> (Task, Vec<Node>) {
    let children = std::mem::take(&mut binder.children);
    let task = Task::Binder {
        kind,
        name: std::mem::take(&mut binder.name),
        span: binder.span.clone(),
        count: children.len(),
    };
    (task, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::parser::parse;

    fn normalized(source: &str) -> Result<Program> {
        normalize(parse(&lex(source))?)
    }

    #[test]
    fn test_application_is_synthesized() {
        let program = normalized("(f x)").unwrap();
        assert_eq!(
            program.body,
            vec![Expr::apply(Expr::atom("f"), Expr::atom("x"))]
        );
    }

    #[test]
    fn test_nested_application() {
        let program = normalized("((∧ True) False)").unwrap();
        assert_eq!(
            program.body,
            vec![Expr::apply(
                Expr::apply(Expr::atom("T_AND"), Expr::atom("T_TRUE")),
                Expr::atom("T_FALSE"),
            )]
        );
    }

    #[test]
    fn test_binder_led_group_is_a_sequence() {
        let program = normalized("((λ x x) y z)").unwrap();
        assert_eq!(
            program.body,
            vec![Expr::group(vec![
                Expr::lambda("x", Expr::atom("x")),
                Expr::atom("y"),
                Expr::atom("z"),
            ])]
        );
    }

    #[test]
    fn test_declaration() {
        let program = normalized("(let Id (λ x x))").unwrap();
        assert_eq!(
            program.declaration("Id"),
            Some(&Expr::lambda("x", Expr::atom("x")))
        );
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(
            normalized("(f ())"),
            Err(CompileError::MalformedGroup { span: 3..5 })
        );
        assert!(matches!(
            normalized("()"),
            Err(CompileError::MalformedGroup { .. })
        ));
    }

    #[test]
    fn test_application_arity() {
        assert_eq!(
            normalized("(f)"),
            Err(CompileError::MalformedApplication {
                found: 1,
                span: 0..3
            })
        );
        assert_eq!(
            normalized("(f x y)"),
            Err(CompileError::MalformedApplication {
                found: 3,
                span: 0..7
            })
        );
    }

    #[test]
    fn test_innermost_error_wins() {
        assert!(matches!(
            normalized("(a (b) c)"),
            Err(CompileError::MalformedApplication { found: 1, .. })
        ));
    }

    #[test]
    fn test_binder_arity() {
        assert_eq!(
            normalized("(let x)"),
            Err(CompileError::MalformedBinding {
                binder: BinderKind::Declaration,
                name: "x".to_string(),
                found: 0,
                span: 0..7,
            })
        );
        assert!(matches!(
            normalized("(λ x a b)"),
            Err(CompileError::MalformedBinding {
                binder: BinderKind::Lambda,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 10_000;
        let source = format!("{}x{}", "(f ".repeat(depth), ")".repeat(depth));
        let program = normalized(&source).unwrap();
        let mut expr = &program.body[0];
        let mut levels = 0;
        while let Expr::Application { operand, .. } = expr {
            expr = operand.as_ref();
            levels += 1;
        }
        assert_eq!(levels, depth);
        assert_eq!(expr, &Expr::atom("x"));
    }

    #[test]
    fn test_error_deep_inside_nesting() {
        let depth = 10_000;
        let source = format!("{}(x y z){}", "(f ".repeat(depth), ")".repeat(depth));
        assert!(matches!(
            normalized(&source),
            Err(CompileError::MalformedApplication { found: 3, .. })
        ));
    }
}
