//! Generic tree walker shared by all backends.
//!
//! A backend supplies a [`RenderRules`] table with one method per node kind.
//! [`render`] walks the normalized tree top-down, renders children first,
//! and hands the rendered text to the matching rule. Mutable state (such as
//! the substitution map of an inlining backend) lives in a fresh
//! [`RenderRules::State`] value created for every call, so a backend value
//! itself is never mutated and can be shared freely.

use crate::ir::{Expr, Program};

/// Per-kind rendering rules for one backend.
pub trait RenderRules {
    /// Scratch state for a single render call.
    type State: Default;

    /// Combine the rendered top-level expressions.
    fn program(&self, state: &mut Self::State, items: Vec<String>) -> String;

    fn declaration(&self, state: &mut Self::State, name: &str, value: String) -> String;

    fn lambda(&self, state: &mut Self::State, param: &str, body: String) -> String;

    fn application(&self, state: &mut Self::State, operator: String, operand: String)
    -> String;

    /// Render a leaf. `bound` is true when the name refers to the parameter
    /// of an enclosing lambda.
    fn atom(&self, state: &mut Self::State, name: &str, bound: bool) -> String {
        let _ = (state, bound);
        name.to_string()
    }

    /// A binder-led sequence renders as its members back to back.
    fn group(&self, state: &mut Self::State, children: Vec<String>) -> String {
        let _ = state;
        children.concat()
    }
}

/// Render a normalized program with the given rules.
pub fn render<R: RenderRules + ?Sized>(rules: &R, program: &Program) -> String {
    let mut state = R::State::default();
    let items = program
        .body
        .iter()
        .map(|expr| walk(rules, &mut state, expr))
        .collect();
    rules.program(&mut state, items)
}

/// One pending unit of work for [`walk`].
enum Step<'a> {
    Enter(&'a Expr),
    Declaration(&'a str),
    /// Also closes the parameter's scope.
    Lambda(&'a str),
    Application,
    Group(usize),
}

/// Render one top-level expression. Children are rendered before the rule
/// for their parent runs, in source order, using an explicit work stack so
/// deep nesting does not exhaust the call stack.
fn walk<R: RenderRules + ?Sized>(rules: &R, state: &mut R::State, expr: &Expr) -> String {
    let mut steps = vec![Step::Enter(expr)];
    let mut scope: Vec<&str> = Vec::new();
    let mut done: Vec<String> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(expr) => match expr {
                Expr::Declaration { name, value } => {
                    steps.push(Step::Declaration(name));
                    steps.push(Step::Enter(value));
                }
                Expr::Lambda { param, body } => {
                    scope.push(param);
                    steps.push(Step::Lambda(param));
                    steps.push(Step::Enter(body));
                }
                Expr::Atom { name } => {
                    let bound = scope.contains(&name.as_str());
                    done.push(rules.atom(state, name, bound));
                }
                Expr::Group { children } => {
                    steps.push(Step::Group(children.len()));
                    steps.extend(children.iter().rev().map(Step::Enter));
                }
                Expr::Application { operator, operand } => {
                    steps.push(Step::Application);
                    steps.push(Step::Enter(operand));
                    steps.push(Step::Enter(operator));
                }
            },
            Step::Declaration(name) => {
                let value = done.pop().unwrap_or_default();
                done.push(rules.declaration(state, name, value));
            }
            Step::Lambda(param) => {
                scope.pop();
                let body = done.pop().unwrap_or_default();
                done.push(rules.lambda(state, param, body));
            }
            Step::Application => {
                let operand = done.pop().unwrap_or_default();
                let operator = done.pop().unwrap_or_default();
                done.push(rules.application(state, operator, operand));
            }
            Step::Group(count) => {
                let children = done.split_off(done.len() - count);
                done.push(rules.group(state, children));
            }
        }
    }

    done.pop().unwrap_or_default()
}
