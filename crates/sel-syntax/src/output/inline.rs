//! Let-free JavaScript backend.
//!
//! Declarations produce no output. Their rendered values are recorded and
//! substituted wherever the name is later used, so every remaining top-level
//! expression is closed; they are separated by `;` like statements. A name is
//! only substituted once its declaration has been visited; earlier uses stay
//! literal.
//!
//! Substitution is textual. A free name inside a recorded value is captured
//! by a lambda with the same parameter at the use site: `(let k y)` followed
//! by `((λ y k) z)` renders as `(y => y)(z)`. Sources built on the base
//! library do not declare names with free variables, so this never arises
//! there.

use super::javascript::identifier;
use super::with_prelude;
use crate::ir::Program;
use crate::render::{RenderRules, render};
use crate::traits::{Backend, Discipline, RenderOptions, Target};
use std::collections::HashMap;

/// Static instance of the let-free JavaScript backend for the registry.
pub static INLINE_BACKEND: InlineBackend = InlineBackend;

pub struct InlineBackend;

impl Backend for InlineBackend {
    fn name(&self) -> &'static str {
        "javascript-inline"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["let-free", "point-free"]
    }

    fn extension(&self) -> &'static str {
        "js"
    }

    fn description(&self) -> &'static str {
        "JavaScript with every declaration inlined at its use sites"
    }

    fn target(&self) -> Target {
        Target::JavaScript
    }

    fn discipline(&self) -> Discipline {
        Discipline::Inlining
    }

    fn render(&self, program: &Program, options: &RenderOptions) -> String {
        with_prelude(options.prelude.as_deref(), render(self, program))
    }
}

impl RenderRules for InlineBackend {
    type State = HashMap<String, String>;

    fn program(&self, heap: &mut Self::State, items: Vec<String>) -> String {
        tracing::trace!(inlined = heap.len(), "rendered let-free program");
        let statements: Vec<String> = items.into_iter().filter(|item| !item.is_empty()).collect();
        statements.join(";\n")
    }

    fn declaration(&self, heap: &mut Self::State, name: &str, value: String) -> String {
        heap.insert(name.to_string(), value);
        String::new()
    }

    fn lambda(&self, _: &mut Self::State, param: &str, body: String) -> String {
        format!("({} => {body})", identifier(param))
    }

    fn application(&self, _: &mut Self::State, operator: String, operand: String) -> String {
        format!("{operator}({operand})")
    }

    fn atom(&self, heap: &mut Self::State, name: &str, bound: bool) -> String {
        match heap.get(name) {
            Some(value) if !bound => value.clone(),
            _ => identifier(name),
        }
    }
}
