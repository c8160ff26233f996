//! Church notation backend.
//!
//! Produces a plain lambda-calculus transcription such as
//! `(λ f.(λ x.(f) (x)))`. Declarations are inlined the same way as in the
//! let-free JavaScript backend, including its textual substitution: free
//! names in a recorded value can be captured at the use site. The output is
//! notation only and never carries a prelude.

use crate::ir::Program;
use crate::render::{RenderRules, render};
use crate::traits::{Backend, Discipline, RenderOptions, Target};
use std::collections::HashMap;

/// Static instance of the Church notation backend for the registry.
pub static CHURCH_BACKEND: ChurchBackend = ChurchBackend;

pub struct ChurchBackend;

impl Backend for ChurchBackend {
    fn name(&self) -> &'static str {
        "church"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["lambda"]
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn description(&self) -> &'static str {
        "lambda-calculus notation with declarations inlined"
    }

    fn target(&self) -> Target {
        Target::Church
    }

    fn discipline(&self) -> Discipline {
        Discipline::Inlining
    }

    fn render(&self, program: &Program, _options: &RenderOptions) -> String {
        render(self, program)
    }
}

impl RenderRules for ChurchBackend {
    type State = HashMap<String, String>;

    fn program(&self, _: &mut Self::State, items: Vec<String>) -> String {
        items.concat()
    }

    fn declaration(&self, heap: &mut Self::State, name: &str, value: String) -> String {
        heap.insert(name.to_string(), value);
        String::new()
    }

    fn lambda(&self, _: &mut Self::State, param: &str, body: String) -> String {
        format!("(λ {param}.{body})")
    }

    fn application(&self, _: &mut Self::State, operator: String, operand: String) -> String {
        format!("({operator}) ({operand})")
    }

    fn atom(&self, heap: &mut Self::State, name: &str, bound: bool) -> String {
        match heap.get(name) {
            Some(value) if !bound => value.clone(),
            _ => name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Expr;

    fn emit(body: Vec<Expr>) -> String {
        CHURCH_BACKEND.render(&Program { body }, &RenderOptions::default())
    }

    #[test]
    fn test_numeral_one() {
        let church = emit(vec![Expr::lambda(
            "f",
            Expr::lambda("x", Expr::apply(Expr::atom("f"), Expr::atom("x"))),
        )]);
        assert_eq!(church, "(λ f.(λ x.(f) (x)))");
    }

    #[test]
    fn test_declarations_are_inlined() {
        let church = emit(vec![
            Expr::declaration("Id", Expr::lambda("x", Expr::atom("x"))),
            Expr::apply(Expr::atom("Id"), Expr::atom("y")),
        ]);
        assert_eq!(church, "((λ x.x)) (y)");
    }

    #[test]
    fn test_substitution_captures_free_names() {
        let church = emit(vec![
            Expr::declaration("k", Expr::atom("y")),
            Expr::apply(Expr::lambda("y", Expr::atom("k")), Expr::atom("z")),
        ]);
        assert_eq!(church, "((λ y.y)) (z)");
    }

    #[test]
    fn test_prelude_is_ignored() {
        let program = Program {
            body: vec![Expr::atom("y")],
        };
        let church = CHURCH_BACKEND.render(&program, &RenderOptions::with_prelude("const a = 1;"));
        assert_eq!(church, "y");
    }
}
