//! Python backend with named bindings.
//!
//! Declarations become module-level assignments and lambdas become
//! single-parameter `lambda` expressions.

use super::{escape_reserved, with_prelude};
use crate::ir::Program;
use crate::render::{RenderRules, render};
use crate::traits::{Backend, Discipline, RenderOptions, Target};

/// Static instance of the Python backend for the registry.
pub static PYTHON_BACKEND: PythonBackend = PythonBackend;

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

fn identifier(name: &str) -> String {
    escape_reserved(name, KEYWORDS)
}

pub struct PythonBackend;

impl Backend for PythonBackend {
    fn name(&self) -> &'static str {
        "python"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["py"]
    }

    fn extension(&self) -> &'static str {
        "py"
    }

    fn description(&self) -> &'static str {
        "Python, one assignment per declaration"
    }

    fn target(&self) -> Target {
        Target::Python
    }

    fn discipline(&self) -> Discipline {
        Discipline::Named
    }

    fn render(&self, program: &Program, options: &RenderOptions) -> String {
        with_prelude(options.prelude.as_deref(), render(self, program))
    }
}

impl RenderRules for PythonBackend {
    type State = ();

    fn program(&self, _: &mut (), items: Vec<String>) -> String {
        items.join("\n")
    }

    fn declaration(&self, _: &mut (), name: &str, value: String) -> String {
        format!("{} = {value}", identifier(name))
    }

    fn lambda(&self, _: &mut (), param: &str, body: String) -> String {
        format!("(lambda {}: {body})", identifier(param))
    }

    fn application(&self, _: &mut (), operator: String, operand: String) -> String {
        format!("({operator})({operand})")
    }

    fn atom(&self, _: &mut (), name: &str, _bound: bool) -> String {
        identifier(name)
    }
}
