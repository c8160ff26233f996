//! JavaScript backend with named bindings.
//!
//! Every declaration becomes a `const` statement and every lambda an arrow
//! function of one parameter, so `(let Id (λ x x)) (Id y)` renders as
//!
//! ```text
//! const Id = (x => x);
//! Id(y);
//! ```

use super::{escape_reserved, with_prelude};
use crate::ir::Program;
use crate::render::{RenderRules, render};
use crate::traits::{Backend, Discipline, RenderOptions, Target};

/// Static instance of the JavaScript backend for the registry.
pub static JAVASCRIPT_BACKEND: JavaScriptBackend = JavaScriptBackend;

/// Words that cannot be used as a binding name in strict-mode JavaScript.
const RESERVED: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Map an atom to a usable JavaScript identifier.
pub(crate) fn identifier(name: &str) -> String {
    escape_reserved(name, RESERVED)
}

pub struct JavaScriptBackend;

impl Backend for JavaScriptBackend {
    fn name(&self) -> &'static str {
        "javascript"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["js"]
    }

    fn extension(&self) -> &'static str {
        "js"
    }

    fn description(&self) -> &'static str {
        "JavaScript, one const binding per declaration"
    }

    fn target(&self) -> Target {
        Target::JavaScript
    }

    fn discipline(&self) -> Discipline {
        Discipline::Named
    }

    fn render(&self, program: &Program, options: &RenderOptions) -> String {
        with_prelude(options.prelude.as_deref(), render(self, program))
    }
}

impl RenderRules for JavaScriptBackend {
    type State = ();

    fn program(&self, _: &mut (), items: Vec<String>) -> String {
        if items.is_empty() {
            return String::new();
        }
        let mut output = items.join(";\n");
        output.push(';');
        output
    }

    fn declaration(&self, _: &mut (), name: &str, value: String) -> String {
        format!("const {} = {value}", identifier(name))
    }

    fn lambda(&self, _: &mut (), param: &str, body: String) -> String {
        format!("({} => {body})", identifier(param))
    }

    fn application(&self, _: &mut (), operator: String, operand: String) -> String {
        format!("{operator}({operand})")
    }

    fn atom(&self, _: &mut (), name: &str, _bound: bool) -> String {
        identifier(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Expr;

    fn emit(body: Vec<Expr>) -> String {
        JAVASCRIPT_BACKEND.render(&Program { body }, &RenderOptions::default())
    }

    #[test]
    fn test_declaration_and_call() {
        let js = emit(vec![
            Expr::declaration("Id", Expr::lambda("x", Expr::atom("x"))),
            Expr::apply(Expr::atom("Id"), Expr::atom("T_TRUE")),
        ]);
        assert_eq!(js, "const Id = (x => x);\nId(T_TRUE);");
    }

    #[test]
    fn test_curried_application() {
        let js = emit(vec![Expr::apply(
            Expr::apply(Expr::atom("T_AND"), Expr::atom("T_TRUE")),
            Expr::atom("T_FALSE"),
        )]);
        assert_eq!(js, "T_AND(T_TRUE)(T_FALSE);");
    }

    #[test]
    fn test_reserved_words_are_escaped() {
        let js = emit(vec![Expr::declaration(
            "new",
            Expr::lambda("this", Expr::atom("this")),
        )]);
        assert_eq!(js, "const new_ = (this_ => this_);");
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(emit(vec![]), "");
    }

    #[test]
    fn test_prelude_comes_first() {
        let program = Program {
            body: vec![Expr::atom("x")],
        };
        let js = JAVASCRIPT_BACKEND.render(&program, &RenderOptions::with_prelude("// prelude\n"));
        assert_eq!(js, "// prelude\n\nx;");
    }
}
