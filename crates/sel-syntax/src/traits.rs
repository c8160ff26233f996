//! The backend trait and its supporting types.

use crate::ir::Program;

/// What kind of text a backend produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    JavaScript,
    Python,
    /// Notation only; there is nothing to execute.
    Church,
}

impl Target {
    /// Whether output in this target can be run by an external interpreter.
    pub fn is_executable(&self) -> bool {
        !matches!(self, Target::Church)
    }
}

/// How a backend treats declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Declarations become named bindings in the output.
    Named,
    /// Declarations are recorded and substituted at each later use.
    Inlining,
}

impl Discipline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Named => "named",
            Discipline::Inlining => "inlining",
        }
    }
}

/// Caller-supplied options for a render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Runtime support text placed before the program. Ignored by backends
    /// whose output is not executable.
    pub prelude: Option<String>,
}

impl RenderOptions {
    pub fn with_prelude(prelude: impl Into<String>) -> Self {
        Self {
            prelude: Some(prelude.into()),
        }
    }
}

/// A backend renders a normalized program as text.
pub trait Backend: Send + Sync {
    /// Registry name (e.g. "javascript", "church").
    fn name(&self) -> &'static str;

    /// Alternative names accepted by the registry.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// File extension for output (e.g. "js").
    fn extension(&self) -> &'static str;

    /// One-line summary for listings.
    fn description(&self) -> &'static str;

    fn target(&self) -> Target;

    fn discipline(&self) -> Discipline;

    /// Render a program. Rendering cannot fail once a tree is normalized.
    fn render(&self, program: &Program, options: &RenderOptions) -> String;
}
