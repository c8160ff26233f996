//! Compiler for SEL, a parenthesized surface syntax for the untyped lambda
//! calculus.
//!
//! # Architecture
//!
//! ```text
//!  source ──> lexer ──> parser ──> normalize ──┬─> javascript
//!             (token)   (ast)      (ir)        ├─> javascript-inline
//!                                              ├─> church
//!                                              └─> python
//! ```
//!
//! The lexer never fails. The parser checks delimiter balance, and the
//! normalizer checks group and binder arity and turns operator/operand
//! groups into explicit applications. Rendering works on the normalized
//! tree and cannot fail.
//!
//! # Example
//!
//! ```
//! let js = sel_syntax::render("(let Id (λ x x)) (Id y)", "javascript").unwrap();
//! assert_eq!(js, "const Id = (x => x);\nId(y);");
//!
//! let inlined = sel_syntax::render("(let Id (λ x x)) (Id y)", "let-free").unwrap();
//! assert_eq!(inlined, "(x => x)(y)");
//! ```

pub mod ast;
pub mod error;
pub mod ir;
pub mod lexer;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod registry;
pub mod render;
pub mod token;
pub mod traits;

// Re-exports: errors
pub use error::{CompileError, Result, Unbalanced};

// Re-exports: trees
pub use ast::BinderKind;
pub use ir::{Expr, Program};

// Re-exports: traits
pub use render::RenderRules;
pub use traits::{Backend, Discipline, RenderOptions, Target};

// Re-exports: registry
pub use registry::{backend_for_name, backends, register_backend};

// Re-exports: built-in backends
#[cfg(feature = "write-church")]
pub use output::{CHURCH_BACKEND, ChurchBackend};
#[cfg(feature = "write-javascript")]
pub use output::{INLINE_BACKEND, InlineBackend, JAVASCRIPT_BACKEND, JavaScriptBackend};
#[cfg(feature = "write-python")]
pub use output::{PYTHON_BACKEND, PythonBackend};

/// Lex, parse and normalize a source text.
pub fn compile(source: &str) -> Result<Program> {
    let tokens = lexer::lex(source);
    let raw = parser::parse(&tokens)?;
    let program = normalize::normalize(raw)?;
    tracing::debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        items = program.body.len(),
        "compiled source"
    );
    Ok(program)
}

/// Compile a source text and render it with the named backend.
pub fn render(source: &str, backend: &str) -> Result<String> {
    render_with(source, backend, &RenderOptions::default())
}

/// Like [`render`], with caller-supplied options such as a prelude.
///
/// The backend is resolved before the source is looked at, so an unknown
/// name is reported even for malformed input.
pub fn render_with(source: &str, backend: &str, options: &RenderOptions) -> Result<String> {
    let backend = resolve(backend)?;
    let program = compile(source)?;
    Ok(backend.render(&program, options))
}

/// Render an already normalized program with the named backend.
pub fn render_program(program: &Program, backend: &str, options: &RenderOptions) -> Result<String> {
    Ok(resolve(backend)?.render(program, options))
}

fn resolve(name: &str) -> Result<&'static dyn Backend> {
    let backend =
        backend_for_name(name).ok_or_else(|| CompileError::UnknownBackend(name.to_string()))?;
    tracing::debug!(backend = backend.name(), "resolved backend");
    Ok(backend)
}
