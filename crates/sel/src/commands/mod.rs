//! Command implementations for the `sel` binary.
//!
//! Each command takes its clap arguments plus a [`Context`] and returns a
//! process exit code. Errors are printed here, not propagated to `main`.

pub mod ast;
pub mod backends;
pub mod compile;
pub mod run;

use crate::config::SelConfig;
use crate::source::SourceUnit;
use crate::{diagnostic, output};
use clap::Args;
use sel_syntax::{Backend, Program};
use std::path::PathBuf;

/// Settings resolved once per invocation.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: SelConfig,
    pub colors: bool,
}

impl Context {
    pub fn error(&self, message: impl std::fmt::Display) {
        output::print_error(message, self.colors);
    }
}

/// Arguments shared by commands that read a program.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// SEL source file, use - for stdin
    pub input: PathBuf,

    /// Do not prepend the base combinator library
    #[arg(long)]
    pub no_base: bool,
}

impl InputArgs {
    /// Read the input, honouring `--no-base` and the configured default.
    pub fn load(&self, ctx: &Context) -> Option<SourceUnit> {
        let with_base = !self.no_base && ctx.config.compile.base();
        match SourceUnit::read(&self.input, with_base) {
            Ok(unit) => Some(unit),
            Err(e) => {
                ctx.error(format!("{e:#}"));
                None
            }
        }
    }
}

/// Look up a backend by name, falling back to the configured default.
pub(crate) fn resolve_backend(name: Option<&str>, ctx: &Context) -> Option<&'static dyn Backend> {
    let name = name.unwrap_or_else(|| ctx.config.compile.backend());
    let backend = sel_syntax::backend_for_name(name);
    if backend.is_none() {
        let known: Vec<_> = sel_syntax::backends().iter().map(|b| b.name()).collect();
        ctx.error(format!(
            "{} (available: {})",
            sel_syntax::CompileError::UnknownBackend(name.to_string()),
            known.join(", ")
        ));
    }
    backend
}

/// Compile a unit, printing a diagnostic on failure.
pub(crate) fn compile_unit(unit: &SourceUnit, ctx: &Context) -> Option<Program> {
    match sel_syntax::compile(unit.text()) {
        Ok(program) => Some(program),
        Err(e) => {
            diagnostic::report(unit, &e, ctx.colors);
            None
        }
    }
}
