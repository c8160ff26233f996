//! Run command - compile a program and pipe it into an interpreter.

use super::{Context, InputArgs, compile_unit, resolve_backend};
use crate::config::RuntimeConfig;
use clap::Args;
use sel_syntax::Backend;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Run command arguments
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Backend to render with; must produce an executable target
    #[arg(short, long)]
    pub backend: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("backend '{0}' produces notation only; there is nothing to run")]
    NotExecutable(&'static str),

    #[error("runtime '{command}' not found")]
    RuntimeNotFound {
        command: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to run '{command}'")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Find the interpreter for a backend's output.
pub fn locate_runtime(
    backend: &dyn Backend,
    runtime: &RuntimeConfig,
) -> Result<PathBuf, RunError> {
    let command = runtime
        .command(backend.target())
        .ok_or(RunError::NotExecutable(backend.name()))?;
    which::which(command).map_err(|source| RunError::RuntimeNotFound {
        command: command.to_string(),
        source,
    })
}

/// Feed a program to an interpreter on stdin and wait for it.
pub fn execute(runtime: &std::path::Path, code: &str) -> Result<i32, RunError> {
    let io_error = |source| RunError::Io {
        command: runtime.display().to_string(),
        source,
    };

    let mut child = Command::new(runtime)
        .arg("-")
        .stdin(Stdio::piped())
        .spawn()
        .map_err(io_error)?;

    // The pipe is closed when `stdin` drops, before the wait.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(code.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait().map_err(io_error)?;
    tracing::debug!(%status, "runtime exited");
    match written {
        // The interpreter stopped reading; its exit status says why.
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            tracing::debug!("runtime closed its input early");
        }
        Err(e) => return Err(io_error(e)),
        Ok(()) => {}
    }
    Ok(status.code().unwrap_or(1))
}

/// Run the run command
pub fn run(args: RunArgs, ctx: &Context) -> i32 {
    let Some(backend) = resolve_backend(args.backend.as_deref(), ctx) else {
        return 1;
    };
    let runtime = match locate_runtime(backend, &ctx.config.runtime) {
        Ok(path) => path,
        Err(e) => {
            ctx.error(error_chain(&e));
            return 1;
        }
    };

    let Some(unit) = args.input.load(ctx) else {
        return 1;
    };
    let Some(program) = compile_unit(&unit, ctx) else {
        return 1;
    };

    let code = super::compile::render(backend, &program, true);
    tracing::debug!(runtime = %runtime.display(), bytes = code.len(), "running program");
    match execute(&runtime, &code) {
        Ok(code) => code,
        Err(e) => {
            ctx.error(error_chain(&e));
            1
        }
    }
}

fn error_chain(error: &RunError) -> String {
    match std::error::Error::source(error) {
        Some(source) => format!("{error}: {source}"),
        None => error.to_string(),
    }
}
