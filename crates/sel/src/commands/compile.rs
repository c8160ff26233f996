//! Compile command - render a SEL program with one backend.

use super::{Context, InputArgs, compile_unit, resolve_backend};
use crate::source::prelude_for;
use anyhow::Context as _;
use clap::Args;
use sel_syntax::{Backend, Program, RenderOptions, Target};
use std::path::PathBuf;

/// Compile command arguments
#[derive(Args, Debug, Clone)]
pub struct CompileArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Backend to render with (see `sel backends`)
    #[arg(short, long)]
    pub backend: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not inject the runtime prelude
    #[arg(long)]
    pub no_prelude: bool,

    /// Append the Church notation of the program as a comment (JavaScript only)
    #[arg(long)]
    pub church_comment: bool,
}

/// Run the compile command
pub fn run(args: CompileArgs, ctx: &Context) -> i32 {
    let Some(backend) = resolve_backend(args.backend.as_deref(), ctx) else {
        return 1;
    };
    if args.church_comment && backend.target() != Target::JavaScript {
        ctx.error(format!(
            "--church-comment needs a JavaScript backend, not '{}'",
            backend.name()
        ));
        return 1;
    }

    let Some(unit) = args.input.load(ctx) else {
        return 1;
    };
    let Some(program) = compile_unit(&unit, ctx) else {
        return 1;
    };

    let with_prelude = !args.no_prelude && ctx.config.compile.prelude();
    let mut code = render(backend, &program, with_prelude);
    if args.church_comment {
        code.push_str(&church_comment(&program));
    }

    match write_output(args.output.as_deref(), &code) {
        Ok(()) => 0,
        Err(e) => {
            ctx.error(format!("{e:#}"));
            1
        }
    }
}

/// Render a program, attaching the target's prelude when asked to.
pub fn render(backend: &dyn Backend, program: &Program, with_prelude: bool) -> String {
    let options = RenderOptions {
        prelude: prelude_for(backend.target())
            .filter(|_| with_prelude)
            .map(str::to_string),
    };
    tracing::debug!(backend = backend.name(), with_prelude, "rendering");
    backend.render(program, &options)
}

fn church_comment(program: &Program) -> String {
    let church = sel_syntax::CHURCH_BACKEND.render(program, &RenderOptions::default());
    format!("\n\n/*\n{church}\n*/")
}

fn write_output(path: Option<&std::path::Path>, code: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{code}\n"))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{code}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_and_without_prelude() {
        let program = sel_syntax::compile("(let Id (λ x x))").unwrap();
        let backend = sel_syntax::backend_for_name("javascript").unwrap();

        let bare = render(backend, &program, false);
        assert_eq!(bare, "const Id = (x => x);");

        let full = render(backend, &program, true);
        assert!(full.starts_with("// Runtime support"));
        assert!(full.ends_with("const Id = (x => x);"));
    }

    #[test]
    fn test_church_backend_never_gets_a_prelude() {
        let program = sel_syntax::compile("(let Id (λ x x)) Id").unwrap();
        let backend = sel_syntax::backend_for_name("church").unwrap();
        assert_eq!(render(backend, &program, true), "(λ x.x)");
    }

    #[test]
    fn test_church_comment() {
        let program = sel_syntax::compile("(f x)").unwrap();
        assert_eq!(church_comment(&program), "\n\n/*\n(f) (x)\n*/");
    }
}
