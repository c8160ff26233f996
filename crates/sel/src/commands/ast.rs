//! Ast command - dump the parsed or normalized tree as JSON.

use super::{Context, InputArgs, compile_unit};
use crate::diagnostic;
use clap::Args;
use sel_syntax::{lexer, parser};

/// Ast command arguments
#[derive(Args, Debug, Clone)]
pub struct AstArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Dump the raw parse tree instead of the normalized tree
    #[arg(long)]
    pub raw: bool,
}

/// Run the ast command
pub fn run(args: AstArgs, ctx: &Context) -> i32 {
    let Some(unit) = args.input.load(ctx) else {
        return 1;
    };

    let json = if args.raw {
        match parser::parse(&lexer::lex(unit.text())) {
            Ok(tree) => serde_json::to_string_pretty(&tree),
            Err(e) => {
                diagnostic::report(&unit, &e, ctx.colors);
                return 1;
            }
        }
    } else {
        let Some(program) = compile_unit(&unit, ctx) else {
            return 1;
        };
        serde_json::to_string_pretty(&program)
    };

    match json {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(e) => {
            ctx.error(e);
            1
        }
    }
}
