use clap::{ArgAction, Parser, Subcommand};
use sel::commands::{self, Context, ast::AstArgs, compile::CompileArgs, run::RunArgs};
use sel::{ColorMode, SelConfig};

#[derive(Parser)]
#[command(name = "sel")]
#[command(version, about = "Compile SEL lambda-calculus programs to JavaScript, Python or Church notation")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// When to color error output
    #[arg(long, value_enum, global = true, value_name = "WHEN")]
    color: Option<ColorMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a SEL file and print or write the result
    #[command(alias = "c")]
    Compile(CompileArgs),

    /// Compile a SEL file and run it with node or python3
    #[command(alias = "r")]
    Run(RunArgs),

    /// Print the program tree as JSON
    Ast(AstArgs),

    /// List available backends
    Backends,
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: restores the default disposition of a signal; no memory is touched.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    sel::init_logging(cli.verbose);

    let root = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let config = SelConfig::load(&root);
    let colors = cli
        .color
        .or(config.output.color)
        .unwrap_or_default()
        .use_colors();
    let ctx = Context { config, colors };

    let code = match cli.command {
        Commands::Compile(args) => commands::compile::run(args, &ctx),
        Commands::Run(args) => commands::run::run(args, &ctx),
        Commands::Ast(args) => commands::ast::run(args, &ctx),
        Commands::Backends => commands::backends::run(&ctx),
    };
    std::process::exit(code);
}
