//! The `sel` command-line compiler.
//!
//! Wraps [`sel_syntax`] with everything needed to use it as a tool: reading
//! sources, the embedded base library and runtime preludes, configuration,
//! error reporting, and running compiled programs.

pub mod commands;
pub mod config;
pub mod diagnostic;
pub mod output;
pub mod source;

pub use config::SelConfig;
pub use output::ColorMode;
pub use source::SourceUnit;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SEL_LOG";

/// Install the stderr logger. `SEL_LOG` takes precedence over `verbosity`.
pub fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
