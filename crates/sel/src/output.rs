//! Terminal output helpers.

use serde::Deserialize;
use std::io::IsTerminal;

/// Color output mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Auto-detect based on TTY (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Should colors be used on stderr?
    /// Respects the mode and the NO_COLOR env var.
    pub fn use_colors(self) -> bool {
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }

        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stderr().is_terminal(),
        }
    }
}

/// Print a one-line error to stderr.
pub fn print_error(message: impl std::fmt::Display, colors: bool) {
    if colors {
        let label = nu_ansi_term::Color::Red.bold().paint("error");
        eprintln!("{label}: {message}");
    } else {
        eprintln!("error: {message}");
    }
}

/// Paint text bold when colors are enabled.
pub fn bold(text: &str, colors: bool) -> String {
    if colors {
        nu_ansi_term::Style::new().bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}
