//! Configuration system for sel.
//!
//! Loads config from:
//! 1. Global: ~/.config/sel/config.toml
//! 2. Per-project: .sel/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [compile]
//! backend = "javascript"
//! base = true
//! prelude = true
//!
//! [runtime]
//! javascript = "node"
//! python = "python3"
//!
//! [output]
//! color = "auto"
//! ```
//!
//! Every field is optional; unset fields fall back to the defaults above.
//! Command-line flags override both files.

use crate::output::ColorMode;
use sel_syntax::Target;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Compilation defaults.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CompileConfig {
    /// Backend used when `--backend` is not given.
    pub backend: Option<String>,
    /// Whether to prepend the base combinator library.
    pub base: Option<bool>,
    /// Whether to inject the runtime prelude.
    pub prelude: Option<bool>,
}

impl CompileConfig {
    pub fn backend(&self) -> &str {
        self.backend.as_deref().unwrap_or("javascript")
    }

    pub fn base(&self) -> bool {
        self.base.unwrap_or(true)
    }

    pub fn prelude(&self) -> bool {
        self.prelude.unwrap_or(true)
    }
}

/// External interpreters used by `sel run`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    pub javascript: Option<String>,
    pub python: Option<String>,
}

impl RuntimeConfig {
    /// Interpreter command for a target, if it has one.
    pub fn command(&self, target: Target) -> Option<&str> {
        match target {
            Target::JavaScript => Some(self.javascript.as_deref().unwrap_or("node")),
            Target::Python => Some(self.python.as_deref().unwrap_or("python3")),
            Target::Church => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub color: Option<ColorMode>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SelConfig {
    pub compile: CompileConfig,
    pub runtime: RuntimeConfig,
    pub output: OutputConfig,
}

impl SelConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/sel/config.toml,
    /// then merges with per-project config from .sel/config.toml.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path()
            && let Some(global) = Self::load_file(&global_path)
        {
            config = config.merge(global);
        }

        let project_path = root.join(".sel").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("sel").join("config.toml"))
    }

    /// Load config from a file path. Missing or invalid files are skipped.
    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    /// Merge another config into this one. Fields set in `other` win.
    fn merge(self, other: Self) -> Self {
        Self {
            compile: CompileConfig {
                backend: other.compile.backend.or(self.compile.backend),
                base: other.compile.base.or(self.compile.base),
                prelude: other.compile.prelude.or(self.compile.prelude),
            },
            runtime: RuntimeConfig {
                javascript: other.runtime.javascript.or(self.runtime.javascript),
                python: other.runtime.python.or(self.runtime.python),
            },
            output: OutputConfig {
                color: other.output.color.or(self.output.color),
            },
        }
    }
}
