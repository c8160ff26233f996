//! Program sources: the embedded base library and preludes, and user files.

use anyhow::Context;
use sel_syntax::Target;
use std::io::Read;
use std::path::Path;

/// The base combinator library, in SEL.
pub const BASE: &str = include_str!("../assets/base.sel");

/// Runtime support for JavaScript output.
pub const PRELUDE_JS: &str = include_str!("../assets/prelude.js");

/// Runtime support for Python output.
pub const PRELUDE_PY: &str = include_str!("../assets/prelude.py");

/// Display name used for positions inside the base library.
pub const BASE_NAME: &str = "<base>";

/// Prelude text for a target, if it takes one.
pub fn prelude_for(target: Target) -> Option<&'static str> {
    match target {
        Target::JavaScript => Some(PRELUDE_JS),
        Target::Python => Some(PRELUDE_PY),
        Target::Church => None,
    }
}

/// The text handed to the compiler: optionally the base library, followed
/// by one user file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    name: String,
    text: String,
    user_start: usize,
}

/// A position resolved back to the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub offset: usize,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, user: &str, with_base: bool) -> Self {
        let mut text = String::new();
        if with_base {
            text.push_str(BASE);
            text.push('\n');
        }
        let user_start = text.len();
        text.push_str(user);
        Self {
            name: name.into(),
            text,
            user_start,
        }
    }

    /// Read a user file, or stdin when the path is `-`.
    pub fn read(path: &Path, with_base: bool) -> anyhow::Result<Self> {
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            return Ok(Self::new("<stdin>", &buf, with_base));
        }

        let user = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = user.len(), with_base, "read source");
        Ok(Self::new(path.display().to_string(), &user, with_base))
    }

    /// The assembled program text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map an offset in the assembled text to the file it falls in.
    pub fn locate(&self, offset: usize) -> Location<'_> {
        if offset >= self.user_start {
            Location {
                name: &self.name,
                text: &self.text[self.user_start..],
                offset: offset - self.user_start,
            }
        } else {
            Location {
                name: BASE_NAME,
                text: &self.text[..self.user_start],
                offset,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_compiles() {
        let program = sel_syntax::compile(BASE).unwrap();
        assert!(program.declaration("Identity").is_some());
        assert!(program.declaration("BUILTIN___10").is_some());
        assert!(program.declaration("T_IS_L_THAN_EQ").is_some());
        assert!(program.declaration("Y").is_some());
    }

    #[test]
    fn test_unit_without_base() {
        let unit = SourceUnit::new("main.sel", "(f x)", false);
        assert_eq!(unit.text(), "(f x)");
        assert_eq!(
            unit.locate(3),
            Location {
                name: "main.sel",
                text: "(f x)",
                offset: 3
            }
        );
    }

    #[test]
    fn test_locate_splits_base_and_user() {
        let unit = SourceUnit::new("main.sel", "(f x)", true);
        assert!(unit.text().starts_with(BASE));
        assert!(unit.text().ends_with("(f x)"));

        let user = unit.locate(BASE.len() + 2);
        assert_eq!(user.name, "main.sel");
        assert_eq!(user.offset, 1);

        let base = unit.locate(0);
        assert_eq!(base.name, BASE_NAME);
    }

    #[test]
    fn test_preludes() {
        assert!(prelude_for(Target::JavaScript).unwrap().contains("toJSNumber"));
        assert!(prelude_for(Target::Python).unwrap().contains("toPythonNumber"));
        assert!(prelude_for(Target::Church).is_none());
    }
}
