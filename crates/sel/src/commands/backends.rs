//! Backends command - list the registered backends.

use super::Context;
use crate::output::bold;
use sel_syntax::Backend;

/// Format one listing line per backend.
pub fn listing(backends: &[&'static dyn Backend], colors: bool) -> Vec<String> {
    let width = backends.iter().map(|b| b.name().len()).max().unwrap_or(0);
    backends
        .iter()
        .map(|backend| {
            let name = format!("{:width$}", backend.name());
            let mut line = format!(
                "{}  {:8}  {}",
                bold(&name, colors),
                backend.discipline().as_str(),
                backend.description()
            );
            if !backend.aliases().is_empty() {
                line.push_str(&format!(" (aliases: {})", backend.aliases().join(", ")));
            }
            line
        })
        .collect()
}

/// Run the backends command
pub fn run(ctx: &Context) -> i32 {
    for line in listing(&sel_syntax::backends(), ctx.colors) {
        println!("{line}");
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing() {
        let backends = [
            sel_syntax::backend_for_name("javascript").unwrap(),
            sel_syntax::backend_for_name("church").unwrap(),
        ];
        insta::assert_snapshot!(listing(&backends, false).join("\n"), @r"
        javascript  named     JavaScript, one const binding per declaration (aliases: js)
        church      inlining  lambda-calculus notation with declarations inlined (aliases: lambda)
        ");
    }
}
