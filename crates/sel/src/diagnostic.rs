//! Rendering compile errors against their source.

use crate::source::SourceUnit;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term::{
    self, Config,
    termcolor::{Buffer, ColorChoice, StandardStream, WriteColor},
};
use sel_syntax::CompileError;

/// Build a diagnostic for an error, along with the file it points into.
fn diagnostic<'a>(
    unit: &'a SourceUnit,
    error: &CompileError,
) -> (SimpleFile<&'a str, &'a str>, Diagnostic<()>) {
    let mut diagnostic = Diagnostic::error().with_message(error.to_string());

    let Some(span) = error.span() else {
        return (SimpleFile::new(unit.name(), ""), diagnostic);
    };

    let location = unit.locate(span.start);
    let start = location.offset;
    let end = if span.is_empty() {
        next_boundary(location.text, start)
    } else {
        (start + span.len()).min(location.text.len())
    };

    diagnostic = diagnostic.with_labels(vec![Label::primary((), start..end)]);
    if let Some(note) = note(error) {
        diagnostic = diagnostic.with_notes(vec![note.to_string()]);
    }
    (SimpleFile::new(location.name, location.text), diagnostic)
}

/// End of the character starting at `offset`, or `offset` at end of text.
fn next_boundary(text: &str, offset: usize) -> usize {
    text.get(offset..)
        .and_then(|rest| rest.chars().next())
        .map_or(offset, |c| offset + c.len_utf8())
}

fn note(error: &CompileError) -> Option<&'static str> {
    match error {
        CompileError::MalformedApplication { .. } => {
            Some("write ((f a) b) to apply f to two arguments")
        }
        CompileError::MalformedGroup { .. } => Some("remove the empty parentheses"),
        _ => None,
    }
}

/// Write a diagnostic for `error` to a color-capable writer.
pub fn emit(
    writer: &mut dyn WriteColor,
    unit: &SourceUnit,
    error: &CompileError,
) -> Result<(), codespan_reporting::files::Error> {
    let (file, diagnostic) = diagnostic(unit, error);
    term::emit(writer, &Config::default(), &file, &diagnostic)
}

/// Print a diagnostic for `error` to stderr.
pub fn report(unit: &SourceUnit, error: &CompileError, colors: bool) {
    let choice = if colors {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let stream = StandardStream::stderr(choice);
    let mut writer = stream.lock();
    if let Err(e) = emit(&mut writer, unit, error) {
        tracing::debug!(error = %e, "failed to render diagnostic");
        crate::output::print_error(error, colors);
    }
}

/// Render a diagnostic to plain text.
pub fn to_plain_string(unit: &SourceUnit, error: &CompileError) -> String {
    let mut buffer = Buffer::no_color();
    match emit(&mut buffer, unit, error) {
        Ok(()) => String::from_utf8_lossy(buffer.as_slice()).into_owned(),
        Err(_) => format!("error: {error}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_for(source: &str) -> String {
        let unit = SourceUnit::new("main.sel", source, false);
        let error = sel_syntax::compile(unit.text()).unwrap_err();
        to_plain_string(&unit, &error)
    }

    #[test]
    fn test_application_report_points_at_group() {
        let text = report_for("(let a b)\n(f x y)");
        assert!(text.contains("error: an application takes exactly one operator"));
        assert!(text.contains("main.sel:2:1"));
        assert!(text.contains("(f x y)"));
        assert!(text.contains("((f a) b)"));
    }

    #[test]
    fn test_unclosed_report() {
        let text = report_for("(f\n  (λ x x)");
        assert!(text.contains("'(' is never closed"));
        assert!(text.contains("main.sel:1:1"));
    }

    #[test]
    fn test_missing_binder_at_end_of_input() {
        let text = report_for("(λ");
        assert!(text.contains("'λ' must be followed by a name, found end of input"));
    }

    #[test]
    fn test_error_in_base_library_is_attributed_to_base() {
        let unit = SourceUnit::new("main.sel", "x", true);
        let error = CompileError::MalformedGroup { span: 0..2 };
        let text = to_plain_string(&unit, &error);
        assert!(text.contains(crate::source::BASE_NAME));
    }

    #[test]
    fn test_next_boundary() {
        assert_eq!(next_boundary("λx", 0), 2);
        assert_eq!(next_boundary("ab", 2), 2);
    }
}
