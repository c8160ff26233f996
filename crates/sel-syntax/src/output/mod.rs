//! Output backends - render the normalized tree as text.

#[cfg(feature = "write-church")]
pub mod church;
#[cfg(feature = "write-javascript")]
pub mod inline;
#[cfg(feature = "write-javascript")]
pub mod javascript;
#[cfg(feature = "write-python")]
pub mod python;

#[cfg(feature = "write-church")]
pub use church::{CHURCH_BACKEND, ChurchBackend};
#[cfg(feature = "write-javascript")]
pub use inline::{INLINE_BACKEND, InlineBackend};
#[cfg(feature = "write-javascript")]
pub use javascript::{JAVASCRIPT_BACKEND, JavaScriptBackend};
#[cfg(feature = "write-python")]
pub use python::{PYTHON_BACKEND, PythonBackend};

/// Place the caller's prelude, if any, in front of a rendered program.
pub(crate) fn with_prelude(prelude: Option<&str>, body: String) -> String {
    match prelude.map(str::trim_end) {
        Some(prelude) if !prelude.is_empty() => format!("{prelude}\n\n{body}"),
        _ => body,
    }
}

/// Append `_` to identifiers that collide with a reserved word.
pub(crate) fn escape_reserved(name: &str, reserved: &[&str]) -> String {
    if reserved.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}
