//! Registry of rendering backends.

use crate::traits::Backend;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Global backend registry.
static BACKENDS: RwLock<Vec<&'static dyn Backend>> = RwLock::new(Vec::new());
static BACKENDS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom backend. Later registrations shadow earlier ones with
/// the same name.
pub fn register_backend(backend: &'static dyn Backend) {
    init_backends();
    push(backend);
}

fn push(backend: &'static dyn Backend) {
    tracing::debug!(backend = backend.name(), "registered backend");
    BACKENDS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(backend);
}

fn init_backends() {
    BACKENDS_INITIALIZED.get_or_init(|| {
        #[cfg(feature = "write-javascript")]
        {
            push(&crate::output::javascript::JAVASCRIPT_BACKEND);
            push(&crate::output::inline::INLINE_BACKEND);
        }
        #[cfg(feature = "write-church")]
        {
            push(&crate::output::church::CHURCH_BACKEND);
        }
        #[cfg(feature = "write-python")]
        {
            push(&crate::output::python::PYTHON_BACKEND);
        }
    });
}

/// Get a backend by name or alias.
pub fn backend_for_name(name: &str) -> Option<&'static dyn Backend> {
    init_backends();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .rev()
        .find(|b| b.name() == name || b.aliases().contains(&name))
        .copied()
}

/// Get all registered backends, in registration order.
pub fn backends() -> Vec<&'static dyn Backend> {
    init_backends();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
