//! Errors raised while compiling SEL sources.

use crate::ast::BinderKind;
use crate::token::Span;

/// Result type for the SEL pipeline.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Every way a compilation can fail.
///
/// Errors are raised at the first violation and abort the whole compilation;
/// nothing is recovered or partially rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("encountered an empty group; every group needs at least one member")]
    MalformedGroup { span: Span },

    #[error(
        "an application takes exactly one operator and one operand, found {found} members"
    )]
    MalformedApplication { found: usize, span: Span },

    #[error("({binder} {name} ...) must have exactly one body expression, found {found}")]
    MalformedBinding {
        binder: BinderKind,
        name: String,
        found: usize,
        span: Span,
    },

    #[error("'{introducer}' must be followed by a name, found {found}")]
    MissingBinder {
        introducer: BinderKind,
        found: String,
        offset: usize,
    },

    #[error("{kind}")]
    UnbalancedDelimiter { kind: Unbalanced, offset: usize },

    #[error("unknown backend '{0}'")]
    UnknownBackend(String),
}

/// Which side of a delimiter pair is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unbalanced {
    /// A `)` with no open group.
    Unexpected,
    /// A `(` still open at end of input.
    Unclosed,
}

impl std::fmt::Display for Unbalanced {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unbalanced::Unexpected => f.write_str("unexpected ')' with no open group"),
            Unbalanced::Unclosed => f.write_str("'(' is never closed"),
        }
    }
}

impl CompileError {
    /// Byte offset in the source where the error was detected, if known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            CompileError::MalformedGroup { span }
            | CompileError::MalformedApplication { span, .. }
            | CompileError::MalformedBinding { span, .. } => Some(span.start),
            CompileError::MissingBinder { offset, .. }
            | CompileError::UnbalancedDelimiter { offset, .. } => Some(*offset),
            CompileError::UnknownBackend(_) => None,
        }
    }

    /// Source range the error refers to. Errors detected at a single
    /// position return an empty range at that offset.
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::MalformedGroup { span }
            | CompileError::MalformedApplication { span, .. }
            | CompileError::MalformedBinding { span, .. } => Some(span.clone()),
            _ => self.offset().map(|offset| offset..offset),
        }
    }
}
