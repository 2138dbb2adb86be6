//! Error types for diagram construction and export.
//!
//! This module provides the main error type [`XdsmError`] covering the
//! validation failures raised while a diagram is being declared and the
//! filesystem/toolchain failures raised while it is being written.

use std::io;

use thiserror::Error;

/// The main error type for diagram operations.
///
/// Validation variants (`DuplicateSystem`, `UnknownSystem`,
/// `SelfConnection`) are raised by the builder before any state is
/// mutated, so a failed declaration leaves the diagram unchanged. Export
/// variants (`Io`, `Latex`) surface failures from the filesystem and the
/// external compilation toolchain; nothing is retried.
#[derive(Debug, Error)]
pub enum XdsmError {
    #[error("system '{0}' is already declared")]
    DuplicateSystem(String),

    #[error("system '{0}' is not declared in this diagram")]
    UnknownSystem(String),

    #[error("connection endpoints must differ, got '{0}' for both")]
    SelfConnection(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("pdflatex {context}: {message}")]
    Latex {
        /// What the toolchain was asked to do when it failed.
        context: &'static str,
        /// The underlying failure description.
        message: String,
    },
}

impl XdsmError {
    /// Create a `Latex` error for a toolchain invocation failure.
    pub fn latex(context: &'static str, message: impl Into<String>) -> Self {
        Self::Latex {
            context,
            message: message.into(),
        }
    }
}
