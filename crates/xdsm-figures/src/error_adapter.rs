//! Error adapter for converting [`XdsmError`] to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! type and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use xdsm::XdsmError;

/// Adapter wrapping an [`XdsmError`] for terminal reporting.
pub struct ErrorAdapter(pub XdsmError);

impl fmt::Debug for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            XdsmError::DuplicateSystem(_) => "xdsm::duplicate_system",
            XdsmError::UnknownSystem(_) => "xdsm::unknown_system",
            XdsmError::SelfConnection(_) => "xdsm::self_connection",
            XdsmError::Io(_) => "xdsm::io",
            XdsmError::Latex { .. } => "xdsm::latex",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            XdsmError::Latex { .. } => Some(Box::new(
                "install a LaTeX distribution providing pdflatex, or pass --no-build to emit sources only",
            )),
            _ => None,
        }
    }
}
