//! Export functionality for XDSM diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface
//! for serializing a finished diagram into figure sources, plus the driver
//! for the external compilation toolchain. It is the final stage in the
//! processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Builder calls (add_system / connect / ...)
//!     ↓ validate
//! Diagram (Xdsm)
//!     ↓ export (this module)
//! <name>.tikz + <name>.tex + diagram_styles.tex
//!     ↓ pdflatex (external toolchain)
//! <name>.pdf
//! ```
//!
//! # Available Backends
//!
//! - [`tikz`]: TikZ/LaTeX output via [`tikz::TikzExporter`]
//!
//! Serialization is a pure function of the diagram content: exporting the
//! same diagram twice produces byte-identical sources.

pub mod pdflatex;
pub mod tikz;

use std::path::Path;

use crate::{Xdsm, XdsmError};

/// Abstraction for diagram export backends.
///
/// Implementors serialize an [`Xdsm`] diagram into one or more source
/// files under `out_dir`, named after `name`. See the [`tikz`] module for
/// the built-in TikZ implementation.
pub trait Exporter {
    /// Serializes a diagram to the backend's source format.
    ///
    /// # Arguments
    ///
    /// * `diagram` - The fully declared diagram to serialize.
    /// * `name` - Base name for the emitted files (no extension).
    /// * `out_dir` - Directory the files are written into.
    ///
    /// # Errors
    ///
    /// Returns [`XdsmError::Io`] if writing the output fails.
    fn export(&mut self, diagram: &Xdsm, name: &str, out_dir: &Path) -> Result<(), XdsmError>;
}
