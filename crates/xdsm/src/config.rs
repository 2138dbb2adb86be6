//! Diagram style and write options.

use std::path::PathBuf;

use serde::Deserialize;

/// Math font used when typesetting labels.
///
/// `SansSerif` loads the `sfmath` package, which matches the box-and-arrow
/// look of published XDSM figures; `ComputerModern` leaves LaTeX's default
/// math font in place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MathFont {
    /// Sans-serif math via the `sfmath` package (default)
    #[default]
    SansSerif,
    /// LaTeX's default Computer Modern math font
    ComputerModern,
}

/// Typesetting options fixed at diagram creation.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct StyleOptions {
    /// Math font for all labels
    #[serde(default)]
    pub math_font: MathFont,
}

/// Options controlling [`Xdsm::write`](crate::Xdsm::write).
///
/// The defaults mirror the common case: build the PDF in the current
/// directory, delete the toolchain's intermediate files, and let the
/// toolchain's console output through.
#[derive(Debug, Clone, Deserialize)]
pub struct WriteOptions {
    /// Directory the figure sources and PDF are written into; created if
    /// absent
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Run the LaTeX toolchain after writing the sources
    #[serde(default = "default_true")]
    pub build: bool,

    /// Delete `.aux`/`.log`/`.out` files after a successful build
    #[serde(default = "default_true")]
    pub cleanup: bool,

    /// Discard the toolchain's console output
    #[serde(default)]
    pub quiet: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            build: true,
            cleanup: true,
            quiet: false,
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}
