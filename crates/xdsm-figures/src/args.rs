//! Command-line argument definitions for the figure generator.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select which figure family to generate and
//! control the output directory, toolchain behavior, and logging
//! verbosity.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which figure family to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FigureSelection {
    /// Every figure: the constraint-analysis diagram and all
    /// weight-estimation variants
    All,
    /// The thrust-to-weight / wing-loading constraint-analysis diagram
    ConstraintAnalysis,
    /// The weight build-up diagram and its derived sub-figures
    WeightEstimation,
}

/// Command-line arguments for the XDSM figure generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Figure family to generate
    #[arg(value_enum, default_value = "all")]
    pub figure: FigureSelection,

    /// Directory the figures are written into
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Emit the TikZ/LaTeX sources without running the toolchain
    #[arg(long)]
    pub no_build: bool,

    /// Keep the toolchain's .aux/.log/.out files after a build
    #[arg(long)]
    pub keep_build_files: bool,

    /// Discard the toolchain's console output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
