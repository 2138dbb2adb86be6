//! XDSM figure generator library
//!
//! This module contains the figure definitions for the aircraft
//! design-optimization workflows and the CLI logic that writes them:
//!
//! - [`constraint`] - the constraint-analysis diagram
//! - [`weight`] - the weight-estimation family (six variants)
//!
//! The figure content is fixed; the command line only selects which
//! family to generate and where the artifacts go.

pub mod constraint;
pub mod error_adapter;
pub mod weight;

mod args;
mod config;

pub use args::{Args, FigureSelection};

use std::path::PathBuf;

use log::info;

use xdsm::{
    XdsmError,
    config::{StyleOptions, WriteOptions},
};

/// Run the figure generator.
///
/// Loads configuration, resolves write options from configuration and
/// command-line flags, and writes the selected figure family. When a
/// family contains several figures, the first failure aborts the rest of
/// the run; nothing is silently swallowed.
///
/// # Errors
///
/// Returns `XdsmError` for configuration, filesystem, or toolchain
/// failures.
pub fn run(args: &Args) -> Result<(), XdsmError> {
    let config = config::load_config(args.config.as_ref())?;

    let options = WriteOptions {
        out_dir: args
            .out_dir
            .clone()
            .or(config.write.out_dir)
            .unwrap_or_else(|| PathBuf::from(".")),
        build: !args.no_build && config.write.build.unwrap_or(true),
        cleanup: !args.keep_build_files && config.write.cleanup.unwrap_or(true),
        quiet: args.quiet || config.write.quiet.unwrap_or(false),
    };

    info!(
        figure:? = args.figure,
        out_dir = options.out_dir.display().to_string(),
        build = options.build;
        "Generating figures"
    );

    match args.figure {
        FigureSelection::All => {
            write_constraint_analysis(config.style, &options)?;
            write_weight_estimation_family(config.style, &options)?;
        }
        FigureSelection::ConstraintAnalysis => {
            write_constraint_analysis(config.style, &options)?;
        }
        FigureSelection::WeightEstimation => {
            write_weight_estimation_family(config.style, &options)?;
        }
    }

    Ok(())
}

fn write_constraint_analysis(
    style: StyleOptions,
    options: &WriteOptions,
) -> Result<(), XdsmError> {
    let figure = constraint::constraint_analysis(style)?;
    figure.write(constraint::FIGURE_NAME, options)
}

fn write_weight_estimation_family(
    style: StyleOptions,
    options: &WriteOptions,
) -> Result<(), XdsmError> {
    for variant in &weight::FIGURE_VARIANTS {
        let figure = weight::weight_estimation(variant, style)?;
        figure.write(variant.name, options)?;
    }
    Ok(())
}
