//! Driver for the external `pdflatex` toolchain.
//!
//! The toolchain is invoked once per figure with the output directory as
//! its working directory, so every emitted path stays inside that
//! directory. Failures are surfaced as [`XdsmError::Latex`]; nothing is
//! retried, and a missing binary is reported the same way as a failed
//! compilation.

use std::{
    fs, io,
    path::Path,
    process::{Command, Stdio},
};

use log::{debug, info};

use crate::XdsmError;

/// Extensions of intermediate files `pdflatex` leaves behind.
const BUILD_FILE_EXTENSIONS: &[&str] = &["aux", "log", "out"];

/// Compile `<name>.tex` in `out_dir` into `<name>.pdf`.
///
/// `quiet` discards the toolchain's console output; diagnostics stay
/// available in `<name>.log` either way.
///
/// # Errors
///
/// Returns [`XdsmError::Latex`] if `pdflatex` cannot be spawned (usually
/// because it is not on `PATH`) or exits with a non-zero status.
pub fn compile(name: &str, out_dir: &Path, quiet: bool) -> Result<(), XdsmError> {
    let tex_file = format!("{name}.tex");
    info!(tex_file, out_dir = out_dir.display().to_string(); "Compiling figure");

    let (stdout, stderr) = if quiet {
        (Stdio::null(), Stdio::null())
    } else {
        (Stdio::inherit(), Stdio::inherit())
    };

    let status = Command::new("pdflatex")
        .arg("-interaction=batchmode")
        .arg("-halt-on-error")
        .arg(&tex_file)
        .current_dir(out_dir)
        .stdout(stdout)
        .stderr(stderr)
        .status()
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => {
                XdsmError::latex("invocation", "pdflatex not found on PATH")
            }
            _ => XdsmError::latex("invocation", err.to_string()),
        })?;

    if !status.success() {
        return Err(XdsmError::latex(
            "compilation",
            format!("exited with {status}, see {name}.log"),
        ));
    }

    debug!(pdf = format!("{name}.pdf"); "Compilation finished");
    Ok(())
}

/// Remove the intermediate build files `pdflatex` left next to the figure.
///
/// Files that do not exist are skipped; other removal failures surface as
/// [`XdsmError::Io`].
pub fn remove_build_files(name: &str, out_dir: &Path) -> Result<(), XdsmError> {
    for extension in BUILD_FILE_EXTENSIONS {
        let path = out_dir.join(format!("{name}.{extension}"));
        match fs::remove_file(&path) {
            Ok(()) => debug!(path = path.display().to_string(); "Removed build file"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
