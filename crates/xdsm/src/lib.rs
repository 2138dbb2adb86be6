//! xdsm - Declarative XDSM diagrams with a TikZ/LaTeX export backend
//!
//! This library builds eXtended Design Structure Matrix figures from a
//! declarative description: named systems on the matrix diagonal, labeled
//! data connections between them, external inputs/outputs on the borders,
//! and an optional execution-order overlay. The finished diagram is
//! serialized to TikZ sources and handed to the external `pdflatex`
//! toolchain for typesetting and compilation.
//!
//! Declarations are validated as they arrive: system ids must be unique,
//! and every connection, annotation, and process entry must reference a
//! declared system. A failed declaration leaves the diagram unchanged.

pub mod config;
pub mod export;
pub mod model;

mod error;

pub use error::XdsmError;

use indexmap::IndexMap;
use log::{debug, info};

use config::{StyleOptions, WriteOptions};
use export::{Exporter, pdflatex, tikz::TikzExporter};
use model::{Connection, Label, Process, System};

/// A declarative XDSM diagram under construction.
///
/// Populate the diagram in a single declarative pass, then finalize it
/// with [`Xdsm::write`]. Diagrams are cheap to build and are constructed
/// fresh per figure; a family of related figures is a loop over fresh
/// instances, not a mutated shared one.
///
/// # Examples
///
/// ```rust,no_run
/// use xdsm::{
///     Xdsm,
///     config::{StyleOptions, WriteOptions},
///     model::{Connection, System, SystemKind},
/// };
///
/// let mut x = Xdsm::new(StyleOptions::default());
///
/// x.add_system(System::new("opt", SystemKind::Optimizer, r"\text{Optimization}"))?;
/// x.add_system(System::new("aero", SystemKind::Function, r"\text{Drag Polar}"))?;
///
/// x.connect(Connection::new("aero", "opt", r"C_{D_0}, k"))?;
/// x.add_output("opt", r"x^*")?;
///
/// x.write("Demo", &WriteOptions::default())?;
/// # Ok::<(), xdsm::XdsmError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Xdsm {
    style: StyleOptions,
    systems: IndexMap<String, System>,
    connections: Vec<Connection>,
    inputs: IndexMap<String, Label>,
    outputs: IndexMap<String, Label>,
    process: Option<Process>,
}

impl Xdsm {
    /// Create an empty diagram with the given typesetting options.
    pub fn new(style: StyleOptions) -> Self {
        Self {
            style,
            systems: IndexMap::new(),
            connections: Vec::new(),
            inputs: IndexMap::new(),
            outputs: IndexMap::new(),
            process: None,
        }
    }

    /// Declare a system.
    ///
    /// Declaration order fixes the system's position along the matrix
    /// diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`XdsmError::DuplicateSystem`] if the id is already
    /// declared; the original declaration is left intact.
    pub fn add_system(&mut self, system: System) -> Result<(), XdsmError> {
        if self.systems.contains_key(system.id()) {
            return Err(XdsmError::DuplicateSystem(system.id().to_string()));
        }
        debug!(id = system.id(), kind = system.kind().to_string(); "Declared system");
        self.systems.insert(system.id().to_string(), system);
        Ok(())
    }

    /// Declare a labeled data connection between two systems.
    ///
    /// # Errors
    ///
    /// Returns [`XdsmError::UnknownSystem`] if either endpoint is
    /// undeclared, or [`XdsmError::SelfConnection`] if both endpoints name
    /// the same system. The connection list is unchanged on failure.
    pub fn connect(&mut self, connection: Connection) -> Result<(), XdsmError> {
        self.ensure_declared(connection.from())?;
        self.ensure_declared(connection.to())?;
        if connection.from() == connection.to() {
            return Err(XdsmError::SelfConnection(connection.from().to_string()));
        }
        self.connections.push(connection);
        Ok(())
    }

    /// Attach an external input annotation to a system.
    ///
    /// Inputs render on the diagram's top border. A second input for the
    /// same system replaces the first.
    ///
    /// # Errors
    ///
    /// Returns [`XdsmError::UnknownSystem`] if the id is undeclared.
    pub fn add_input(&mut self, id: &str, label: impl Into<Label>) -> Result<(), XdsmError> {
        self.ensure_declared(id)?;
        self.inputs.insert(id.to_string(), label.into());
        Ok(())
    }

    /// Attach an external output annotation to a system.
    ///
    /// Outputs render on the diagram's left border. A second output for
    /// the same system replaces the first.
    ///
    /// # Errors
    ///
    /// Returns [`XdsmError::UnknownSystem`] if the id is undeclared.
    pub fn add_output(&mut self, id: &str, label: impl Into<Label>) -> Result<(), XdsmError> {
        self.ensure_declared(id)?;
        self.outputs.insert(id.to_string(), label.into());
        Ok(())
    }

    /// Record the execution-order overlay.
    ///
    /// At most one process exists per diagram; a second call replaces the
    /// first. Repeating an earlier system as the final step closes the
    /// loop.
    ///
    /// # Errors
    ///
    /// Returns [`XdsmError::UnknownSystem`] on the first undeclared step;
    /// the previously recorded process (if any) is kept on failure.
    pub fn add_process(&mut self, process: impl Into<Process>) -> Result<(), XdsmError> {
        let process = process.into();
        for step in process.steps() {
            self.ensure_declared(step)?;
        }
        if self.process.is_some() {
            debug!("Replacing previously recorded process overlay");
        }
        self.process = Some(process);
        Ok(())
    }

    /// Serialize the diagram and optionally compile it.
    ///
    /// Writes `<name>.tikz`, `<name>.tex`, and the shared style preamble
    /// into `options.out_dir` (created if absent). With `options.build`
    /// set, the external `pdflatex` toolchain is then invoked once; with
    /// `options.cleanup` set, its intermediate files are removed after a
    /// successful build.
    ///
    /// Serialization depends only on the diagram's declarative content, so
    /// repeated writes produce byte-identical sources.
    ///
    /// # Errors
    ///
    /// Returns [`XdsmError::Io`] for filesystem failures and
    /// [`XdsmError::Latex`] if the toolchain is absent or fails.
    pub fn write(&self, name: &str, options: &WriteOptions) -> Result<(), XdsmError> {
        info!(
            name,
            systems = self.systems.len(),
            connections = self.connections.len();
            "Writing XDSM figure"
        );

        let mut exporter = TikzExporter::new();
        exporter.export(self, name, &options.out_dir)?;

        if options.build {
            pdflatex::compile(name, &options.out_dir, options.quiet)?;
            if options.cleanup {
                pdflatex::remove_build_files(name, &options.out_dir)?;
            }
        }

        info!(name; "Figure written");
        Ok(())
    }

    /// Get the diagram's typesetting options.
    pub fn style(&self) -> StyleOptions {
        self.style
    }

    /// Iterate over the declared systems in declaration order.
    pub fn systems(&self) -> impl Iterator<Item = &System> {
        self.systems.values()
    }

    /// Borrow the declared connections in declaration order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Borrow the external input annotations, keyed by system id.
    pub fn inputs(&self) -> &IndexMap<String, Label> {
        &self.inputs
    }

    /// Borrow the external output annotations, keyed by system id.
    pub fn outputs(&self) -> &IndexMap<String, Label> {
        &self.outputs
    }

    /// Get the execution-order overlay, if one was recorded.
    pub fn process(&self) -> Option<&Process> {
        self.process.as_ref()
    }

    fn ensure_declared(&self, id: &str) -> Result<(), XdsmError> {
        if self.systems.contains_key(id) {
            Ok(())
        } else {
            Err(XdsmError::UnknownSystem(id.to_string()))
        }
    }
}
