//! TikZ/LaTeX export backend.
//!
//! [`TikzExporter`] serializes a diagram into three files:
//!
//! - `<name>.tikz`: the matrix of styled nodes plus the data-dependency
//!   and process-overlay edge paths
//! - `<name>.tex`: a compilable document wrapping the matrix
//! - `diagram_styles.tex`: the static style preamble shared by all
//!   figures
//!
//! The matrix follows the XDSM convention: systems sit on the diagonal in
//! declaration order, a connection `a -> b` sits at row `a` / column `b`,
//! external inputs occupy a top border row and external outputs a left
//! border column. Border rows/columns are emitted only when used. Box
//! drawing and arrow routing are entirely TikZ's job; this module only
//! emits the declarations.

use std::{fmt::Write as _, fs, path::Path};

use log::debug;

use crate::{
    Xdsm, XdsmError,
    config::MathFont,
    export::Exporter,
    model::{Connection, Label, System, SystemKind},
};

/// File name of the shared style preamble written next to every figure.
pub const STYLES_FILE: &str = "diagram_styles.tex";

/// Static TikZ style definitions embedded in the crate.
const STYLES: &str = include_str!("diagram_styles.tex");

/// The built-in TikZ export backend.
///
/// Serialization is deterministic: node and edge order follow declaration
/// order, so exporting an unchanged diagram reproduces the same bytes.
#[derive(Debug, Default)]
pub struct TikzExporter;

impl TikzExporter {
    /// Create a new TikZ exporter.
    pub fn new() -> Self {
        Self
    }

    /// Render the `tikzpicture` source for a diagram.
    pub fn tikz_source(&self, diagram: &Xdsm) -> String {
        let mut out = String::new();
        out.push_str("% XDSM matrix: systems on the diagonal, data dependencies off-diagonal.\n");
        out.push_str("% Requires the node and edge styles from diagram_styles.tex.\n");
        out.push_str("\\begin{tikzpicture}\n\n");

        self.write_matrix(&mut out, diagram);
        self.write_process_overlay(&mut out, diagram);
        self.write_data_edges(&mut out, diagram);

        out.push_str("\\end{tikzpicture}\n");
        out
    }

    /// Render the compilable document wrapping `<name>.tikz`.
    pub fn tex_source(&self, diagram: &Xdsm, name: &str) -> String {
        let mut out = String::new();
        out.push_str("\\documentclass{article}\n");
        out.push_str("\\usepackage{geometry}\n");
        out.push_str("\\usepackage{amsfonts}\n");
        out.push_str("\\usepackage{amsmath}\n");
        out.push_str("\\usepackage{amssymb}\n");
        out.push_str("\\usepackage{tikz}\n\n");
        if diagram.style().math_font == MathFont::SansSerif {
            out.push_str("% Sans-serif math to match the published figure style\n");
            out.push_str("\\usepackage{sfmath}\n\n");
        }
        out.push_str(
            "\\usetikzlibrary{arrows,chains,positioning,scopes,shapes.geometric,shapes.misc,shadows}\n\n",
        );
        out.push_str("% Crop each page tight to the diagram itself\n");
        out.push_str("\\usepackage[active,tightpage]{preview}\n");
        out.push_str("\\PreviewEnvironment{tikzpicture}\n");
        out.push_str("\\setlength{\\PreviewBorder}{5pt}\n\n");
        let _ = writeln!(out, "\\input{{{STYLES_FILE}}}");
        out.push_str("\n\\begin{document}\n\n");
        let _ = writeln!(out, "\\input{{{name}.tikz}}");
        out.push_str("\n\\end{document}\n");
        out
    }

    fn write_matrix(&self, out: &mut String, diagram: &Xdsm) {
        let systems: Vec<&System> = diagram.systems().collect();
        let has_inputs = !diagram.inputs().is_empty();
        let has_outputs = !diagram.outputs().is_empty();
        let col_offset = usize::from(has_outputs);
        let cols = systems.len() + col_offset;

        let mut rows: Vec<Vec<String>> = Vec::new();

        if has_inputs {
            let mut row = vec![String::new(); cols];
            for (j, system) in systems.iter().enumerate() {
                if let Some(label) = diagram.inputs().get(system.id()) {
                    row[j + col_offset] =
                        data_io_node(&format!("input_{}", system.id()), label);
                }
            }
            rows.push(row);
        }

        for (i, system) in systems.iter().enumerate() {
            let mut row = vec![String::new(); cols];
            if let Some(label) = diagram.outputs().get(system.id()) {
                row[0] = data_io_node(&format!("left_output_{}", system.id()), label);
            }
            row[i + col_offset] = system_node(system);
            for connection in diagram
                .connections()
                .iter()
                .filter(|connection| connection.from() == system.id())
            {
                let j = systems
                    .iter()
                    .position(|target| target.id() == connection.to())
                    .expect("connection endpoints are validated at declaration time");
                row[j + col_offset] = inter_node(connection);
            }
            rows.push(row);
        }

        out.push_str("\\matrix[MatrixSetup]{\n");
        for (index, row) in rows.iter().enumerate() {
            let _ = writeln!(out, "%Row {index}");
            for (col, cell) in row.iter().enumerate() {
                let terminator = if col + 1 == row.len() { "\\\\" } else { "&" };
                let _ = writeln!(out, "{cell}{terminator}");
            }
        }
        out.push_str("};\n\n");
    }

    fn write_process_overlay(&self, out: &mut String, diagram: &Xdsm) {
        let Some(process) = diagram.process() else {
            return;
        };
        if process.steps().len() < 2 {
            return;
        }

        out.push_str("% XDSM process chain\n");
        out.push_str("{ [start chain=process]\n");
        out.push_str("\\begin{pgfonlayer}{process}\n");
        for (index, step) in process.steps().iter().enumerate() {
            if index == 0 {
                let _ = writeln!(out, "\\chainin ({step});");
            } else {
                let _ = writeln!(out, "\\chainin ({step}) [join=by ProcessHV];");
            }
        }
        out.push_str("\\end{pgfonlayer}\n");
        out.push_str("}\n\n");
    }

    fn write_data_edges(&self, out: &mut String, diagram: &Xdsm) {
        let mut horizontal: Vec<String> = Vec::new();
        let mut vertical: Vec<String> = Vec::new();

        for connection in diagram.connections() {
            let inter = format!("{}-{}", connection.from(), connection.to());
            horizontal.push(format!(
                "({}) edge [DataLine] ({inter})",
                connection.from()
            ));
            vertical.push(format!("({inter}) edge [DataLine] ({})", connection.to()));
        }
        for id in diagram.outputs().keys() {
            horizontal.push(format!("({id}) edge [DataLine] (left_output_{id})"));
        }
        for id in diagram.inputs().keys() {
            vertical.push(format!("(input_{id}) edge [DataLine] ({id})"));
        }

        if horizontal.is_empty() && vertical.is_empty() {
            return;
        }

        out.push_str("\\begin{pgfonlayer}{data}\n");
        out.push_str("\\path\n");
        if !horizontal.is_empty() {
            out.push_str("% Horizontal edges\n");
            for edge in &horizontal {
                let _ = writeln!(out, "{edge}");
            }
        }
        if !vertical.is_empty() {
            out.push_str("% Vertical edges\n");
            for edge in &vertical {
                let _ = writeln!(out, "{edge}");
            }
        }
        out.push_str(";\n");
        out.push_str("\\end{pgfonlayer}\n\n");
    }
}

impl Exporter for TikzExporter {
    fn export(&mut self, diagram: &Xdsm, name: &str, out_dir: &Path) -> Result<(), XdsmError> {
        fs::create_dir_all(out_dir)?;

        let tikz_path = out_dir.join(format!("{name}.tikz"));
        fs::write(&tikz_path, self.tikz_source(diagram))?;
        debug!(path = tikz_path.display().to_string(); "Wrote TikZ matrix");

        let tex_path = out_dir.join(format!("{name}.tex"));
        fs::write(&tex_path, self.tex_source(diagram, name))?;
        debug!(path = tex_path.display().to_string(); "Wrote document wrapper");

        let styles_path = out_dir.join(STYLES_FILE);
        fs::write(&styles_path, STYLES)?;
        debug!(path = styles_path.display().to_string(); "Wrote style preamble");

        Ok(())
    }
}

/// Base node style for a system kind.
fn base_style(kind: SystemKind) -> &'static str {
    match kind {
        SystemKind::Optimizer => "Optimization",
        SystemKind::Solver => "MDA",
        SystemKind::Function => "Function",
        SystemKind::ImplicitFunction => "ImplicitFunction",
    }
}

/// Comma-join a base style with the `stack`/`faded` modifiers.
fn style_list(base: &str, stacked: bool, faded: bool) -> String {
    let mut styles = String::from(base);
    if stacked {
        styles.push_str(",stack");
    }
    if faded {
        styles.push_str(",faded");
    }
    styles
}

/// Typeset a label in math mode, stacking multi-line labels vertically.
fn math(label: &Label) -> String {
    match label.lines() {
        [line] => format!("${line}$"),
        lines => format!(
            "$\\begin{{array}}{{c}}{}\\end{{array}}$",
            lines.join(r" \\ ")
        ),
    }
}

fn system_node(system: &System) -> String {
    format!(
        "\\node [{}] ({}) {{{}}};",
        style_list(base_style(system.kind()), system.stacked(), system.faded()),
        system.id(),
        math(system.label())
    )
}

fn inter_node(connection: &Connection) -> String {
    format!(
        "\\node [{}] ({}-{}) {{{}}};",
        style_list("DataInter", connection.stacked(), false),
        connection.from(),
        connection.to(),
        math(connection.label())
    )
}

fn data_io_node(name: &str, label: &Label) -> String {
    format!("\\node [DataIO] ({name}) {{{}}};", math(label))
}
