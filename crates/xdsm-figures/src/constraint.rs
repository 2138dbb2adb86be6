//! The constraint-analysis figure.
//!
//! One diagram: a thrust-to-weight / wing-loading optimizer driving a drag
//! polar estimate and a set of performance constraints (stall speed,
//! climb, cruise, other mission segments). Climb and "other mission"
//! constraints are stacked boxes, one instance per segment.

use xdsm::{
    Xdsm, XdsmError,
    config::StyleOptions,
    model::{Connection, System, SystemKind},
};

/// Output file base name for the constraint-analysis figure.
pub const FIGURE_NAME: &str = "ConstraintAnalysisXDSM";

/// Build the constraint-analysis diagram.
pub fn constraint_analysis(style: StyleOptions) -> Result<Xdsm, XdsmError> {
    let mut x = Xdsm::new(style);

    // Systems
    x.add_system(System::new("opt", SystemKind::Optimizer, [
        r"\text{($T/W$) and ($W/S$)}",
        r"\text{Optimization}",
    ]))?;
    x.add_system(System::new("aero", SystemKind::Function, [
        r"\text{Drag}",
        r"\text{Polar}",
    ]))?;
    x.add_system(System::new("stall", SystemKind::ImplicitFunction, [
        r"\text{Stall Speed}",
        r"\text{Constraint}",
    ]))?;
    x.add_system(
        System::new("climb", SystemKind::ImplicitFunction, [
            r"\text{Climb}",
            r"\text{Constraints}",
        ])
        .with_stacked(true),
    )?;
    x.add_system(System::new("cruise", SystemKind::ImplicitFunction, [
        r"\text{Cruise}",
        r"\text{Constraint}",
    ]))?;
    x.add_system(
        System::new("others", SystemKind::ImplicitFunction, [
            r"\text{Other Mission}",
            r"\text{Constraints}",
        ])
        .with_stacked(true),
    )?;

    // Connections
    x.connect(Connection::new("opt", "climb", r"(W/S)").with_stacked(true))?;
    x.connect(Connection::new("opt", "cruise", r"(W/S)"))?;
    x.connect(Connection::new("opt", "others", r"(W/S)").with_stacked(true))?;
    x.connect(Connection::new("aero", "stall", r"C_{D_0}, k"))?;
    x.connect(Connection::new("aero", "climb", r"C_{D_0}, k").with_stacked(true))?;
    x.connect(Connection::new("aero", "cruise", r"C_{D_0}, k"))?;
    x.connect(Connection::new("aero", "others", r"C_{D_0}, k").with_stacked(true))?;
    x.connect(Connection::new("stall", "opt", r"(W/S)_\text{stall}"))?;
    x.connect(Connection::new("climb", "opt", r"(T/W)_\text{climb}").with_stacked(true))?;
    x.connect(Connection::new("cruise", "opt", r"(T/W)_\text{cruise}"))?;
    x.connect(Connection::new("others", "opt", r"(T/W)_\text{others}").with_stacked(true))?;

    // Inputs
    x.add_input("opt", r"(T/W)_0, (W/S)_0")?;
    x.add_input("aero", [
        r"c_f, S_\text{wet}/S_\text{ref}",
        r"AR, e, C_{L_{\alpha=0}}",
    ])?;
    x.add_input("stall", r"C_{L_\text{max}}, V_\text{stall}")?;
    x.add_input("climb", r"V_{R/C}")?;
    x.add_input("cruise", r"V_\text{cruise}")?;
    x.add_input("others", r"\mathbf{V_\text{others}}, ...")?;

    // Outputs
    x.add_output("opt", r"(T/W)^*, (W/S)^*")?;

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_analysis_builds() {
        let x = constraint_analysis(StyleOptions::default()).expect("figure builds");
        assert_eq!(x.systems().count(), 6);
        assert_eq!(x.connections().len(), 11);
        assert_eq!(x.inputs().len(), 6);
        assert_eq!(x.outputs().len(), 1);
        assert!(x.process().is_none());
    }

    #[test]
    fn test_segment_constraints_are_stacked() {
        let x = constraint_analysis(StyleOptions::default()).unwrap();
        for system in x.systems() {
            let expect_stacked = matches!(system.id(), "climb" | "others");
            assert_eq!(system.stacked(), expect_stacked, "system {}", system.id());
        }
        let stacked_connections = x
            .connections()
            .iter()
            .filter(|connection| connection.stacked())
            .count();
        assert_eq!(stacked_connections, 4);
    }
}
