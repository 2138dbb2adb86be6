//! The weight-estimation figure family.
//!
//! One base diagram, the iterative takeoff-weight build-up from mission
//! segment fractions, fuel weight, and empty weight, emitted six times.
//! The full figure shows every box active; each derived sub-figure fades
//! all but the boxes under discussion. The variants are immutable records
//! consumed by a pure build function, so each figure's generation is
//! independent and testable in isolation.

use xdsm::{
    Xdsm, XdsmError,
    config::StyleOptions,
    model::{Connection, System, SystemKind},
};

/// One figure of the weight-estimation family: an output name plus which
/// systems render as faded placeholders.
#[derive(Debug, Clone, Copy)]
pub struct FigureVariant {
    /// Output file base name
    pub name: &'static str,
    /// Fade the mission-segment weight-fraction boxes
    pub fade_mission_segment: bool,
    /// Fade the fuel-weight estimation box
    pub fade_fuel: bool,
    /// Fade the takeoff-weight estimation box
    pub fade_takeoff: bool,
    /// Fade the empty-weight estimation box
    pub fade_empty: bool,
}

/// The full figure plus the five derived sub-figures.
pub const FIGURE_VARIANTS: [FigureVariant; 6] = [
    FigureVariant {
        name: "WeightEstimationXDSM",
        fade_mission_segment: false,
        fade_fuel: false,
        fade_takeoff: false,
        fade_empty: false,
    },
    FigureVariant {
        name: "MissionSegmentWeightXDSM",
        fade_mission_segment: false,
        fade_fuel: true,
        fade_takeoff: true,
        fade_empty: true,
    },
    FigureVariant {
        name: "FuelWeightXDSM",
        fade_mission_segment: true,
        fade_fuel: false,
        fade_takeoff: true,
        fade_empty: true,
    },
    FigureVariant {
        name: "TakeoffWeightXDSM",
        fade_mission_segment: true,
        fade_fuel: true,
        fade_takeoff: false,
        fade_empty: true,
    },
    FigureVariant {
        name: "EmptyWeightXDSM",
        fade_mission_segment: true,
        fade_fuel: true,
        fade_takeoff: true,
        fade_empty: false,
    },
    FigureVariant {
        name: "TakeoffEmptyWeightXDSM",
        fade_mission_segment: true,
        fade_fuel: true,
        fade_takeoff: false,
        fade_empty: false,
    },
];

/// Build one variant of the weight-estimation diagram.
pub fn weight_estimation(variant: &FigureVariant, style: StyleOptions) -> Result<Xdsm, XdsmError> {
    let mut x = Xdsm::new(style);

    // Systems
    x.add_system(
        System::new("mission_segment", SystemKind::Function, [
            r"\text{Mission Segment}",
            r"\text{Weight Fraction}",
        ])
        .with_stacked(true)
        .with_faded(variant.fade_mission_segment),
    )?;
    x.add_system(
        System::new("fuel", SystemKind::Function, [
            r"\text{Fuel Weight}",
            r"\text{Estimation}",
        ])
        .with_faded(variant.fade_fuel),
    )?;
    x.add_system(
        System::new("takeoff", SystemKind::ImplicitFunction, [
            r"\text{Takeoff Weight}",
            r"\text{Estimation}",
        ])
        .with_faded(variant.fade_takeoff),
    )?;
    x.add_system(
        System::new("empty", SystemKind::Function, [
            r"\text{Empty Weight}",
            r"\text{Estimation}",
        ])
        .with_faded(variant.fade_empty),
    )?;

    // Connections
    x.connect(Connection::new("takeoff", "empty", r"W_\mathrm{TO}"))?;
    x.connect(Connection::new("mission_segment", "fuel", r"WFs"))?;
    x.connect(Connection::new("fuel", "takeoff", r"W_\mathrm{f}/W_\mathrm{TO}"))?;
    x.connect(Connection::new("empty", "takeoff", r"W_\mathrm{e}/W_\mathrm{TO}"))?;

    // The takeoff-weight loop converges by revisiting the takeoff box
    x.add_process(["mission_segment", "fuel", "takeoff", "empty", "takeoff"])?;

    // Inputs
    x.add_input("mission_segment", r"\text{Mission Data}")?;
    x.add_input(
        "takeoff",
        r"W_\text{crew}, W_\text{payload}, W_{\mathrm{TO}_\text{init}}",
    )?;

    // Outputs
    x.add_output("takeoff", r"W_\mathrm{TO}^*")?;

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faded_ids(x: &Xdsm) -> Vec<&str> {
        x.systems()
            .filter(|system| system.faded())
            .map(|system| system.id())
            .collect()
    }

    #[test]
    fn test_every_variant_builds() {
        for variant in &FIGURE_VARIANTS {
            let x = weight_estimation(variant, StyleOptions::default())
                .unwrap_or_else(|err| panic!("variant {} failed: {err}", variant.name));
            assert_eq!(x.systems().count(), 4);
            assert_eq!(x.connections().len(), 4);
            assert_eq!(x.process().unwrap().steps().len(), 5);
        }
    }

    #[test]
    fn test_full_figure_has_no_faded_boxes() {
        let x = weight_estimation(&FIGURE_VARIANTS[0], StyleOptions::default()).unwrap();
        assert!(faded_ids(&x).is_empty());
    }

    #[test]
    fn test_sub_figures_fade_all_but_the_highlighted_boxes() {
        let fuel = weight_estimation(&FIGURE_VARIANTS[2], StyleOptions::default()).unwrap();
        assert_eq!(faded_ids(&fuel), ["mission_segment", "takeoff", "empty"]);

        let takeoff_empty =
            weight_estimation(&FIGURE_VARIANTS[5], StyleOptions::default()).unwrap();
        assert_eq!(faded_ids(&takeoff_empty), ["mission_segment", "fuel"]);
    }

    #[test]
    fn test_variant_names_are_unique() {
        let mut names: Vec<_> = FIGURE_VARIANTS.iter().map(|variant| variant.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FIGURE_VARIANTS.len());
    }

    #[test]
    fn test_process_closes_the_takeoff_loop() {
        let x = weight_estimation(&FIGURE_VARIANTS[0], StyleOptions::default()).unwrap();
        let steps = x.process().unwrap().steps();
        assert_eq!(steps.first().map(String::as_str), Some("mission_segment"));
        assert_eq!(steps.last().map(String::as_str), Some("takeoff"));
    }
}
