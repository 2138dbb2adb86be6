use std::path::Path;

use tempfile::tempdir;

use xdsm_figures::{Args, FigureSelection, run};

/// Every file name the full run is expected to emit.
const EXPECTED_FIGURES: &[&str] = &[
    "ConstraintAnalysisXDSM",
    "WeightEstimationXDSM",
    "MissionSegmentWeightXDSM",
    "FuelWeightXDSM",
    "TakeoffWeightXDSM",
    "EmptyWeightXDSM",
    "TakeoffEmptyWeightXDSM",
];

fn args_for(figure: FigureSelection, out_dir: &Path) -> Args {
    Args {
        figure,
        out_dir: Some(out_dir.to_path_buf()),
        no_build: true,
        keep_build_files: false,
        quiet: true,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_all_figures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    run(&args_for(FigureSelection::All, temp_dir.path())).expect("full run succeeds");

    let mut missing = Vec::new();
    for name in EXPECTED_FIGURES {
        for extension in ["tikz", "tex"] {
            let path = temp_dir.path().join(format!("{name}.{extension}"));
            if !path.is_file() {
                missing.push(path);
            }
        }
    }

    if !missing.is_empty() {
        eprintln!("\nExpected outputs that were not written:");
        for path in &missing {
            eprintln!("  - {}", path.display());
        }
        panic!("{} expected output file(s) missing", missing.len());
    }

    assert!(
        temp_dir.path().join("diagram_styles.tex").is_file(),
        "style preamble written alongside the figures"
    );
}

#[test]
fn e2e_smoke_test_single_family() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    run(&args_for(FigureSelection::ConstraintAnalysis, temp_dir.path()))
        .expect("constraint-analysis run succeeds");

    assert!(temp_dir.path().join("ConstraintAnalysisXDSM.tex").is_file());
    assert!(
        !temp_dir.path().join("WeightEstimationXDSM.tex").exists(),
        "only the selected family is generated"
    );
}

#[test]
fn e2e_smoke_test_missing_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut args = args_for(FigureSelection::All, temp_dir.path());
    args.config = Some("does/not/exist.toml".to_string());

    assert!(run(&args).is_err(), "explicit missing config is an error");
}
