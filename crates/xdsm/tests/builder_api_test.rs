//! Integration tests for the public diagram-building API
//!
//! These tests exercise the declare-validate-write cycle end to end,
//! with compilation disabled so they run without a LaTeX toolchain.

use std::fs;

use tempfile::tempdir;

use xdsm::{
    Xdsm, XdsmError,
    config::{StyleOptions, WriteOptions},
    model::{Connection, System, SystemKind},
};

fn write_options(out_dir: &std::path::Path) -> WriteOptions {
    WriteOptions {
        out_dir: out_dir.to_path_buf(),
        build: false,
        cleanup: false,
        quiet: true,
    }
}

#[test]
fn test_write_emits_named_source_files() {
    let mut x = Xdsm::new(StyleOptions::default());
    x.add_system(System::new("opt", SystemKind::Optimizer, r"\text{Optimizer}"))
        .unwrap();
    x.add_system(System::new("aero", SystemKind::Function, r"\text{Aero}"))
        .unwrap();
    x.connect(Connection::new("aero", "opt", r"\text{result}"))
        .unwrap();
    x.add_output("opt", r"\text{answer}").unwrap();

    let dir = tempdir().expect("temp dir");
    x.write("Demo", &write_options(dir.path())).expect("write succeeds");

    assert!(dir.path().join("Demo.tikz").is_file());
    assert!(dir.path().join("Demo.tex").is_file());
    assert!(dir.path().join("diagram_styles.tex").is_file());
}

#[test]
fn test_repeated_writes_are_byte_identical() {
    let mut x = Xdsm::new(StyleOptions::default());
    x.add_system(
        System::new("climb", SystemKind::ImplicitFunction, [
            r"\text{Climb}",
            r"\text{Constraints}",
        ])
        .with_stacked(true),
    )
    .unwrap();
    x.add_system(System::new("opt", SystemKind::Optimizer, r"\text{Opt}"))
        .unwrap();
    x.connect(Connection::new("climb", "opt", r"(T/W)_\text{climb}").with_stacked(true))
        .unwrap();

    let dir = tempdir().expect("temp dir");
    let options = write_options(dir.path());

    x.write("Twice", &options).unwrap();
    let first_tikz = fs::read(dir.path().join("Twice.tikz")).unwrap();
    let first_tex = fs::read(dir.path().join("Twice.tex")).unwrap();

    x.write("Twice", &options).unwrap();
    assert_eq!(fs::read(dir.path().join("Twice.tikz")).unwrap(), first_tikz);
    assert_eq!(fs::read(dir.path().join("Twice.tex")).unwrap(), first_tex);
}

#[test]
fn test_connect_on_empty_diagram_fails_and_leaves_no_connections() {
    let mut x = Xdsm::new(StyleOptions::default());
    let err = x.connect(Connection::new("missing", "opt", "x")).unwrap_err();
    assert!(matches!(err, XdsmError::UnknownSystem(id) if id == "missing"));
    assert!(x.connections().is_empty());
    assert_eq!(x.systems().count(), 0);
}

#[test]
fn test_redeclaring_a_system_fails_and_keeps_the_original() {
    let mut x = Xdsm::new(StyleOptions::default());
    x.add_system(System::new("a", SystemKind::Function, ["A"])).unwrap();

    let err = x
        .add_system(System::new("a", SystemKind::Function, ["B"]))
        .unwrap_err();
    assert!(matches!(err, XdsmError::DuplicateSystem(id) if id == "a"));

    let kept = x.systems().next().unwrap();
    assert_eq!(kept.label().lines(), ["A"]);
}

#[test]
fn test_referential_closure_holds_after_population() {
    let mut x = Xdsm::new(StyleOptions::default());
    for id in ["mission_segment", "fuel", "takeoff", "empty"] {
        x.add_system(System::new(id, SystemKind::Function, r"\text{F}"))
            .unwrap();
    }
    x.connect(Connection::new("takeoff", "empty", r"W_\mathrm{TO}"))
        .unwrap();
    x.add_process(["mission_segment", "fuel", "takeoff", "empty", "takeoff"])
        .unwrap();
    x.add_input("mission_segment", r"\text{Mission Data}").unwrap();
    x.add_output("takeoff", r"W_\mathrm{TO}^*").unwrap();

    let declared: Vec<&str> = x.systems().map(System::id).collect();
    for connection in x.connections() {
        assert!(declared.contains(&connection.from()));
        assert!(declared.contains(&connection.to()));
    }
    for id in x.inputs().keys().chain(x.outputs().keys()) {
        assert!(declared.contains(&id.as_str()));
    }
    for step in x.process().unwrap().steps() {
        assert!(declared.contains(&step.as_str()));
    }
}
