use std::{fs, path::PathBuf};

use serde_json::Value;
use tempfile::tempdir;

use shajara::{ShajaraError, view::ViewMode};
use shajara_cli::{Args, run};

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

fn args(input: &PathBuf, output: &PathBuf, view: Option<&str>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        view: view.map(str::to_string),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demos_in_every_view() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = collect_json_files(demos_dir());

    assert!(!demos.is_empty(), "No demo files found in demos/");

    let mut failed = Vec::new();

    for demo in &demos {
        let stem = demo.file_stem().unwrap().to_string_lossy().to_string();
        for view in ViewMode::ALL {
            let output = temp_dir.path().join(format!("{stem}-{view}.json"));
            let tag = view.to_string();

            if let Err(e) = run(&args(demo, &output, Some(&tag))) {
                failed.push(format!("{} ({view}): {e}", demo.display()));
                continue;
            }

            let written = fs::read_to_string(&output).expect("Output file missing");
            let value: Value = serde_json::from_str(&written).expect("Output is not JSON");
            assert_eq!(value["view"], tag.as_str());
            assert!(value["positions"].is_array());
            assert!(value["edges"].is_array());
        }
    }

    assert!(failed.is_empty(), "Demos failed:\n{}", failed.join("\n"));
}

#[test]
fn e2e_radial_places_every_member() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("three_generations.json");
    let output = temp_dir.path().join("radial.json");

    run(&args(&input, &output, Some("circular"))).expect("Run failed");

    let value: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["view"], "radial");

    let positions = value["positions"].as_array().unwrap();
    assert_eq!(positions.len(), 8);
    // Three roots: the founders' tree takes the whole base ring and the two
    // married-in roots ride along as companions.
    assert_eq!(positions[0]["id"], "1");
    assert_eq!(positions[0]["x"], 120.0);
    assert_eq!(positions[0]["y"], 0.0);
    assert_eq!(positions[0]["level"], 0);
    assert_eq!(positions[1]["id"], "2");
    assert_eq!(positions[1]["x"], 260.0);
}

#[test]
fn e2e_unknown_view_uses_default() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("storage_export.json");
    let output = temp_dir.path().join("out.json");

    run(&args(&input, &output, Some("spiral"))).expect("Run failed");

    let value: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["view"], "horizontal-tree");
    assert_eq!(value["positions"].as_array().unwrap().len(), 5);
}

#[test]
fn e2e_damaged_links_are_absorbed() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("damaged_links.json");
    let output = temp_dir.path().join("out.json");

    run(&args(&input, &output, Some("network"))).expect("Run failed");

    let value: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    // The duplicate id is dropped; dangling references produce no edges.
    assert_eq!(value["positions"].as_array().unwrap().len(), 4);
    assert_eq!(value["edges"].as_array().unwrap().len(), 3);
}

#[test]
fn e2e_invalid_input_is_parse_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("broken.json");
    let output = temp_dir.path().join("out.json");
    fs::write(&input, "[{ \"id\": 1, ").unwrap();

    let err = run(&args(&input, &output, None)).expect_err("Run should fail");

    assert!(matches!(err, ShajaraError::Parse { .. }));
    assert!(!output.exists());
}

#[test]
fn e2e_missing_input_is_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.json");
    let output = temp_dir.path().join("out.json");

    let err = run(&args(&input, &output, None)).expect_err("Run should fail");

    assert!(matches!(err, ShajaraError::Io(_)));
}
