//! Integration tests for the command line tools

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

const STEER: &str = env!("CARGO_BIN_EXE_steer-incljet");
const MAKETABLE: &str = env!("CARGO_BIN_EXE_maketable");

fn file_count(dir: &TempDir) -> usize {
    fs::read_dir(dir.path()).unwrap().count()
}

#[test]
fn steer_missing_arguments_print_usage_and_write_nothing() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(STEER)
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("usage: steer-incljet <ieta> <radius>"));
    assert_eq!(file_count(&dir), 0);
}

#[test]
fn steer_malformed_eta_index_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(STEER)
        .args(["abc", "4"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(file_count(&dir), 0);
}

#[test]
fn steer_out_of_range_eta_index_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(STEER)
        .args(["7", "4"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(file_count(&dir), 0);
}

#[test]
fn steer_writes_one_steering_file() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(STEER)
        .args(["1", "4"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = fs::read_to_string(dir.path().join("steering_incljet_eta1_r04.txt")).unwrap();
    assert!(text.contains("[Gen]"));
    assert!(text.contains("[Graph]"));
    assert!(text.contains("[Plot_0]"));
    assert!(text.contains("data_steering_files = atlas_2012_jet_antiktr04_incljetpt_eta1_comb.txt"));
}

#[test]
fn maketable_writes_four_files_and_prints_end() {
    let dir = TempDir::new().unwrap();
    let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("crates/table/data/incljets.txt");
    let output = Command::new(MAKETABLE)
        .arg(input)
        .args(["x", "Data/jet/atlas/incljets2011/"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_end().ends_with("end"));
    for name in ["x", "x_data.txt", "x_hadcorr.txt", "x_ewcorr.txt"] {
        assert!(dir.path().join(name).is_file(), "missing output {name}");
    }
}

#[test]
fn maketable_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(MAKETABLE)
        .args(["no_such_table.txt", "x", ""])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!dir.path().join("x_data.txt").exists());
}
