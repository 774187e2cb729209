use tempfile::tempdir;

use lsbstego_cli::{
    commands::{hide, inspect},
    KeySource,
};
use lsbstego_core::{codec, GridShape, SampleGrid};

fn write_png(dir: &std::path::Path, name: &str, grid: &SampleGrid) -> String {
    let path = dir.join(name);
    codec::save_png(grid, &path).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn inspect_reports_capacity() {
    let td = tempdir().unwrap();
    let grid = SampleGrid::from_fn(GridShape::new(10, 10, 4), |_| 0x40).unwrap();
    let path = write_png(td.path(), "cover.png", &grid);

    let report = inspect::report(&path).unwrap();

    assert_eq!(report.width, 10);
    assert_eq!(report.height, 10);
    assert_eq!(report.channels, 4);
    assert_eq!(report.samples, 400);
    assert_eq!(report.max_payload_bytes, (400 - 16) / 8);
    assert_eq!(report.max_plaintext_bytes, (400 - 16) / 8 / 4 * 3 - 28);
    assert!(!report.marker_present);
    assert_eq!(report.hidden_payload_bytes, None);
}

#[test]
fn inspect_detects_hidden_payload() {
    let td = tempdir().unwrap();
    let grid = SampleGrid::from_fn(GridShape::new(20, 20, 3), |i| (i % 256) as u8).unwrap();
    let cover = write_png(td.path(), "cover.png", &grid);
    let stego = td.path().join("stego.png");

    hide::hide_bytes(&cover, stego.to_str().unwrap(), b"hello", &KeySource::Raw).unwrap();

    let report = inspect::report(stego.to_str().unwrap()).unwrap();
    assert!(report.marker_present);
    assert_eq!(report.hidden_payload_bytes, Some(5));
}

#[test]
fn inspect_json_output_runs() {
    let td = tempdir().unwrap();
    let grid = SampleGrid::from_fn(GridShape::new(8, 8, 1), |_| 0).unwrap();
    let path = write_png(td.path(), "gray.png", &grid);

    inspect::execute(&path, true).unwrap();
    inspect::execute(&path, false).unwrap();
}

#[test]
fn inspect_missing_file_fails() {
    let td = tempdir().unwrap();
    let missing = td.path().join("missing.png");
    assert!(inspect::report(missing.to_str().unwrap()).is_err());
}
