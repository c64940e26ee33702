use predicates::str::contains;
use std::fs;

mod common;
use common::{avz, setup_test_csv, temp_out, write_test_csv};

#[test]
fn test_render_writes_svg() {
    let csv = setup_test_csv("render_writes_svg");
    let out = temp_out("render_writes_svg", "svg");

    avz()
        .args(["--data", &csv, "render", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("Chart written"));

    let content = fs::read_to_string(&out).expect("read rendered svg");
    assert!(content.starts_with("<svg"));
    assert!(content.contains(">Browser</text>"));
    assert!(content.contains(">Editor</text>"));
    assert!(content.contains("fill=\"#2288ff\""));
}

#[test]
fn test_render_respects_dimension_flags() {
    let csv = setup_test_csv("render_dimensions");
    let out = temp_out("render_dimensions", "svg");

    avz()
        .args([
            "--data", &csv, "render", "--file", &out, "--width", "800", "--height", "600",
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read rendered svg");
    assert!(content.contains("width=\"800\""));
    assert!(content.contains("height=\"600\""));
}

#[test]
fn test_render_empty_log_writes_nothing() {
    let csv = write_test_csv("render_empty", "Time,Application,Status\n");
    let out = temp_out("render_empty", "svg");

    avz()
        .args(["--data", &csv, "render", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("nothing to render"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_render_missing_data_file_fails() {
    let out = temp_out("render_missing_data", "svg");

    avz()
        .args([
            "--data",
            "/nonexistent/appviz_console.csv",
            "render",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("Data file not found"));
}

#[test]
fn test_info_prints_summary() {
    let csv = setup_test_csv("info_summary");

    avz()
        .args(["--data", &csv, "info"])
        .assert()
        .success()
        .stdout(contains("Browser"))
        .stdout(contains("Editor"))
        .stdout(contains("Rows:      6"))
        .stdout(contains("Hours:     2"));
}

#[test]
fn test_info_empty_log_warns() {
    let csv = write_test_csv("info_empty", "Time,Application,Status\n");

    avz()
        .args(["--data", &csv, "info"])
        .assert()
        .success()
        .stdout(contains("No events found"));
}

#[test]
fn test_init_test_mode() {
    avz()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
}

#[test]
fn test_column_order_is_free() {
    let csv = write_test_csv(
        "column_order",
        "Application,Status,Time\nBrowser,Launched,1000\nBrowser,Terminated,7200\n",
    );
    let out = temp_out("column_order", "svg");

    avz()
        .args(["--data", &csv, "render", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read rendered svg");
    assert!(content.contains("stroke=\"#080\""));
    assert!(content.contains("stroke=\"#f00\""));
}
