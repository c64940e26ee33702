#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn avz() -> Command {
    cargo_bin_cmd!("appviz")
}

/// Small activity log covering every known status across two applications.
pub const SAMPLE_CSV: &str = "Time,Application,Status\n\
1000,Browser,Launched\n\
1300,Editor,Launched\n\
2200,Browser,Activated\n\
4600,Editor,Activated\n\
5200,Browser,Deactivated\n\
7200,Browser,Terminated\n";

/// Write `content` to a unique CSV path inside the system temp dir.
pub fn write_test_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_appviz.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    fs::write(&p, content).expect("write test csv");
    p
}

/// Default sample log for tests that only need plausible data.
pub fn setup_test_csv(name: &str) -> String {
    write_test_csv(name, SAMPLE_CSV)
}

/// Create a temporary output file path and ensure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
