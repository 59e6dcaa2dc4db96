#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rattendance::core::FileIntake;
use rattendance::models::{FileCandidate, SourceFile};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const SAMPLE_CSV: &str = "employee,date,login,logout\nE001,2025-03-10,09:00,17:30\n";

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write `content` to `dir/name` and return the full path as a string
pub fn write_file(dir: &PathBuf, name: &str, content: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("write sample file");
    path.to_string_lossy().to_string()
}

/// Config file pointing the CLI at `api_base`, writing documents to `dir`
pub fn write_config(dir: &PathBuf, api_base: &str) -> String {
    let yaml = format!(
        "api_base: \"{api_base}\"\noutput_dir: \"{}\"\ntimeout_secs: 5\n",
        dir.to_string_lossy()
    );
    write_file(dir, "rattendance.conf", yaml.as_bytes())
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A validated CSV timesheet
pub fn sample_source(name: &str) -> SourceFile {
    FileIntake::new(false)
        .submit_candidate(FileCandidate::new(name, SAMPLE_CSV.as_bytes().to_vec()))
        .expect("sample is a valid timesheet")
}
