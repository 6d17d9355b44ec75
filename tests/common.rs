#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use thinktimer::App;
use thinktimer::models::{CreateProjectRequest, Project};

pub fn tt() -> Command {
    cargo_bin_cmd!("thinktimer")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_thinktimer.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB through the CLI (test mode: no config file written)
pub fn init_db(db_path: &str) {
    tt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn memory_app() -> App {
    App::open_in_memory().expect("open in-memory app")
}

pub fn project(app: &mut App, name: &str) -> Project {
    app.create_project(&CreateProjectRequest::named(name))
        .expect("create project")
}

/// Local wall-clock instant as UTC.
pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("valid utc time")
}
