#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plog() -> Command {
    cargo_bin_cmd!("presencelog")
}

/// Create a unique data dir inside the system temp dir and reset it
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_presencelog", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create data dir");
    dir
}

/// Seed bank and deposit tables with a small community:
/// Alice (42) with a comma-decimal balance and a pending deposit,
/// Bob (99) with a plain balance and no pending deposit value.
pub fn seed_ledger(dir: &str) {
    fs::write(
        format!("{dir}/bank.csv"),
        "name,user_id,balance\nAlice,42,\"10,5\"\nBob,99,3\n",
    )
    .expect("seed bank table");
    fs::write(
        format!("{dir}/deposit.csv"),
        "name,user_id,presence,note,deposit\nAlice,42,3,,\"2,25\"\nBob,99,0,,1\n",
    )
    .expect("seed deposit table");
}

/// Paths of the archived roster records under a data dir, sorted by name
pub fn archived_records(dir: &str) -> Vec<PathBuf> {
    let archive = PathBuf::from(dir).join("checkins");
    let mut records: Vec<PathBuf> = match fs::read_dir(archive) {
        Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(_) => Vec::new(),
    };
    records.sort();
    records
}
