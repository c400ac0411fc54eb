use chrono::Local;
use presencelog::archive::{FsRecordStore, RosterArchiver};
use presencelog::models::roster::{RosterEntry, RosterRecord};
use std::env;
use std::fs;
use std::path::PathBuf;

fn setup_archive_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_presencelog_archive", name));
    fs::remove_dir_all(&path).ok();
    path
}

fn roster_of(names: &[(&str, &str)]) -> RosterRecord {
    let closed_at = Local::now();
    RosterRecord {
        closed_at,
        entries: names
            .iter()
            .map(|(id, name)| RosterEntry {
                user_id: id.to_string(),
                display_name: name.to_string(),
                recorded_at: closed_at,
            })
            .collect(),
    }
}

#[test]
fn archive_writes_one_line_per_entry() {
    let dir = setup_archive_dir("lines");
    let record = roster_of(&[("42", "Alice"), ("99", "Bob")]);

    let store = FsRecordStore::new(&dir);
    let path = RosterArchiver::new(&store).archive(&record).unwrap();

    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let stamp = record.closed_at.format("%Y-%m-%d %H:%M:%S").to_string();
    assert_eq!(lines[0], format!("Alice - {stamp}"));
    assert_eq!(lines[1], format!("Bob - {stamp}"));
}

#[test]
fn record_name_carries_the_closing_timestamp() {
    let dir = setup_archive_dir("name");
    let record = roster_of(&[("42", "Alice")]);

    let store = FsRecordStore::new(&dir);
    let path = RosterArchiver::new(&store).archive(&record).unwrap();

    let expected = format!(
        "checkins_{}.txt",
        record.closed_at.format("%Y%m%d_%H%M%S")
    );
    assert_eq!(path.file_name().unwrap().to_str().unwrap(), expected);
}

#[test]
fn archiver_creates_the_directory_on_demand() {
    let dir = setup_archive_dir("mkdir");
    assert!(!dir.exists());

    let store = FsRecordStore::new(&dir);
    RosterArchiver::new(&store)
        .archive(&roster_of(&[("1", "Zed")]))
        .unwrap();

    assert!(dir.exists());
}
