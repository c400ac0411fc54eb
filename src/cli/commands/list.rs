use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::fs;
use std::path::PathBuf;

/// Print the most recent archived roster.
/// Record names embed the closing timestamp, so the lexicographic
/// maximum is the latest window.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut records: Vec<PathBuf> = match fs::read_dir(&cfg.archive_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("checkins_") && n.ends_with(".txt"))
            })
            .collect(),
        Err(_) => Vec::new(),
    };
    records.sort();

    match records.last() {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            messages::header(format!("Check-ins ({})", path.display()));
            print!("{content}");
        }
        None => messages::info("No check-ins recorded yet."),
    }
    Ok(())
}
