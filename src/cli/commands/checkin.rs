use crate::archive::{FsRecordStore, RosterArchiver};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::Reconciler;
use crate::core::session::{CloseOutcome, RegisterOutcome, SessionManager};
use crate::errors::{AppError, AppResult};
use crate::ledger::csv_store::CsvLedgerStore;
use crate::ui::messages;
use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Open a check-in window and run it to completion.
///
/// Registration events arrive on stdin, one per line:
/// `<user_id> <display name>`. A `close` line is the administrative
/// early close; stdin EOF only stops the intake, the window still
/// expires at its deadline.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin { duration } = cmd {
        let secs = duration.unwrap_or(cfg.checkin_duration_secs);
        if secs == 0 {
            return Err(AppError::InvalidDuration(
                "the window must stay open for at least one second".to_string(),
            ));
        }

        let manager = SessionManager::new();
        manager.open(Duration::from_secs(secs))?;

        let mut store = CsvLedgerStore::new(&cfg.bank_file, &cfg.deposit_file);

        messages::info(format!(
            "Check-in open for {} seconds. One registration per line: <user_id> <display name>. \
             Type 'close' to end early.",
            secs
        ));

        // Stdin is read on its own thread so the deadline wait stays
        // cancellable; events and expiry both go through the manager.
        let (tx, rx) = mpsc::channel::<String>();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        loop {
            let Some(deadline) = manager.deadline() else {
                break;
            };
            let now = Instant::now();
            if now >= deadline {
                break;
            }

            match rx.recv_timeout(deadline - now) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line.eq_ignore_ascii_case("close") {
                        break;
                    }
                    let Some((user_id, display_name)) = split_event(line) else {
                        messages::warning(format!("Ignoring malformed event '{line}'"));
                        continue;
                    };

                    match manager.register(user_id, display_name)? {
                        RegisterOutcome::Registered => {
                            messages::success(format!("{display_name} checked in."));
                            // Credited once per successful registration,
                            // synchronously, so a ledger failure is visible
                            // right where it happened.
                            let mut rec = Reconciler::new(&mut store, cfg.column_layout());
                            if let Err(e) = rec.credit_presence(user_id) {
                                messages::warning(format!(
                                    "Presence not credited for {user_id}: {e}"
                                ));
                            }
                        }
                        RegisterOutcome::Duplicate => {
                            messages::warning(format!(
                                "{display_name}, you already checked in."
                            ));
                        }
                    }
                }
                Err(mpsc::RecvTimeoutError::Timeout) => break,
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    // Stdin is gone; nobody else can register, but the
                    // window still runs out its clock.
                    let now = Instant::now();
                    if deadline > now {
                        thread::sleep(deadline - now);
                    }
                    break;
                }
            }
        }

        match manager.close()? {
            CloseOutcome::Roster(record) => {
                let records = FsRecordStore::new(&cfg.archive_dir);
                let archiver = RosterArchiver::new(&records);
                match archiver.archive(&record) {
                    Ok(path) => messages::success(format!(
                        "Check-in closed. Roster saved to {}",
                        path.display()
                    )),
                    Err(e) => {
                        // The roster must survive an archive failure;
                        // dump it so the operator can save it by hand.
                        messages::error("Archiving failed; roster follows.");
                        for entry in &record.entries {
                            println!("{} - {}", entry.display_name, entry.user_id);
                        }
                        return Err(e);
                    }
                }
            }
            CloseOutcome::NoRoster => {
                messages::info("Check-in closed, but nobody checked in.");
            }
        }
    }

    Ok(())
}

/// Split a registration line into `(user_id, display_name)`.
fn split_event(line: &str) -> Option<(&str, &str)> {
    let (user_id, name) = line.split_once(|c: char| c.is_whitespace())?;
    let name = name.trim();
    if user_id.is_empty() || name.is_empty() {
        return None;
    }
    Some((user_id, name))
}
