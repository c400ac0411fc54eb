use presencelog::core::session::{CloseOutcome, RegisterOutcome, SessionManager};
use presencelog::errors::AppError;
use std::time::Duration;

fn open_manager() -> SessionManager {
    let manager = SessionManager::new();
    manager.open(Duration::from_secs(60)).expect("open window");
    manager
}

#[test]
fn registering_twice_is_a_duplicate_and_changes_nothing() {
    let manager = open_manager();

    assert_eq!(
        manager.register("42", "Alice").unwrap(),
        RegisterOutcome::Registered
    );
    assert_eq!(
        manager.register("42", "Alice").unwrap(),
        RegisterOutcome::Duplicate
    );
    assert_eq!(
        manager.register("99", "Bob").unwrap(),
        RegisterOutcome::Registered
    );

    match manager.close().unwrap() {
        CloseOutcome::Roster(roster) => {
            let names: Vec<_> = roster
                .entries
                .iter()
                .map(|e| e.display_name.as_str())
                .collect();
            assert_eq!(names, ["Alice", "Bob"]);
        }
        CloseOutcome::NoRoster => panic!("expected a roster with two entries"),
    }
}

#[test]
fn roster_preserves_registration_order() {
    let manager = open_manager();
    for (id, name) in [("3", "Carol"), ("1", "Alice"), ("2", "Bob")] {
        manager.register(id, name).unwrap();
    }

    let CloseOutcome::Roster(roster) = manager.close().unwrap() else {
        panic!("expected a roster");
    };
    let ids: Vec<_> = roster.entries.iter().map(|e| e.user_id.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);
}

#[test]
fn closing_an_empty_window_yields_no_roster() {
    let manager = open_manager();
    assert!(matches!(manager.close().unwrap(), CloseOutcome::NoRoster));
}

#[test]
fn second_open_fails_fast_while_a_window_is_live() {
    let manager = open_manager();
    assert!(matches!(
        manager.open(Duration::from_secs(1)),
        Err(AppError::SessionAlreadyOpen)
    ));
}

#[test]
fn closed_session_rejects_registration_and_a_second_close() {
    let manager = open_manager();
    manager.register("42", "Alice").unwrap();
    manager.close().unwrap();

    assert!(matches!(
        manager.register("7", "Eve"),
        Err(AppError::SessionClosed)
    ));
    assert!(matches!(manager.close(), Err(AppError::SessionClosed)));
}

#[test]
fn slot_frees_up_after_close() {
    let manager = open_manager();
    manager.close().unwrap();

    manager
        .open(Duration::from_secs(60))
        .expect("slot should be free once the previous window closed");
    assert_eq!(
        manager.register("1", "Zed").unwrap(),
        RegisterOutcome::Registered
    );
}

#[test]
fn roster_entries_are_stamped_with_the_closing_time() {
    let manager = open_manager();
    manager.register("42", "Alice").unwrap();
    manager.register("99", "Bob").unwrap();

    let CloseOutcome::Roster(roster) = manager.close().unwrap() else {
        panic!("expected a roster");
    };
    for entry in &roster.entries {
        assert_eq!(entry.recorded_at, roster.closed_at);
    }
}

#[test]
fn deadline_is_exposed_only_while_open() {
    let manager = SessionManager::new();
    assert!(manager.deadline().is_none());

    manager.open(Duration::from_secs(60)).unwrap();
    assert!(manager.deadline().is_some());

    manager.close().unwrap();
    assert!(manager.deadline().is_none());
}
