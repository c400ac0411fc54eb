use chrono::{DateTime, Local};
use serde::Serialize;

/// One registrant on a finalized roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub user_id: String,
    pub display_name: String,
    /// Stamped when the roster is frozen, so every line of the archived
    /// record carries the closing time of the window.
    pub recorded_at: DateTime<Local>,
}

/// Finalized list of the users who registered presence during one
/// check-in window. Immutable once frozen.
#[derive(Debug, Clone, Serialize)]
pub struct RosterRecord {
    pub closed_at: DateTime<Local>,
    pub entries: Vec<RosterEntry>,
}
