//! Check-in session state machine.
//!
//! One window is a two-state machine, Open(deadline) -> Closed. The
//! manager owns a single slot, so a second window can never open while
//! one is live, and every mutation goes through one mutex.

use crate::errors::{AppError, AppResult};
use crate::models::roster::{RosterEntry, RosterRecord};
use chrono::Local;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug)]
enum State {
    Open { deadline: Instant },
    Closed,
}

#[derive(Debug)]
struct Registrant {
    user_id: String,
    display_name: String,
}

/// One check-in window. Accepts registrations while open, rejects
/// duplicates, and freezes the registrant list into a roster when it
/// expires. Closing happens exactly once.
#[derive(Debug)]
pub struct AttendanceSession {
    state: State,
    registrants: Vec<Registrant>,
}

/// Result of a registration attempt on an open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    /// The user had already registered; nothing changed.
    Duplicate,
}

/// Result of expiring an open session.
#[derive(Debug)]
pub enum CloseOutcome {
    Roster(RosterRecord),
    /// Nobody registered, so there is nothing to archive.
    NoRoster,
}

impl AttendanceSession {
    fn open(duration: Duration) -> Self {
        Self {
            state: State::Open {
                deadline: Instant::now() + duration,
            },
            registrants: Vec::new(),
        }
    }

    fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    fn register(&mut self, user_id: &str, display_name: &str) -> AppResult<RegisterOutcome> {
        if !self.is_open() {
            return Err(AppError::SessionClosed);
        }

        if self.registrants.iter().any(|r| r.user_id == user_id) {
            return Ok(RegisterOutcome::Duplicate);
        }

        self.registrants.push(Registrant {
            user_id: user_id.to_string(),
            display_name: display_name.to_string(),
        });
        Ok(RegisterOutcome::Registered)
    }

    fn expire(&mut self) -> AppResult<CloseOutcome> {
        if !self.is_open() {
            return Err(AppError::SessionClosed);
        }
        self.state = State::Closed;

        if self.registrants.is_empty() {
            return Ok(CloseOutcome::NoRoster);
        }

        let closed_at = Local::now();
        let entries = self
            .registrants
            .drain(..)
            .map(|r| RosterEntry {
                user_id: r.user_id,
                display_name: r.display_name,
                recorded_at: closed_at,
            })
            .collect();

        Ok(CloseOutcome::Roster(RosterRecord { closed_at, entries }))
    }
}

/// Single-slot owner of the current session. Registrations and expiry
/// are serialized through the same lock, so a late registration can
/// never race an in-flight close.
#[derive(Debug, Default)]
pub struct SessionManager {
    slot: Mutex<Option<AttendanceSession>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new window. Fails fast while another window is open; a
    /// closed session left in the slot is replaced.
    pub fn open(&self, duration: Duration) -> AppResult<()> {
        let mut slot = self.slot.lock().unwrap();
        if slot.as_ref().is_some_and(AttendanceSession::is_open) {
            return Err(AppError::SessionAlreadyOpen);
        }
        *slot = Some(AttendanceSession::open(duration));
        Ok(())
    }

    pub fn register(&self, user_id: &str, display_name: &str) -> AppResult<RegisterOutcome> {
        let mut slot = self.slot.lock().unwrap();
        slot.as_mut()
            .ok_or(AppError::SessionClosed)?
            .register(user_id, display_name)
    }

    /// Expire the current window, on deadline or administrative close.
    /// Has no effect (beyond the error) once already closed.
    pub fn close(&self) -> AppResult<CloseOutcome> {
        let mut slot = self.slot.lock().unwrap();
        slot.as_mut().ok_or(AppError::SessionClosed)?.expire()
    }

    /// Deadline of the open window, if one is open.
    pub fn deadline(&self) -> Option<Instant> {
        let slot = self.slot.lock().unwrap();
        match slot.as_ref()?.state {
            State::Open { deadline } => Some(deadline),
            State::Closed => None,
        }
    }
}
