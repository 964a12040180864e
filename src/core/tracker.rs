//! Application facade over the core components.
//!
//! Owns the three boundary ports plus the reminder-id bookkeeping the
//! stateless scheduler refuses to carry: one map ownerId → issued
//! notification ids, cancelled before every reschedule so a logical
//! reminder never fires twice.

use crate::core::machine;
use crate::core::ports::{Clock, LogStore, NotificationPort, ReminderPayload};
use crate::core::scheduler::{self, Trigger};
use crate::core::validator::{self, PlausibilityWarning, Policy};
use crate::core::classifier;
use crate::errors::AppResult;
use crate::models::classification::DayClassification;
use crate::models::day_status::DailyWorkStatus;
use crate::models::event_kind::EventKind;
use crate::models::log_entry::LogEntry;
use crate::models::note::Note;
use crate::models::shift::Shift;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::HashMap;

/// Result of recording one event: the new day status plus an optional
/// advisory warning when the timestamp fell outside the shift window.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub status: DailyWorkStatus,
    pub warning: Option<PlausibilityWarning>,
}

pub struct AttendanceTracker<C: Clock, S: LogStore, N: NotificationPort> {
    clock: C,
    store: S,
    notifier: N,
    policy: Policy,
    horizon_days: u64,
    issued: HashMap<String, Vec<i64>>,
}

impl<C: Clock, S: LogStore, N: NotificationPort> AttendanceTracker<C, S, N> {
    pub fn new(clock: C, store: S, notifier: N, policy: Policy, horizon_days: u64) -> Self {
        Self {
            clock,
            store,
            notifier,
            policy,
            horizon_days,
            issued: HashMap::new(),
        }
    }

    /// Record an attendance event at the current clock instant.
    pub fn record_event(&mut self, shift: &Shift, kind: EventKind) -> AppResult<RecordOutcome> {
        let now = self.clock.now();
        self.record_event_at(shift, kind, now)
    }

    /// Record an attendance event with an explicit timestamp (used by
    /// the CLI's `--at` override and by tests).
    ///
    /// The transition is validated against the replayed current status
    /// before anything is written, so a rejected event leaves the log
    /// untouched. An implausible timestamp only produces a warning.
    pub fn record_event_at(
        &mut self,
        shift: &Shift,
        kind: EventKind,
        at: DateTime<Local>,
    ) -> AppResult<RecordOutcome> {
        let entries = self.store.entries_for(at.date_naive())?;
        let current = machine::replay(&entries)?;

        let entry = LogEntry::new(&shift.id, kind, at);
        let status = machine::apply(&current, &entry)?;
        self.store.append(&entry)?;

        let warning = if validator::is_log_plausible(at, shift, &self.policy) {
            None
        } else {
            Some(PlausibilityWarning {
                shift_id: shift.id.clone(),
                kind,
                timestamp: at,
            })
        };

        Ok(RecordOutcome { status, warning })
    }

    /// The day's status, replayed from its log; the default
    /// `not_started` record when the day has no entries.
    pub fn current_status(&self, day: NaiveDate) -> AppResult<DailyWorkStatus> {
        let entries = self.store.entries_for(day)?;
        machine::replay(&entries)
    }

    /// Delete a day's logs and status outright. When the day's shift is
    /// still active its future reminders are recomputed from "now",
    /// cancelling the ones issued under the old completion state first.
    pub fn reset_day(&mut self, day: NaiveDate, shift: Option<&Shift>) -> AppResult<usize> {
        let removed = self.store.delete_day(day)?;
        if let Some(shift) = shift
            && shift.active
        {
            self.resync_shift(shift)?;
        }
        Ok(removed)
    }

    /// Post-hoc classification of a day's log set.
    pub fn classify_day(&self, day: NaiveDate, shift: &Shift) -> AppResult<DayClassification> {
        let entries = self.store.entries_for(day)?;
        Ok(classifier::classify(&entries, shift, &self.policy))
    }

    /// Upcoming start/end triggers for a shift; pure computation, no
    /// scheduling side effect.
    pub fn upcoming_shift_triggers(&self, shift: &Shift, from: DateTime<Local>) -> Vec<Trigger> {
        scheduler::compute_shift_triggers(shift, from, self.horizon_days)
    }

    /// Upcoming triggers for a note.
    pub fn upcoming_note_triggers(
        &self,
        note: &Note,
        shifts: &[Shift],
        from: DateTime<Local>,
    ) -> Vec<Trigger> {
        scheduler::compute_note_triggers(note, shifts, from, self.horizon_days)
    }

    /// Seed the bookkeeping with ids issued in an earlier process life
    /// (the CLI reloads them from the reminders table).
    pub fn restore_owner(&mut self, owner: &str, ids: Vec<i64>) {
        self.issued.insert(owner.to_string(), ids);
    }

    /// Cancel-then-schedule the full trigger set of a shift. Cancel and
    /// schedule are serialized per owner; a scheduling failure is
    /// surfaced, never retried here.
    pub fn resync_shift(&mut self, shift: &Shift) -> AppResult<Vec<Trigger>> {
        self.cancel_owner(&shift.id)?;

        let triggers = scheduler::compute_shift_triggers(shift, self.clock.now(), self.horizon_days);
        let mut ids = Vec::with_capacity(triggers.len());
        for t in &triggers {
            let payload = ReminderPayload {
                owner: shift.id.clone(),
                kind: t.kind,
                message: format!("{} ({})", shift.name, t.kind),
            };
            ids.push(self.notifier.schedule(t.at, &payload)?);
        }
        self.issued.insert(shift.id.clone(), ids);
        Ok(triggers)
    }

    /// Cancel-then-schedule the trigger set of a note.
    pub fn resync_note(&mut self, note: &Note, shifts: &[Shift]) -> AppResult<Vec<Trigger>> {
        let owner = note_owner(note.id);
        self.cancel_owner(&owner)?;

        let triggers =
            scheduler::compute_note_triggers(note, shifts, self.clock.now(), self.horizon_days);
        let mut ids = Vec::with_capacity(triggers.len());
        for t in &triggers {
            let payload = ReminderPayload {
                owner: owner.clone(),
                kind: t.kind,
                message: note.text.clone(),
            };
            ids.push(self.notifier.schedule(t.at, &payload)?);
        }
        self.issued.insert(owner, ids);
        Ok(triggers)
    }

    /// Cancel everything issued for an owner (shift or note deleted).
    pub fn drop_owner(&mut self, owner: &str) -> AppResult<()> {
        self.cancel_owner(owner)
    }

    fn cancel_owner(&mut self, owner: &str) -> AppResult<()> {
        if let Some(ids) = self.issued.remove(owner) {
            for id in ids {
                self.notifier.cancel(id)?;
            }
        }
        Ok(())
    }
}

/// Owner key for a note's reminders, disjoint from shift ids.
pub fn note_owner(note_id: i64) -> String {
    format!("note:{note_id}")
}
