mod common;
use common::{MemoryLogStore, MemoryNotifier, at, d, day_shift, night_shift, t};

use chrono::Weekday;
use shiftlog::core::ports::FixedClock;
use shiftlog::core::scheduler::{
    DEFAULT_HORIZON_DAYS, ReminderKind, compute_note_triggers, compute_shift_triggers,
};
use shiftlog::core::tracker::{AttendanceTracker, note_owner};
use shiftlog::core::validator::Policy;
use shiftlog::errors::AppError;
use shiftlog::models::note::Note;

// 2026-08-30 is a Sunday.
const SUNDAY: (i32, u32, u32) = (2026, 8, 30);

#[test]
fn test_sunday_night_yields_single_monday_trigger() {
    let mut shift = day_shift();
    shift.days_applied = vec![Weekday::Mon];
    shift.remind_before_start = 15;
    shift.remind_after_end = 0;

    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 23, 50);
    let triggers = compute_shift_triggers(&shift, from, DEFAULT_HORIZON_DAYS);

    assert_eq!(triggers.len(), 1);
    assert_eq!(triggers[0].kind, ReminderKind::ShiftStart);
    assert_eq!(triggers[0].at, at(d(2026, 8, 31), 7, 45));
}

#[test]
fn test_past_triggers_are_discarded() {
    let mut shift = day_shift();
    shift.days_applied = vec![Weekday::Sun];

    // evaluation instant is already past 07:45 on the only applicable day
    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 9, 0);
    let triggers = compute_shift_triggers(&shift, from, 1);
    assert!(triggers.is_empty());

    // one minute before the trigger it still counts
    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 7, 44);
    let triggers = compute_shift_triggers(&shift, from, 1);
    assert_eq!(triggers.len(), 1);
}

#[test]
fn test_zero_reminder_minutes_disable_that_kind() {
    let mut shift = day_shift();
    shift.days_applied = vec![Weekday::Mon];
    shift.remind_before_start = 0;
    shift.remind_after_end = 30;

    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 12, 0);
    let triggers = compute_shift_triggers(&shift, from, DEFAULT_HORIZON_DAYS);

    assert_eq!(triggers.len(), 1);
    assert_eq!(triggers[0].kind, ReminderKind::ShiftEnd);
    // 17:00 end minus 30 minutes
    assert_eq!(triggers[0].at, at(d(2026, 8, 31), 16, 30));
}

#[test]
fn test_overnight_end_trigger_lands_on_next_day() {
    let mut shift = night_shift();
    shift.days_applied = vec![Weekday::Mon];
    shift.remind_before_start = 20;
    shift.remind_after_end = 10;

    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 12, 0);
    let triggers = compute_shift_triggers(&shift, from, DEFAULT_HORIZON_DAYS);

    assert_eq!(triggers.len(), 2);
    // start reminder on Monday evening
    assert_eq!(triggers[0].kind, ReminderKind::ShiftStart);
    assert_eq!(triggers[0].at, at(d(2026, 8, 31), 21, 40));
    // end reminder wraps to Tuesday morning: 02:30 minus 10 minutes
    assert_eq!(triggers[1].kind, ReminderKind::ShiftEnd);
    assert_eq!(triggers[1].at, at(d(2026, 9, 1), 2, 20));
}

#[test]
fn test_triggers_cover_each_applicable_weekday_in_horizon() {
    let shift = day_shift(); // Mon..Fri, remind_before 15
    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 0, 0);
    let triggers = compute_shift_triggers(&shift, from, DEFAULT_HORIZON_DAYS);

    // Sunday itself does not apply; Mon..Fri of the following week do
    assert_eq!(triggers.len(), 5);
    assert!(triggers.iter().all(|t| t.kind == ReminderKind::ShiftStart));
    assert_eq!(triggers[0].at, at(d(2026, 8, 31), 7, 45));
    assert_eq!(triggers[4].at, at(d(2026, 9, 4), 7, 45));
}

#[test]
fn test_note_with_weekday_tags() {
    let note = Note {
        id: 1,
        text: "take the badge".to_string(),
        reminder_time: t(9, 0),
        shift_ids: vec![],
        days_applied: vec![Weekday::Mon, Weekday::Thu],
    };

    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 12, 0);
    let triggers = compute_note_triggers(&note, &[], from, DEFAULT_HORIZON_DAYS);

    assert_eq!(triggers.len(), 2);
    assert!(triggers.iter().all(|t| t.kind == ReminderKind::Note));
    assert_eq!(triggers[0].at, at(d(2026, 8, 31), 9, 0));
    assert_eq!(triggers[1].at, at(d(2026, 9, 3), 9, 0));
}

#[test]
fn test_note_bound_to_shifts_follows_their_weekdays() {
    let mut mon_shift = day_shift();
    mon_shift.id = "mon".to_string();
    mon_shift.days_applied = vec![Weekday::Mon];
    let mut tue_shift = day_shift();
    tue_shift.id = "tue".to_string();
    tue_shift.days_applied = vec![Weekday::Tue];

    let note = Note {
        id: 2,
        text: "hand in the report".to_string(),
        reminder_time: t(10, 30),
        shift_ids: vec!["mon".to_string(), "tue".to_string()],
        days_applied: vec![],
    };

    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 12, 0);
    let shifts = [mon_shift, tue_shift];
    let triggers = compute_note_triggers(&note, &shifts, from, DEFAULT_HORIZON_DAYS);

    // one per (shift, matching weekday): Monday for "mon", Tuesday for "tue"
    assert_eq!(triggers.len(), 2);
    assert_eq!(triggers[0].at, at(d(2026, 8, 31), 10, 30));
    assert_eq!(triggers[1].at, at(d(2026, 9, 1), 10, 30));
}

#[test]
fn test_resync_cancels_before_rescheduling() {
    let shift = day_shift();
    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 0, 0);
    let mut notifier = MemoryNotifier::default();
    {
        let mut tracker = AttendanceTracker::new(
            FixedClock(from),
            MemoryLogStore::default(),
            &mut notifier,
            Policy::default(),
            DEFAULT_HORIZON_DAYS,
        );

        let first = tracker.resync_shift(&shift).unwrap();
        assert_eq!(first.len(), 5);

        // a second resync must not leave duplicate live reminders behind
        let second = tracker.resync_shift(&shift).unwrap();
        assert_eq!(second.len(), 5);
    }

    assert_eq!(notifier.scheduled.len(), 5);
    assert_eq!(notifier.cancelled.len(), 5);
    assert!(notifier.scheduled.iter().all(|(_, _, p)| p.owner == "day-shift"));
}

#[test]
fn test_scheduling_failure_is_surfaced() {
    let shift = day_shift();
    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 0, 0);
    let mut notifier = MemoryNotifier::default();
    notifier.fail_next = true;
    let mut tracker = AttendanceTracker::new(
        FixedClock(from),
        MemoryLogStore::default(),
        notifier,
        Policy::default(),
        DEFAULT_HORIZON_DAYS,
    );

    let err = tracker.resync_shift(&shift).unwrap_err();
    assert!(matches!(err, AppError::Scheduling(_)));
}

#[test]
fn test_note_owner_is_disjoint_from_shift_ids() {
    assert_eq!(note_owner(7), "note:7");
    assert_ne!(note_owner(7), "7");
}

/// The tracker's trigger listing is a pure passthrough: same result as
/// calling the scheduler directly, and nothing gets scheduled.
#[test]
fn test_tracker_upcoming_triggers_are_pure() {
    let shift = day_shift();
    let note = Note {
        id: 3,
        text: "water the plants".to_string(),
        reminder_time: t(8, 0),
        shift_ids: vec![shift.id.clone()],
        days_applied: vec![],
    };
    let from = at(d(SUNDAY.0, SUNDAY.1, SUNDAY.2), 0, 0);

    let mut notifier = MemoryNotifier::default();
    {
        let tracker = AttendanceTracker::new(
            FixedClock(from),
            MemoryLogStore::default(),
            &mut notifier,
            Policy::default(),
            DEFAULT_HORIZON_DAYS,
        );

        assert_eq!(
            tracker.upcoming_shift_triggers(&shift, from),
            compute_shift_triggers(&shift, from, DEFAULT_HORIZON_DAYS)
        );
        let shifts = [shift.clone()];
        assert_eq!(
            tracker.upcoming_note_triggers(&note, &shifts, from),
            compute_note_triggers(&note, &shifts, from, DEFAULT_HORIZON_DAYS)
        );
    }

    assert!(notifier.scheduled.is_empty());
    assert!(notifier.cancelled.is_empty());
}
