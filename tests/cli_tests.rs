use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_day_shift, setup_test_db, slg};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // idempotent
    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_shift_add_and_list() {
    let db_path = setup_test_db("shift_add_list");
    init_db_with_day_shift(&db_path);

    slg()
        .args(["--db", &db_path, "shift", "--list"])
        .assert()
        .success()
        .stdout(contains("day-shift"))
        .stdout(contains("08:00"))
        .stdout(contains("Mon,Tue,Wed,Thu,Fri"));
}

#[test]
fn test_shift_add_reports_every_violation() {
    let db_path = setup_test_db("shift_bad_def");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // departure too close AND end before office end
    slg()
        .args([
            "--db",
            &db_path,
            "shift",
            "--add",
            "Broken",
            "--departure",
            "07:58",
            "--start",
            "08:00",
            "--office-end",
            "17:00",
            "--end",
            "16:00",
        ])
        .assert()
        .failure()
        .stderr(contains("departure_time"))
        .stderr(contains("end_time"));
}

#[test]
fn test_shift_add_rejects_loose_time_format() {
    let db_path = setup_test_db("shift_loose_time");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // single-digit fields must not slip through as 08:03
    slg()
        .args([
            "--db",
            &db_path,
            "shift",
            "--add",
            "Sloppy",
            "--departure",
            "07:30",
            "--start",
            "8:3",
            "--office-end",
            "17:00",
            "--end",
            "17:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 8:3"));
}

#[test]
fn test_record_full_day_and_status() {
    let db_path = setup_test_db("record_day");
    init_db_with_day_shift(&db_path);

    let record = |event: &str, at: &str| {
        slg()
            .args([
                "--db",
                &db_path,
                "record",
                event,
                "--shift",
                "day-shift",
                "--at",
                at,
            ])
            .assert()
            .success();
    };

    record("go-work", "2026-08-26 07:10");
    record("check-in", "2026-08-26 08:05");
    record("punch", "2026-08-26 12:30");
    record("check-out", "2026-08-26 17:02");
    record("complete", "2026-08-26 17:10");

    slg()
        .args(["--db", &db_path, "status", "2026-08-26"])
        .assert()
        .success()
        .stdout(contains("completed"))
        .stdout(contains("08:05"))
        .stdout(contains("17:02"));

    slg()
        .args(["--db", &db_path, "status", "2026-08-26", "--json"])
        .assert()
        .success()
        .stdout(contains("\"state\": \"completed\""))
        .stdout(contains("day-shift"));
}

#[test]
fn test_record_rejects_out_of_order_event() {
    let db_path = setup_test_db("record_invalid");
    init_db_with_day_shift(&db_path);

    slg()
        .args([
            "--db",
            &db_path,
            "record",
            "check-in",
            "--shift",
            "day-shift",
            "--at",
            "2026-08-26 08:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid transition"));

    // the rejected event must not have touched the day
    slg()
        .args(["--db", &db_path, "status", "2026-08-26"])
        .assert()
        .success()
        .stdout(contains("not_started"));
}

#[test]
fn test_record_warns_on_implausible_timestamp() {
    let db_path = setup_test_db("record_implausible");
    init_db_with_day_shift(&db_path);

    // 03:00 is outside [08:00, 17:00] + 120 min buffer, but still accepted
    slg()
        .args([
            "--db",
            &db_path,
            "record",
            "go-work",
            "--shift",
            "day-shift",
            "--at",
            "2026-08-26 03:00",
        ])
        .assert()
        .success()
        .stdout(contains("outside the expected window"));

    slg()
        .args(["--db", &db_path, "status", "2026-08-26"])
        .assert()
        .success()
        .stdout(contains("waiting_check_in"));
}

#[test]
fn test_reset_day_clears_status() {
    let db_path = setup_test_db("reset_day");
    init_db_with_day_shift(&db_path);

    slg()
        .args([
            "--db",
            &db_path,
            "record",
            "go-work",
            "--shift",
            "day-shift",
            "--at",
            "2026-08-26 07:10",
        ])
        .assert()
        .success();

    slg()
        .args(["--db", &db_path, "reset", "2026-08-26", "--shift", "day-shift"])
        .assert()
        .success()
        .stdout(contains("1 entries removed"));

    slg()
        .args(["--db", &db_path, "status", "2026-08-26"])
        .assert()
        .success()
        .stdout(contains("not_started").and(contains("--:--")));
}

/// Without --shift the reset takes the shift from the day's own status
/// and still resyncs its reminders.
#[test]
fn test_reset_day_without_shift_flag_uses_recorded_shift() {
    let db_path = setup_test_db("reset_day_implicit");
    init_db_with_day_shift(&db_path);

    slg()
        .args([
            "--db",
            &db_path,
            "record",
            "go-work",
            "--shift",
            "day-shift",
            "--at",
            "2026-08-26 07:10",
        ])
        .assert()
        .success();

    slg()
        .args(["--db", &db_path, "reset", "2026-08-26"])
        .assert()
        .success()
        .stdout(contains("1 entries removed"));

    slg()
        .args(["--db", &db_path, "status", "2026-08-26"])
        .assert()
        .success()
        .stdout(contains("not_started"));

    // resetting the now-empty day carries no shift and still succeeds
    slg()
        .args(["--db", &db_path, "reset", "2026-08-26"])
        .assert()
        .success()
        .stdout(contains("0 entries removed"));
}

#[test]
fn test_classify_command() {
    let db_path = setup_test_db("classify_day");
    init_db_with_day_shift(&db_path);

    let record = |event: &str, at: &str| {
        slg()
            .args([
                "--db",
                &db_path,
                "record",
                event,
                "--shift",
                "day-shift",
                "--at",
                at,
            ])
            .assert()
            .success();
    };

    record("go-work", "2026-08-26 07:00");
    record("check-in", "2026-08-26 08:20");

    slg()
        .args([
            "--db",
            &db_path,
            "classify",
            "2026-08-26",
            "--shift",
            "day-shift",
        ])
        .assert()
        .success()
        .stdout(contains("incomplete"));

    record("check-out", "2026-08-26 17:00");
    record("complete", "2026-08-26 17:05");

    // 20 minutes late exceeds the grace period: rv, not complete
    slg()
        .args([
            "--db",
            &db_path,
            "classify",
            "2026-08-26",
            "--shift",
            "day-shift",
        ])
        .assert()
        .success()
        .stdout(contains("rv"));
}

#[test]
fn test_reminders_for_monday_shift_from_sunday_night() {
    let db_path = setup_test_db("reminders_monday");

    slg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    slg()
        .args([
            "--db",
            &db_path,
            "shift",
            "--add",
            "Monday Only",
            "--departure",
            "07:30",
            "--start",
            "08:00",
            "--office-end",
            "17:00",
            "--end",
            "17:00",
            "--days",
            "Mon",
            "--remind-before",
            "15",
        ])
        .assert()
        .success();

    // 2026-08-30 is a Sunday: exactly one trigger, Monday 07:45
    slg()
        .args([
            "--db",
            &db_path,
            "reminders",
            "--shift",
            "monday-only",
            "--from",
            "2026-08-30 23:50",
        ])
        .assert()
        .success()
        .stdout(contains("2026-08-31 07:45"))
        .stdout(contains("2026-08-30").not());
}

#[test]
fn test_note_lifecycle_and_triggers() {
    let db_path = setup_test_db("note_lifecycle");
    init_db_with_day_shift(&db_path);

    slg()
        .args([
            "--db",
            &db_path,
            "note",
            "--add",
            "take the badge",
            "--at",
            "09:00",
            "--days",
            "Mon",
        ])
        .assert()
        .success()
        .stdout(contains("Note 1 created"));

    slg()
        .args(["--db", &db_path, "note", "--list"])
        .assert()
        .success()
        .stdout(contains("take the badge"))
        .stdout(contains("days: Mon"));

    slg()
        .args([
            "--db",
            &db_path,
            "reminders",
            "--note",
            "1",
            "--from",
            "2026-08-30 12:00",
        ])
        .assert()
        .success()
        .stdout(contains("2026-08-31 09:00"));

    slg()
        .args(["--db", &db_path, "note", "--del", "1"])
        .assert()
        .success();

    slg()
        .args(["--db", &db_path, "note", "--list"])
        .assert()
        .success()
        .stdout(contains("No notes defined"));
}

#[test]
fn test_note_rejects_both_shifts_and_days() {
    let db_path = setup_test_db("note_exclusive");
    init_db_with_day_shift(&db_path);

    slg()
        .args([
            "--db",
            &db_path,
            "note",
            "--add",
            "bad note",
            "--at",
            "09:00",
            "--days",
            "Mon",
            "--shifts",
            "day-shift",
        ])
        .assert()
        .failure()
        .stderr(contains("mutually exclusive"));
}

#[test]
fn test_audit_log_records_operations() {
    let db_path = setup_test_db("audit_log");
    init_db_with_day_shift(&db_path);

    slg()
        .args([
            "--db",
            &db_path,
            "record",
            "go-work",
            "--shift",
            "day-shift",
            "--at",
            "2026-08-26 07:10",
        ])
        .assert()
        .success();

    slg()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("shift_add"))
        .stdout(contains("record"));
}
