use assert_cmd::Command;
use predicates::str::contains;

mod common;
use common::djs_test;

/// A quiet compact-mode session ready to be fed scripted stdin.
fn session() -> Command {
    let mut cmd = djs_test();
    cmd.args(["--mode", "compact", "session", "--quiet"]);
    cmd
}

#[test]
fn test_session_add_and_total() {
    // 30s + 45s → 75s = 01:15
    session()
        .write_stdin("add 00:10 00:40\nadd 01:00 01:45\ntotal\nquit\n")
        .assert()
        .success()
        .stdout(contains("Track 1 added"))
        .stdout(contains("Track 2 added"))
        .stdout(contains("01:15"));
}

#[test]
fn test_session_list_renders_table_and_total() {
    session()
        .write_stdin("add 00:10 00:40\nlist\nquit\n")
        .assert()
        .success()
        .stdout(contains("Start"))
        .stdout(contains("Duration"))
        .stdout(contains("00:10"))
        .stdout(contains("00:40"))
        .stdout(contains("Σ Total set time"));
}

#[test]
fn test_session_invalid_add_leaves_set_untouched() {
    session()
        .write_stdin("add abc 00:40\nadd 00:10 00:40\nquit\n")
        .assert()
        .success()
        .stderr(contains("Invalid time format: abc"))
        .stdout(contains("Track 1 added"));
}

#[test]
fn test_session_add_wrong_arity_is_an_error() {
    session()
        .write_stdin("add 00:10\nquit\n")
        .assert()
        .success()
        .stderr(contains("Usage: add <START> <END>"));
}

#[test]
fn test_session_reset_clears_the_total() {
    session()
        .write_stdin("add 00:10 00:40\nreset\ntotal\nquit\n")
        .assert()
        .success()
        .stdout(contains("Track list cleared."))
        .stdout(contains("00:00"));
}

#[test]
fn test_session_wraparound_track_in_list() {
    session()
        .write_stdin("add 23:50 00:10\nlist\nquit\n")
        .assert()
        .success()
        .stdout(contains("1416:20"));
}

#[test]
fn test_session_json_dump() {
    session()
        .write_stdin("add 00:10 00:40\njson\nquit\n")
        .assert()
        .success()
        .stdout(contains("\"duration_seconds\": 30"))
        .stdout(contains("\"total_seconds\": 30"));
}

#[test]
fn test_session_mode_show_and_switch() {
    session()
        .write_stdin("mode\nmode clock\nadd 00:10 00:40\nquit\n")
        .assert()
        .success()
        .stdout(contains("Display mode: compact"))
        .stdout(contains("Display mode set to clock"))
        .stdout(contains("00:00:30"));
}

#[test]
fn test_session_unknown_command_keeps_the_loop_alive() {
    session()
        .write_stdin("frobnicate\nadd 00:10 00:40\nquit\n")
        .assert()
        .success()
        .stderr(contains("Unknown command: frobnicate"))
        .stdout(contains("Track 1 added"));
}

#[test]
fn test_session_eof_ends_cleanly() {
    session()
        .write_stdin("add 00:10 00:40\n")
        .assert()
        .success();
}
