use predicates::str::contains;

mod common;
use common::djs_test;

#[test]
fn test_calc_simple_duration() {
    djs_test()
        .args(["--mode", "compact", "calc", "00:10", "00:40"])
        .assert()
        .success()
        .stdout(contains("00:30"));
}

#[test]
fn test_calc_clock_mode_is_the_default() {
    djs_test()
        .args(["calc", "00:10", "00:40"])
        .assert()
        .success()
        .stdout(contains("00:00:30"));
}

#[test]
fn test_calc_wraps_midnight_once() {
    // end < start → (10 + 86400) - 1430 = 84980 seconds
    djs_test()
        .args(["--mode", "compact", "calc", "23:50", "00:10"])
        .assert()
        .success()
        .stdout(contains("1416:20"));
}

#[test]
fn test_calc_equal_times_is_zero() {
    djs_test()
        .args(["calc", "07:15", "07:15"])
        .assert()
        .success()
        .stdout(contains("00:00:00"));
}

#[test]
fn test_calc_accepts_hms_inputs() {
    djs_test()
        .args(["calc", "01:00:00", "01:30:30"])
        .assert()
        .success()
        .stdout(contains("00:30:30"));
}

#[test]
fn test_calc_rejects_non_numeric_input() {
    djs_test()
        .args(["calc", "abc", "00:40"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: abc"));
}

#[test]
fn test_calc_rejects_input_without_colon() {
    djs_test()
        .args(["calc", "12", "00:40"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 12"));
}

#[test]
fn test_calc_rejects_too_many_fields() {
    djs_test()
        .args(["calc", "1:2:3:4", "00:40"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 1:2:3:4"));
}

#[test]
fn test_calc_numeric_variant() {
    // 03:20 → 07:05 = 225 seconds
    djs_test()
        .args([
            "--mode", "compact", "calc", "--in-min", "3", "--in-sec", "20", "--out-min", "7",
            "--out-sec", "5",
        ])
        .assert()
        .success()
        .stdout(contains("03:45"));
}

#[test]
fn test_calc_numeric_variant_rejects_out_of_range_seconds() {
    djs_test()
        .args([
            "calc", "--in-min", "3", "--in-sec", "75", "--out-min", "7", "--out-sec", "5",
        ])
        .assert()
        .failure();
}

#[test]
fn test_calc_without_times_prints_usage() {
    djs_test()
        .args(["calc"])
        .assert()
        .success()
        .stderr(contains("Usage:"));
}

#[test]
fn test_calc_json_output() {
    djs_test()
        .args(["--mode", "compact", "calc", "--json", "00:10", "00:40"])
        .assert()
        .success()
        .stdout(contains("\"duration_seconds\": 30"))
        .stdout(contains("\"duration\": \"00:30\""));
}

#[test]
fn test_calc_mode_alias_ms() {
    djs_test()
        .args(["--mode", "ms", "calc", "00:10", "00:40"])
        .assert()
        .success()
        .stdout(contains("00:30"));
}

#[test]
fn test_unknown_display_mode_fails() {
    djs_test()
        .args(["--mode", "banana", "calc", "00:10", "00:40"])
        .assert()
        .failure()
        .stderr(contains("Invalid display mode: banana"));
}
