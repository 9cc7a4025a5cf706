use predicates::str::contains;

mod common;
use common::djs_test;

#[test]
fn test_config_print_shows_defaults_in_test_mode() {
    djs_test()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("display_mode: clock"))
        .stdout(contains("separator_char"));
}

#[test]
fn test_mode_override_wins_over_config_default() {
    djs_test()
        .args(["--mode", "compact", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("display_mode: compact"));
}
