#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};

pub fn djs() -> Command {
    cargo_bin_cmd!("djsetcalc")
}

/// Every test invocation runs with --test so the user's real config file is
/// never read or written.
pub fn djs_test() -> Command {
    let mut cmd = djs();
    cmd.arg("--test");
    cmd
}
