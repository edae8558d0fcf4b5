use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_dashboard() {
    Command::cargo_bin("chronoscope")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "terminal-based historical statistics dashboard",
        ));
}

#[test]
fn missing_dataset_path_fails() {
    Command::cargo_bin("chronoscope")
        .unwrap()
        .arg("definitely-not-here.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn out_of_range_startup_speed_fails() {
    Command::cargo_bin("chronoscope")
        .unwrap()
        .args(["--speed", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Speed"));
}
