use assert_cmd::Command;
use predicates::prelude::*;

fn race_pace() -> Command {
    let mut cmd = Command::cargo_bin("race-pace").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_10km_in_50_minutes() {
    let mut expected = String::from("Pace: 5:00 min/km\n\nSplits:\n");
    for i in 1..=10 {
        expected.push_str(&format!("{:>2} : {}:00\n", i, i * 5));
    }

    race_pace()
        .args(["10km", "50:00"])
        .assert()
        .success()
        .stdout(expected)
        .stderr("");
}

#[test]
fn test_half_marathon_defaults_to_miles() {
    race_pace()
        .args(["13.1", "1:30:00"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Pace: 6:53 min/mile\n\nSplits:\n"))
        .stdout(predicate::str::contains(" 1 : 6:53\n"))
        .stdout(predicate::str::ends_with("13 : 89:29\n"))
        .stdout(predicate::str::contains("14 :").not());
}

#[test]
fn test_missing_time_is_usage_error() {
    race_pace()
        .arg("10km")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Distance and time must be specified"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    race_pace()
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Distance and time must be specified"));
}

#[test]
fn test_invalid_distance() {
    race_pace()
        .args(["abc", "50:00"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Distance must be numeric"));
}

#[test]
fn test_distance_below_one() {
    race_pace()
        .args(["0.5", "10:00"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("must be numeric and >= 1"));
}

#[test]
fn test_zero_time() {
    race_pace()
        .args(["5km", "0:00"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("must be numeric and >= 1"));
}

#[test]
fn test_too_many_time_components() {
    race_pace()
        .args(["5", "1:2:3:4"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Invalid time"));
}

#[test]
fn test_lenient_and_strict_time() {
    race_pace()
        .args(["5km", "25:xx"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Pace: 5:00 min/km"));

    race_pace()
        .args(["--strict", "5km", "25:xx"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("not a whole number"));
}

#[test]
fn test_unknown_flag_exits_with_one() {
    race_pace()
        .args(["--bogus", "5", "25"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: unexpected argument '--bogus'"))
        .stderr(predicate::str::contains("error: error:").not());
}

#[test]
fn test_extra_decimal_points_in_distance() {
    race_pace()
        .args(["13.1.5", "1:30:00"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Pace: 6:53 min/mile\n"))
        .stdout(predicate::str::ends_with("13 : 89:29\n"));
}

#[test]
fn test_lone_decimal_point_distance() {
    race_pace()
        .args([".", "10:00"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("must be numeric and >= 1"));
}

#[test]
fn test_extra_arguments_are_ignored() {
    race_pace()
        .args(["10km", "50:00", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Pace: 5:00 min/km\n"))
        .stdout(predicate::str::ends_with("10 : 50:00\n"))
        .stderr("");
}

#[test]
fn test_unit_option() {
    race_pace()
        .args(["--unit", "km", "5", "25:00"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Pace: 5:00 min/km\n"));

    race_pace()
        .args(["--unit", "KM", "5", "25:00"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("unit must be one or more lowercase letters"));
}

#[test]
fn test_help_banner() {
    race_pace()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("race-pace"))
        .stdout(predicate::str::contains("HH:MM:SS"))
        .stdout(predicate::str::contains("defaults to miles"));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    race_pace()
        .args(["--debug", "3.1", "20"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Pace: 6:28 min/mile"))
        .stderr(predicate::str::contains("Parsed distance"));
}
