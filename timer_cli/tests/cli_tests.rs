//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

/// Build command for the timer555 binary (finds it in target/debug when run via cargo test).
fn timer555() -> Command {
    Command::cargo_bin("timer555").unwrap()
}

#[test]
fn test_cli_help() {
    let mut cmd = timer555();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("555 timer"));
}

#[test]
fn test_cli_version() {
    let mut cmd = timer555();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_calc_human_output() {
    let mut cmd = timer555();

    cmd.args(["calc", "--delay", "5", "--voltage", "12", "--current", "100"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("10.0 kΩ"))
        .stdout(predicate::str::contains("470 µF"))
        .stdout(predicate::str::contains("BC548"))
        .stdout(predicate::str::contains("R=10.0kΩ C=470µF T=5.170s"));
}

#[test]
fn test_calc_json_output() {
    let mut cmd = timer555();

    cmd.args(["calc", "-d", "5", "--voltage", "12", "-c", "2000", "--format", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["design"]["transistor"]["name"], "IRFZ44N");
    assert_eq!(json["design"]["capacitor_uf"], 470.0);
}

#[test]
fn test_calc_rejects_zero_delay() {
    let mut cmd = timer555();

    cmd.args(["calc", "--delay", "0", "--voltage", "12", "--current", "100"]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Delay must be between 0 and 10000 seconds"));
}

#[test]
fn test_calc_json_rejection() {
    let mut cmd = timer555();

    cmd.args(["calc", "--delay", "-3", "--current", "0", "--format", "json"]);
    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("Load current must be positive"));
}

#[test]
fn test_calc_defaults_without_prompting() {
    let mut cmd = timer555();

    cmd.args(["calc", "--no-input"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Delay:    5 s"));
}

#[test]
fn test_calc_prompts_keep_defaults_on_empty_input() {
    let mut cmd = timer555();

    cmd.args(["calc", "--current", "300"]).write_stdin("\n\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Delay (seconds) [5]:"))
        .stdout(predicate::str::contains("2N3055"));
}

#[test]
fn test_calc_with_bom() {
    let mut cmd = timer555();

    cmd.args(["calc", "--no-input", "--bom"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("FULL COMPONENT LIST"))
        .stdout(predicate::str::contains("1N4007"))
        .stdout(predicate::str::contains("Pin 8 (VCC): Connect to 12V DC"));
}

#[test]
fn test_pins_listing() {
    let mut cmd = timer555();

    cmd.arg("pins");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TRIG"))
        .stdout(predicate::str::contains("Control Voltage"));
}

#[test]
fn test_reference_pin_skips_calculator() {
    let mut cmd = timer555();

    cmd.args(["pin", "4"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PIN 4: RST"))
        .stdout(predicate::str::contains("555 TIMER CONFIGURATION").not());
}

#[test]
fn test_output_pin_runs_calculator() {
    let mut cmd = timer555();

    cmd.args(["pin", "3", "--no-input"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PIN 3: OUT"))
        .stdout(predicate::str::contains("Transistor Selection"));
}

#[test]
fn test_unknown_pin() {
    let mut cmd = timer555();

    cmd.args(["pin", "9"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown pin: 9"));
}
