use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn fuelog(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fuelog").unwrap();
    cmd.env("FUELOG_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("FUELOG_LOG")
        .current_dir(home);
    cmd
}

fn add(home: &Path, date: &str, odometer: &str, liters: &str, price: &str) {
    fuelog(home)
        .args([
            "add",
            "--date",
            date,
            "--odometer",
            odometer,
            "--liters",
            liters,
            "--price",
            price,
        ])
        .assert()
        .success();
}

fn seed(home: &Path) {
    add(home, "2024-01-01", "1000", "40", "800000");
    add(home, "2024-02-01", "1500", "45", "900000");
}

#[test]
fn report_over_two_fill_ups() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    fuelog(temp.path())
        .args(["report", "--from", "2024-01-01", "--to", "2024-02-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("500 km"))
        .stdout(predicate::str::contains("9.00 L/100 km"))
        .stdout(predicate::str::contains("1800.00 Toman/km"));
}

#[test]
fn history_is_the_default_command() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    let output = fuelog(temp.path()).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let first = stdout.lines().next().unwrap();
    assert!(first.contains("1."));
    assert!(first.contains("2024-02-01"));
    assert!(first.contains("+500 km"));
}

#[test]
fn odometer_must_increase() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    fuelog(temp.path())
        .args(["add", "--date", "2024-03-01", "--odometer", "1400", "--liters", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be greater than the previous entry"));
}

#[test]
fn missing_liters_is_reported() {
    let temp = TempDir::new().unwrap();

    fuelog(temp.path())
        .args(["add", "--odometer", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("liters"));
}

#[test]
fn rejected_import_leaves_store_untouched() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());
    let bad = temp.path().join("bad.json");
    std::fs::write(&bad, r#"[{"id":"x","date":"2024-05-01","liters":30}]"#).unwrap();

    fuelog(temp.path())
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing `odometer`"));

    fuelog(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("2024-02-01"));
}

#[test]
fn inverted_range_is_an_error() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    fuelog(temp.path())
        .args(["report", "--from", "2024-03-01", "--to", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is after end date"));
}

#[test]
fn export_then_import_restores_records() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());
    let out_dir = temp.path().join("out");

    fuelog(temp.path())
        .args(["export", "--dir", out_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 records"));

    let exported = std::fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("fuelog-export-") && n.ends_with(".json"))
        })
        .expect("export file written");

    fuelog(temp.path())
        .args(["reset", "--yes"])
        .assert()
        .success();
    fuelog(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No fill-ups recorded yet."));

    fuelog(temp.path())
        .args(["import", exported.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 records"));
    fuelog(temp.path())
        .args(["report", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fuel report 2024-02-01 to 2024-02-29"));
}

#[test]
fn delete_needs_confirmation() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    fuelog(temp.path())
        .args(["delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    fuelog(temp.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fill-up deleted (1): 2024-02-01 at 1500"));

    fuelog(temp.path())
        .arg("months")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"))
        .stdout(predicate::str::contains("2024-02").not());
}

#[test]
fn single_record_is_not_enough_for_a_report() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "2024-01-01", "1000", "40", "800000");

    fuelog(temp.path())
        .args(["report", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not enough data"));
}

#[test]
fn config_set_changes_currency_label() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    fuelog(temp.path())
        .args(["config", "currency", "EUR"])
        .assert()
        .success();

    fuelog(temp.path())
        .args(["report", "--from", "2024-01-01", "--to", "2024-02-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1800.00 EUR/km"));
}

#[test]
fn help_groups_commands() {
    let temp = TempDir::new().unwrap();

    fuelog(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report Commands:"));
}
