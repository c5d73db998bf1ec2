//! CLI command tests

mod common;

use common::{roi, write_scenario};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Basics
// ============================================================================

#[test]
fn test_help_displays() {
    roi()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ROI of adopting HR software"));
}

#[test]
fn test_unknown_command_fails() {
    roi()
        .arg("forecast")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_template_is_loadable_scenario() {
    let output = roi().arg("template").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], "0.1.0");
    assert_eq!(json["profile"]["employees"], 150);

    let (_tmp, path) = write_scenario(&String::from_utf8_lossy(&output.stdout));
    roi()
        .args(["calc", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("€40,860.00"));
}

#[test]
fn test_tables_lists_constants() {
    roi()
        .arg("tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("Performance/OKRs"))
        .stdout(predicate::str::contains("spreadsheets"));
}

// ============================================================================
// calc
// ============================================================================

#[test]
fn test_calc_defaults_summary() {
    roi()
        .arg("calc")
        .assert()
        .success()
        .stdout(predicate::str::contains("HR SOFTWARE ROI ESTIMATE"))
        .stdout(predicate::str::contains("4.2 months"))
        .stdout(predicate::str::contains("184%"));
}

#[test]
fn test_calc_json_output() {
    let output = roi().args(["calc", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let total = json["metrics"]["total_savings_annual"].as_f64().unwrap();
    assert!((total - 40_860.0).abs() < 1e-6);
    assert_eq!(json["metrics"]["payback"]["kind"], "Months");
    assert_eq!(json["advisory"]["pain_signals"].as_array().unwrap().len(), 6);
}

#[test]
fn test_calc_partial_scenario() {
    let (_tmp, path) = write_scenario(
        r#"{
            "version": "0.1.0",
            "profile": { "employees": 40, "managers": 4, "currency": "USD" },
            "modules": { "payroll": true },
            "methods": { "payroll": "manual" }
        }"#,
    );

    roi()
        .args(["calc", "--input"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("$"))
        .stdout(predicate::str::contains("Payroll: Manual processes"))
        .stdout(predicate::str::contains("excluded"));
}

#[test]
fn test_calc_writes_csv_into_directory() {
    let tmp = TempDir::new().unwrap();

    roi()
        .args(["calc", "--csv"])
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("hr-digitisation-roi-questionnaire.csv"));

    let csv = fs::read_to_string(tmp.path().join("hr-digitisation-roi-questionnaire.csv")).unwrap();
    assert!(csv.starts_with("Metric,Value\n"));
    assert!(csv.contains("\nDerived.PaybackMonths,4.2\n"));
    assert!(csv.contains("\nDerived.ROIY1Percent,184\n"));
}

#[test]
fn test_calc_csv_to_file_with_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out.csv");

    let output = roi().args(["calc", "--json", "--csv"]).arg(&path).output().unwrap();
    assert!(output.status.success());
    // Status goes to stderr, stdout stays valid JSON
    assert!(serde_json::from_slice::<serde_json::Value>(&output.stdout).is_ok());
    assert!(path.exists());
}

#[test]
fn test_calc_rejects_negative_rate() {
    let (_tmp, path) = write_scenario(r#"{ "version": "0.1.0", "profile": { "hr_hourly": -10 } }"#);

    roi()
        .args(["calc", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile.hr_hourly"))
        .stderr(predicate::str::contains("INVALID_INPUT").or(predicate::str::contains("InvalidInput")));
}

#[test]
fn test_calc_rejects_newer_schema() {
    let (_tmp, path) = write_scenario(r#"{ "version": "0.9.0" }"#);

    roi()
        .args(["calc", "--input"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Version mismatch"));
}

#[test]
fn test_calc_missing_file() {
    roi()
        .args(["calc", "--input", "no-such-scenario.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load scenario"));
}

// ============================================================================
// wizard
// ============================================================================

#[test]
fn test_wizard_accepts_defaults() {
    roi()
        .arg("wizard")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 5: Profile"))
        .stdout(predicate::str::contains("Step 5 of 5: Results"))
        .stdout(predicate::str::contains("€40,860.00"));
}

#[test]
fn test_wizard_exports_answers() {
    let tmp = TempDir::new().unwrap();
    let csv = tmp.path().join("answers.csv");

    // Job title, industry, currency, employees
    roi()
        .arg("wizard")
        .arg("--csv")
        .arg(&csv)
        .write_stdin("Payroll Lead\n\n4\n60\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote CSV export to"));

    let exported = fs::read_to_string(&csv).unwrap();
    assert!(exported.contains("Profile.JobTitle,Payroll Lead\n"));
    assert!(exported.contains("Profile.Currency,AUD\n"));
    assert!(exported.contains("Profile.Employees,60\n"));
    assert!(exported.contains("Profile.Managers,6\n"));
}

#[test]
fn test_wizard_writes_only_the_export() {
    let tmp = TempDir::new().unwrap();

    roi()
        .arg("wizard")
        .arg("--csv")
        .arg(tmp.path())
        .write_stdin("")
        .assert()
        .success();

    let names: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["hr-digitisation-roi-questionnaire.csv".to_string()]);
}

#[test]
fn test_wizard_rejects_save_flag() {
    roi()
        .args(["wizard", "--save", "answers.json"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--save"));
}
