//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated data directory via the
//! SUBTRACK_DATA_DIR override.

use assert_cmd::Command;
use chrono::{Days, Local};
use predicates::prelude::*;
use tempfile::TempDir;

fn subtrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("subtrack").unwrap();
    cmd.env("SUBTRACK_DATA_DIR", data_dir.path());
    cmd
}

fn add_cost(data_dir: &TempDir, name: &str, category: &str, cost: &str, renews: &str) {
    subtrack(data_dir)
        .args([
            "cost", "add", name, "--category", category, "--cost", cost, "--renews", renews,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Added cost: {}", name)));
}

#[test]
fn test_empty_list() {
    let dir = TempDir::new().unwrap();

    subtrack(&dir)
        .args(["cost", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No costs tracked yet"));
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();

    add_cost(&dir, "Vercel", "cloud", "20", "2030-01-15");

    subtrack(&dir)
        .args(["cost", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Vercel")
                .and(predicate::str::contains("Cloud Services"))
                .and(predicate::str::contains("$20.00")),
        );
}

#[test]
fn test_add_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();

    subtrack(&dir)
        .args([
            "cost",
            "add",
            "Mystery",
            "--category",
            "gaming",
            "--cost",
            "5",
            "--renews",
            "2030-01-15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_dashboard_totals() {
    let dir = TempDir::new().unwrap();

    // 120/yr -> 10/mo, plus 10/mo -> 20/mo total, 240/yr total
    subtrack(&dir)
        .args([
            "cost", "add", "AWS", "--category", "cloud", "--cost", "120", "--cycle", "annually",
            "--renews", "2030-06-01",
        ])
        .assert()
        .success();
    add_cost(&dir, "Misc", "other", "10", "2030-06-01");

    subtrack(&dir)
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total monthly cost:  $20.00")
                .and(predicate::str::contains("Total annual cost:   $240.00")),
        );
}

#[test]
fn test_dashboard_shows_upcoming_renewal() {
    let dir = TempDir::new().unwrap();

    let soon = Local::now()
        .date_naive()
        .checked_add_days(Days::new(5))
        .unwrap()
        .format("%Y-%m-%d")
        .to_string();
    add_cost(&dir, "RenewingSoon", "domains", "12", &soon);

    subtrack(&dir)
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Upcoming renewals:   1")
                .and(predicate::str::contains("RenewingSoon")),
        );
}

#[test]
fn test_delete_with_force() {
    let dir = TempDir::new().unwrap();

    add_cost(&dir, "Vercel", "cloud", "20", "2030-01-15");

    subtrack(&dir)
        .args(["cost", "delete", "Vercel", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted cost: Vercel"));

    subtrack(&dir)
        .args(["cost", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No costs tracked yet"));
}

#[test]
fn test_delete_unknown_cost_fails() {
    let dir = TempDir::new().unwrap();

    subtrack(&dir)
        .args(["cost", "delete", "Ghost", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cost not found"));
}

#[test]
fn test_edit_updates_amount() {
    let dir = TempDir::new().unwrap();

    add_cost(&dir, "Vercel", "cloud", "20", "2030-01-15");

    subtrack(&dir)
        .args(["cost", "edit", "Vercel", "--cost-amount", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$25.00"));
}

#[test]
fn test_export_csv() {
    let dir = TempDir::new().unwrap();

    add_cost(&dir, "Vercel", "cloud", "20", "2030-01-15");

    subtrack(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ID,Name,Category").and(predicate::str::contains("Vercel")),
        );
}

#[test]
fn test_config_reports_storage_paths() {
    let dir = TempDir::new().unwrap();

    subtrack(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Config directory")
                .and(predicate::str::contains(dir.path().to_str().unwrap()))
                .and(predicate::str::contains("costs.json"))
                .and(predicate::str::contains("GEMINI_API_KEY")),
        );
}

#[test]
fn test_add_rejects_non_finite_amount() {
    let dir = TempDir::new().unwrap();

    subtrack(&dir)
        .args([
            "cost", "add", "Bogus", "--category", "other", "--cost", "nan", "--renews",
            "2030-01-15",
        ])
        .assert()
        .failure();

    subtrack(&dir)
        .args(["cost", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No costs tracked yet"));
}

#[test]
fn test_data_survives_between_runs() {
    let dir = TempDir::new().unwrap();

    add_cost(&dir, "Vercel", "cloud", "20", "2030-01-15");
    add_cost(&dir, "Mailchimp", "marketing", "50", "2030-02-15");

    // A fresh invocation reads the same file back
    subtrack(&dir)
        .args(["cost", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Vercel").and(predicate::str::contains("Mailchimp")),
        );
}
