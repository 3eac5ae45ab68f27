use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DATA_FILE: &str = "expense-flow-data-v1.json";

fn expense_flow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-flow").unwrap();
    cmd.env("EXPENSE_FLOW_DATA_DIR", dir.path());
    cmd
}

fn stored_records(dir: &TempDir) -> Vec<serde_json::Value> {
    let contents = std::fs::read_to_string(dir.path().join(DATA_FILE)).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn fresh_install_lists_seed_data_without_writing() {
    let dir = TempDir::new().unwrap();

    expense_flow(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Metro pass"))
        .stdout(predicate::str::contains("Showing 5 of 5 expenses"));

    assert!(!dir.path().join(DATA_FILE).exists());
}

#[test]
fn default_command_shows_dashboard() {
    let dir = TempDir::new().unwrap();

    expense_flow(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spend"))
        .stdout(predicate::str::contains("$265.75"))
        .stdout(predicate::str::contains("Largest Expense"))
        .stdout(predicate::str::contains("Monthly Trend"));
}

#[test]
fn add_persists_new_expense_first() {
    let dir = TempDir::new().unwrap();

    expense_flow(&dir)
        .args(["add", "Lunch", "12.5", "-c", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: Lunch $12.50 (Food)"));

    let records = stored_records(&dir);
    assert_eq!(records.len(), 6);
    assert_eq!(records[0]["title"], "Lunch");
    assert_eq!(records[0]["amount"], 12.5);
    assert_eq!(records[0]["category"], "Food");
    assert_eq!(records[1]["id"], "seed-1");
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expense_flow(&dir)
        .args(["add", "Coffee", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    assert!(!dir.path().join(DATA_FILE).exists());
}

#[test]
fn future_date_is_rejected() {
    let dir = TempDir::new().unwrap();

    expense_flow(&dir)
        .args(["add", "Concert", "40", "-c", "entertainment", "-d", "2999-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("future"));
}

#[test]
fn remove_drops_expense_from_list() {
    let dir = TempDir::new().unwrap();

    expense_flow(&dir)
        .args(["remove", "seed-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed expense seed-1"));

    expense_flow(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries").not());

    assert_eq!(stored_records(&dir).len(), 4);
}

#[test]
fn remove_unknown_id_still_persists() {
    let dir = TempDir::new().unwrap();

    expense_flow(&dir)
        .args(["remove", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense with ID nope"));

    assert_eq!(stored_records(&dir).len(), 5);
}

#[test]
fn corrupt_slot_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(DATA_FILE), "{not json").unwrap();

    expense_flow(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 5 of 5 expenses"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join(DATA_FILE)).unwrap(),
        "{not json"
    );
}

#[test]
fn empty_array_stays_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(DATA_FILE), "[]").unwrap();

    expense_flow(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn search_filters_list() {
    let dir = TempDir::new().unwrap();

    expense_flow(&dir)
        .args(["list", "-q", "BILL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Light bill"))
        .stdout(predicate::str::contains("Groceries").not());
}

#[test]
fn breakdown_rejects_bad_month() {
    let dir = TempDir::new().unwrap();

    expense_flow(&dir)
        .args(["breakdown", "--month", "2026-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn history_records_mutations() {
    let dir = TempDir::new().unwrap();

    expense_flow(&dir)
        .args(["add", "Taxi", "18", "-c", "transportation"])
        .assert()
        .success();
    expense_flow(&dir)
        .args(["remove", "seed-2"])
        .assert()
        .success();

    expense_flow(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("DELETE seed-2 (Gym membership)"));
}

#[test]
fn data_dir_flag_overrides_default() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("expense-flow")
        .unwrap()
        .arg("--data-dir")
        .arg(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(DATA_FILE));
}
