use predicates::str::contains;

mod common;
use common::{init_test_db, kv_value, ms, stdout_of};

#[test]
fn test_purchase_updates_row_and_cached_balance() {
    let db_path = init_test_db("munch_purchase");

    ms().args(["--db", &db_path, "munch", "set", "20.00"])
        .assert()
        .success()
        .stdout(contains("Balance: $20.00"));

    ms().args([
        "--db",
        &db_path,
        "munch",
        "spend",
        "4.50",
        "--at",
        "2024-01-01T12:30:00Z",
    ])
    .assert()
    .success()
    .stdout(contains("Spent $4.50"))
    .stdout(contains("Balance: $15.50"));

    assert_eq!(
        kv_value(&db_path, "munchMoneyBalance").as_deref(),
        Some("15.50")
    );

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (amount, remaining): (f64, f64) = conn
        .query_row(
            "SELECT transaction_amount, remaining_balance FROM munch_history ORDER BY id DESC LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("purchase row");
    assert_eq!(amount, -4.5);
    assert_eq!(remaining, 15.5);

    let stdout = stdout_of(&db_path, &["history", "munch"]);
    assert!(stdout.contains("Jan 1st 24"));
    assert!(stdout.contains("-$4.50 → $15.50"));
}

#[test]
fn test_spending_more_than_balance_fails() {
    let db_path = init_test_db("munch_insufficient");

    ms().args(["--db", &db_path, "munch", "deposit", "5"])
        .assert()
        .success()
        .stdout(contains("Deposited $5.00"));

    ms().args(["--db", &db_path, "munch", "spend", "7.25"])
        .assert()
        .failure()
        .stderr(contains("Insufficient munch money"));

    assert_eq!(
        kv_value(&db_path, "munchMoneyBalance").as_deref(),
        Some("5.00")
    );
}

#[test]
fn test_invalid_amounts_are_rejected() {
    let db_path = init_test_db("munch_invalid_amount");

    for bad in [
        "abc",
        "0",
        "1.005",
        "1000000000.01",
        "79228162514264337593543950335",
    ] {
        ms().args(["--db", &db_path, "munch", "deposit", bad])
            .assert()
            .failure()
            .stderr(contains("Invalid amount"));
    }

    ms().args(["--db", &db_path, "munch", "set", "1000000000.01"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    assert!(stdout_of(&db_path, &["history", "munch"]).contains("No munch-money transactions"));

    // negative amounts are rejected as well
    ms().args(["--db", &db_path, "munch", "spend", "--", "-3"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn test_deleting_purchase_refunds_it() {
    let db_path = init_test_db("munch_delete");

    ms().args(["--db", &db_path, "munch", "deposit", "20", "--at", "2024-01-01T09:00:00Z"])
        .assert()
        .success();
    ms().args(["--db", &db_path, "munch", "spend", "4.50", "--at", "2024-01-01T12:30:00Z"])
        .assert()
        .success();
    ms().args(["--db", &db_path, "munch", "spend", "3", "--at", "2024-01-02T18:00:00Z"])
        .assert()
        .success();

    ms().args(["--db", &db_path, "del", "munch", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Balance: $17.00"));

    let stdout = stdout_of(&db_path, &["history", "munch"]);
    assert!(!stdout.contains("-$4.50"));
    // the later row keeps the snapshot it was written with
    assert!(stdout.contains("-$3.00 → $12.50"));
    assert!(stdout.contains("+$20.00 → $20.00"));

    let jan2 = stdout.find("Jan 2nd 24").expect("missing Jan 2nd");
    let jan1 = stdout.find("Jan 1st 24").expect("missing Jan 1st");
    assert!(jan2 < jan1);
}

#[test]
fn test_set_balance_to_same_value_records_nothing() {
    let db_path = init_test_db("munch_set_same");

    ms().args(["--db", &db_path, "munch", "set", "12.5"])
        .assert()
        .success();

    ms().args(["--db", &db_path, "munch", "set", "12.50"])
        .assert()
        .success()
        .stdout(contains("nothing recorded"));

    let stdout = stdout_of(&db_path, &["history", "munch", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let entries = json[0]["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_reconcile_detects_and_fixes_drift() {
    let db_path = init_test_db("munch_reconcile");

    ms().args(["--db", &db_path, "munch", "deposit", "10", "--at", "2024-01-01T09:00:00Z"])
        .assert()
        .success();
    ms().args(["--db", &db_path, "eat", "--at", "2024-01-01T12:00:00Z"])
        .assert()
        .success();

    ms().args(["--db", &db_path, "reconcile"])
        .assert()
        .success()
        .stdout(contains("Counters agree with history."));

    // scalar-only adjustment: the newest swipe still says 79
    ms().args(["--db", &db_path, "meal", "add", "3"])
        .assert()
        .success();

    ms().args(["--db", &db_path, "reconcile"])
        .assert()
        .success()
        .stdout(contains("cached 82 but newest row #1 says 79"))
        .stdout(contains("Counters drifted from history."));

    ms().args(["--db", &db_path, "reconcile", "--fix"])
        .assert()
        .success()
        .stdout(contains("Rewrote 1 counter(s)"));

    assert_eq!(kv_value(&db_path, "numMeals").as_deref(), Some("79"));
}
