#![cfg(feature = "storage-rocksdb")]

mod common;

use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_rocksdb_ledger_survives_restart() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");
    let orders = common::orders_file(&["o-1, SO-1, 1000, "]);

    // 1. First run: record the deposit
    let deposit = common::payments_file(&["p-1, o-1, 300, deposit, 2024-01-01"]);
    let output1 = Command::new(cargo_bin!("payment-ledger"))
        .arg(deposit.path())
        .arg("--orders")
        .arg(orders.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains("o-1,SO-1,1000,300,700,partially_paid,false,2024-01-01"));

    // 2. Second run: the balance payment plus a replay of the deposit
    let balance = common::payments_file(&[
        "p-1, o-1, 300, deposit, 2024-01-01",
        "p-2, o-1, 700, balance, 2024-02-01",
    ]);
    let output2 = Command::new(cargo_bin!("payment-ledger"))
        .arg(balance.path())
        .arg("--orders")
        .arg(orders.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);

    // The replayed deposit is rejected as a duplicate, not counted twice.
    assert!(stdout2.contains("o-1,SO-1,1000,1000,0,fully_paid,true,2024-02-01"));
}
