use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("payment-ledger"));
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--orders")
        .arg("tests/fixtures/orders.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "order_id,order_number,total_amount,total_paid,balance_remaining,payment_status,can_ship,last_payment_date",
        ))
        .stdout(predicate::str::contains(
            "o-1,SO-2024-001,1000,1000,0,fully_paid,true,2024-04-15",
        ))
        .stdout(predicate::str::contains(
            "o-2,SO-2024-002,2500,750,1750,partially_paid,false,2024-03-10",
        ))
        // Deposit of 1000 less a refund of 200.
        .stdout(predicate::str::contains(
            "o-3,SO-2024-003,800,800,0,fully_paid,true,2024-03-25",
        ))
        .stdout(predicate::str::contains(
            "o-4,SO-2024-004,1000,0,1000,unpaid,false,\n",
        ));

    Ok(())
}

#[test]
fn test_cli_reconcile_reports_only_stale_orders() {
    let mut cmd = Command::new(cargo_bin!("payment-ledger"));
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--orders")
        .arg("tests/fixtures/orders.csv")
        .arg("--reconcile");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("stored payment status is out of date"))
        .stderr(predicate::str::contains("o-3"))
        .stderr(predicate::str::contains("o-2").not());
}

#[test]
fn test_cli_missing_orders_file_fails() {
    let mut cmd = Command::new(cargo_bin!("payment-ledger"));
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--orders")
        .arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
