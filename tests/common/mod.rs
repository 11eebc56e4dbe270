#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const ORDERS_HEADER: &str = "id, order_number, total_amount, payment_status";
pub const PAYMENTS_HEADER: &str = "id, order_id, amount, payment_type, payment_date";

/// Writes a CSV file with the given header and rows to a temporary location.
pub fn csv_file(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{header}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn orders_file(rows: &[&str]) -> NamedTempFile {
    csv_file(ORDERS_HEADER, rows)
}

pub fn payments_file(rows: &[&str]) -> NamedTempFile {
    csv_file(PAYMENTS_HEADER, rows)
}
