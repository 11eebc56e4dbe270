//! CSV import of orders and payments, CSV export of payment summaries.

pub mod ledger_reader;
pub mod summary_writer;
