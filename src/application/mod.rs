//! Application layer orchestrating the domain rules over storage.
//!
//! `PaymentLedger` is the entry point: it records payments against orders
//! and derives every status on demand from the stored ledger.

pub mod ledger;
