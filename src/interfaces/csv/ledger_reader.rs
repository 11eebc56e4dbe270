use crate::domain::order::Order;
use crate::domain::payment::PaymentRecord;
use crate::error::{LedgerError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads orders or payment records from a CSV source.
///
/// Wraps `csv::Reader`, trimming whitespace and accepting rows that omit
/// trailing optional columns. Each row yields its own `Result` so a malformed
/// line does not stop the rest of the file from being read.
pub struct LedgerReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> LedgerReader<R> {
    /// Creates a new `LedgerReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads rows of `id, order_number, total_amount[, payment_status]`.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.rows::<Order>()
    }

    /// Lazily reads payment rows. Only `id, order_id, amount, payment_type,
    /// payment_date` are required.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentRecord>> {
        self.rows::<PaymentRecord>()
    }

    fn rows<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}
