use crate::domain::order::Order;
use crate::domain::payment::PaymentRecord;
use crate::domain::ports::{OrderStore, PaymentStore};
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Direction, IteratorMode, Options, WriteBatch};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for storing orders.
pub const CF_ORDERS: &str = "orders";
/// Column Family for payment records, keyed by `order_id \0 payment_id`.
pub const CF_PAYMENTS: &str = "payments";
/// Column Family mapping a payment id to the order it belongs to.
pub const CF_PAYMENT_INDEX: &str = "payment_index";

const KEY_SEPARATOR: u8 = 0;

/// A persistent store implementation using RocksDB.
///
/// Orders and the payment ledger live in separate Column Families. Payment
/// keys are prefixed with the order id so one prefix scan yields an order's
/// ledger.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
/// Appends are serialized through a lock shared by every clone, so the
/// duplicate-id check and the write happen as one step.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
    append_lock: Arc<Mutex<()>>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cfs = [CF_ORDERS, CF_PAYMENTS, CF_PAYMENT_INDEX]
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()));

        let db = DB::open_cf_descriptors(&opts, path, cfs)?;

        Ok(Self {
            db: Arc::new(db),
            append_lock: Arc::new(Mutex::new(())),
        })
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            LedgerError::Internal(Box::new(std::io::Error::other(format!(
                "{name} column family not found"
            ))))
        })
    }
}

fn order_prefix(order_id: &str) -> Vec<u8> {
    let mut key = order_id.as_bytes().to_vec();
    key.push(KEY_SEPARATOR);
    key
}

fn payment_key(record: &PaymentRecord) -> Vec<u8> {
    let mut key = order_prefix(&record.order_id);
    key.extend_from_slice(record.id.as_bytes());
    key
}

#[async_trait]
impl OrderStore for RocksDBStore {
    async fn store(&self, order: Order) -> Result<()> {
        let cf = self.cf(CF_ORDERS)?;
        let value = serde_json::to_vec(&order)?;
        self.db.put_cf(cf, order.id.as_bytes(), value)?;
        Ok(())
    }

    async fn get(&self, order_id: &str) -> Result<Option<Order>> {
        let cf = self.cf(CF_ORDERS)?;
        match self.db.get_cf(cf, order_id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> Result<Vec<Order>> {
        let cf = self.cf(CF_ORDERS)?;
        let mut orders = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            orders.push(serde_json::from_slice(&value)?);
        }
        Ok(orders)
    }
}

#[async_trait]
impl PaymentStore for RocksDBStore {
    async fn append(&self, record: PaymentRecord) -> Result<()> {
        let _guard = self.append_lock.lock().await;
        if self.exists(&record.id).await? {
            return Err(LedgerError::DuplicatePayment(record.id));
        }

        let payments = self.cf(CF_PAYMENTS)?;
        let index = self.cf(CF_PAYMENT_INDEX)?;
        let value = serde_json::to_vec(&record)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(payments, payment_key(&record), value);
        batch.put_cf(index, record.id.as_bytes(), record.order_id.as_bytes());
        self.db.write(batch)?;

        Ok(())
    }

    async fn exists(&self, payment_id: &str) -> Result<bool> {
        let cf = self.cf(CF_PAYMENT_INDEX)?;
        Ok(self.db.get_pinned_cf(cf, payment_id.as_bytes())?.is_some())
    }

    async fn for_order(&self, order_id: &str) -> Result<Vec<PaymentRecord>> {
        let cf = self.cf(CF_PAYMENTS)?;
        let prefix = order_prefix(order_id);
        let mut records = Vec::new();

        let iter = self
            .db
            .iterator_cf(cf, IteratorMode::From(prefix.as_slice(), Direction::Forward));
        for item in iter {
            let (key, value) = item?;
            if !key.starts_with(&prefix) {
                break;
            }
            records.push(serde_json::from_slice(&value)?);
        }

        Ok(records)
    }
}
