use crate::domain::order::Order;
use crate::domain::payment::PaymentRecord;
use crate::domain::ports::{OrderStore, PaymentStore};
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for orders.
///
/// Uses `Arc<RwLock<HashMap<String, Order>>>` so clones share the same data.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn store(&self, order: Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id.clone(), order);
        Ok(())
    }

    async fn get(&self, order_id: &str) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(order_id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }
}

#[derive(Default)]
struct Ledger {
    records: HashMap<String, PaymentRecord>,
    by_order: HashMap<String, Vec<String>>,
}

/// A thread-safe, append-only in-memory payment ledger.
///
/// Keeps an index from order id to payment ids so an order's records can be
/// collected without scanning the whole ledger.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    ledger: Arc<RwLock<Ledger>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn append(&self, record: PaymentRecord) -> Result<()> {
        let mut ledger = self.ledger.write().await;
        if ledger.records.contains_key(&record.id) {
            return Err(LedgerError::DuplicatePayment(record.id));
        }
        ledger
            .by_order
            .entry(record.order_id.clone())
            .or_default()
            .push(record.id.clone());
        ledger.records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn exists(&self, payment_id: &str) -> Result<bool> {
        let ledger = self.ledger.read().await;
        Ok(ledger.records.contains_key(payment_id))
    }

    async fn for_order(&self, order_id: &str) -> Result<Vec<PaymentRecord>> {
        let ledger = self.ledger.read().await;
        let records = ledger
            .by_order
            .get(order_id)
            .into_iter()
            .flatten()
            .filter_map(|id| ledger.records.get(id).cloned())
            .collect();
        Ok(records)
    }
}
