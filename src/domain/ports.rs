use super::order::Order;
use super::payment::PaymentRecord;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn store(&self, order: Order) -> Result<()>;
    async fn get(&self, order_id: &str) -> Result<Option<Order>>;
    async fn get_all(&self) -> Result<Vec<Order>>;
}

/// Append-only storage for payment records.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn append(&self, record: PaymentRecord) -> Result<()>;
    async fn exists(&self, payment_id: &str) -> Result<bool>;
    async fn for_order(&self, order_id: &str) -> Result<Vec<PaymentRecord>>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;
