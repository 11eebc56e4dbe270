use crate::domain::money::Money;
use crate::domain::order::Order;
use crate::domain::payment::PaymentRecord;
use crate::domain::ports::{OrderStoreBox, PaymentStoreBox};
use crate::domain::status::PaymentStatus;
use crate::domain::summary::PaymentSummary;
use crate::error::{LedgerError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// An order together with its freshly derived payment summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPaymentView {
    pub order: Order,
    pub summary: PaymentSummary,
}

/// Orders bucketed by payment status, for reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusBreakdown {
    pub buckets: BTreeMap<PaymentStatus, StatusBucket>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatusBucket {
    pub orders: usize,
    pub amount_due: Money,
}

impl StatusBreakdown {
    pub fn bucket(&self, status: PaymentStatus) -> StatusBucket {
        self.buckets.get(&status).copied().unwrap_or_default()
    }
}

/// An order whose stored status no longer matches what its ledger says.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMismatch {
    pub order_id: String,
    pub stored: Option<PaymentStatus>,
    pub derived: PaymentStatus,
}

/// Records payments against orders and answers payment questions about them.
///
/// The ledger never caches a status: every query recomputes the summary from
/// the order total and the stored records.
pub struct PaymentLedger {
    order_store: OrderStoreBox,
    payment_store: PaymentStoreBox,
}

impl PaymentLedger {
    /// Creates a new `PaymentLedger` over the given stores.
    pub fn new(order_store: OrderStoreBox, payment_store: PaymentStoreBox) -> Self {
        Self {
            order_store,
            payment_store,
        }
    }

    /// Inserts an order, replacing any previous version with the same id.
    pub async fn register_order(&self, order: Order) -> Result<()> {
        if order.total_amount.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Order {} has a negative total {}",
                order.id, order.total_amount
            )));
        }
        debug!(order = %order.id, total = %order.total_amount, "registering order");
        self.order_store.store(order).await
    }

    /// Appends a payment to its order's ledger and returns the new summary.
    ///
    /// The order must already be registered and the payment id must be new;
    /// recorded payments are never replaced. A payment whose ledger sums would
    /// overflow is rejected before anything is written.
    pub async fn record_payment(&self, record: PaymentRecord) -> Result<PaymentSummary> {
        let order = self.order(&record.order_id).await?;

        if self.payment_store.exists(&record.id).await? {
            return Err(LedgerError::DuplicatePayment(record.id));
        }

        let mut payments = self.payment_store.for_order(&order.id).await?;
        payments.push(record.clone());
        let summary = PaymentSummary::compose(order.total_amount, payments).map_err(|e| {
            warn!(payment = %record.id, order = %order.id, error = %e, "rejecting payment");
            e
        })?;

        info!(
            payment = %record.id,
            order = %order.id,
            kind = %record.payment_type,
            amount = %record.amount.value(),
            "recording payment"
        );
        self.payment_store.append(record).await?;

        if summary.status == PaymentStatus::Overpaid {
            warn!(
                order = %order.id,
                balance = %summary.balance_remaining,
                "order is overpaid"
            );
        }
        Ok(summary)
    }

    pub async fn summary(&self, order_id: &str) -> Result<PaymentSummary> {
        let order = self.order(order_id).await?;
        self.summarize(&order).await
    }

    /// Whether the order's goods may be shipped.
    pub async fn can_ship(&self, order_id: &str) -> Result<bool> {
        Ok(self.summary(order_id).await?.can_ship())
    }

    /// Every order with its summary, ordered by order id.
    pub async fn summaries(&self) -> Result<Vec<OrderPaymentView>> {
        let mut orders = self.order_store.get_all().await?;
        orders.sort_by(|a, b| a.id.cmp(&b.id));

        let mut views = Vec::with_capacity(orders.len());
        for order in orders {
            let summary = self.summarize(&order).await?;
            views.push(OrderPaymentView { order, summary });
        }
        Ok(views)
    }

    pub async fn status_breakdown(&self) -> Result<StatusBreakdown> {
        let mut breakdown = StatusBreakdown::default();
        for view in self.summaries().await? {
            let bucket = breakdown.buckets.entry(view.summary.status).or_default();
            bucket.orders += 1;
            bucket.amount_due = bucket
                .amount_due
                .checked_add(view.summary.amount_due())
                .ok_or_else(|| {
                    LedgerError::Validation(format!(
                        "Amount due for {} orders overflows",
                        view.summary.status
                    ))
                })?;
        }
        Ok(breakdown)
    }

    /// Orders whose stored `payment_status` disagrees with the ledger.
    ///
    /// Orders without a stored status are reported too, since any reader of
    /// that field would see nothing at all.
    pub async fn reconcile(&self) -> Result<Vec<StatusMismatch>> {
        let mismatches = self
            .summaries()
            .await?
            .into_iter()
            .filter(|view| view.order.payment_status != Some(view.summary.status))
            .map(|view| StatusMismatch {
                order_id: view.order.id,
                stored: view.order.payment_status,
                derived: view.summary.status,
            })
            .collect();
        Ok(mismatches)
    }

    async fn order(&self, order_id: &str) -> Result<Order> {
        self.order_store
            .get(order_id)
            .await?
            .ok_or_else(|| LedgerError::UnknownOrder(order_id.to_string()))
    }

    async fn summarize(&self, order: &Order) -> Result<PaymentSummary> {
        let payments = self.payment_store.for_order(&order.id).await?;
        PaymentSummary::compose(order.total_amount, payments)
    }
}
