use super::money::Money;
use super::status::PaymentStatus;
use serde::{Deserialize, Serialize};

/// An order as far as payments are concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub total_amount: Money,
    /// Status as last written by an external system. Never used for decisions.
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
}

impl Order {
    pub fn new(id: impl Into<String>, order_number: impl Into<String>, total_amount: Money) -> Self {
        Self {
            id: id.into(),
            order_number: order_number.into(),
            total_amount,
            payment_status: None,
        }
    }
}
