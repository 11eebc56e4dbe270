use super::money::{Amount, Money};
use crate::error::LedgerError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Deposit,
    Balance,
    Adjustment,
    Refund,
}

impl PaymentType {
    pub const ALL: [PaymentType; 4] = [
        PaymentType::Deposit,
        PaymentType::Balance,
        PaymentType::Adjustment,
        PaymentType::Refund,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Balance => "balance",
            Self::Adjustment => "adjustment",
            Self::Refund => "refund",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Balance => "Balance Payment",
            Self::Adjustment => "Adjustment",
            Self::Refund => "Refund",
        }
    }

    /// Refunds take money back out of the order; everything else pays into it.
    pub fn is_credit(&self) -> bool {
        !matches!(self, Self::Refund)
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "balance" => Ok(Self::Balance),
            "adjustment" => Ok(Self::Adjustment),
            "refund" => Ok(Self::Refund),
            _ => Err(LedgerError::Validation(format!("Unknown payment type: {s}"))),
        }
    }
}

/// Display label for a raw payment type code. Anything but an exact code is
/// echoed back unchanged.
pub fn payment_type_label(payment_type: &str) -> String {
    PaymentType::ALL
        .iter()
        .find(|t| t.as_str() == payment_type)
        .map_or_else(|| payment_type.to_string(), |t| t.label().to_string())
}

/// A single entry in an order's payment ledger.
///
/// Records are appended by staff and never edited afterwards; corrections are
/// made by appending an `Adjustment` or a `Refund`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub order_id: String,
    pub amount: Amount,
    pub payment_type: PaymentType,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub proof_url: Option<String>,
    #[serde(default)]
    pub verified_by: Option<String>,
    #[serde(default)]
    pub verified_at: Option<NaiveDateTime>,
}

impl PaymentRecord {
    pub fn new(
        id: impl Into<String>,
        order_id: impl Into<String>,
        amount: Amount,
        payment_type: PaymentType,
        payment_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            order_id: order_id.into(),
            amount,
            payment_type,
            payment_date,
            method: None,
            reference: None,
            notes: None,
            proof_url: None,
            verified_by: None,
            verified_at: None,
        }
    }

    /// The record's effect on the amount paid: negative for refunds.
    pub fn signed_amount(&self) -> Money {
        let amount = Money::from(self.amount);
        if self.payment_type.is_credit() {
            amount
        } else {
            -amount
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verified_by.is_some()
    }
}
