use super::money::Money;
use super::payment::PaymentRecord;
use super::status::{self, PaymentStatus};
use crate::error::{LedgerError, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// The payment position of one order, derived from its total and ledger.
///
/// Holds no identity of its own and is rebuilt on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSummary {
    pub total_amount: Money,
    pub total_paid: Money,
    /// `total_amount - total_paid`; negative when overpaid.
    pub balance_remaining: Money,
    pub status: PaymentStatus,
    pub payments: Vec<PaymentRecord>,
    pub last_payment_date: Option<NaiveDate>,
}

impl PaymentSummary {
    /// Builds the summary, failing if the ledger's sums leave the decimal range.
    pub fn compose(total_amount: Money, mut payments: Vec<PaymentRecord>) -> Result<Self> {
        payments.sort_by(|a, b| {
            a.payment_date
                .cmp(&b.payment_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total_paid = Money::checked_sum(payments.iter().map(PaymentRecord::signed_amount))
            .ok_or_else(|| LedgerError::Validation("Total paid overflows".to_string()))?;
        let balance_remaining = total_amount.checked_sub(total_paid).ok_or_else(|| {
            LedgerError::Validation(format!(
                "Balance of {total_amount} less {total_paid} overflows"
            ))
        })?;
        let last_payment_date = payments.iter().map(|p| p.payment_date).max();

        Ok(Self {
            total_amount,
            total_paid,
            balance_remaining,
            status: status::calculate_status(total_amount, total_paid),
            payments,
            last_payment_date,
        })
    }

    pub fn can_ship(&self) -> bool {
        status::can_ship(self.status)
    }

    /// What the customer still owes, never below zero.
    pub fn amount_due(&self) -> Money {
        self.balance_remaining.max(Money::ZERO)
    }
}
