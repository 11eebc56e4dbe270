//! Payment status classification.
//!
//! Status is never stored as independent truth: it is recomputed from an
//! order's total and the amount paid against it every time it is read.

use super::money::Money;
use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    PartiallyPaid,
    FullyPaid,
    Overpaid,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Unpaid,
        PaymentStatus::PartiallyPaid,
        PaymentStatus::FullyPaid,
        PaymentStatus::Overpaid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::PartiallyPaid => "partially_paid",
            Self::FullyPaid => "fully_paid",
            Self::Overpaid => "overpaid",
        }
    }

    /// Human readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::PartiallyPaid => "Partially Paid",
            Self::FullyPaid => "Fully Paid",
            Self::Overpaid => "Overpaid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unpaid" => Ok(Self::Unpaid),
            "partially_paid" => Ok(Self::PartiallyPaid),
            "fully_paid" => Ok(Self::FullyPaid),
            "overpaid" => Ok(Self::Overpaid),
            _ => Err(LedgerError::Validation(format!(
                "Unknown payment status: {s}"
            ))),
        }
    }
}

/// Classifies an order from its total and the net amount paid against it.
///
/// Both figures must be in the same currency. The rules are checked in order,
/// so a zero-total order with nothing paid is `Unpaid`, and a net negative
/// paid amount (refunds exceeding payments) is also `Unpaid`.
pub fn calculate_status(total_amount: Money, amount_paid: Money) -> PaymentStatus {
    if amount_paid <= Money::ZERO {
        PaymentStatus::Unpaid
    } else if amount_paid < total_amount {
        PaymentStatus::PartiallyPaid
    } else if amount_paid == total_amount {
        PaymentStatus::FullyPaid
    } else {
        PaymentStatus::Overpaid
    }
}

/// Goods may only leave the warehouse once the order is paid in full.
pub fn can_ship(status: PaymentStatus) -> bool {
    matches!(status, PaymentStatus::FullyPaid | PaymentStatus::Overpaid)
}

pub fn is_unpaid(status: PaymentStatus) -> bool {
    status == PaymentStatus::Unpaid
}

pub fn is_partially_paid(status: PaymentStatus) -> bool {
    status == PaymentStatus::PartiallyPaid
}

pub fn is_fully_paid(status: PaymentStatus) -> bool {
    status == PaymentStatus::FullyPaid
}

pub fn is_overpaid(status: PaymentStatus) -> bool {
    status == PaymentStatus::Overpaid
}

/// Display label for a raw status code.
///
/// Only the exact lowercase code is recognised; anything else, including
/// padded or differently cased input, is echoed back unchanged.
pub fn payment_status_label(status: &str) -> String {
    PaymentStatus::ALL
        .iter()
        .find(|s| s.as_str() == status)
        .map_or_else(|| status.to_string(), |s| s.label().to_string())
}
