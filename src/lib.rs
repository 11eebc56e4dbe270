pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::ledger::PaymentLedger;
pub use domain::money::{Amount, Money};
pub use domain::payment::{PaymentRecord, PaymentType, payment_type_label};
pub use domain::status::{
    PaymentStatus, calculate_status, can_ship, is_fully_paid, is_overpaid, is_partially_paid,
    is_unpaid, payment_status_label,
};
pub use domain::summary::PaymentSummary;
pub use error::{LedgerError, Result};
