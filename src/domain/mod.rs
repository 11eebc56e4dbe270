//! Domain types and the pure payment classification rules.

pub mod money;
pub mod order;
pub mod payment;
pub mod ports;
pub mod status;
pub mod summary;
