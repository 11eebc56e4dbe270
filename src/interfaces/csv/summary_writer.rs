use crate::application::ledger::OrderPaymentView;
use crate::domain::status::PaymentStatus;
use crate::error::{LedgerError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct SummaryRow<'a> {
    order_id: &'a str,
    order_number: &'a str,
    total_amount: String,
    total_paid: String,
    balance_remaining: String,
    payment_status: PaymentStatus,
    can_ship: bool,
    last_payment_date: Option<NaiveDate>,
}

/// Writes one CSV row per order with its derived payment position.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(destination: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(destination),
        }
    }

    pub fn write_summaries(&mut self, views: &[OrderPaymentView]) -> Result<()> {
        for view in views {
            let summary = &view.summary;
            self.writer.serialize(SummaryRow {
                order_id: &view.order.id,
                order_number: &view.order.order_number,
                total_amount: summary.total_amount.to_string(),
                total_paid: summary.total_paid.to_string(),
                balance_remaining: summary.balance_remaining.to_string(),
                payment_status: summary.status,
                can_ship: summary.can_ship(),
                last_payment_date: summary.last_payment_date,
            })?;
        }
        self.writer.flush().map_err(LedgerError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::{Amount, Money};
    use crate::domain::order::Order;
    use crate::domain::payment::{PaymentRecord, PaymentType};
    use crate::domain::summary::PaymentSummary;
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_summaries() {
        let paid = PaymentRecord::new(
            "p-1",
            "o-1",
            Amount::new(dec!(1200.00)).unwrap(),
            PaymentType::Deposit,
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        );
        let views = vec![
            OrderPaymentView {
                order: Order::new("o-1", "SO-1", Money::new(dec!(1000.00))),
                summary: PaymentSummary::compose(Money::new(dec!(1000.00)), vec![paid]).unwrap(),
            },
            OrderPaymentView {
                order: Order::new("o-2", "SO-2", Money::new(dec!(80.5))),
                summary: PaymentSummary::compose(Money::new(dec!(80.5)), vec![]).unwrap(),
            },
        ];

        let mut buffer = Vec::new();
        SummaryWriter::new(&mut buffer).write_summaries(&views).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines[0],
            "order_id,order_number,total_amount,total_paid,balance_remaining,payment_status,can_ship,last_payment_date"
        );
        assert_eq!(lines[1], "o-1,SO-1,1000,1200,-200,overpaid,true,2024-06-30");
        assert_eq!(lines[2], "o-2,SO-2,80.5,0,80.5,unpaid,false,");
    }
}
