use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_ledger::application::ledger::PaymentLedger;
use payment_ledger::domain::ports::{OrderStoreBox, PaymentStoreBox};
use payment_ledger::infrastructure::in_memory::{InMemoryOrderStore, InMemoryPaymentStore};
use payment_ledger::interfaces::csv::ledger_reader::LedgerReader;
use payment_ledger::interfaces::csv::summary_writer::SummaryWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payments CSV file to record
    payments: PathBuf,

    /// Orders CSV file (id, order_number, total_amount[, payment_status])
    #[arg(long)]
    orders: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Report orders whose stored payment status disagrees with the ledger
    #[arg(long)]
    reconcile: bool,
}

fn open_ledger(db_path: Option<PathBuf>) -> Result<PaymentLedger> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(db_path) => {
            let store = payment_ledger::infrastructure::rocksdb::RocksDBStore::open(db_path)
                .into_diagnostic()?;
            let orders: OrderStoreBox = Box::new(store.clone());
            let payments: PaymentStoreBox = Box::new(store);
            Ok(PaymentLedger::new(orders, payments))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(db_path) => {
            warn!(
                path = %db_path.display(),
                "persistent storage requested via --db-path, but the 'storage-rocksdb' feature is not enabled; falling back to in-memory storage"
            );
            Ok(in_memory_ledger())
        }
        None => Ok(in_memory_ledger()),
    }
}

fn in_memory_ledger() -> PaymentLedger {
    let orders: OrderStoreBox = Box::new(InMemoryOrderStore::new());
    let payments: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    PaymentLedger::new(orders, payments)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let ledger = open_ledger(cli.db_path)?;

    let orders = LedgerReader::new(File::open(&cli.orders).into_diagnostic()?);
    for order in orders.orders() {
        match order {
            Ok(order) => {
                let id = order.id.clone();
                if let Err(e) = ledger.register_order(order).await {
                    warn!(order = %id, error = %e, "skipping order");
                }
            }
            Err(e) => warn!(error = %e, "error reading order"),
        }
    }

    let payments = LedgerReader::new(File::open(&cli.payments).into_diagnostic()?);
    let mut recorded = 0usize;
    for payment in payments.payments() {
        match payment {
            Ok(payment) => {
                let id = payment.id.clone();
                match ledger.record_payment(payment).await {
                    Ok(_) => recorded += 1,
                    Err(e) => warn!(payment = %id, error = %e, "skipping payment"),
                }
            }
            Err(e) => warn!(error = %e, "error reading payment"),
        }
    }
    info!(recorded, "payments recorded");

    let views = ledger.summaries().await.into_diagnostic()?;

    if cli.reconcile {
        for mismatch in ledger.reconcile().await.into_diagnostic()? {
            let stored = mismatch
                .stored
                .map(|s| s.to_string())
                .unwrap_or_else(|| "none".to_string());
            warn!(
                order = %mismatch.order_id,
                stored = %stored,
                derived = %mismatch.derived,
                "stored payment status is out of date"
            );
        }
    }

    let stdout = io::stdout();
    let mut writer = SummaryWriter::new(stdout.lock());
    writer.write_summaries(&views).into_diagnostic()?;

    Ok(())
}
