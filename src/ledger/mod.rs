//! Ledger domain models and the pure functions computed over them.

pub mod aggregate;
pub mod bill;
pub mod guards;
pub mod reconcile;
pub mod schedule;
pub mod transaction;

/// Opaque store-assigned record identifier.
pub type RecordId = String;

pub use aggregate::{net_movement, net_movement_for_month, transactions_on};
pub use bill::Bill;
pub use guards::{validate_bill, validate_transaction, BillDraft, TransactionDraft};
pub use reconcile::{
    classify, resolve_installment_amount, schedule_for_month, InstallmentStatus, ScheduleEntry,
};
pub use schedule::{expand_installments, Installment};
pub use transaction::{Transaction, TransactionKind};
