//! The record-store contract: validated one-shot mutations in, ordered
//! full-collection snapshots out.

pub mod memory;

use crate::errors::StoreError;
use crate::ledger::{Bill, BillDraft, RecordId, Transaction, TransactionDraft};

pub type Result<T> = std::result::Result<T, StoreError>;

/// A push-delivered whole-collection snapshot. Each event fully replaces the
/// receiver's copy of that collection; there is no incremental merge.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// All bills, ordered by description.
    Bills(Vec<Bill>),
    /// All transactions, ordered by date then creation time.
    Transactions(Vec<Transaction>),
}

/// Abstraction over the record store holding the two collections.
///
/// Mutations validate their draft, write, and trigger a fresh snapshot to
/// every subscriber. A failed mutation writes nothing and delivers nothing;
/// callers report the error and move on, there is no retry queue.
pub trait RecordStore {
    fn create_bill(&mut self, draft: BillDraft) -> Result<RecordId>;
    fn update_bill(&mut self, id: &str, draft: BillDraft) -> Result<()>;
    /// Deletes a bill without cascading to transactions that reference it;
    /// readers tolerate the dangling reference.
    fn delete_bill(&mut self, id: &str) -> Result<()>;
    fn create_transaction(&mut self, draft: TransactionDraft) -> Result<RecordId>;
    fn delete_transaction(&mut self, id: &str) -> Result<()>;
}

pub use memory::MemoryStore;
