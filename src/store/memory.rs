//! In-memory record store delivering the same snapshot contract as the real
//! document store: every mutation re-publishes the touched collection, whole
//! and ordered, to every subscriber.

use std::sync::mpsc::{channel, Receiver, Sender};

use chrono::Utc;
use uuid::Uuid;

use super::{RecordStore, Result, StoreEvent};
use crate::errors::StoreError;
use crate::ledger::{
    guards, Bill, BillDraft, RecordId, Transaction, TransactionDraft,
};

#[derive(Default)]
pub struct MemoryStore {
    bills: Vec<Bill>,
    transactions: Vec<Transaction>,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to snapshot delivery. The current contents of both
    /// collections are delivered immediately, mirroring the initial snapshot
    /// a live document store pushes on attach.
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (sender, receiver) = channel();
        let _ = sender.send(StoreEvent::Bills(self.bills_snapshot()));
        let _ = sender.send(StoreEvent::Transactions(self.transactions_snapshot()));
        self.subscribers.push(sender);
        receiver
    }

    fn bills_snapshot(&self) -> Vec<Bill> {
        let mut snapshot = self.bills.clone();
        snapshot.sort_by(|a, b| a.description.cmp(&b.description));
        snapshot
    }

    fn transactions_snapshot(&self) -> Vec<Transaction> {
        let mut snapshot = self.transactions.clone();
        snapshot.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));
        snapshot
    }

    fn publish_bills(&mut self) {
        let snapshot = self.bills_snapshot();
        self.subscribers
            .retain(|sub| sub.send(StoreEvent::Bills(snapshot.clone())).is_ok());
    }

    fn publish_transactions(&mut self) {
        let snapshot = self.transactions_snapshot();
        self.subscribers
            .retain(|sub| sub.send(StoreEvent::Transactions(snapshot.clone())).is_ok());
    }

    fn mint_id() -> RecordId {
        Uuid::new_v4().to_string()
    }
}

impl RecordStore for MemoryStore {
    fn create_bill(&mut self, draft: BillDraft) -> Result<RecordId> {
        guards::validate_bill(&draft, &self.bills, None)?;
        let bill = Bill::from_draft(Self::mint_id(), draft, Some(Utc::now()));
        let id = bill.id.clone();
        tracing::debug!(bill = %bill.description, "bill created");
        self.bills.push(bill);
        self.publish_bills();
        Ok(id)
    }

    fn update_bill(&mut self, id: &str, draft: BillDraft) -> Result<()> {
        guards::validate_bill(&draft, &self.bills, Some(id))?;
        let bill = self
            .bills
            .iter_mut()
            .find(|bill| bill.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        bill.apply_draft(draft);
        self.publish_bills();
        Ok(())
    }

    fn delete_bill(&mut self, id: &str) -> Result<()> {
        let before = self.bills.len();
        self.bills.retain(|bill| bill.id != id);
        if self.bills.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        // Historical transactions keep their reference; readers skip it.
        self.publish_bills();
        Ok(())
    }

    fn create_transaction(&mut self, draft: TransactionDraft) -> Result<RecordId> {
        guards::validate_transaction(&draft)?;
        let transaction = Transaction {
            id: Self::mint_id(),
            kind: draft.kind,
            amount: draft.amount,
            description: draft.description,
            date: draft.date,
            bill_id: draft.bill_id,
            installment_index: draft.installment_index,
            payee: draft.payee,
            created_at: Some(Utc::now()),
        };
        let id = transaction.id.clone();
        self.transactions.push(transaction);
        self.publish_transactions();
        Ok(id)
    }

    fn delete_transaction(&mut self, id: &str) -> Result<()> {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        if self.transactions.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.publish_transactions();
        Ok(())
    }
}
