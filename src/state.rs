//! The in-memory application state: one owned container replacing the
//! process-wide mutable collections of the original design.

use chrono::NaiveDate;

use crate::ledger::{
    aggregate, reconcile, schedule, Bill, Installment, ScheduleEntry, Transaction,
};
use crate::money::Amount;
use crate::store::StoreEvent;

/// Holds the latest snapshot of each collection. Everything rendered is
/// derived from this pair on demand; no classification or total is cached.
///
/// The two collections update independently, so a transaction may briefly
/// reference a bill the bill snapshot does not contain yet (or anymore).
/// Lookups return `None` for those and views omit the row.
#[derive(Debug, Default)]
pub struct AppState {
    bills: Vec<Bill>,
    transactions: Vec<Transaction>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the matching collection wholesale with the delivered
    /// snapshot.
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Bills(bills) => {
                tracing::debug!(count = bills.len(), "bill snapshot replaced");
                self.bills = bills;
            }
            StoreEvent::Transactions(transactions) => {
                tracing::debug!(count = transactions.len(), "transaction snapshot replaced");
                self.transactions = transactions;
            }
        }
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Weak bill lookup; `None` means "omit from schedule views", never an
    /// error.
    pub fn bill(&self, id: &str) -> Option<&Bill> {
        self.bills.iter().find(|bill| bill.id == id)
    }

    pub fn daily_movement(&self, date: NaiveDate) -> Amount {
        aggregate::net_movement(&self.transactions, date)
    }

    pub fn monthly_movement(&self, year: i32, month: u32) -> Amount {
        aggregate::net_movement_for_month(&self.transactions, year, month)
    }

    pub fn entries_on(&self, date: NaiveDate) -> Vec<&Transaction> {
        aggregate::transactions_on(&self.transactions, date)
    }

    /// The classified installment rows for the selected month. `today` is
    /// captured once by the caller for the whole render pass.
    pub fn schedule_for_month(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> Vec<ScheduleEntry> {
        reconcile::schedule_for_month(&self.bills, &self.transactions, year, month, today)
    }

    /// Installment choices for the entry form's bill selector; empty when the
    /// bill is unknown.
    pub fn installment_options(&self, bill_id: &str) -> Vec<Installment> {
        self.bill(bill_id)
            .map(schedule::expand_installments)
            .unwrap_or_default()
    }
}
