//! Matching recorded transactions back against generated installments.
//!
//! Status is computed from the current snapshot pair on every pass and never
//! stored, so the displayed state cannot drift from the underlying records.

use chrono::NaiveDate;

use super::schedule::{expand_installments, Installment};
use super::{Bill, RecordId, Transaction};
use crate::calendar::in_month;
use crate::money::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallmentStatus {
    Paid,
    Overdue,
    Pending,
}

/// Classifies one installment against the transaction snapshot.
///
/// Paid wins over every date comparison: any bill-installment transaction
/// matching `(bill_id, index)` marks the installment paid regardless of the
/// due date, and regardless of the transaction amount. Several transactions
/// matching the same installment are accepted; existence is what counts.
pub fn classify(
    installment: &Installment,
    transactions: &[Transaction],
    today: NaiveDate,
) -> InstallmentStatus {
    if transactions
        .iter()
        .any(|txn| txn.pays(&installment.bill_id, installment.index))
    {
        return InstallmentStatus::Paid;
    }
    if installment.due_date < today {
        InstallmentStatus::Overdue
    } else {
        InstallmentStatus::Pending
    }
}

/// One classified installment row of a monthly schedule view.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub bill_id: RecordId,
    pub description: String,
    pub installment: Installment,
    pub status: InstallmentStatus,
}

/// Builds the schedule view for a `(year, month)` filter window: every
/// installment of every bill whose due date falls inside the window,
/// classified against the current transactions.
///
/// Transactions referencing a bill absent from `bills` have no counterpart
/// here; the dangling reference is omitted rather than treated as an error
/// (the amount still counts in raw movement aggregates).
pub fn schedule_for_month(
    bills: &[Bill],
    transactions: &[Transaction],
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Vec<ScheduleEntry> {
    let mut entries = Vec::new();
    for bill in bills {
        for installment in expand_installments(bill) {
            if !in_month(installment.due_date, year, month) {
                continue;
            }
            let status = classify(&installment, transactions, today);
            entries.push(ScheduleEntry {
                bill_id: bill.id.clone(),
                description: bill.description.clone(),
                installment,
                status,
            });
        }
    }
    entries
}

/// Looks up the amount of one installment through the weak bill reference.
/// `None` when the bill is gone or the index falls outside its schedule;
/// callers omit the row instead of failing.
pub fn resolve_installment_amount(bills: &[Bill], bill_id: &str, index: u32) -> Option<Amount> {
    let bill = bills.iter().find(|b| b.id == bill_id)?;
    expand_installments(bill)
        .into_iter()
        .find(|installment| installment.index == index)
        .map(|installment| installment.amount)
}
