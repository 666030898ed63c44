//! Expansion of a bill definition into its full installment schedule.

use chrono::NaiveDate;

use super::{Bill, RecordId};
use crate::calendar::add_calendar_months;
use crate::money::Amount;

/// One scheduled due amount of a bill. Derived on demand, never persisted;
/// paid/overdue status lives in [`super::reconcile`], not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Installment {
    pub bill_id: RecordId,
    /// 0-based position in the schedule, the key transactions reference.
    pub index: u32,
    /// 1-based position for display (`3/12`).
    pub number: u32,
    pub total_count: u32,
    pub amount: Amount,
    pub due_date: NaiveDate,
}

/// Expands a bill into its ordered installment schedule.
///
/// Pure and deterministic: the same bill always yields the same sequence of
/// exactly `installment_count` entries. Due dates advance one calendar month
/// per index from the first due date, clamping at short months. The total is
/// partitioned remainder-first: every installment gets `total / count`
/// centavos and the first `total % count` carry one extra, so the schedule
/// always sums back to the bill total exactly (100.00 over 3 gives 33.34,
/// 33.33, 33.33).
///
/// Bills reaching this point were validated on the mutation path; no
/// validation happens here.
pub fn expand_installments(bill: &Bill) -> Vec<Installment> {
    let count = bill.installment_count;
    let mut schedule = Vec::with_capacity(count as usize);
    if count == 0 {
        return schedule;
    }
    let base = bill.total_amount.centavos() / count as i64;
    let remainder = bill.total_amount.centavos() % count as i64;

    for index in 0..count {
        let extra = if (index as i64) < remainder { 1 } else { 0 };
        schedule.push(Installment {
            bill_id: bill.id.clone(),
            index,
            number: index + 1,
            total_count: count,
            amount: Amount::from_centavos(base + extra),
            due_date: add_calendar_months(bill.first_due_date, index),
        });
    }
    schedule
}
