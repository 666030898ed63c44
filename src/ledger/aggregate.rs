//! Net-movement folds over the transaction snapshot.
//!
//! Pure linear scans recomputed per query; the dataset is personal-scale, so
//! no running totals are maintained.

use chrono::NaiveDate;

use super::Transaction;
use crate::calendar::in_month;
use crate::money::Amount;

/// Signed net movement for one calendar day: income counts positively,
/// expenses and bill installments negatively.
pub fn net_movement(transactions: &[Transaction], date: NaiveDate) -> Amount {
    transactions
        .iter()
        .filter(|txn| txn.date == date)
        .map(Transaction::signed_amount)
        .sum()
}

/// Signed net movement over a whole `(year, month)` window.
pub fn net_movement_for_month(transactions: &[Transaction], year: i32, month: u32) -> Amount {
    transactions
        .iter()
        .filter(|txn| in_month(txn.date, year, month))
        .map(Transaction::signed_amount)
        .sum()
}

/// The day's entries in snapshot order, for the daily list view.
pub fn transactions_on<'a>(
    transactions: &'a [Transaction],
    date: NaiveDate,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|txn| txn.date == date).collect()
}
