use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::guards::BillDraft;
use super::RecordId;
use crate::money::Amount;

/// A recurring obligation split into equal monthly installments.
///
/// The per-installment amount is always recomputed from `total_amount` and
/// `installment_count`; it is never stored, so edits to the total can never
/// leave a stale derived value behind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    /// Assigned by the store; not part of the document body.
    #[serde(skip)]
    pub id: RecordId,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valorTotal")]
    pub total_amount: Amount,
    #[serde(rename = "qtdParcelas")]
    pub installment_count: u32,
    #[serde(rename = "primeiraDataISO")]
    pub first_due_date: NaiveDate,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Bill {
    pub fn from_draft(id: RecordId, draft: BillDraft, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            description: draft.description.trim().to_string(),
            total_amount: draft.total_amount,
            installment_count: draft.installment_count,
            first_due_date: draft.first_due_date,
            created_at,
        }
    }

    /// Case-insensitive description match, the uniqueness key among bills.
    pub fn describes(&self, description: &str) -> bool {
        self.description.to_lowercase() == description.trim().to_lowercase()
    }

    /// Replaces the editable fields in place, keeping id and creation time.
    pub fn apply_draft(&mut self, draft: BillDraft) {
        self.description = draft.description.trim().to_string();
        self.total_amount = draft.total_amount;
        self.installment_count = draft.installment_count;
        self.first_due_date = draft.first_due_date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> BillDraft {
        BillDraft {
            description: "  Internet  ".into(),
            total_amount: Amount::from_centavos(120_000),
            installment_count: 12,
            first_due_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        }
    }

    #[test]
    fn draft_description_is_trimmed() {
        let bill = Bill::from_draft("b1".into(), draft(), None);
        assert_eq!(bill.description, "Internet");
        assert!(bill.describes("internet"));
        assert!(bill.describes(" INTERNET "));
        assert!(!bill.describes("internet fibra"));
    }

    #[test]
    fn apply_draft_keeps_identity() {
        let mut bill = Bill::from_draft("b1".into(), draft(), None);
        let mut edit = draft();
        edit.description = "Internet fibra".into();
        edit.installment_count = 6;
        bill.apply_draft(edit);
        assert_eq!(bill.id, "b1");
        assert_eq!(bill.description, "Internet fibra");
        assert_eq!(bill.installment_count, 6);
    }
}
