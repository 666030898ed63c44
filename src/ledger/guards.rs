//! Validation shared by bill create/edit and transaction create.
//!
//! Guards run on the mutation path, before anything reaches the store; the
//! schedule generator and the query layer trust the records they receive.

use chrono::NaiveDate;

use super::{Bill, RecordId, TransactionKind};
use crate::errors::ValidationError;
use crate::money::Amount;

/// What the bill form submits, before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct BillDraft {
    pub description: String,
    pub total_amount: Amount,
    pub installment_count: u32,
    pub first_due_date: NaiveDate,
}

/// What the entry form submits, before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub description: String,
    pub date: NaiveDate,
    pub bill_id: Option<RecordId>,
    pub installment_index: Option<u32>,
    pub payee: Option<String>,
}

/// Validates a bill draft against the active bills. When editing, the bill
/// being edited is excluded from the duplicate check by identity.
pub fn validate_bill(
    draft: &BillDraft,
    existing: &[Bill],
    editing: Option<&str>,
) -> Result<(), ValidationError> {
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(ValidationError::InvalidDescription);
    }
    let duplicate = existing
        .iter()
        .filter(|bill| editing != Some(bill.id.as_str()))
        .any(|bill| bill.describes(description));
    if duplicate {
        return Err(ValidationError::DuplicateDescription(description.into()));
    }
    if !draft.total_amount.is_positive() {
        return Err(ValidationError::InvalidAmount);
    }
    if draft.installment_count == 0 {
        return Err(ValidationError::InvalidInstallmentCount);
    }
    Ok(())
}

/// Validates a transaction draft. Bill-installment rows must carry both the
/// bill reference and the installment index; every row needs a positive
/// resolved amount.
pub fn validate_transaction(draft: &TransactionDraft) -> Result<(), ValidationError> {
    if draft.kind == TransactionKind::BillInstallment {
        let selected = draft.bill_id.as_deref().is_some_and(|id| !id.is_empty())
            && draft.installment_index.is_some();
        if !selected {
            return Err(ValidationError::MissingSelection);
        }
    }
    if !draft.amount.is_positive() {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(())
}
