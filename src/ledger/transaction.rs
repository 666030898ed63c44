use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::money::Amount;

/// Direction and category of a recorded movement. The wire tags are the
/// store's historical values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    #[serde(rename = "entrada")]
    Income,
    #[serde(rename = "saida")]
    Expense,
    #[serde(rename = "conta")]
    BillInstallment,
}

/// An atomic recorded money movement. Immutable once created; deletion is the
/// only mutation the store accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Assigned by the store; not part of the document body.
    #[serde(skip)]
    pub id: RecordId,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "valor")]
    pub amount: Amount,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "dataISO")]
    pub date: NaiveDate,
    /// Weak reference to a bill; present only on bill-installment rows and
    /// tolerated dangling after the bill is deleted.
    #[serde(rename = "contaId", default, skip_serializing_if = "Option::is_none")]
    pub bill_id: Option<RecordId>,
    #[serde(
        rename = "parcelaIndex",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub installment_index: Option<u32>,
    #[serde(
        rename = "estabelecimento",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payee: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Income contributes positively to net movement; expenses and bill
    /// installments both reduce it.
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense | TransactionKind::BillInstallment => -self.amount,
        }
    }

    /// Whether this transaction records payment of the given installment.
    pub fn pays(&self, bill_id: &str, installment_index: u32) -> bool {
        self.kind == TransactionKind::BillInstallment
            && self.bill_id.as_deref() == Some(bill_id)
            && self.installment_index == Some(installment_index)
    }
}
