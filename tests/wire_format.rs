//! The store schema must keep the historical field names so snapshots from
//! an existing deployment stay readable.

use chrono::NaiveDate;
use finance_core::ledger::{Bill, Transaction, TransactionKind};
use finance_core::money::Amount;
use serde_json::{json, Value};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn bill_document_uses_historical_field_names() {
    let bill = Bill {
        id: "ignored-by-serialization".into(),
        description: "Financiamento".into(),
        total_amount: Amount::from_centavos(120_000),
        installment_count: 12,
        first_due_date: date(2025, 1, 15),
        created_at: None,
    };
    let value = serde_json::to_value(&bill).unwrap();
    assert_eq!(
        value,
        json!({
            "descricao": "Financiamento",
            "valorTotal": 1200.0,
            "qtdParcelas": 12,
            "primeiraDataISO": "2025-01-15",
        })
    );
}

#[test]
fn bill_document_roundtrips() {
    let raw = json!({
        "descricao": "Escola",
        "valorTotal": 600.0,
        "qtdParcelas": 6,
        "primeiraDataISO": "2025-02-10",
        "createdAt": "2025-01-01T12:00:00Z",
    });
    let bill: Bill = serde_json::from_value(raw).unwrap();
    assert_eq!(bill.id, "");
    assert_eq!(bill.description, "Escola");
    assert_eq!(bill.total_amount, Amount::from_centavos(60_000));
    assert_eq!(bill.first_due_date, date(2025, 2, 10));
    assert!(bill.created_at.is_some());
}

#[test]
fn installment_transaction_carries_the_reference_pair() {
    let txn = Transaction {
        id: "ignored".into(),
        kind: TransactionKind::BillInstallment,
        amount: Amount::from_centavos(10_000),
        description: "Financiamento".into(),
        date: date(2025, 1, 15),
        bill_id: Some("abc123".into()),
        installment_index: Some(0),
        payee: None,
        created_at: None,
    };
    let value = serde_json::to_value(&txn).unwrap();
    assert_eq!(
        value,
        json!({
            "tipo": "conta",
            "valor": 100.0,
            "descricao": "Financiamento",
            "dataISO": "2025-01-15",
            "contaId": "abc123",
            "parcelaIndex": 0,
        })
    );
}

#[test]
fn expense_transaction_omits_absent_optionals() {
    let txn = Transaction {
        id: String::new(),
        kind: TransactionKind::Expense,
        amount: Amount::from_centavos(1_530),
        description: "Padaria".into(),
        date: date(2025, 3, 2),
        bill_id: None,
        installment_index: None,
        payee: Some("Padaria do bairro".into()),
        created_at: None,
    };
    let value = serde_json::to_value(&txn).unwrap();
    assert_eq!(
        value,
        json!({
            "tipo": "saida",
            "valor": 15.3,
            "descricao": "Padaria",
            "dataISO": "2025-03-02",
            "estabelecimento": "Padaria do bairro",
        })
    );
}

#[test]
fn kind_tags_match_the_store() {
    for (kind, tag) in [
        (TransactionKind::Income, "entrada"),
        (TransactionKind::Expense, "saida"),
        (TransactionKind::BillInstallment, "conta"),
    ] {
        assert_eq!(serde_json::to_value(kind).unwrap(), Value::String(tag.into()));
        let parsed: TransactionKind = serde_json::from_value(Value::String(tag.into())).unwrap();
        assert_eq!(parsed, kind);
    }
}

#[test]
fn income_document_roundtrips() {
    let raw = json!({
        "tipo": "entrada",
        "valor": 33.34,
        "descricao": "Venda",
        "dataISO": "2025-06-30",
    });
    let txn: Transaction = serde_json::from_value(raw).unwrap();
    assert_eq!(txn.kind, TransactionKind::Income);
    assert_eq!(txn.amount, Amount::from_centavos(3_334));
    assert_eq!(txn.signed_amount(), Amount::from_centavos(3_334));
    assert!(txn.bill_id.is_none());
    assert!(txn.payee.is_none());
}
