use chrono::NaiveDate;
use finance_core::calendar::format_short_date;
use finance_core::errors::FinanceError;
use finance_core::ledger::{Transaction, TransactionKind};
use finance_core::money::{format_signed, Amount, Locale};
use finance_core::report::{build_report, paginate, Report, ReportRenderer, ReportRow};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn txn(kind: TransactionKind, centavos: i64, on: NaiveDate, label: &str) -> Transaction {
    Transaction {
        id: String::new(),
        kind,
        amount: Amount::from_centavos(centavos),
        description: label.into(),
        date: on,
        bill_id: None,
        installment_index: None,
        payee: None,
        created_at: None,
    }
}

/// Minimal renderer standing in for the PDF collaborator: one text line per
/// row, one block per page.
struct TextRenderer {
    locale: Locale,
    pages: Vec<String>,
}

impl TextRenderer {
    fn new() -> Self {
        Self {
            locale: Locale::default(),
            pages: Vec::new(),
        }
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&mut self, report: &Report, pages: &[Vec<ReportRow>]) -> Result<(), FinanceError> {
        for rows in pages {
            let mut page = format!("{} — {}\n", report.title, report.period_label);
            for row in rows {
                let line = match row {
                    ReportRow::DayHeader(day) => format_short_date(*day),
                    ReportRow::Line(line) => {
                        format!("  {} {}", line.label, format_signed(line.amount, &self.locale))
                    }
                    ReportRow::DayTotal(total) => {
                        format!("  total {}", format_signed(*total, &self.locale))
                    }
                    ReportRow::GrandTotal(total) => {
                        format!("TOTAL {}", format_signed(*total, &self.locale))
                    }
                };
                page.push_str(&line);
                page.push('\n');
            }
            self.pages.push(page);
        }
        Ok(())
    }
}

#[test]
fn monthly_report_renders_grouped_days() {
    let transactions = vec![
        txn(TransactionKind::Income, 350_000, date(2025, 8, 5), "Salário"),
        txn(TransactionKind::Expense, 12_050, date(2025, 8, 5), "Mercado"),
        txn(
            TransactionKind::BillInstallment,
            10_000,
            date(2025, 8, 15),
            "Financiamento",
        ),
    ];
    let report = build_report(&transactions, 2025, Some(8));
    let pages = paginate(&report, 760.0);
    assert_eq!(pages.len(), 1);

    let mut renderer = TextRenderer::new();
    renderer.render(&report, &pages).unwrap();
    assert_eq!(renderer.pages.len(), 1);
    let text = &renderer.pages[0];
    assert!(text.contains("05/ago/2025"));
    assert!(text.contains("Salário +R$ 3.500,00"));
    assert!(text.contains("Mercado -R$ 120,50"));
    assert!(text.contains("total +R$ 3.379,50"));
    assert!(text.contains("Financiamento -R$ 100,00"));
    assert!(text.contains("TOTAL +R$ 3.279,50"));
    assert_eq!(report.suggested_filename(), "report-08-2025.pdf");
}

#[test]
fn long_report_splits_into_pages() {
    let transactions: Vec<Transaction> = (0..240)
        .map(|i| {
            txn(
                TransactionKind::Expense,
                100 + i,
                date(2025, 1 + (i % 12) as u32, 1 + (i % 28) as u32),
                "Despesa",
            )
        })
        .collect();
    let report = build_report(&transactions, 2025, None);
    let pages = paginate(&report, 200.0);
    assert!(pages.len() > 1);

    let mut renderer = TextRenderer::new();
    renderer.render(&report, &pages).unwrap();
    assert_eq!(renderer.pages.len(), pages.len());
    // The grand total lands on the final page exactly once.
    let with_total: Vec<usize> = renderer
        .pages
        .iter()
        .enumerate()
        .filter(|(_, page)| page.contains("TOTAL"))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(with_total, vec![renderer.pages.len() - 1]);
}
