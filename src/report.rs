//! Period report assembly and the layout plan handed to a renderer.
//!
//! Building and pagination are pure; the actual document drawing (PDF) lives
//! behind [`ReportRenderer`] and is a collaborator's concern.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::calendar::month_year_label;
use crate::errors::FinanceError;
use crate::ledger::Transaction;
use crate::money::Amount;

/// Vertical space available for rows on one page, in points. Derived from an
/// A4 page minus margins and the page header.
pub const DEFAULT_CONTENT_HEIGHT: f32 = 760.0;

const DAY_HEADER_HEIGHT: f32 = 18.0;
const LINE_HEIGHT: f32 = 14.0;
const DAY_TOTAL_HEIGHT: f32 = 16.0;
const GRAND_TOTAL_HEIGHT: f32 = 20.0;

/// One labelled signed movement inside a day group.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: String,
    pub amount: Amount,
}

/// All movements of one day, with the day's net total.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub lines: Vec<ReportLine>,
    pub total: Amount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub period_label: String,
    pub groups: Vec<DayGroup>,
    pub grand_total: Amount,
    year: i32,
    month: Option<u32>,
}

impl Report {
    /// `report-<month>-<year>.pdf`, or `report-<year>.pdf` for a whole year.
    pub fn suggested_filename(&self) -> String {
        match self.month {
            Some(month) => format!("report-{:02}-{}.pdf", month, self.year),
            None => format!("report-{}.pdf", self.year),
        }
    }
}

/// Builds the report for a year or a single month: day groups ascending by
/// date, each line labelled with the transaction's own description (bill
/// payments carry the bill description copied at creation, so rows stay
/// labelled even when the bill is gone).
pub fn build_report(transactions: &[Transaction], year: i32, month: Option<u32>) -> Report {
    let mut days: BTreeMap<NaiveDate, Vec<&Transaction>> = BTreeMap::new();
    for txn in transactions {
        let selected = txn.date.year() == year
            && month.map_or(true, |wanted| txn.date.month() == wanted);
        if selected {
            days.entry(txn.date).or_default().push(txn);
        }
    }

    let mut grand_total = Amount::ZERO;
    let groups = days
        .into_iter()
        .map(|(date, txns)| {
            let lines: Vec<ReportLine> = txns
                .iter()
                .map(|txn| ReportLine {
                    label: txn.description.clone(),
                    amount: txn.signed_amount(),
                })
                .collect();
            let total: Amount = lines.iter().map(|line| line.amount).sum();
            grand_total += total;
            DayGroup { date, lines, total }
        })
        .collect();

    let period_label = match month {
        Some(m) => month_year_label(year, m),
        None => year.to_string(),
    };

    Report {
        title: "Relatório de movimentações".into(),
        period_label,
        groups,
        grand_total,
        year,
        month,
    }
}

/// A row in the flattened layout, in render order.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRow {
    DayHeader(NaiveDate),
    Line(ReportLine),
    DayTotal(Amount),
    GrandTotal(Amount),
}

impl ReportRow {
    fn height(&self) -> f32 {
        match self {
            ReportRow::DayHeader(_) => DAY_HEADER_HEIGHT,
            ReportRow::Line(_) => LINE_HEIGHT,
            ReportRow::DayTotal(_) => DAY_TOTAL_HEIGHT,
            ReportRow::GrandTotal(_) => GRAND_TOTAL_HEIGHT,
        }
    }
}

/// Splits the report's rows into pages. A new page starts before the running
/// height would exceed `content_height`; a single row taller than the budget
/// still gets a page of its own rather than vanishing.
pub fn paginate(report: &Report, content_height: f32) -> Vec<Vec<ReportRow>> {
    let mut rows = Vec::new();
    for group in &report.groups {
        rows.push(ReportRow::DayHeader(group.date));
        for line in &group.lines {
            rows.push(ReportRow::Line(line.clone()));
        }
        rows.push(ReportRow::DayTotal(group.total));
    }
    rows.push(ReportRow::GrandTotal(report.grand_total));

    let mut pages = Vec::new();
    let mut page: Vec<ReportRow> = Vec::new();
    let mut used = 0.0f32;
    for row in rows {
        if !page.is_empty() && used + row.height() > content_height {
            pages.push(std::mem::take(&mut page));
            used = 0.0;
        }
        used += row.height();
        page.push(row);
    }
    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

/// Collaborator contract: consumes the assembled report plus its page plan
/// and produces the final paginated document.
pub trait ReportRenderer {
    fn render(&mut self, report: &Report, pages: &[Vec<ReportRow>]) -> Result<(), FinanceError>;
}
