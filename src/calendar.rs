//! Calendar arithmetic shared by the schedule generator and the query layer.

use chrono::{Datelike, Duration, Local, NaiveDate};

const MONTH_ABBREV: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Current local date with the time of day discarded. Callers capture this
/// once per render pass and pass it down, so a pass that straddles midnight
/// still sees a single consistent "today".
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Advances a date by `months` calendar months, preserving the day of month.
/// When the target month is shorter, the day clamps to its last valid day
/// (Jan 31 + 1 month lands on Feb 28, or Feb 29 in a leap year).
pub fn add_calendar_months(date: NaiveDate, months: u32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months as i32;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}

/// Whether a date falls inside the `(year, month)` filter window.
pub fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

/// Short localized date rendering, `15/jan/2025`.
pub fn format_short_date(date: NaiveDate) -> String {
    format!(
        "{:02}/{}/{}",
        date.day(),
        MONTH_ABBREV[date.month0() as usize],
        date.year()
    )
}

/// Localized `month/year` label used for report periods.
pub fn month_year_label(year: i32, month: u32) -> String {
    format!("{}/{}", MONTH_ABBREV[(month - 1) as usize], year)
}
