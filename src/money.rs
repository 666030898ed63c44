//! Monetary values and the localized currency codec.
//!
//! Amounts are held as whole centavos so that installment partitioning and
//! movement folds stay exact; the wire format remains a plain decimal number
//! of currency units.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monetary value in centavos (the smallest currency unit).
///
/// The sign carries direction for aggregate results; stored records always
/// keep amounts positive and derive direction from the transaction kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    pub fn centavos(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(&self) -> Amount {
        Amount(self.0.abs())
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_amount(*self, &Locale::default()))
    }
}

// The store schema carries amounts as decimal numbers of currency units.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Ok(Amount((units * 100.0).round() as i64))
    }
}

/// Formatting preferences for rendering amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Locale {
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            symbol: "R$".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

/// Parses user-typed currency text using the fixed convention of a comma
/// fractional separator and dot grouping. Empty or non-numeric input yields
/// zero; this leniency belongs to the input-masking boundary only, the
/// mutation guards still reject non-positive amounts.
pub fn parse_amount(text: &str) -> Amount {
    let cleaned = text
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-')
        .replace('.', "")
        .replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Amount((value * 100.0).round() as i64),
        _ => Amount::ZERO,
    }
}

/// Renders an amount with exactly two fractional digits, grouped thousands,
/// and the locale's currency symbol.
pub fn format_amount(amount: Amount, locale: &Locale) -> String {
    let centavos = amount.centavos().abs();
    let mut integral = group_digits(&(centavos / 100).to_string(), locale.grouping_separator);
    integral.push(locale.decimal_separator);
    integral.push_str(&format!("{:02}", centavos % 100));
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{} {}", sign, locale.symbol, integral)
}

/// Like [`format_amount`] but with an explicit leading `+` on positive values,
/// for movement figures where direction matters.
pub fn format_signed(amount: Amount, locale: &Locale) -> String {
    if amount.is_positive() {
        format!("+{}", format_amount(amount, locale))
    } else {
        format_amount(amount, locale)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_localized_text() {
        assert_eq!(parse_amount("1.234,56"), Amount::from_centavos(123_456));
        assert_eq!(parse_amount("0,05"), Amount::from_centavos(5));
        assert_eq!(parse_amount("100"), Amount::from_centavos(10_000));
        assert_eq!(parse_amount("R$ 12,30"), Amount::from_centavos(1_230));
    }

    #[test]
    fn lenient_parse_yields_zero() {
        assert_eq!(parse_amount(""), Amount::ZERO);
        assert_eq!(parse_amount("abc"), Amount::ZERO);
        assert_eq!(parse_amount("   "), Amount::ZERO);
    }

    #[test]
    fn formats_with_symbol_and_grouping() {
        let locale = Locale::default();
        assert_eq!(
            format_amount(Amount::from_centavos(123_456), &locale),
            "R$ 1.234,56"
        );
        assert_eq!(format_amount(Amount::from_centavos(5), &locale), "R$ 0,05");
        assert_eq!(
            format_amount(Amount::from_centavos(-3_300), &locale),
            "-R$ 33,00"
        );
    }

    #[test]
    fn signed_rendering_marks_direction() {
        let locale = Locale::default();
        assert_eq!(
            format_signed(Amount::from_centavos(7_000), &locale),
            "+R$ 70,00"
        );
        assert_eq!(
            format_signed(Amount::from_centavos(-7_000), &locale),
            "-R$ 70,00"
        );
        assert_eq!(format_signed(Amount::ZERO, &locale), "R$ 0,00");
    }

    #[test]
    fn wire_format_is_a_decimal_number() {
        let json = serde_json::to_string(&Amount::from_centavos(3_334)).unwrap();
        assert_eq!(json, "33.34");
        let back: Amount = serde_json::from_str("33.34").unwrap();
        assert_eq!(back, Amount::from_centavos(3_334));
        let whole: Amount = serde_json::from_str("1200").unwrap();
        assert_eq!(whole, Amount::from_centavos(120_000));
    }

    #[test]
    fn amounts_sum_exactly() {
        let parts = [
            Amount::from_centavos(3_334),
            Amount::from_centavos(3_333),
            Amount::from_centavos(3_333),
        ];
        let total: Amount = parts.iter().copied().sum();
        assert_eq!(total, Amount::from_centavos(10_000));
    }
}
