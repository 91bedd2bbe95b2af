//! Display formatting in the es-AR locale used by the back office

use chrono::NaiveDate;
use contracts::shared::timestamp::parse_timestamp;

/// Thousands separator of the es-AR locale
const GROUP_SEPARATOR: char = '.';

/// Money as ARS with thousands grouping and no decimals: `$ 1.234.567`, `-$ 1`.
/// Non-finite values render as zero.
pub fn format_money(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}$\u{a0}{}", sign, group_thousands(rounded.unsigned_abs()))
}

/// Plain integer grouping, for axis ticks and counters: `12.500`
pub fn format_integer(value: f64) -> String {
    let value = if value.is_finite() { value.round() as i64 } else { 0 };
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(value.unsigned_abs()))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// `dd/mm/yyyy` from a server timestamp; empty for missing or unreadable values
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_timestamp)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Calendar tile label, `d/m/yyyy` like the browser's es-AR short date
pub fn format_day(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Chart axis label, `dd/mm`
pub fn format_day_month(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%d/%m").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// `YYYY-MM-DD`, the value format of `<input type="date">`
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today in the browser's local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_grouping() {
        assert_eq!(format_money(0.0), "$\u{a0}0");
        assert_eq!(format_money(999.0), "$\u{a0}999");
        assert_eq!(format_money(1000.0), "$\u{a0}1.000");
        assert_eq!(format_money(1234567.0), "$\u{a0}1.234.567");
        assert_eq!(format_money(1500.6), "$\u{a0}1.501");
    }

    #[test]
    fn test_money_negative_and_invalid() {
        assert_eq!(format_money(-1.0), "-$\u{a0}1");
        assert_eq!(format_money(-25000.0), "-$\u{a0}25.000");
        assert_eq!(format_money(f64::NAN), "$\u{a0}0");
        assert_eq!(format_money(f64::INFINITY), "$\u{a0}0");
    }

    #[test]
    fn test_integer_grouping() {
        assert_eq!(format_integer(12500.0), "12.500");
        assert_eq!(format_integer(-100.0), "-100");
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_date(Some("2024-05-01T10:00:00.123456")), "01/05/2024");
        assert_eq!(format_date(Some("garbage")), "");
        assert_eq!(format_date(None), "");

        let d = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_day(d), "5/1/2025");
        assert_eq!(iso_date(d), "2025-01-05");
        assert_eq!(format_day_month("2024-06-09"), "09/06");
    }
}
