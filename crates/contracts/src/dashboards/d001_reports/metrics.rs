//! Derived figures shown next to server totals

/// Signed percentage with one decimal: `+12.5%`, `-3.0%`, `+0.0%`.
/// Non-finite input renders as `+0.0%`.
pub fn format_change_percent(change: f64) -> String {
    let change = if change.is_finite() { change } else { 0.0 };
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, change)
}

/// Whether a change indicator gets the positive style
pub fn is_positive_change(change: f64) -> bool {
    !change.is_finite() || change >= 0.0
}

/// `part` as a percentage of `whole`; 0 when `whole` is 0
pub fn share_percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// `total / count`, 0 for an empty group
pub fn average(total: f64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_percent() {
        assert_eq!(format_change_percent(12.345), "+12.3%");
        assert_eq!(format_change_percent(-3.0), "-3.0%");
        assert_eq!(format_change_percent(0.0), "+0.0%");
        assert_eq!(format_change_percent(f64::NAN), "+0.0%");
        assert!(is_positive_change(0.0));
        assert!(!is_positive_change(-0.1));
    }

    #[test]
    fn test_share_and_average_guard_zero() {
        assert_eq!(share_percent(50.0, 200.0), 25.0);
        assert_eq!(share_percent(50.0, 0.0), 0.0);
        assert_eq!(average(300.0, 3), 100.0);
        assert_eq!(average(300.0, 0), 0.0);
    }
}
