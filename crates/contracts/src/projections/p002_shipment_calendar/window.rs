use chrono::{Duration, NaiveDate};

/// Which days the calendar strip covers relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarWindow {
    /// Today and the next 14 days
    #[default]
    Forward,
    /// Five days back through nine days ahead
    Centered,
}

impl CalendarWindow {
    pub fn days(&self, today: NaiveDate) -> Vec<NaiveDate> {
        let (back, ahead) = match self {
            CalendarWindow::Forward => (0, 14),
            CalendarWindow::Centered => (5, 9),
        };
        (-back..=ahead)
            .map(|offset| today + Duration::days(offset))
            .collect()
    }

    /// First and last day shown
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let days = self.days(today);
        let first = days.first().copied().unwrap_or(today);
        let last = days.last().copied().unwrap_or(today);
        (first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_window() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let days = CalendarWindow::Forward.days(today);
        assert_eq!(days.len(), 15);
        assert_eq!(days[0], today);
        assert_eq!(days[14], NaiveDate::from_ymd_opt(2025, 1, 8).unwrap());
    }

    #[test]
    fn test_centered_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let (start, end) = CalendarWindow::Centered.bounds(today);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(CalendarWindow::Centered.days(today).len(), 15);
    }
}
