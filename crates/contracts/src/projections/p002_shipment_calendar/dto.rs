use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /sales/shipments/calendar`: a map from
/// `YYYY-MM-DD` to the number of shipments scheduled that day.
/// Days with no shipments are usually absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarCounts(pub BTreeMap<String, u32>);

impl CalendarCounts {
    pub fn count_on(&self, date: NaiveDate) -> u32 {
        self.0
            .get(&date.format("%Y-%m-%d").to_string())
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_counts_from_server_map() {
        let counts: CalendarCounts =
            serde_json::from_str(r#"{"2024-06-10": 4, "2024-06-12": 11}"#).unwrap();
        assert_eq!(counts.count_on(d(10)), 4);
        assert_eq!(counts.count_on(d(11)), 0);
        assert_eq!(counts.count_on(d(12)), 11);
    }
}
