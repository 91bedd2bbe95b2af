//! Calendar strip and day detail of the shipment planner.
//!
//! Counts and day lists are only replaced by server responses; a drop or an
//! inline edit changes nothing locally until the write is confirmed and the
//! calendar reloaded. Each of the two loads carries its own request token.

use crate::shared::request_seq::RequestSeq;
use chrono::NaiveDate;
use contracts::domain::a002_sale::{Sale, ShipmentUpdate};
use contracts::projections::p002_shipment_calendar::{CalendarCounts, CalendarWindow, DayTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTile {
    pub date: NaiveDate,
    pub count: u32,
    pub tier: DayTier,
    pub is_today: bool,
    /// Before today; still clickable and droppable
    pub is_past: bool,
    pub is_active: bool,
}

impl DayTile {
    pub fn css_class(&self) -> String {
        let mut class = format!("calendar-day {}", self.tier.css_class());
        if self.is_past {
            class.push_str(" calendar-day--past");
        }
        if self.is_active {
            class.push_str(" active");
        }
        class
    }
}

/// Inline edit of one shipment card
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentDraft {
    pub sale_id: i64,
    /// Raw `YYYY-MM-DD` value of the date input
    pub date: String,
    pub notes: String,
}

impl ShipmentDraft {
    pub fn from_sale(sale: &Sale, day: NaiveDate) -> Self {
        Self {
            sale_id: sale.id,
            date: sale.shipping_date.unwrap_or(day).format("%Y-%m-%d").to_string(),
            notes: sale.notes.clone(),
        }
    }

    pub fn to_update(&self) -> Result<ShipmentUpdate, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Seleccione fecha de envío".to_string())?;
        Ok(ShipmentUpdate::edit(date, self.notes.clone()))
    }
}

/// Sale id carried by a dragged card (`text/plain` payload)
pub fn parse_dragged_id(payload: &str) -> Option<i64> {
    payload.trim().parse().ok()
}

#[derive(Debug, Clone)]
pub struct CalendarState {
    pub window: CalendarWindow,
    pub today: NaiveDate,
    pub counts: CalendarCounts,
    pub active: Option<NaiveDate>,
    /// `None` until the active day's list arrives
    pub shipments: Option<Vec<Sale>>,
    pub draft: Option<ShipmentDraft>,
    counts_seq: RequestSeq,
    day_seq: RequestSeq,
}

impl CalendarState {
    pub fn new(window: CalendarWindow, today: NaiveDate) -> Self {
        Self {
            window,
            today,
            counts: CalendarCounts::default(),
            active: None,
            shipments: None,
            draft: None,
            counts_seq: RequestSeq::default(),
            day_seq: RequestSeq::default(),
        }
    }

    pub fn tiles(&self) -> Vec<DayTile> {
        self.window
            .days(self.today)
            .into_iter()
            .map(|date| {
                let count = self.counts.count_on(date);
                DayTile {
                    date,
                    count,
                    tier: DayTier::from_count(count),
                    is_today: date == self.today,
                    is_past: date < self.today,
                    is_active: self.active == Some(date),
                }
            })
            .collect()
    }

    pub fn begin_counts(&mut self) -> u64 {
        self.counts_seq.issue()
    }

    /// Returns false for a superseded response
    pub fn apply_counts(&mut self, token: u64, counts: CalendarCounts) -> bool {
        if !self.counts_seq.is_current(token) {
            return false;
        }
        self.counts = counts;
        true
    }

    /// Activate `date` and start loading its shipments
    pub fn select_day(&mut self, date: NaiveDate) -> u64 {
        if self.active != Some(date) {
            self.shipments = None;
            self.draft = None;
        }
        self.active = Some(date);
        self.day_seq.issue()
    }

    /// Returns false for a superseded response
    pub fn apply_day(&mut self, token: u64, sales: Vec<Sale>) -> bool {
        if !self.day_seq.is_current(token) {
            return false;
        }
        if let Some(draft) = &self.draft {
            if !sales.iter().any(|s| s.id == draft.sale_id) {
                self.draft = None;
            }
        }
        self.shipments = Some(sales);
        true
    }

    /// Day to show after a successful drop: always today, not the target day
    pub fn after_reschedule(&mut self) -> NaiveDate {
        self.draft = None;
        self.today
    }

    pub fn start_edit(&mut self, sale_id: i64) {
        let Some(day) = self.active else {
            return;
        };
        self.draft = self
            .shipments
            .as_ref()
            .and_then(|list| list.iter().find(|s| s.id == sale_id))
            .map(|sale| ShipmentDraft::from_sale(sale, day));
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    pub fn is_editing(&self, sale_id: i64) -> bool {
        self.draft.as_ref().map(|d| d.sale_id) == Some(sale_id)
    }

    /// Print-all is offered only for a loaded day with shipments
    pub fn shows_print(&self) -> bool {
        self.active.is_some() && self.shipments.as_ref().is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn counts(json: &str) -> CalendarCounts {
        serde_json::from_str(json).unwrap()
    }

    fn shipment(id: i64) -> Sale {
        serde_json::from_value(serde_json::json!({
            "id": id, "amount": 100, "shipping_date": "2024-06-12", "notes": "timbre"
        }))
        .unwrap()
    }

    #[test]
    fn test_tiles_mark_today_and_past() {
        let mut state = CalendarState::new(CalendarWindow::Centered, d(10));
        let token = state.begin_counts();
        state.apply_counts(token, counts(r#"{"2024-06-05": 10, "2024-06-10": 14}"#));
        let tiles = state.tiles();

        assert_eq!(tiles.len(), 15);
        assert_eq!(tiles[0].date, d(5));
        assert!(tiles[0].is_past);
        assert_eq!(tiles[0].tier, DayTier::Medium);
        assert!(tiles[5].is_today);
        assert!(!tiles[5].is_past);
        assert_eq!(tiles[5].tier, DayTier::High);
        assert_eq!(tiles[6].count, 0);
        assert_eq!(tiles[6].tier, DayTier::Low);
        assert!(tiles[0].css_class().contains("calendar-day--past"));
    }

    #[test]
    fn test_stale_loads_dropped() {
        let mut state = CalendarState::new(CalendarWindow::Forward, d(10));
        let old = state.begin_counts();
        let new = state.begin_counts();
        assert!(state.apply_counts(new, counts(r#"{"2024-06-11": 2}"#)));
        assert!(!state.apply_counts(old, counts(r#"{"2024-06-11": 9}"#)));
        assert_eq!(state.counts.count_on(d(11)), 2);

        let first = state.select_day(d(11));
        let second = state.select_day(d(12));
        assert!(!state.apply_day(first, vec![shipment(1)]));
        assert!(state.shipments.is_none());
        assert!(state.apply_day(second, vec![shipment(2)]));
        assert_eq!(state.active, Some(d(12)));
        assert!(state.tiles()[2].is_active);
    }

    #[test]
    fn test_drop_snaps_back_to_today() {
        let mut state = CalendarState::new(CalendarWindow::Forward, d(10));
        let token = state.begin_counts();
        state.apply_counts(token, counts(r#"{"2024-06-12": 10, "2024-06-14": 13}"#));
        let day = state.select_day(d(12));
        state.apply_day(day, vec![shipment(7)]);

        let tile = |state: &CalendarState, date: NaiveDate| {
            state.tiles().into_iter().find(|t| t.date == date).unwrap()
        };
        assert_eq!((tile(&state, d(12)).count, tile(&state, d(12)).tier), (10, DayTier::Medium));
        assert_eq!((tile(&state, d(14)).count, tile(&state, d(14)).tier), (13, DayTier::Medium));

        // reload after sale 7 was moved from the 12th to the 14th
        let next = state.after_reschedule();
        let token = state.begin_counts();
        state.apply_counts(token, counts(r#"{"2024-06-12": 9, "2024-06-14": 14}"#));
        state.select_day(next);

        assert_eq!(next, d(10));
        assert_eq!(state.active, Some(d(10)));
        assert!(state.shipments.is_none());
        assert_eq!((tile(&state, d(12)).count, tile(&state, d(12)).tier), (9, DayTier::Low));
        assert_eq!((tile(&state, d(14)).count, tile(&state, d(14)).tier), (14, DayTier::High));
        assert!(tile(&state, d(10)).is_active);
        assert!(!tile(&state, d(14)).is_active);
    }

    #[test]
    fn test_inline_edit_draft() {
        let mut state = CalendarState::new(CalendarWindow::Forward, d(10));
        let day = state.select_day(d(12));
        state.apply_day(day, vec![shipment(3), shipment(4)]);

        state.start_edit(4);
        assert!(state.is_editing(4));
        assert!(!state.is_editing(3));
        let update = state.draft.as_ref().unwrap().to_update().unwrap();
        assert_eq!(update, ShipmentUpdate::edit(d(12), "timbre".into()));

        // reloading the day without the edited card drops the draft
        let again = state.select_day(d(12));
        state.apply_day(again, vec![shipment(3)]);
        assert!(state.draft.is_none());

        state.draft = Some(ShipmentDraft {
            sale_id: 3,
            date: String::new(),
            notes: String::new(),
        });
        assert!(state.draft.as_ref().unwrap().to_update().is_err());
    }

    #[test]
    fn test_print_visibility() {
        let mut state = CalendarState::new(CalendarWindow::Forward, d(10));
        assert!(!state.shows_print());
        let day = state.select_day(d(10));
        state.apply_day(day, Vec::new());
        assert!(!state.shows_print());
        let day = state.select_day(d(10));
        state.apply_day(day, vec![shipment(1)]);
        assert!(state.shows_print());
        assert_eq!(parse_dragged_id(" 15 "), Some(15));
        assert_eq!(parse_dragged_id("x"), None);
    }
}
