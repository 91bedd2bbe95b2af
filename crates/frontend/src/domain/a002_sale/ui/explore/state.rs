use crate::domain::a002_sale::shift_cache::ShiftCache;
use crate::shared::request_seq::RequestSeq;
use crate::shared::storage::KeyValueStore;
use chrono::NaiveDate;
use contracts::domain::a002_sale::{ExploreFilter, ExplorePage, ExploreQuery, Sale};
use contracts::enums::PaymentMethod;

/// Raw values of the filter inputs. Blank or unreadable values mean "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterInputs {
    pub payment_method: String,
    /// `""`, `"true"` or `"false"`
    pub paid: String,
    pub date_from: String,
    pub date_to: String,
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

impl FilterInputs {
    pub fn to_filter(&self, customer_id: Option<i64>) -> ExploreFilter {
        ExploreFilter {
            customer_id,
            payment_method: PaymentMethod::from_code(self.payment_method.trim()),
            paid: match self.paid.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            date_from: parse_day(&self.date_from),
            date_to: parse_day(&self.date_to),
        }
    }
}

/// Explorer listing: the active filter, the page shown and the in-flight load
#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    pub filter: ExploreFilter,
    pub current_page: u32,
    pub result: Option<ExplorePage>,
    pub is_loading: bool,
    seq: RequestSeq,
}

impl ExplorerState {
    /// New filter, back to page 1
    pub fn apply_filter(&mut self, filter: ExploreFilter) -> (u64, ExploreQuery) {
        self.filter = filter;
        self.request(1)
    }

    /// Another page of the same filter
    pub fn go_to(&mut self, page: u32) -> (u64, ExploreQuery) {
        self.request(page)
    }

    pub fn reload(&mut self) -> (u64, ExploreQuery) {
        self.request(self.current_page)
    }

    fn request(&mut self, page: u32) -> (u64, ExploreQuery) {
        self.current_page = page.max(1);
        self.is_loading = true;
        (self.seq.issue(), self.filter.query(self.current_page))
    }

    /// Returns false (and changes nothing) for a superseded response
    pub fn apply_page(&mut self, token: u64, page: ExplorePage) -> bool {
        if !self.seq.is_current(token) {
            return false;
        }
        self.current_page = page.page.max(1);
        self.result = Some(page);
        self.is_loading = false;
        true
    }

    pub fn fail(&mut self, token: u64) {
        if self.seq.is_current(token) {
            self.is_loading = false;
        }
    }

    pub fn sales(&self) -> &[Sale] {
        self.result.as_ref().map(|r| r.sales.as_slice()).unwrap_or(&[])
    }

    pub fn total_pages(&self) -> u32 {
        self.result.as_ref().map(|r| r.total_pages.max(1)).unwrap_or(1)
    }

    pub fn total_sales(&self) -> u64 {
        self.result.as_ref().map(|r| r.total_sales).unwrap_or(0)
    }

    /// Mark the row paid in place after the server accepted it
    pub fn mark_paid_local(&mut self, id: i64) -> bool {
        let Some(sale) = self
            .result
            .as_mut()
            .and_then(|r| r.sales.iter_mut().find(|s| s.id == id))
        else {
            return false;
        };
        sale.paid = true;
        true
    }

    /// Drop a deleted row until the next load
    pub fn remove_local(&mut self, id: i64) {
        if let Some(result) = self.result.as_mut() {
            let before = result.sales.len();
            result.sales.retain(|s| s.id != id);
            if result.sales.len() < before {
                result.total_sales = result.total_sales.saturating_sub(1);
            }
        }
    }
}

/// A confirmed delete leaves both the visible page and the shift counter
pub fn delete_applied<S: KeyValueStore>(state: &mut ExplorerState, cache: &mut ShiftCache<S>, id: i64) {
    cache.remove(id);
    state.remove_local(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    fn page(n: u32, ids: &[i64]) -> ExplorePage {
        serde_json::from_value(serde_json::json!({
            "sales": ids.iter().map(|id| serde_json::json!({"id": id, "amount": 100, "paid": false})).collect::<Vec<_>>(),
            "page": n, "per_page": 20, "total_sales": 45, "total_pages": 3
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_inputs() {
        let inputs = FilterInputs {
            payment_method: "card".into(),
            paid: "false".into(),
            date_from: "2024-01-01".into(),
            date_to: "garbage".into(),
        };
        let f = inputs.to_filter(Some(3));
        assert_eq!(f.customer_id, Some(3));
        assert_eq!(f.payment_method, Some(PaymentMethod::Card));
        assert_eq!(f.paid, Some(false));
        assert_eq!(f.date_from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(f.date_to, None);
        assert!(FilterInputs::default().to_filter(None).is_empty());
    }

    #[test]
    fn test_paging_keeps_filter() {
        let mut state = ExplorerState::default();
        let filter = ExploreFilter {
            paid: Some(false),
            ..Default::default()
        };
        let (_, q) = state.apply_filter(filter.clone());
        assert_eq!(q.page, 1);

        let (_, q) = state.go_to(3);
        assert_eq!(q.page, 3);
        assert_eq!(q.paid, Some(false));

        let (_, q) = state.reload();
        assert_eq!(q.page, 3);
        assert_eq!(state.filter, filter);

        let (_, q) = state.apply_filter(ExploreFilter::default());
        assert_eq!(q.page, 1);
        assert_eq!(q.paid, None);
    }

    #[test]
    fn test_stale_page_dropped() {
        let mut state = ExplorerState::default();
        let (slow, _) = state.go_to(2);
        let (fast, _) = state.go_to(3);

        assert!(state.apply_page(fast, page(3, &[5, 6])));
        assert!(!state.apply_page(slow, page(2, &[1, 2])));
        assert_eq!(state.current_page, 3);
        assert_eq!(state.sales().len(), 2);
        assert!(!state.is_loading);

        state.fail(slow);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_local_row_updates() {
        let mut state = ExplorerState::default();
        let (token, _) = state.apply_filter(ExploreFilter::default());
        state.apply_page(token, page(1, &[1, 2, 3]));

        assert!(state.mark_paid_local(2));
        assert!(state.sales().iter().find(|s| s.id == 2).unwrap().paid);
        assert!(!state.mark_paid_local(99));

        state.remove_local(1);
        assert_eq!(state.sales().len(), 2);
        assert_eq!(state.total_sales(), 44);
        state.remove_local(1);
        assert_eq!(state.total_sales(), 44);
    }

    #[test]
    fn test_delete_leaves_table_and_shift_cache() {
        let mut state = ExplorerState::default();
        let (token, _) = state.apply_filter(ExploreFilter::default());
        state.apply_page(token, page(1, &[4, 5, 6]));

        let store = MemoryStorage::default();
        let mut cache = ShiftCache::load(store.clone());
        cache.add(5, 800.0, false);
        cache.add(9, 300.0, true);

        delete_applied(&mut state, &mut cache, 5);

        let ids: Vec<i64> = state.sales().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![4, 6]);
        assert_eq!(state.total_sales(), 44);
        let reloaded = ShiftCache::load(store);
        assert_eq!(reloaded.sales().len(), 1);
        assert_eq!(reloaded.totals().total, 300.0);
    }
}
