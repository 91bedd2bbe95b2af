//! Running totals of the sales entered during the current shift.
//!
//! The list is a best-effort mirror kept in local storage under `turnSales`.
//! It is never authoritative: it can drift from the server (cleared storage,
//! other tabs, failed requests) and it never gates a server write.

use crate::shared::storage::{KeyValueStore, SHIFT_SALES_KEY};
use contracts::shared::serde_helpers::{amount, null_as_false};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSale {
    pub id: i64,
    #[serde(default, deserialize_with = "amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_false")]
    pub paid: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShiftTotals {
    pub total: f64,
    pub count: usize,
    pub paid: f64,
    pub unpaid: f64,
}

pub struct ShiftCache<S: KeyValueStore> {
    store: S,
    sales: Vec<ShiftSale>,
}

fn usable(amount: f64) -> Option<f64> {
    if amount.is_finite() && amount != 0.0 {
        Some(amount)
    } else {
        None
    }
}

impl<S: KeyValueStore> ShiftCache<S> {
    /// Read the stored list; unreadable contents start an empty shift
    pub fn load(store: S) -> Self {
        let sales = match store.get(SHIFT_SALES_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable {}: {}", SHIFT_SALES_KEY, e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        Self { store, sales }
    }

    pub fn sales(&self) -> &[ShiftSale] {
        &self.sales
    }

    /// Record a newly created sale
    pub fn add(&mut self, id: i64, amount: f64, paid: bool) {
        self.sales.push(ShiftSale {
            id,
            amount: usable(amount).unwrap_or(0.0),
            paid,
        });
        self.persist();
    }

    /// Patch an edited sale, or add it when this shift has not seen it.
    /// A zero or unparseable amount keeps the previous one.
    pub fn upsert(&mut self, id: i64, amount: f64, paid: bool) {
        match self.sales.iter_mut().find(|s| s.id == id) {
            Some(existing) => {
                existing.amount = usable(amount).unwrap_or(existing.amount);
                existing.paid = paid;
                self.persist();
            }
            None => self.add(id, amount, paid),
        }
    }

    pub fn remove(&mut self, id: i64) {
        let before = self.sales.len();
        self.sales.retain(|s| s.id != id);
        if self.sales.len() != before {
            self.persist();
        }
    }

    /// Start a new shift
    pub fn reset(&mut self) {
        self.sales.clear();
        self.store.remove(SHIFT_SALES_KEY);
    }

    pub fn totals(&self) -> ShiftTotals {
        self.sales.iter().fold(ShiftTotals::default(), |mut t, s| {
            t.total += s.amount;
            t.count += 1;
            if s.paid {
                t.paid += s.amount;
            } else {
                t.unpaid += s.amount;
            }
            t
        })
    }

    fn persist(&self) {
        match serde_json::to_string(&self.sales) {
            Ok(raw) => self.store.set(SHIFT_SALES_KEY, &raw),
            Err(e) => log::error!("could not serialize shift sales: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_create_then_edit_updates_single_entry() {
        let store = MemoryStorage::default();
        let mut cache = ShiftCache::load(store.clone());
        cache.add(10, 1500.0, false);
        cache.upsert(10, 2500.0, true);

        assert_eq!(cache.sales().len(), 1);
        let totals = cache.totals();
        assert_eq!(totals.total, 2500.0);
        assert_eq!(totals.count, 1);
        assert_eq!(totals.paid, 2500.0);
        assert_eq!(totals.unpaid, 0.0);

        // persisted for the next page load
        let reloaded = ShiftCache::load(store);
        assert_eq!(reloaded.sales(), cache.sales());
    }

    #[test]
    fn test_edit_with_zero_amount_keeps_previous() {
        let mut cache = ShiftCache::load(MemoryStorage::default());
        cache.add(1, 800.0, true);
        cache.upsert(1, 0.0, false);
        cache.upsert(1, f64::NAN, false);
        assert_eq!(cache.sales()[0].amount, 800.0);
        assert!(!cache.sales()[0].paid);
    }

    #[test]
    fn test_upsert_unknown_sale_adds_it() {
        let mut cache = ShiftCache::load(MemoryStorage::default());
        cache.upsert(4, 300.0, false);
        assert_eq!(cache.totals().unpaid, 300.0);
    }

    #[test]
    fn test_remove_and_reset() {
        let store = MemoryStorage::default();
        let mut cache = ShiftCache::load(store.clone());
        cache.add(1, 100.0, true);
        cache.add(2, 200.0, false);

        cache.remove(1);
        assert_eq!(cache.totals().total, 200.0);
        cache.remove(99);
        assert_eq!(cache.totals().count, 1);

        cache.reset();
        assert_eq!(cache.totals(), ShiftTotals::default());
        assert_eq!(store.get(SHIFT_SALES_KEY), None);
    }

    #[test]
    fn test_legacy_and_corrupt_storage() {
        let store = MemoryStorage::default();
        store.set(SHIFT_SALES_KEY, r#"[{"id":1,"amount":"1500","paid":null}]"#);
        let cache = ShiftCache::load(store.clone());
        assert_eq!(cache.totals().unpaid, 1500.0);

        store.set(SHIFT_SALES_KEY, "not json");
        assert!(ShiftCache::load(store).sales().is_empty());
    }
}
