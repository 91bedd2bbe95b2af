//! Browser local storage behind a small trait so page state can be tested natively

use web_sys::window;

/// Shift sales mirror
pub const SHIFT_SALES_KEY: &str = "turnSales";
/// Last sales channel picked in the entry form
pub const LAST_CHANNEL_KEY: &str = "lastSalesChannel";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; silently does nothing when storage is unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::KeyValueStore;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Shared in-memory store; clones see the same entries
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }
}

/// Remembered sales channel, if it is still one the form offers
pub fn last_channel<S: KeyValueStore>(store: &S) -> Option<String> {
    store
        .get(LAST_CHANNEL_KEY)
        .and_then(|v| contracts::enums::known_channel(&v))
        .map(str::to_string)
}

pub fn remember_channel<S: KeyValueStore>(store: &S, channel: &str) {
    store.set(LAST_CHANNEL_KEY, channel);
}
