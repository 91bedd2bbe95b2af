use crate::shared::request_seq::RequestSeq;
use contracts::domain::a001_customer::Customer;

/// Suggestions shown under the input
pub const SUGGESTION_LIMIT: usize = 5;
/// Quiet time after the last keystroke before searching
pub const DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Debug, Default)]
pub struct AutocompleteState {
    pub suggestions: Vec<Customer>,
    /// Query the current suggestions answer, used for highlighting
    pub results_for: String,
    pub highlighted: Option<usize>,
    pub seq: RequestSeq,
}

impl AutocompleteState {
    /// New input text. Pending searches are invalidated; returns the query to
    /// search for once the debounce elapses, or `None` when the input is blank.
    pub fn input(&mut self, text: &str) -> Option<String> {
        self.seq.issue();
        self.highlighted = None;
        let query = text.trim();
        if query.is_empty() {
            self.suggestions.clear();
            self.results_for.clear();
            None
        } else {
            Some(query.to_string())
        }
    }

    pub fn begin_search(&mut self) -> u64 {
        self.seq.issue()
    }

    /// Apply search results unless a newer input or search superseded them
    pub fn apply_results(&mut self, token: u64, query: &str, mut results: Vec<Customer>) -> bool {
        if !self.seq.is_current(token) {
            return false;
        }
        results.truncate(SUGGESTION_LIMIT);
        self.suggestions = results;
        self.results_for = query.to_string();
        self.highlighted = None;
        true
    }

    pub fn move_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    pub fn move_up(&mut self) {
        if let Some(i) = self.highlighted {
            if i > 0 {
                self.highlighted = Some(i - 1);
            }
        }
    }

    /// Enter key: the highlighted suggestion, if any
    pub fn confirm(&mut self) -> Option<Customer> {
        let index = self.highlighted?;
        self.pick(index)
    }

    pub fn pick(&mut self, index: usize) -> Option<Customer> {
        let customer = self.suggestions.get(index).cloned()?;
        self.close();
        Some(customer)
    }

    pub fn close(&mut self) {
        self.seq.issue();
        self.suggestions.clear();
        self.highlighted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: i64, name: &str) -> Customer {
        Customer {
            id,
            first_name: name.to_string(),
            last_name: "Pérez".to_string(),
            address: "Mitre 100".to_string(),
            city: "Quilmes".to_string(),
            phone: String::new(),
            description: None,
            created_at: None,
        }
    }

    fn many(n: i64) -> Vec<Customer> {
        (1..=n).map(|i| customer(i, &format!("C{}", i))).collect()
    }

    #[test]
    fn test_results_capped_and_stale_dropped() {
        let mut state = AutocompleteState::default();
        assert_eq!(state.input(" an ").as_deref(), Some("an"));
        let slow = state.begin_search();

        state.input("ana");
        let fast = state.begin_search();
        assert!(state.apply_results(fast, "ana", many(8)));
        assert_eq!(state.suggestions.len(), SUGGESTION_LIMIT);

        assert!(!state.apply_results(slow, "an", many(2)));
        assert_eq!(state.results_for, "ana");
    }

    #[test]
    fn test_blank_input_clears() {
        let mut state = AutocompleteState::default();
        state.input("ana");
        let token = state.begin_search();
        state.apply_results(token, "ana", many(3));

        assert_eq!(state.input("   "), None);
        assert!(state.suggestions.is_empty());
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut state = AutocompleteState::default();
        state.input("c");
        let token = state.begin_search();
        state.apply_results(token, "c", many(3));

        assert_eq!(state.confirm(), None);
        state.move_up();
        assert_eq!(state.highlighted, None);

        state.move_down();
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.highlighted, Some(2));

        state.move_up();
        let picked = state.confirm().map(|c| c.id);
        assert_eq!(picked, Some(2));
        assert!(state.suggestions.is_empty());
    }
}
