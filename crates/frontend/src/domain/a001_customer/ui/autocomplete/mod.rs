pub mod state;
pub mod view;

pub use state::AutocompleteState;
pub use view::CustomerAutocomplete;
