pub mod autocomplete;
pub mod customer_form;

pub use autocomplete::CustomerAutocomplete;
pub use customer_form::CustomerFormModal;
