pub mod state;
pub mod view;

pub use state::SaleFields;
pub use view::SaleFieldsView;
