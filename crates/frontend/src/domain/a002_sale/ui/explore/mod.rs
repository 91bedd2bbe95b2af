pub mod edit_modal;
pub mod page;
pub mod state;

pub use page::SalesExplorerPage;
