pub mod modal;
pub mod pagination_controls;
pub mod stat_card;

pub use modal::Modal;
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
