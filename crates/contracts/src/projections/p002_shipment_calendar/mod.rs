pub mod dto;
pub mod tier;
pub mod window;

pub use dto::CalendarCounts;
pub use tier::DayTier;
pub use window::CalendarWindow;
