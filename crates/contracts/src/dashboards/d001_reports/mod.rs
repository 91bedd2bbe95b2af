pub mod dto;
pub mod metrics;

pub use dto::*;
pub use metrics::{average, format_change_percent, is_positive_change, share_percent};
