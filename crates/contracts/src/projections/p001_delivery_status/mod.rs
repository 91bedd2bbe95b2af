pub mod channel;
pub mod dto;

pub use channel::{Age, DeliveryChannel};
pub use dto::StatusBuckets;
