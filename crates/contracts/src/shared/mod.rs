pub mod api_message;
pub mod serde_helpers;
pub mod timestamp;

pub use api_message::ApiMessage;
