pub mod global_context;
pub mod navbar;
pub mod shell;

pub use global_context::{AppGlobalContext, Page};
