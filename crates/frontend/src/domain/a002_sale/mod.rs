pub mod api;
pub mod shift_cache;
pub mod ui;
