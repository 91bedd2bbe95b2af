pub mod api_utils;
pub mod charts;
pub mod components;
pub mod dialogs;
pub mod download;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod request_seq;
pub mod storage;
pub mod toast;
