pub mod entry;
pub mod explore;
pub mod fields;
