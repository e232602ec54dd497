pub mod get_entries;
pub mod get_entry;
pub mod upsert_entry;
