pub mod json_file_data_store;

pub use json_file_data_store::JsonFileDataStore;
