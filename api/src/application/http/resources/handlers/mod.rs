pub mod get_resources;
pub mod mark_resource_downloaded;
