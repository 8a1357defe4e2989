pub mod api;
pub mod cache;
pub mod editor;
pub mod errors;
pub mod store;
