pub mod errors;
pub mod db;
pub mod app_data;
pub mod default_document;

pub use default_document::default_document;
