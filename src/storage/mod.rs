pub mod error_log;
pub mod json;

pub use error_log::ErrorLog;
pub use json::JsonWriter;
