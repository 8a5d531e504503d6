pub mod clients;
pub mod config;
pub mod error;
pub mod extractors;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use clients::{HttpClient, UserAgentPool};
pub use config::Settings;
pub use error::{Error, Result};
pub use models::Product;
pub use services::{CrawlReport, Crawler};
pub use storage::{ErrorLog, JsonWriter};
