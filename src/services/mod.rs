pub mod crawler;

pub use crawler::{CrawlReport, Crawler};
