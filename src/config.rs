use config::{Config, ConfigError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub categories: Vec<String>,
    pub site: SiteConfig,
    pub city: CityConfig,
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub base_url: String,
    pub referer: String,
    pub user_agents: Vec<String>,
}

// Mirrors the request metadata the site expects for a fixed city context.
#[derive(Debug, Deserialize, Clone)]
pub struct CityConfig {
    pub id: String,
    pub name: String,
    pub region: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CrawlerConfig {
    pub concurrent_requests: usize,
    pub download_delay_ms: u64,
    pub max_retries: u32,
    pub retry_base_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub dir: String,
    pub error_log: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name("config/default.yaml"))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let config = builder.build()?;

        let settings: Settings = config.try_deserialize()?;

        debug!(
            categories = settings.categories.len(),
            user_agents = settings.site.user_agents.len(),
            "Loaded settings"
        );

        Ok(settings)
    }

    pub fn category_url(&self, category: &str) -> String {
        format!("{}/catalog/{}", self.site.base_url.trim_end_matches('/'), category)
    }
}
