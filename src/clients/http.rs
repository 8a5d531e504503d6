use std::time::Duration;

use reqwest::header::{REFERER, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::{Error, Result};

use super::identity::UserAgentPool;

pub struct HttpClient {
    client: Client,
    agents: UserAgentPool,
    referer: String,
}

impl HttpClient {
    pub fn new(site: &SiteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            agents: UserAgentPool::new(site.user_agents.clone()),
            referer: site.referer.clone(),
        })
    }

    pub async fn get(&self, url: &str) -> Result<Response> {
        let user_agent = {
            let mut rng = rand::rng();
            self.agents.pick(&mut rng).to_string()
        };

        debug!(url, user_agent, "Sending GET request");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .header(REFERER, &self.referer)
            .send()
            .await?;

        debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimit),
            StatusCode::FORBIDDEN => Err(Error::Forbidden),
            status if !status.is_success() => Err(Error::Status(status)),
            _ => Ok(response),
        }
    }

    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        Ok(response.text().await?)
    }
}
