use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, Utc};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};
use url::Url;

use crate::clients::HttpClient;
use crate::config::Settings;
use crate::error::Result;
use crate::extractors::{parse_category, parse_product};
use crate::models::Product;
use crate::storage::{ErrorLog, JsonWriter};
use crate::utils::{retry_with_backoff, sleep_with_jitter};

#[derive(Debug)]
pub struct CrawlReport {
    pub products: usize,
    pub failures: usize,
    pub category_pages: usize,
    pub output_path: PathBuf,
}

// Drives the whole run: category pagination is followed sequentially,
// product pages are fetched as tasks under a shared in-flight limit.
#[derive(Clone)]
pub struct Crawler {
    settings: Arc<Settings>,
    http: Arc<HttpClient>,
    error_log: Arc<ErrorLog>,
    limiter: Arc<Semaphore>,
    base: Url,
}

impl Crawler {
    pub fn new(settings: Settings) -> Result<Self> {
        let http = Arc::new(HttpClient::new(&settings.site)?);
        let error_log = Arc::new(ErrorLog::new(&settings.output.error_log));
        let limiter = Arc::new(Semaphore::new(settings.crawler.concurrent_requests));
        let base = Url::parse(&settings.site.base_url)?;

        Ok(Self {
            settings: Arc::new(settings),
            http,
            error_log,
            limiter,
            base,
        })
    }

    pub async fn run(&self) -> Result<CrawlReport> {
        let started_at = Local::now();

        info!(
            categories = self.settings.categories.len(),
            city = %self.settings.city.name,
            region = %self.settings.city.region,
            "Starting crawl"
        );

        let mut products: Vec<Product> = Vec::new();
        let mut failures = 0usize;
        let mut category_pages = 0usize;

        for category in &self.settings.categories {
            let start_url = Url::parse(&self.settings.category_url(category))?;

            if let Err(e) = self
                .crawl_category(
                    category,
                    start_url,
                    &mut products,
                    &mut failures,
                    &mut category_pages,
                )
                .await
            {
                // A dead category page should not sink the whole run.
                error!(category, error = %e, "Category crawl failed, skipping");
            }
        }

        let writer = JsonWriter::new(&self.settings.output.dir);
        let output_path = writer.write_all(started_at, &products).await?;

        info!(
            products = products.len(),
            failures,
            category_pages,
            output = %output_path.display(),
            "Crawl finished"
        );

        Ok(CrawlReport {
            products: products.len(),
            failures,
            category_pages,
            output_path,
        })
    }

    async fn crawl_category(
        &self,
        category: &str,
        start_url: Url,
        products: &mut Vec<Product>,
        failures: &mut usize,
        category_pages: &mut usize,
    ) -> Result<()> {
        let mut page_url = start_url;
        let mut page_number = 1u32;

        loop {
            let body = self.fetch(page_url.as_str()).await?;
            let page = parse_category(&body, &page_url);
            *category_pages += 1;

            info!(
                category,
                page = page_number,
                products = page.product_links.len(),
                "Parsed category page"
            );

            let mut tasks = JoinSet::new();
            for link in page.product_links {
                let this = self.clone();
                tasks.spawn(async move { this.process_product(link).await });
            }

            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok(Some(product)) => products.push(product),
                    Ok(None) => *failures += 1,
                    Err(e) => {
                        *failures += 1;
                        error!(category, error = %e, "Product task aborted");
                    }
                }
            }

            match page.next_page {
                // Guard against a next link that resolves to the page itself.
                Some(next) if next != page_url => {
                    page_url = next;
                    page_number += 1;
                }
                _ => break,
            }
        }

        Ok(())
    }

    // One product page, one record. Any failure lands in the error log
    // and the crawl moves on.
    async fn process_product(&self, url: Url) -> Option<Product> {
        let result = async {
            let body = self.fetch(url.as_str()).await?;
            parse_product(&body, &url, &self.base, Utc::now().timestamp())
        }
        .await;

        match result {
            Ok(product) => Some(product),
            Err(e) => {
                error!(url = %url, error = %e, "Failed to process product");
                if let Err(log_err) = self.error_log.append(url.as_str(), &e.to_string()).await {
                    warn!(error = %log_err, "Could not append to error log");
                }
                None
            }
        }
    }

    // Every request goes through here: bounded in-flight permits, the
    // fixed inter-request delay, then GET with backoff on failure.
    async fn fetch(&self, url: &str) -> Result<String> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .expect("request limiter closed");

        sleep_with_jitter(self.settings.crawler.download_delay_ms, 0).await;

        retry_with_backoff(
            self.settings.crawler.max_retries,
            self.settings.crawler.retry_base_delay_ms,
            || async { self.http.get_text(url).await },
        )
        .await
    }
}
