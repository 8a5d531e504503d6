use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use apteka_etl::Settings;
use apteka_etl::services::Crawler;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("apteka_etl=info")),
        )
        .with_target(false)
        .init();

    let settings = Settings::new()?;
    let crawler = Crawler::new(settings)?;

    let start = std::time::Instant::now();
    let report = crawler.run().await?;

    info!(
        products = report.products,
        failures = report.failures,
        category_pages = report.category_pages,
        elapsed_secs = format!("{:.2}", start.elapsed().as_secs_f64()),
        output = %report.output_path.display(),
        "Extraction summary"
    );

    Ok(())
}
