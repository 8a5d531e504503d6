use apteka_etl::Product;
use apteka_etl::config::{CityConfig, CrawlerConfig, OutputConfig, Settings, SiteConfig};
use apteka_etl::services::Crawler;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REFERER: &str = "https://www.google.com/";

fn settings(base_url: &str, output_dir: &std::path::Path, error_log: &std::path::Path) -> Settings {
    Settings {
        categories: vec!["test-cat".to_string()],
        site: SiteConfig {
            base_url: base_url.to_string(),
            referer: REFERER.to_string(),
            user_agents: vec![
                "ua-one".to_string(),
                "ua-two".to_string(),
                "ua-three".to_string(),
            ],
        },
        city: CityConfig {
            id: "92".to_string(),
            name: "Томск".to_string(),
            region: "Томская область Томск".to_string(),
        },
        crawler: CrawlerConfig {
            concurrent_requests: 2,
            download_delay_ms: 5,
            max_retries: 0,
            retry_base_delay_ms: 1,
        },
        output: OutputConfig {
            dir: output_dir.to_string_lossy().into_owned(),
            error_log: error_log.to_string_lossy().into_owned(),
        },
    }
}

fn card(href: &str) -> String {
    format!(
        r#"<div class="goods-card__name text text_size_default text_weight_medium">
             <a href="{href}">item</a>
           </div>"#
    )
}

fn category_page(cards: &[String], direction_href: Option<&str>) -> String {
    let direction = direction_href
        .map(|href| format!(r#"<a class="ui-pagination__link_direction" href="{href}">→</a>"#))
        .unwrap_or_default();
    format!(
        "<html><body>{}{}</body></html>",
        cards.join("\n"),
        direction
    )
}

fn sale_product_page(title: &str) -> String {
    product_page(
        title,
        r#"<div>
             <div><span>STOP Цена</span></div>
             <div><span>150 ₽</span><span>200 ₽</span></div>
           </div>"#,
        "<span>Добавить в корзину</span><span>STOP Цена</span>",
    )
}

fn regular_product_page(title: &str) -> String {
    product_page(
        title,
        r#"<div>
             <div>stock</div>
             <div><span>1 035 ₽</span></div>
           </div>"#,
        "<span>Добавить в корзину</span>",
    )
}

// On-site marker present but the price row is missing entirely.
fn broken_product_page(title: &str) -> String {
    product_page(title, "<div><div>no price row</div></div>", "<span>Добавить в корзину</span>")
}

fn product_page(title: &str, aside_inner: &str, markers: &str) -> String {
    format!(
        r#"<html><body><div><div><div><div>
        <main>
          <header><h1><span>{title}</span></h1></header>
          <section><div><aside><div>{aside_inner}</div></aside></div></section>
          {markers}
        </main>
        </div></div></div></div></body></html>"#
    )
}

async fn mount_page(server: &MockServer, url_path: &str, body: String, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .and(header("referer", REFERER))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_hits)
        .mount(server)
        .await;
}

// Two category pages: page one links two healthy products and points at
// page two; page two links one broken product and its direction arrow
// points back at page one (`start=0`), which must halt pagination.
async fn mount_site(server: &MockServer, expected_hits: u64) {
    mount_page(
        server,
        "/catalog/test-cat",
        category_page(
            &[card("/catalog/test-cat/bint_101"), card("/catalog/test-cat/vata_102")],
            Some("/catalog/test-cat/page2"),
        ),
        expected_hits,
    )
    .await;

    mount_page(
        server,
        "/catalog/test-cat/page2",
        category_page(&[card("/catalog/test-cat/plastyr_103")], Some("?start=0")),
        expected_hits,
    )
    .await;

    mount_page(server, "/catalog/test-cat/bint_101", sale_product_page("Бинт"), expected_hits).await;
    mount_page(server, "/catalog/test-cat/vata_102", regular_product_page("Вата"), expected_hits).await;
    mount_page(server, "/catalog/test-cat/plastyr_103", broken_product_page("Пластырь"), expected_hits)
        .await;
}

async fn run_crawl(server: &MockServer, dir: &std::path::Path) -> (apteka_etl::CrawlReport, Vec<Product>) {
    let output_dir = dir.join("parsed_data");
    let error_log = dir.join("error_log.txt");
    let crawler = Crawler::new(settings(&server.uri(), &output_dir, &error_log)).unwrap();
    let report = crawler.run().await.unwrap();

    let body = std::fs::read_to_string(&report.output_path).unwrap();
    let products: Vec<Product> = serde_json::from_str(&body).unwrap();
    (report, products)
}

#[tokio::test]
async fn crawl_paginates_extracts_and_isolates_failures() {
    let server = MockServer::start().await;
    mount_site(&server, 1).await;

    let dir = tempfile::tempdir().unwrap();
    let (report, mut products) = run_crawl(&server, dir.path()).await;

    // Every discovered product link was fetched exactly once (mock
    // expectations), pagination stopped at the start=0 sentinel.
    assert_eq!(report.category_pages, 2);
    assert_eq!(report.products, 2);
    assert_eq!(report.failures, 1);

    products.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(products.len(), 2);

    assert_eq!(products[0].id, "101");
    assert_eq!(products[0].title.as_deref(), Some("Бинт"));
    assert_eq!(products[0].current_price, 150.0);
    assert_eq!(products[0].original_price, 200.0);
    assert_eq!(products[0].sale_tag, "Скидка 25%");
    assert!(products[0].in_stock);

    assert_eq!(products[1].id, "102");
    assert_eq!(products[1].current_price, 1035.0);
    assert_eq!(products[1].original_price, 1035.0);
    assert_eq!(products[1].sale_tag, "Нет скидки");

    // The broken product produced no record and exactly one log block.
    let log = std::fs::read_to_string(dir.path().join("error_log.txt")).unwrap();
    assert_eq!(log.matches("Product URL: ").count(), 1);
    assert!(log.contains("/catalog/test-cat/plastyr_103"));
    assert!(log.contains("Error message: Price node missing"));
}

#[tokio::test]
async fn price_extraction_is_deterministic_across_runs() {
    let server = MockServer::start().await;
    mount_site(&server, 2).await;

    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let (_, mut first) = run_crawl(&server, dir_a.path()).await;
    let (_, mut second) = run_crawl(&server, dir_b.path()).await;

    first.sort_by(|a, b| a.id.cmp(&b.id));
    second.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(first.len(), second.len());

    // Randomized header selection must not leak into extracted values.
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.current_price, b.current_price);
        assert_eq!(a.original_price, b.original_price);
        assert_eq!(a.sale_tag, b.sale_tag);
    }
}

#[tokio::test]
async fn empty_category_completes_with_empty_output() {
    let server = MockServer::start().await;
    mount_page(&server, "/catalog/test-cat", category_page(&[], None), 1).await;

    let dir = tempfile::tempdir().unwrap();
    let (report, products) = run_crawl(&server, dir.path()).await;

    assert_eq!(report.category_pages, 1);
    assert_eq!(report.products, 0);
    assert_eq!(report.failures, 0);
    assert!(products.is_empty());
    assert!(!dir.path().join("error_log.txt").exists());
}
