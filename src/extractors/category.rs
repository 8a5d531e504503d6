use scraper::Html;
use url::Url;

use super::selectors::category as sel;

/// What a single category listing page contributes to the crawl.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub product_links: Vec<Url>,
    pub next_page: Option<Url>,
}

// Extracts product links and the follow-up pagination request from a
// category page. A "next" arrow whose target ends with `start=0` points
// back at page one and terminates pagination.
pub fn parse_category(html: &str, page_url: &Url) -> CategoryPage {
    let document = Html::parse_document(html);

    let product_links = document
        .select(&sel::PRODUCT_LINK)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| page_url.join(href).ok())
        .collect();

    let next_page = document
        .select(&sel::NEXT_PAGE)
        .next()
        .and_then(|element| element.value().attr("href"))
        .filter(|href| !href.ends_with("start=0"))
        .and_then(|href| page_url.join(href).ok());

    CategoryPage {
        product_links,
        next_page,
    }
}
