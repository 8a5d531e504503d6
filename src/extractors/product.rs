use scraper::{Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::{Product, id_from_url};

use super::price;
use super::selectors::product as sel;

// Builds one record from a fetched product page. Non-price fields degrade
// to absent values on a selector miss; a price resolution failure aborts
// the record and the caller decides logging and continuation.
pub fn parse_product(html: &str, url: &Url, base: &Url, timestamp: i64) -> Result<Product> {
    let document = Html::parse_document(html);

    let quote = price::resolve(&document)?;
    let in_stock = price::in_stock_in_pharmacy(&document) || price::in_stock_on_site(&document);

    let main_image = document
        .select(&sel::MAIN_IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .and_then(|src| base.join(src).ok())
        .map(|u| u.to_string());

    let set_images = document
        .select(&sel::SET_IMAGES)
        .filter_map(|img| img.value().attr("src"))
        .filter_map(|src| base.join(src).ok())
        .map(|u| u.to_string())
        .collect();

    let description: String = document
        .select(&sel::DESCRIPTION)
        .flat_map(|block| block.text())
        .collect();

    Ok(Product {
        timestamp,
        id: id_from_url(url.as_str()),
        url: url.to_string(),
        title: first_text(&document, &sel::TITLE),
        marketing_tags: marketing_tag(&document),
        brand: first_text(&document, &sel::BRAND),
        section: all_texts(&document, &sel::SECTION),
        current_price: quote.current_price,
        original_price: quote.original_price,
        sale_tag: quote.sale_tag(),
        in_stock,
        count: 0,
        main_image,
        set_images,
        view360: Vec::new(),
        video: Vec::new(),
        description,
        country_of_origin: first_text(&document, &sel::COUNTRY_OF_ORIGIN),
    })
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn all_texts(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

// First non-empty trimmed text node of the first tag element.
fn marketing_tag(document: &Html) -> Option<String> {
    document
        .select(&sel::MARKETING_TAGS)
        .next()
        .and_then(|element| {
            element
                .text()
                .map(|text| text.trim().to_string())
                .find(|text| !text.is_empty())
        })
}
