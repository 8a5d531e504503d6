use serde::{Deserialize, Serialize};

// One record per scraped product page. Built in a single pass and never
// mutated after the crawl driver collects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub timestamp: i64,
    pub id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub section: Vec<String>,
    pub current_price: f64,
    pub original_price: f64,
    pub sale_tag: String,
    pub in_stock: bool,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    pub set_images: Vec<String>,
    pub view360: Vec<String>,
    pub video: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
}

// Product ids are the text after the last underscore of the URL,
// e.g. ".../catalog/zubnaya-nit-oral-b_12345" -> "12345".
// A URL without an underscore yields itself, matching the site feed.
pub fn id_from_url(url: &str) -> String {
    url.rsplit('_').next().unwrap_or(url).to_string()
}
