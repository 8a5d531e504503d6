use scraper::{Html, Selector};

use crate::error::{Error, Result};

use super::selectors::price as sel;
use super::selectors::product::SPAN;

// Availability markers on the product page. Each probe is independent;
// the branch precedence in `resolve` settles any overlap.
const ADD_TO_CART: &str = "Добавить в корзину";
const VIEW_IN_PHARMACIES: &str = "Смотреть в аптеках";
const STOP_PRICE: &str = "STOP Цена";

/// Resolved price pair plus the sale signal that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub original_price: f64,
    pub current_price: f64,
    pub on_sale: bool,
}

impl PriceQuote {
    pub fn sale_tag(&self) -> String {
        if self.on_sale {
            format!(
                "Скидка {}%",
                discount_percent(self.original_price, self.current_price)
            )
        } else {
            "Нет скидки".to_string()
        }
    }
}

pub fn discount_percent(original_price: f64, current_price: f64) -> f64 {
    if original_price == 0.0 {
        return 0.0;
    }
    (1.0 - current_price / original_price) * 100.0
}

pub fn in_stock_on_site(document: &Html) -> bool {
    has_marker(document, ADD_TO_CART)
}

pub fn in_stock_in_pharmacy(document: &Html) -> bool {
    has_marker(document, VIEW_IN_PHARMACIES)
}

pub fn is_sale(document: &Html) -> bool {
    has_marker(document, STOP_PRICE)
}

// Branch order matters: on-site sale, on-site regular, pharmacy-only,
// then unavailable (both prices zero). Only the matched branch may fail,
// and a failure here aborts the whole record.
pub fn resolve(document: &Html) -> Result<PriceQuote> {
    let on_site = in_stock_on_site(document);
    let in_pharmacy = in_stock_in_pharmacy(document);
    let on_sale = is_sale(document);

    let (original_price, current_price) = if on_site && on_sale {
        let original = read_price(document, &sel::SALE_ORIGINAL, "crossed-out original price")?;
        let current = read_price(document, &sel::SALE_CURRENT, "discounted price")?;
        (original, current)
    } else if on_site {
        let price = read_price(document, &sel::REGULAR, "regular price")?;
        (price, price)
    } else if in_pharmacy {
        let price = read_price(document, &sel::PHARMACY, "pharmacy starting price")?;
        (price, price)
    } else {
        (0.0, 0.0)
    };

    Ok(PriceQuote {
        original_price,
        current_price,
        on_sale,
    })
}

fn has_marker(document: &Html, marker: &str) -> bool {
    document
        .select(&SPAN)
        .any(|span| span.text().any(|text| text.contains(marker)))
}

fn read_price(document: &Html, selector: &Selector, context: &'static str) -> Result<f64> {
    let text = document
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .ok_or(Error::MissingPriceNode(context))?;

    parse_price(&text)
}

// Price text looks like "1 035 ₽" or "от 85 ₽"; spaces (including NBSP),
// the currency sign and the leading "от" qualifier are dropped.
fn parse_price(raw: &str) -> Result<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace('₽', "")
        .replace("от", "");

    cleaned.parse().map_err(|_| Error::InvalidPrice {
        text: raw.trim().to_string(),
    })
}
