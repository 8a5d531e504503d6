//! CSS selectors for apteka-ot-sklada.ru markup.
//!
//! Kept in one place as data so the extraction layer can be exercised
//! against saved HTML fixtures. Update here when the site layout changes.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for category listing pages.
pub mod category {
    use super::*;

    /// Product card name link on a listing page.
    pub static PRODUCT_LINK: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("div.goods-card__name.text.text_size_default.text_weight_medium > a")
            .unwrap()
    });

    /// Pagination arrow link. The first match on page 2+ is the "previous"
    /// arrow pointing at `start=0`, which doubles as the stop sentinel.
    pub static NEXT_PAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".ui-pagination__link_direction").unwrap());
}

/// Selectors for product pages. Positional chains mirror the page layout:
/// the info column lives in an `aside` of the first `section` under `main`.
pub mod product {
    use super::*;

    pub static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("main > header > h1 > span").unwrap());

    pub static MARKETING_TAGS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("li.goods-tags__item").unwrap());

    pub static BRAND: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("main > header > div:nth-of-type(2) > div > span:nth-of-type(2)").unwrap()
    });

    pub static COUNTRY_OF_ORIGIN: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("main > header > div:nth-of-type(2) > div > span:nth-of-type(1)").unwrap()
    });

    /// Category breadcrumb entries.
    pub static SECTION: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("main > header > div:nth-of-type(1) > ul > li > a > span > span").unwrap()
    });

    pub static MAIN_IMAGE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "div.goods-gallery__active-picture-area.goods-gallery__active-picture-area_gallery_trigger img",
        )
        .unwrap()
    });

    pub static SET_IMAGES: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.goods-gallery__sidebar img[src]").unwrap());

    pub static DESCRIPTION: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.ui-collapsed-content__content").unwrap());

    /// Availability markers live in plain `span` text.
    pub static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());
}

/// Selectors for the price block inside the product page `aside`.
pub mod price {
    use super::*;

    const BLOCK: &str = "main > section:nth-of-type(1) > div > aside > div > div:nth-of-type(1)";

    /// Discounted price when a sale is active (first span of the price row).
    pub static SALE_CURRENT: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(&format!("{BLOCK} > div:nth-of-type(2) > span:nth-of-type(1)")).unwrap()
    });

    /// Crossed-out original price next to the discounted one.
    pub static SALE_ORIGINAL: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(&format!("{BLOCK} > div:nth-of-type(2) > span:nth-of-type(2)")).unwrap()
    });

    /// Single price span when there is no sale.
    pub static REGULAR: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(&format!("{BLOCK} > div:nth-of-type(2) > span")).unwrap()
    });

    /// "от ..." starting price when the item is only available in pharmacies.
    pub static PHARMACY: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(&format!("{BLOCK} > ul > li > a > span > span")).unwrap()
    });
}
