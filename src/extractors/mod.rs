pub mod category;
pub mod price;
pub mod product;
pub mod selectors;

pub use category::{CategoryPage, parse_category};
pub use price::{PriceQuote, discount_percent};
pub use product::parse_product;
