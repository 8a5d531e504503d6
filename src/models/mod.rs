mod product;

pub use product::{Product, id_from_url};
