pub mod catalog_errors;
pub mod jpl;

pub use catalog_errors::CatalogErrors;
pub use jpl::{parse_catalog, CatalogBody, JplRecord};
