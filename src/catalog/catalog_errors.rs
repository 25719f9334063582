use crate::models::ElementsError;
use std::{error::Error, fmt, num::ParseFloatError};

#[derive(Debug)]
pub enum CatalogErrors {
    JsonError(serde_json::Error),
    ParseFloatError(ParseFloatError),
    InvalidElements(ElementsError),
    EmptyCatalog,
}

impl fmt::Display for CatalogErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogErrors::JsonError(e) => write!(f, "JSON parsing error: {}", e),
            CatalogErrors::ParseFloatError(e) => write!(f, "Float parsing error: {}", e),
            CatalogErrors::InvalidElements(e) => write!(f, "Invalid orbital elements: {}", e),
            CatalogErrors::EmptyCatalog => write!(f, "No usable records in catalog"),
        }
    }
}

impl Error for CatalogErrors {}

impl From<serde_json::Error> for CatalogErrors {
    fn from(err: serde_json::Error) -> Self {
        CatalogErrors::JsonError(err)
    }
}

impl From<ParseFloatError> for CatalogErrors {
    fn from(err: ParseFloatError) -> Self {
        CatalogErrors::ParseFloatError(err)
    }
}

impl From<ElementsError> for CatalogErrors {
    fn from(err: ElementsError) -> Self {
        CatalogErrors::InvalidElements(err)
    }
}
