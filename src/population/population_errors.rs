use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum PopulationErrors {
    IoError(std::io::Error),
    ReqwestError(reqwest::Error),
    JsonError(serde_json::Error),
    CsvError(csv::Error),
    MissingCountryCode,
    DensityUnavailable(String),
    HttpForbidden,
}

impl fmt::Display for PopulationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopulationErrors::IoError(e) => write!(f, "I/O error: {}", e),
            PopulationErrors::ReqwestError(e) => write!(f, "Request error: {}", e),
            PopulationErrors::JsonError(e) => write!(f, "JSON parsing error: {}", e),
            PopulationErrors::CsvError(e) => write!(f, "CSV cache error: {}", e),
            PopulationErrors::MissingCountryCode => {
                write!(f, "Reverse geocoding returned no country code")
            }
            PopulationErrors::DensityUnavailable(country) => {
                write!(f, "No population density available for '{}'", country)
            }
            PopulationErrors::HttpForbidden => write!(f, "HTTP 403 Forbidden"),
        }
    }
}

impl Error for PopulationErrors {}

impl From<io::Error> for PopulationErrors {
    fn from(err: io::Error) -> Self {
        PopulationErrors::IoError(err)
    }
}

impl From<reqwest::Error> for PopulationErrors {
    fn from(err: reqwest::Error) -> Self {
        PopulationErrors::ReqwestError(err)
    }
}

impl From<serde_json::Error> for PopulationErrors {
    fn from(err: serde_json::Error) -> Self {
        PopulationErrors::JsonError(err)
    }
}

impl From<csv::Error> for PopulationErrors {
    fn from(err: csv::Error) -> Self {
        PopulationErrors::CsvError(err)
    }
}
