use super::population_errors::PopulationErrors;
use chrono::{DateTime, Duration, Utc};
use csv::{ReaderBuilder, Writer};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const CACHE_DURATION_HOURS: i64 = 24;
const CACHE_FILE: &str = "population_cache.csv";
const GEOCODE_URL: &str = "https://api-bdc.io/data/reverse-geocode-client";
const WORLD_BANK_URL: &str = "https://api.worldbank.org/v2/country";
// World Bank indicator: population density, people per km² of land area
const DENSITY_INDICATOR: &str = "EN.POP.DNST";

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
}

#[derive(Deserialize)]
struct WorldBankEntry {
    date: String,
    value: Option<f64>,
}

/// Country-level population density lookup with an on-disk CSV cache.
///
/// Resolves a coordinate to a country code, then to the most recent
/// non-null World Bank density figure. Densities barely move between
/// yearly releases, so resolved countries are cached on disk and reused
/// until the cache goes stale.
pub(super) struct DensityManager {
    cache_path: PathBuf,
    last_update: Option<DateTime<Utc>>,
    densities: BTreeMap<String, f64>, // country code -> people per km²
}

impl DensityManager {
    /// Creates a new DensityManager. Does not touch the cache yet as that
    /// may fail.
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("astrofall");
        fs::create_dir_all(&cache_dir).unwrap_or_default();

        Self {
            cache_path: cache_dir.join(CACHE_FILE),
            last_update: None,
            densities: BTreeMap::new(),
        }
    }

    /// People per km² at a coordinate, resolved through the country the
    /// coordinate falls in.
    pub fn density_at(&mut self, latitude: f64, longitude: f64) -> Result<f64, PopulationErrors> {
        let country = self.resolve_country(latitude, longitude)?;
        self.country_density(&country)
    }

    /// People per km² for a country code, served from cache when fresh.
    pub fn country_density(&mut self, country: &str) -> Result<f64, PopulationErrors> {
        self.reload_cache_if_stale();

        if let Some(&density) = self.densities.get(country) {
            return Ok(density);
        }

        let density = self.fetch_density(country)?;
        self.densities.insert(country.to_string(), density);
        if let Err(e) = self.persist_cache() {
            eprintln!("Warning: Failed to write population cache: {}", e);
        }
        Ok(density)
    }

    fn resolve_country(&self, latitude: f64, longitude: f64) -> Result<String, PopulationErrors> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .get(GEOCODE_URL)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()?;

        if response.status() == reqwest::StatusCode::FORBIDDEN {
            return Err(PopulationErrors::HttpForbidden);
        }
        let response = response.error_for_status()?;

        let geocode: GeocodeResponse = serde_json::from_str(&response.text()?)?;
        geocode
            .country_code
            .filter(|code| !code.is_empty())
            .ok_or(PopulationErrors::MissingCountryCode)
    }

    fn fetch_density(&self, country: &str) -> Result<f64, PopulationErrors> {
        let client = reqwest::blocking::Client::new();
        let url = format!("{}/{}/indicator/{}", WORLD_BANK_URL, country, DENSITY_INDICATOR);
        let response = client.get(&url).query(&[("format", "json")]).send()?;

        if response.status() == reqwest::StatusCode::FORBIDDEN {
            return Err(PopulationErrors::HttpForbidden);
        }
        let response = response.error_for_status()?;

        // Payload shape: [metadata, [{date, value}, ...]]
        let payload: (serde_json::Value, Option<Vec<WorldBankEntry>>) =
            serde_json::from_str(&response.text()?)?;

        let mut entries = payload.1.unwrap_or_default();
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        entries
            .iter()
            .find_map(|entry| entry.value)
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| PopulationErrors::DensityUnavailable(country.to_string()))
    }

    fn reload_cache_if_stale(&mut self) {
        let is_fresh = match self.last_update {
            Some(last_update) => Utc::now() - last_update < Duration::hours(CACHE_DURATION_HOURS),
            None => false,
        };
        if is_fresh {
            return;
        }

        self.densities.clear();
        if let Err(e) = self.load_cache() {
            // A missing or unreadable cache just means every country is
            // fetched fresh.
            eprintln!("Note: population cache not loaded: {}", e);
        }
        self.last_update = Some(Utc::now());
    }

    fn load_cache(&mut self) -> Result<(), PopulationErrors> {
        let age = fs::metadata(&self.cache_path)?
            .modified()
            .map(|modified| Utc::now() - DateTime::<Utc>::from(modified))
            .unwrap_or_else(|_| Duration::hours(CACHE_DURATION_HOURS));
        if age >= Duration::hours(CACHE_DURATION_HOURS) {
            return Ok(()); // stale file, start over
        }

        let data = fs::read(&self.cache_path)?;
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(&data[..]);
        for result in rdr.records() {
            let record = result?;
            if record.len() < 2 {
                continue;
            }
            if let Ok(density) = record[1].parse::<f64>() {
                self.densities.insert(record[0].to_string(), density);
            }
        }
        Ok(())
    }

    fn persist_cache(&self) -> Result<(), PopulationErrors> {
        let mut writer = Writer::from_path(&self.cache_path)?;
        writer.write_record(["country", "people_per_km2"])?;
        for (country, density) in &self.densities {
            writer.write_record([country.as_str(), &density.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }
}
