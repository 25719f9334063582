//! Adapter from JPL small-body element records to scene orbital elements.
//!
//! Scene units are uniform across all bodies: lengths in millions of km,
//! times in days with origin at J2000.0, angles in radians.

use super::catalog_errors::CatalogErrors;
use crate::constants::{AU_TO_MKM, J2000_JD, SIDEREAL_YEAR_DAYS};
use crate::models::OrbitalElements;
use crate::physics::OrbitEngine;
use serde::Deserialize;

/// One record of the JPL near-Earth object export. Every numeric field
/// arrives as a decimal string in the upstream JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct JplRecord {
    /// Eccentricity
    pub e: String,
    /// Perihelion distance (AU)
    pub q_au_1: String,
    /// Inclination (degrees)
    pub i_deg: String,
    /// Argument of perihelion (degrees)
    pub w_deg: String,
    /// Longitude of the ascending node (degrees)
    pub node_deg: String,
    /// Orbital period (years)
    pub p_yr: String,
    /// Time of perihelion passage (Julian date, TDB)
    pub tp_tdb: String,
    #[serde(default)]
    pub object_name: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
}

impl JplRecord {
    pub fn display_name(&self) -> &str {
        self.object_name
            .as_deref()
            .or(self.object.as_deref())
            .unwrap_or("Unknown")
    }
}

/// A named body ready for propagation.
#[derive(Debug, Clone)]
pub struct CatalogBody {
    pub name: String,
    pub elements: OrbitalElements,
}

impl CatalogBody {
    pub fn engine(&self) -> OrbitEngine {
        OrbitEngine::new(self.elements.clone())
    }
}

/// Converts one JPL record into scene orbital elements.
///
/// Semi-major axis is recovered from the perihelion distance as
/// `a = q / (1 - e)`, then scaled from AU into millions of km; angles go
/// from degrees to radians; the period from years to days; the perihelion
/// passage from a Julian date to days since J2000.0. Field parse failures
/// and out-of-domain elements surface as typed errors.
pub fn elements_from_record(record: &JplRecord) -> Result<OrbitalElements, CatalogErrors> {
    let eccentricity: f64 = record.e.trim().parse()?;
    let perihelion_au: f64 = record.q_au_1.trim().parse()?;
    let inclination_deg: f64 = record.i_deg.trim().parse()?;
    let periapsis_deg: f64 = record.w_deg.trim().parse()?;
    let node_deg: f64 = record.node_deg.trim().parse()?;
    let period_years: f64 = record.p_yr.trim().parse()?;
    let periapsis_jd: f64 = record.tp_tdb.trim().parse()?;

    let semi_major_axis = perihelion_au / (1.0 - eccentricity) * AU_TO_MKM;

    Ok(OrbitalElements::new(
        semi_major_axis,
        eccentricity,
        inclination_deg.to_radians(),
        periapsis_deg.to_radians(),
        node_deg.to_radians(),
        period_years * SIDEREAL_YEAR_DAYS,
        periapsis_jd - J2000_JD,
    )?)
}

/// Parses a whole catalog (a JSON array of records).
///
/// Records that fail to convert are skipped with a warning, matching the
/// upstream feed where a handful of entries carry blank fields; an entirely
/// unusable catalog is an error.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogBody>, CatalogErrors> {
    let records: Vec<JplRecord> = serde_json::from_str(json)?;

    let bodies: Vec<CatalogBody> = records
        .iter()
        .filter_map(|record| match elements_from_record(record) {
            Ok(elements) => Some(CatalogBody {
                name: record.display_name().to_string(),
                elements,
            }),
            Err(e) => {
                eprintln!("Warning: Skipping record '{}': {}", record.display_name(), e);
                None
            }
        })
        .collect();

    if bodies.is_empty() {
        return Err(CatalogErrors::EmptyCatalog);
    }

    Ok(bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ENCKE: &str = r#"{
        "object_name": "2P/Encke",
        "e": "0.8483",
        "q_au_1": "0.3360",
        "i_deg": "11.78",
        "w_deg": "186.54",
        "node_deg": "334.57",
        "p_yr": "3.30",
        "tp_tdb": "2456618.2040"
    }"#;

    #[test]
    fn converts_record_units() {
        let record: JplRecord = serde_json::from_str(ENCKE).unwrap();
        let elements = elements_from_record(&record).unwrap();

        // a = q / (1 - e) in AU, scaled to millions of km
        let expected_a = 0.3360 / (1.0 - 0.8483) * AU_TO_MKM;
        assert_abs_diff_eq!(elements.semi_major_axis(), expected_a, epsilon = 1e-9);
        assert_abs_diff_eq!(elements.eccentricity(), 0.8483, epsilon = 1e-12);
        assert_abs_diff_eq!(
            elements.inclination(),
            11.78_f64.to_radians(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            elements.argument_of_periapsis(),
            186.54_f64.to_radians(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            elements.ascending_node(),
            334.57_f64.to_radians(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            elements.period(),
            3.30 * SIDEREAL_YEAR_DAYS,
            epsilon = 1e-9
        );
        // Days since J2000, not seconds
        assert_abs_diff_eq!(
            elements.periapsis_epoch(),
            2456618.2040 - J2000_JD,
            epsilon = 1e-9
        );
    }

    #[test]
    fn record_name_fallbacks() {
        let record: JplRecord = serde_json::from_str(
            r#"{"object": "1P", "e": "0.1", "q_au_1": "1.0", "i_deg": "0",
                "w_deg": "0", "node_deg": "0", "p_yr": "1.0", "tp_tdb": "2451545.0"}"#,
        )
        .unwrap();
        assert_eq!(record.display_name(), "1P");
    }

    #[test]
    fn catalog_skips_bad_records() {
        let json = format!(
            r#"[{}, {{"object_name": "bad", "e": "not-a-number", "q_au_1": "1.0",
                 "i_deg": "0", "w_deg": "0", "node_deg": "0", "p_yr": "1.0",
                 "tp_tdb": "2451545.0"}}]"#,
            ENCKE
        );
        let bodies = parse_catalog(&json).unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].name, "2P/Encke");
    }

    #[test]
    fn hyperbolic_record_is_skipped_not_propagated() {
        let json = r#"[{"object_name": "C/hyperbolic", "e": "1.0006", "q_au_1": "0.7",
            "i_deg": "89.0", "w_deg": "130.0", "node_deg": "283.0", "p_yr": "0.0",
            "tp_tdb": "2455981.0"}]"#;
        assert!(matches!(
            parse_catalog(json),
            Err(CatalogErrors::EmptyCatalog)
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_catalog("{ not json"),
            Err(CatalogErrors::JsonError(_))
        ));
    }

    #[test]
    fn body_builds_a_working_engine() {
        let record: JplRecord = serde_json::from_str(ENCKE).unwrap();
        let body = CatalogBody {
            name: record.display_name().to_string(),
            elements: elements_from_record(&record).unwrap(),
        };
        let engine = body.engine();
        let r = engine
            .position_at(body.elements.periapsis_epoch())
            .magnitude();
        assert_abs_diff_eq!(r, body.elements.periapsis_distance(), epsilon = 1e-8);
    }
}
