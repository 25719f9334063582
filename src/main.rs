use astrofall::catalog::parse_catalog;
use astrofall::models::{DiameterUnit, ImpactParameters, VelocityUnit};
use astrofall::physics::compute_impact;
use csv::Writer;
use hifitime::{Duration, Epoch};
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

// Small slice of the JPL near-Earth comet export, embedded so the demo
// runs offline.
const NEO_SAMPLE: &str = include_str!("../data/neo_sample.json");

fn main() -> Result<(), Box<dyn Error>> {
    // Scene clock origin: J2000.0
    let j2000 = Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0);

    let bodies = parse_catalog(NEO_SAMPLE)?;
    println!("Loaded {} bodies from the embedded catalog", bodies.len());

    let engines: Vec<_> = bodies.iter().map(|body| body.engine()).collect();

    // Propagate everything over a year at daily steps
    let start_day = 9000.0; // days since J2000
    let step_days = 1.0;
    let steps = 366usize;

    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;
    let file = File::create(output_dir.join("ephemeris.csv"))?;
    let mut writer = Writer::from_writer(file);

    let mut header = vec!["UTC Time".to_string(), "Time (days since J2000)".to_string()];
    for body in &bodies {
        for axis in ["X", "Y", "Z"] {
            header.push(format!("{} {} (Mkm)", body.name, axis));
        }
    }
    writer.write_record(&header)?;

    for i in 0..steps {
        let t = start_day + i as f64 * step_days;
        let utc = j2000 + Duration::from_days(t);

        let mut row = vec![format!("{}", utc), format!("{:.3}", t)];
        for engine in &engines {
            let position = engine.position_at(t);
            row.push(format!("{:.6}", position.x));
            row.push(format!("{:.6}", position.y));
            row.push(format!("{:.6}", position.z));
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;
    println!("Wrote output/ephemeris.csv");

    // One simulator run: a 500 m stony impactor onto land
    let params = ImpactParameters {
        diameter: 500.0,
        diameter_unit: DiameterUnit::Meter,
        density: 3000.0,
        velocity: 20.0,
        velocity_unit: VelocityUnit::KilometersPerSecond,
        impact_angle_deg: 45.0,
        water_depth: -1.0,
        population_density: 1500.0, // people per km²
    };
    let result = compute_impact(&params)?;

    // The result screen shows integers; truncation happens here, not in
    // the calculator.
    println!();
    println!("Impact scenario (500 m, 3000 kg/m³, 20 km/s, 45°, land):");
    println!("  Impact energy:        {:.3e} J", result.impact_energy);
    println!(
        "  TNT equivalent:       {} Mt",
        result.impact_energy_megatons.trunc()
    );
    println!(
        "  Fireball diameter:    {} m",
        result.fireball_diameter.trunc()
    );
    println!(
        "  Transient crater:     {} m across, {} m deep",
        result.transient_crater_diameter.trunc(),
        result.transient_crater_depth.trunc()
    );
    println!(
        "  Burn radii:           {} / {} / {} / {} m",
        result.clothing_ignition_radius.trunc(),
        result.third_degree_burn_radius.trunc(),
        result.second_degree_burn_radius.trunc(),
        result.first_degree_burn_radius.trunc()
    );
    println!(
        "  Estimated casualties: {} dead, {} injured",
        result.estimated_deaths.trunc(),
        result.estimated_injuries.trunc()
    );

    Ok(())
}
