pub const EARTH_SURFACE_GRAVITY: f64 = 9.81; // Surface gravity in the crater scaling law (m/s²)
pub const AU_TO_MKM: f64 = 149.5978707; // Astronomical unit (millions of km)
pub const SIDEREAL_YEAR_DAYS: f64 = 365.256363; // Sidereal year (days)
pub const J2000_JD: f64 = 2451545.0; // J2000.0 reference epoch (Julian date, TDB)

// Impact physics
pub const ROCK_DENSITY: f64 = 2500.0; // Generic rock/soil target (kg/m³)
pub const WATER_DENSITY: f64 = 1000.0; // Water target (kg/m³)
pub const MIN_IMPACT_VELOCITY: f64 = 11_000.0; // Earth escape velocity floor (m/s)
pub const MAX_IMPACT_VELOCITY: f64 = 72_000.0; // Practical heliocentric encounter ceiling (m/s)
pub const TNT_TON_JOULES: f64 = 4.184e9; // Energy of one ton of TNT (J)
pub const TNT_MEGATON_JOULES: f64 = 4.184e15; // Energy of one megaton of TNT (J)

// Math
pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = std::f64::consts::TAU;
