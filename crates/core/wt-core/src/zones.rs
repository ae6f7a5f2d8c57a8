use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::{TZ_VARIANTS, Tz};
use thiserror::Error;

/// Areas whose zones name a real location (`Area/Location`), mirroring zone.tab.
const LOCATION_AREAS: &[&str] = &[
    "Africa",
    "America",
    "Antarctica",
    "Arctic",
    "Asia",
    "Atlantic",
    "Australia",
    "Europe",
    "Indian",
    "Pacific",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown time zone '{zone}': {reason}")]
pub struct ZoneError {
    pub zone: String,
    pub reason: String,
}

/// Source of zone identifiers and per-zone wall-clock conversion.
pub trait ZoneDatabase {
    /// Zone identifiers in the database's natural order.
    fn zone_ids(&self) -> &[&'static str];

    /// Converts a UTC instant into the local wall-clock time of `zone_id`.
    fn wall_clock(
        &self,
        zone_id: &str,
        instant: DateTime<Utc>,
    ) -> Result<NaiveDateTime, ZoneError>;
}

/// IANA database compiled in by `chrono-tz`.
pub struct TzDatabase {
    locations: Vec<&'static str>,
}

impl Default for TzDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl TzDatabase {
    pub fn new() -> Self {
        let locations = TZ_VARIANTS
            .iter()
            .map(|tz| tz.name())
            .filter(|name| is_location_zone(name))
            .collect();
        Self { locations }
    }
}

impl ZoneDatabase for TzDatabase {
    fn zone_ids(&self) -> &[&'static str] {
        &self.locations
    }

    fn wall_clock(
        &self,
        zone_id: &str,
        instant: DateTime<Utc>,
    ) -> Result<NaiveDateTime, ZoneError> {
        let tz: Tz = zone_id.parse().map_err(|e| ZoneError {
            zone: zone_id.to_string(),
            reason: format!("{}", e),
        })?;
        Ok(instant.with_timezone(&tz).naive_local())
    }
}

fn is_location_zone(name: &str) -> bool {
    match name.split_once('/') {
        Some((area, _)) => LOCATION_AREAS.contains(&area),
        None => false,
    }
}

/// Finds the first zone whose identifier contains `city`, ignoring case.
///
/// Matching is by substring in database order, not by best match: "york"
/// resolves to "America/New_York" only because no earlier zone contains it.
pub fn resolve_timezone<D>(db: &D, city: &str) -> Option<&'static str>
where
    D: ZoneDatabase + ?Sized,
{
    let needle = city.to_lowercase();
    db.zone_ids()
        .iter()
        .copied()
        .find(|zone| zone.to_lowercase().contains(&needle))
}
