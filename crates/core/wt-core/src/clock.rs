use crate::zones::{ZoneDatabase, resolve_timezone};
use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// 12-hour clock with AM/PM marker, e.g. `09:05 PM`.
pub const CLOCK_FORMAT: &str = "%I:%M %p";

/// Current wall-clock time of one tracked city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityClock {
    pub city: String,
    pub zone: &'static str,
    pub time: NaiveDateTime,
}

impl CityClock {
    pub fn formatted_time(&self) -> String {
        format_clock(&self.time)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CityError {
    #[error("no time zone matches '{city}'")]
    NoMatchingZone { city: String },

    #[error("{reason}")]
    Conversion {
        city: String,
        zone: String,
        reason: String,
    },
}

impl CityError {
    pub fn city(&self) -> &str {
        match self {
            Self::NoMatchingZone { city } | Self::Conversion { city, .. } => city,
        }
    }
}

pub type CityResult = Result<CityClock, CityError>;

pub fn format_clock(time: &NaiveDateTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Resolves one city and converts `instant` into its zone.
pub fn city_clock<D>(db: &D, city: &str, instant: DateTime<Utc>) -> CityResult
where
    D: ZoneDatabase + ?Sized,
{
    let zone = resolve_timezone(db, city).ok_or_else(|| CityError::NoMatchingZone {
        city: city.to_string(),
    })?;

    let time = db
        .wall_clock(zone, instant)
        .map_err(|e| CityError::Conversion {
            city: city.to_string(),
            zone: zone.to_string(),
            reason: e.to_string(),
        })?;

    Ok(CityClock {
        city: city.to_string(),
        zone,
        time,
    })
}

/// One result per tracked city, in tracked order. A failure never affects its neighbours.
pub fn city_clocks<D>(db: &D, cities: &[String], instant: DateTime<Utc>) -> Vec<CityResult>
where
    D: ZoneDatabase + ?Sized,
{
    cities
        .iter()
        .map(|city| city_clock(db, city, instant))
        .collect()
}
