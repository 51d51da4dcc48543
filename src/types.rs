use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    pub declination: f64,
    pub right_ascension: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude_m: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64, altitude_m: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude_m,
        }
    }

    pub fn coordinate(&self) -> Result<GeoCoordinate> {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAngle {
    pub angle_deg: f64,
    pub rise_name: String,
    pub set_name: String,
}

impl TimeAngle {
    pub fn new(angle_deg: f64, rise_name: &str, set_name: &str) -> Self {
        Self {
            angle_deg,
            rise_name: rise_name.to_string(),
            set_name: set_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunEvent {
    pub name: String,
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunTimes {
    pub solar_noon: Option<DateTime<Utc>>,
    pub nadir: Option<DateTime<Utc>>,
    pub events: Vec<SunEvent>,
}

impl SunTimes {
    /// `None` both for unknown names and for events that do not occur
    /// on that day (polar day or night).
    pub fn get(&self, name: &str) -> Option<DateTime<Utc>> {
        self.events.iter().find(|e| e.name == name)?.time
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonCoords {
    pub right_ascension: f64,
    pub declination: f64,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPosition {
    pub azimuth: f64,
    pub altitude: f64,
    pub distance_km: f64,
    pub parallactic_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonIllumination {
    pub fraction: f64,
    pub phase: f64,
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MoonTimes {
    pub rise: Option<DateTime<Utc>>,
    pub set: Option<DateTime<Utc>>,
    pub always_up: bool,
    pub always_down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LookAngles {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    pub range_m: f64,
    pub great_circle_distance_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub serial: String,
    pub datetime: DateTime<Utc>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub alt: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
