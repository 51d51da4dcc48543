use chrono::{DateTime, TimeZone};

use crate::angles::{self, deg_to_rad, rad_to_deg};
use crate::julian;
use crate::types::SunPosition;

pub fn get_position<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> SunPosition {
    position_at_days(julian::to_days(dt), latitude, longitude)
}

/// Same as [`get_position`] for a day count already relative to J2000.
pub fn position_at_days(d: f64, latitude: f64, longitude: f64) -> SunPosition {
    let lw = deg_to_rad(-longitude);
    let phi = deg_to_rad(latitude);
    let c = angles::sun_coords(d);
    let h = angles::sidereal_time(d, lw) - c.right_ascension;

    SunPosition {
        azimuth: angles::azimuth(h, phi, c.declination),
        altitude: angles::altitude(h, phi, c.declination),
    }
}

impl SunPosition {
    /// Compass bearing in degrees, north = 0, east = 90.
    pub fn azimuth_bearing(&self) -> f64 {
        angles::normalize_angle(rad_to_deg(self.azimuth) + 180.0)
    }

    pub fn altitude_deg(&self) -> f64 {
        rad_to_deg(self.altitude)
    }
}
