use std::f64::consts::PI;

use crate::types::EquatorialCoords;

pub const RAD: f64 = PI / 180.0;
pub const EARTH_OBLIQUITY: f64 = 23.4397;
pub const PERIHELION: f64 = 102.9372;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * RAD
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn right_ascension(l: f64, b: f64) -> f64 {
    let e = deg_to_rad(EARTH_OBLIQUITY);
    (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos())
}

pub fn declination(l: f64, b: f64) -> f64 {
    let e = deg_to_rad(EARTH_OBLIQUITY);
    (b.sin() * e.cos() + b.cos() * e.sin() * l.sin())
        .clamp(-1.0, 1.0)
        .asin()
}

/// Azimuth in radians, measured from south and increasing toward west.
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    // rounding can push the overhead case just past 1
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos())
        .clamp(-1.0, 1.0)
        .asin()
}

/// `lw` is the west longitude in radians, i.e. `deg_to_rad(-longitude)`.
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    deg_to_rad(280.16 + 360.9856235 * d) - lw
}

pub fn astro_refraction(h: f64) -> f64 {
    // the formula diverges below the horizon; NaN passes through
    let h = if h < 0.0 { 0.0 } else { h };
    0.0002967 / (h + 0.00312536 / (h + 0.08901179)).tan()
}

pub fn solar_mean_anomaly(d: f64) -> f64 {
    deg_to_rad(357.5291 + 0.98560028 * d)
}

pub fn equation_of_center(m: f64) -> f64 {
    deg_to_rad(1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin())
}

pub fn ecliptic_longitude(m: f64) -> f64 {
    m + equation_of_center(m) + deg_to_rad(PERIHELION) + PI
}

pub fn sun_coords(d: f64) -> EquatorialCoords {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    EquatorialCoords {
        declination: declination(l, 0.0),
        right_ascension: right_ascension(l, 0.0),
    }
}
