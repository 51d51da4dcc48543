use std::f64::consts::PI;

use chrono::{DateTime, TimeZone, Utc};
use log::debug;

use crate::angles::{self, deg_to_rad};
use crate::julian;
use crate::types::{MoonCoords, MoonIllumination, MoonPosition, MoonTimes};

const SUN_DISTANCE_KM: f64 = 149_598_000.0;
const HORIZON_OFFSET_DEG: f64 = 0.133;

pub fn moon_coords(d: f64) -> MoonCoords {
    let l = deg_to_rad(218.316 + 13.176396 * d);
    let m = deg_to_rad(134.963 + 13.064993 * d);
    let f = deg_to_rad(93.272 + 13.229350 * d);

    let lon = l + deg_to_rad(6.289) * m.sin();
    let lat = deg_to_rad(5.128) * f.sin();

    MoonCoords {
        right_ascension: angles::right_ascension(lon, lat),
        declination: angles::declination(lon, lat),
        distance_km: 385_001.0 - 20_905.0 * m.cos(),
    }
}

pub fn get_moon_position<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> MoonPosition {
    moon_position_at_days(julian::to_days(dt), latitude, longitude)
}

pub fn moon_position_at_days(d: f64, latitude: f64, longitude: f64) -> MoonPosition {
    let lw = deg_to_rad(-longitude);
    let phi = deg_to_rad(latitude);
    let c = moon_coords(d);
    let h = angles::sidereal_time(d, lw) - c.right_ascension;
    let alt = angles::altitude(h, phi, c.declination);
    let pa = h
        .sin()
        .atan2(phi.tan() * c.declination.cos() - c.declination.sin() * h.cos());

    MoonPosition {
        azimuth: angles::azimuth(h, phi, c.declination),
        altitude: alt + angles::astro_refraction(alt),
        distance_km: c.distance_km,
        parallactic_angle: pa,
    }
}

pub fn get_moon_illumination<Tz: TimeZone>(dt: &DateTime<Tz>) -> MoonIllumination {
    let d = julian::to_days(dt);
    let s = angles::sun_coords(d);
    let m = moon_coords(d);

    let delta_ra = s.right_ascension - m.right_ascension;
    let phi = (s.declination.sin() * m.declination.sin()
        + s.declination.cos() * m.declination.cos() * delta_ra.cos())
    .clamp(-1.0, 1.0)
    .acos();
    let inc = (SUN_DISTANCE_KM * phi.sin()).atan2(m.distance_km - SUN_DISTANCE_KM * phi.cos());
    let angle = (s.declination.cos() * delta_ra.sin()).atan2(
        s.declination.sin() * m.declination.cos()
            - s.declination.cos() * m.declination.sin() * delta_ra.cos(),
    );
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };

    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * sign / PI,
        angle,
    }
}

/// Rise and set within the 24 hours starting at midnight of `dt`'s own
/// calendar day, in `dt`'s time zone.
pub fn get_moon_times<Tz: TimeZone>(dt: &DateTime<Tz>, latitude: f64, longitude: f64) -> MoonTimes {
    let start = dt
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| dt.timezone().from_local_datetime(&midnight).earliest())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|| dt.with_timezone(&Utc));
    let start_days = julian::to_days(&start);

    let hc = deg_to_rad(HORIZON_OFFSET_DEG);
    let altitude_at = |hours: f64| {
        moon_position_at_days(start_days + hours / 24.0, latitude, longitude).altitude - hc
    };

    let mut h0 = altitude_at(0.0);
    let mut rise: Option<f64> = None;
    let mut set: Option<f64> = None;
    let mut ye = 0.0;

    let mut i = 1.0;
    while i <= 24.0 {
        let h1 = altitude_at(i);
        let h2 = altitude_at(i + 1.0);

        // quadratic through (-1, h0), (0, h1), (1, h2)
        let a = (h0 + h2) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;
        let xe = -b / (2.0 * a);
        ye = (a * xe + b) * xe + h1;
        let disc = b * b - 4.0 * a * h1;

        let mut roots = 0;
        let mut x1 = 0.0;
        let mut x2 = 0.0;
        if disc >= 0.0 {
            let dx = disc.sqrt() / (a.abs() * 2.0);
            x1 = xe - dx;
            x2 = xe + dx;
            if x1.abs() <= 1.0 {
                roots += 1;
            }
            if x2.abs() <= 1.0 {
                roots += 1;
            }
            if x1 < -1.0 {
                x1 = x2;
            }
        }

        if roots == 1 {
            if h0 < 0.0 {
                rise = Some(i + x1);
            } else {
                set = Some(i + x1);
            }
        } else if roots == 2 {
            rise = Some(i + if ye < 0.0 { x2 } else { x1 });
            set = Some(i + if ye < 0.0 { x1 } else { x2 });
        }

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
        i += 2.0;
    }

    let mut result = MoonTimes {
        rise: rise.and_then(|h| julian::hours_later(&start, h)),
        set: set.and_then(|h| julian::hours_later(&start, h)),
        ..MoonTimes::default()
    };
    if rise.is_none() && set.is_none() {
        if ye > 0.0 {
            result.always_up = true;
        } else {
            result.always_down = true;
        }
    }
    debug!(
        "moon times from {}: rise={:?} set={:?} always_up={} always_down={}",
        start, result.rise, result.set, result.always_up, result.always_down
    );
    result
}
