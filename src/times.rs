use std::f64::consts::PI;

use chrono::{DateTime, TimeZone};

use crate::angles::{self, deg_to_rad};
use crate::julian::{self, J2000};
use crate::types::{SunEvent, SunTimes, TimeAngle};

const J0: f64 = 0.0009;

pub fn default_time_angles() -> Vec<TimeAngle> {
    vec![
        TimeAngle::new(-0.833, "sunrise", "sunset"),
        TimeAngle::new(-0.3, "sunriseEnd", "sunsetStart"),
        TimeAngle::new(-6.0, "dawn", "dusk"),
        TimeAngle::new(-12.0, "nauticalDawn", "nauticalDusk"),
        TimeAngle::new(-18.0, "nightEnd", "night"),
        TimeAngle::new(6.0, "goldenHourEnd", "goldenHour"),
    ]
}

pub fn julian_cycle(d: f64, lw: f64) -> f64 {
    // half-up rounding, so x.5 goes to the next day for negative cycles too
    (d - J0 - lw / (2.0 * PI) + 0.5).floor()
}

pub fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / (2.0 * PI) + n
}

pub fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// NaN when the sun never reaches altitude `h` that day.
pub fn hour_angle(h: f64, phi: f64, dec: f64) -> f64 {
    ((h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos()
}

/// Horizon dip in degrees for an observer `height_m` above the surface.
pub fn observer_angle(height_m: f64) -> f64 {
    -2.076 * height_m.sqrt() / 60.0
}

struct Transit {
    lw: f64,
    phi: f64,
    dec: f64,
    n: f64,
    m: f64,
    l: f64,
    j_noon: f64,
}

impl Transit {
    fn new(d: f64, latitude: f64, longitude: f64) -> Self {
        let lw = deg_to_rad(-longitude);
        let phi = deg_to_rad(latitude);
        let n = julian_cycle(d, lw);
        let ds = approx_transit(0.0, lw, n);
        let m = angles::solar_mean_anomaly(ds);
        let l = angles::ecliptic_longitude(m);
        let dec = angles::declination(l, 0.0);
        Self {
            lw,
            phi,
            dec,
            n,
            m,
            l,
            j_noon: solar_transit_j(ds, m, l),
        }
    }

    fn set_j(&self, h: f64) -> f64 {
        let w = hour_angle(h, self.phi, self.dec);
        let a = approx_transit(w, self.lw, self.n);
        solar_transit_j(a, self.m, self.l)
    }
}

pub fn get_times<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    height_m: f64,
) -> SunTimes {
    get_times_with(dt, latitude, longitude, height_m, &default_time_angles())
}

pub fn get_times_with<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    height_m: f64,
    time_angles: &[TimeAngle],
) -> SunTimes {
    let dh = observer_angle(height_m);
    let transit = Transit::new(julian::to_days(dt), latitude, longitude);

    let mut events = Vec::with_capacity(time_angles.len() * 2);
    for angle in time_angles {
        let j_set = transit.set_j(deg_to_rad(angle.angle_deg + dh));
        let j_rise = transit.j_noon - (j_set - transit.j_noon);
        events.push(SunEvent {
            name: angle.rise_name.clone(),
            time: julian::from_julian(j_rise),
        });
        events.push(SunEvent {
            name: angle.set_name.clone(),
            time: julian::from_julian(j_set),
        });
    }

    SunTimes {
        solar_noon: julian::from_julian(transit.j_noon),
        nadir: julian::from_julian(transit.j_noon - 0.5),
        events,
    }
}
