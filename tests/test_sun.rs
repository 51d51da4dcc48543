use std::f64::consts::PI;

use chrono::{TimeZone, Utc};
use chrono_tz::America::New_York;
use proptest::prelude::*;

use sondehub_astro::angles::{
    altitude, azimuth, deg_to_rad, normalize_angle, rad_to_deg, sidereal_time, sun_coords,
};
use sondehub_astro::julian::{days_from_millis, to_days};
use sondehub_astro::sun::{get_position, position_at_days};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Reference vectors ──

#[test]
fn test_position_kyiv_reference() {
    let dt = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
    let pos = get_position(&dt, 50.5, 30.5);
    assert_approx!(pos.azimuth, -2.5003175907168385, 1e-9);
    assert_approx!(pos.altitude, -0.7000406838781611, 1e-9);
}

#[test]
fn test_position_equinox_midnight_null_island() {
    let dt = Utc.with_ymd_and_hms(2023, 3, 20, 0, 0, 0).unwrap();
    let pos = get_position(&dt, 0.0, 0.0);
    assert_approx!(pos.azimuth, 1.3305857054194155, 1e-6);
    assert_approx!(pos.altitude, -1.5336941836931435, 1e-6);
}

#[test]
fn test_position_new_york_evening() {
    let dt = Utc.with_ymd_and_hms(2023, 3, 20, 0, 0, 0).unwrap();
    let pos = get_position(&dt, 40.7, -74.0);
    assert_approx!(pos.azimuth, 1.7244842805621712, 1e-6);
    assert_approx!(pos.altitude, -0.18945594015016143, 1e-6);
}

#[test]
fn test_time_zone_does_not_matter() {
    let utc = Utc.with_ymd_and_hms(2023, 3, 20, 0, 0, 0).unwrap();
    let local = utc.with_timezone(&New_York);
    assert_eq!(get_position(&utc, 40.7, -74.0), get_position(&local, 40.7, -74.0));
}

// ── Equinox noon ──

#[test]
fn test_equinox_noon_altitude_near_maximum() {
    let dt = Utc.with_ymd_and_hms(2023, 3, 20, 12, 7, 0).unwrap();
    for lat in [0.0_f64, 40.0, -40.0, 60.0] {
        let pos = get_position(&dt, lat, 0.0);
        let expected = 90.0 - lat.abs();
        assert_approx!(pos.altitude_deg(), expected, 1.0);
    }
}

#[test]
fn test_northern_noon_sun_is_due_south() {
    let dt = Utc.with_ymd_and_hms(2023, 3, 20, 12, 7, 0).unwrap();
    let pos = get_position(&dt, 40.0, 0.0);
    assert_approx!(pos.azimuth, 0.0, deg_to_rad(1.0));
    assert_approx!(pos.azimuth_bearing(), 180.0, 1.0);
}

#[test]
fn test_southern_noon_sun_is_due_north() {
    let dt = Utc.with_ymd_and_hms(2023, 3, 20, 12, 7, 0).unwrap();
    let pos = get_position(&dt, -40.0, 0.0);
    assert!(pos.azimuth.abs() > deg_to_rad(179.0), "azimuth={}", pos.azimuth);
    let bearing = pos.azimuth_bearing();
    assert!(bearing < 1.0 || bearing > 359.0, "bearing={}", bearing);
}

#[test]
fn test_equator_sunrise_is_east() {
    let dt = Utc.with_ymd_and_hms(2023, 3, 20, 6, 0, 0).unwrap();
    let pos = get_position(&dt, 0.0, 0.0);
    assert_approx!(pos.azimuth_bearing(), 90.0, 1.0);
    assert_approx!(pos.altitude_deg(), 0.0, 3.0);
}

// ── Longitude symmetry ──

#[test]
fn test_negated_longitude_only_shifts_hour_angle() {
    let dt = Utc.with_ymd_and_hms(2023, 3, 20, 0, 0, 0).unwrap();
    let d = to_days(&dt);
    let (lat, lon) = (40.7, 74.0);
    let phi = deg_to_rad(lat);
    let c = sun_coords(d);

    let east = get_position(&dt, lat, lon);
    let west = get_position(&dt, lat, -lon);

    let h_east = sidereal_time(d, deg_to_rad(-lon)) - c.right_ascension;
    let h_west = h_east - 2.0 * deg_to_rad(lon);
    assert_approx!(east.azimuth, azimuth(h_east, phi, c.declination), 1e-12);
    assert_approx!(west.azimuth, azimuth(h_west, phi, c.declination), 1e-9);
    assert_approx!(west.altitude, altitude(h_west, phi, c.declination), 1e-9);

    assert_approx!(east.azimuth, -1.7736261798955448, 1e-6);
    assert_approx!(east.altitude, -0.2432285463301276, 1e-6);
}

// ── Sun overhead ──

fn subsolar_point(d: f64) -> (f64, f64) {
    let c = sun_coords(d);
    let lat = rad_to_deg(c.declination);
    // longitude where the local sidereal time equals the sun's right ascension
    let lon = rad_to_deg(c.right_ascension - sidereal_time(d, 0.0));
    (lat, normalize_angle(lon + 180.0) - 180.0)
}

#[test]
fn test_observer_under_the_sun() {
    let pos = position_at_days(8000.346, -21.027805080211074, -127.59273734362796);
    assert!(pos.altitude.is_finite(), "altitude={}", pos.altitude);
    assert_approx!(pos.altitude, PI / 2.0, 1e-6);

    for i in 0..2000 {
        let d = 8000.0 + i as f64 * 0.173;
        let (lat, lon) = subsolar_point(d);
        let pos = position_at_days(d, lat, lon);
        assert!(
            pos.altitude.is_finite() && pos.altitude <= PI / 2.0,
            "d={} lat={} lon={} altitude={}",
            d, lat, lon, pos.altitude
        );
        assert_approx!(pos.altitude, PI / 2.0, 1e-6);
    }
}

// ── Non-finite input ──

#[test]
fn test_nan_latitude_propagates() {
    let dt = Utc.with_ymd_and_hms(2023, 3, 20, 0, 0, 0).unwrap();
    let pos = get_position(&dt, f64::NAN, 0.0);
    assert!(pos.azimuth.is_nan());
    assert!(pos.altitude.is_nan());
}

#[test]
fn test_nan_instant_propagates() {
    let pos = position_at_days(days_from_millis(f64::NAN), 10.0, 10.0);
    assert!(pos.azimuth.is_nan());
    assert!(pos.altitude.is_nan());
}

#[test]
fn test_infinite_longitude_propagates() {
    let pos = position_at_days(0.0, 10.0, f64::INFINITY);
    assert!(!pos.azimuth.is_finite());
    assert!(!pos.altitude.is_finite());
}

// ── Properties ──

proptest! {
    #[test]
    fn prop_angles_in_range(
        millis in -2_000_000_000_000_i64..4_000_000_000_000_i64,
        lat in -90.0_f64..=90.0,
        lon in -180.0_f64..=180.0,
    ) {
        let pos = position_at_days(days_from_millis(millis as f64), lat, lon);
        prop_assert!(pos.altitude >= -PI / 2.0 && pos.altitude <= PI / 2.0);
        prop_assert!(pos.azimuth >= -PI && pos.azimuth <= PI);
    }

    #[test]
    fn prop_deterministic(
        secs in 0_i64..4_000_000_000,
        lat in -90.0_f64..=90.0,
        lon in -180.0_f64..=180.0,
    ) {
        let dt = Utc.timestamp_opt(secs, 0).unwrap();
        let a = get_position(&dt, lat, lon);
        let b = get_position(&dt, lat, lon);
        prop_assert_eq!(a.azimuth.to_bits(), b.azimuth.to_bits());
        prop_assert_eq!(a.altitude.to_bits(), b.altitude.to_bits());
    }
}
