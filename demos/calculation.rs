use chrono::TimeZone;
use chrono_tz::Europe::London;

use sondehub_astro::{
    calculate_lookangles, get_moon_illumination, get_moon_position, get_moon_times,
    get_position, get_times, rad_to_deg, Observer,
};

fn main() {
    let chase = Observer::new(52.2135, 0.0964, 20.0);
    let payload = Observer::new(52.41, 0.52, 28_500.0);

    let dt = London.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();

    let sun = get_position(&dt, chase.latitude, chase.longitude);
    let times = get_times(&dt, chase.latitude, chase.longitude, chase.altitude_m);
    let moon = get_moon_position(&dt, chase.latitude, chase.longitude);
    let illum = get_moon_illumination(&dt);
    let moon_times = get_moon_times(&dt, chase.latitude, chase.longitude);
    let look = calculate_lookangles(&chase, &payload);

    println!("=== Sun / Moon / Look Angles ===");
    println!(
        "Observer: ({:.4}°, {:.4}°, {:.0} m)",
        chase.latitude, chase.longitude, chase.altitude_m
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Sun ---");
    println!("Azimuth: {:.4} rad (from south, toward west)", sun.azimuth);
    println!("Bearing: {:.2}° (0°=N, 90°=E)", sun.azimuth_bearing());
    println!("Altitude: {:.2}°", sun.altitude_deg());
    println!("Solar noon: {:?}", times.solar_noon);
    println!("Sunrise: {:?}", times.get("sunrise"));
    println!("Sunset: {:?}", times.get("sunset"));
    println!();
    println!("--- Moon ---");
    println!("Azimuth: {:.2}°", rad_to_deg(moon.azimuth));
    println!("Altitude: {:.2}°", rad_to_deg(moon.altitude));
    println!("Distance: {:.0} km", moon.distance_km);
    println!("Illuminated: {:.1}%", illum.fraction * 100.0);
    println!("Rise: {:?}  Set: {:?}", moon_times.rise, moon_times.set);
    println!();
    println!("--- Payload ---");
    println!("Elevation: {:.2}°", look.elevation_deg);
    println!("Azimuth: {:.2}°", look.azimuth_deg);
    println!("Range: {:.1} km", look.range_m / 1000.0);
    println!(
        "Ground distance: {:.1} km",
        look.great_circle_distance_m / 1000.0
    );
}
