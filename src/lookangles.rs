use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::types::{LookAngles, Observer};

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Look angles from `observer` (e.g. a chase car) to `target` (the payload),
/// on a spherical Earth.
pub fn calculate_lookangles(observer: &Observer, target: &Observer) -> LookAngles {
    let c_lat = deg_to_rad(observer.latitude);
    let p_lat = deg_to_rad(target.latitude);
    let d_lon = deg_to_rad(target.longitude - observer.longitude);

    let sa = p_lat.cos() * d_lon.sin();
    let sb = c_lat.cos() * p_lat.sin() - c_lat.sin() * p_lat.cos() * d_lon.cos();
    let bearing = rad_to_deg(sa.atan2(sb));

    let aa = sa.hypot(sb);
    let ab = c_lat.sin() * p_lat.sin() + c_lat.cos() * p_lat.cos() * d_lon.cos();
    let angle_at_centre = aa.atan2(ab);

    let ta = EARTH_RADIUS_M + observer.altitude_m;
    let tb = EARTH_RADIUS_M + target.altitude_m;
    let ea = angle_at_centre.cos() * tb - ta;
    let eb = angle_at_centre.sin() * tb;

    LookAngles {
        elevation_deg: rad_to_deg(ea.atan2(eb)),
        azimuth_deg: normalize_angle(bearing),
        range_m: (ta * ta + tb * tb - 2.0 * tb * ta * angle_at_centre.cos()).sqrt(),
        great_circle_distance_m: angle_at_centre * EARTH_RADIUS_M,
    }
}
