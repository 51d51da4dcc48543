pub mod angles;
pub mod config;
pub mod error;
pub mod julian;
pub mod lookangles;
pub mod moon;
pub mod sun;
pub mod telemetry;
pub mod times;
pub mod types;

pub use angles::{
    altitude, astro_refraction, azimuth, declination, deg_to_rad, ecliptic_longitude,
    equation_of_center, normalize_angle, rad_to_deg, right_ascension, sidereal_time,
    solar_mean_anomaly, sun_coords, EARTH_OBLIQUITY,
};

pub use config::TrackerConfig;
pub use error::{Error, Result};
pub use julian::{days_from_millis, from_julian, to_days, to_julian, J1970, J2000};
pub use lookangles::calculate_lookangles;
pub use moon::{get_moon_illumination, get_moon_position, get_moon_times};
pub use sun::{get_position, position_at_days};
pub use telemetry::{flatten_telemetry, flatten_value};
pub use times::{default_time_angles, get_times, get_times_with};

pub use types::{
    EquatorialCoords, GeoCoordinate, LookAngles, MoonCoords, MoonIllumination, MoonPosition,
    MoonTimes, Observer, SunEvent, SunPosition, SunTimes, TelemetryRecord, TimeAngle,
};
