use chrono::{DateTime, TimeZone, Utc};

pub const DAY_MS: f64 = 86_400_000.0;
pub const J1970: f64 = 2_440_588.0;
pub const J2000: f64 = 2_451_545.0;

pub fn to_julian<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    julian_from_millis(dt.timestamp_millis() as f64)
}

pub fn julian_from_millis(millis: f64) -> f64 {
    millis / DAY_MS - 0.5 + J1970
}

/// Inverse of [`to_julian`], rounded to the nearest millisecond. A
/// non-finite or unrepresentable Julian date gives `None`.
pub fn from_julian(j: f64) -> Option<DateTime<Utc>> {
    let millis = ((j + 0.5 - J1970) * DAY_MS).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

pub fn to_days<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    to_julian(dt) - J2000
}

pub fn days_from_millis(millis: f64) -> f64 {
    julian_from_millis(millis) - J2000
}

pub fn hours_later<Tz: TimeZone>(dt: &DateTime<Tz>, hours: f64) -> Option<DateTime<Utc>> {
    let millis = dt.timestamp_millis() as f64 + hours * DAY_MS / 24.0;
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis.round() as i64)
}
