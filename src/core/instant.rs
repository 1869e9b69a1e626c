use chrono::{DateTime, Datelike, FixedOffset, Utc};

use crate::error::{GraphError, GraphResult};

pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Fixed Sunday-first day-name table used by the time axis.
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Floors an instant to the preceding local midnight under a fixed UTC offset.
#[must_use]
pub fn floor_local_day(time: f64, utc_offset_seconds: i32) -> f64 {
    let offset = f64::from(utc_offset_seconds);
    ((time + offset) / SECONDS_PER_DAY).floor() * SECONDS_PER_DAY - offset
}

/// Seconds elapsed between the preceding local midnight and `time`.
#[must_use]
pub fn local_seconds_of_day(time: f64, utc_offset_seconds: i32) -> f64 {
    time - floor_local_day(time, utc_offset_seconds)
}

/// Sunday-first weekday index (0 = Sunday) of the local calendar day containing `time`.
pub fn local_weekday_index(time: f64, utc_offset_seconds: i32) -> GraphResult<usize> {
    if !time.is_finite() {
        return Err(GraphError::InvalidData(
            "weekday lookup requires a finite instant".to_owned(),
        ));
    }

    let offset = FixedOffset::east_opt(utc_offset_seconds).ok_or_else(|| {
        GraphError::InvalidData("utc offset must be within +/- 24 hours".to_owned())
    })?;
    let moment = DateTime::from_timestamp(time.floor() as i64, 0).ok_or_else(|| {
        GraphError::InvalidData("instant is outside the representable date range".to_owned())
    })?;

    Ok(moment
        .with_timezone(&offset)
        .weekday()
        .num_days_from_sunday() as usize)
}

/// Three-letter English day name of the local calendar day containing `time`.
pub fn local_day_name(time: f64, utc_offset_seconds: i32) -> GraphResult<&'static str> {
    Ok(DAY_NAMES[local_weekday_index(time, utc_offset_seconds)?])
}
