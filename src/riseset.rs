//! Sunrise, sunset and twilight boundaries for a date and place.
//!
//! Every boundary is evaluated with the Sun's position at local mean noon of
//! the requested date. Times are UT hours in [0, 24).

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use log::debug;

use crate::angles::{degrees_to_hours, normalize_angle, normalize_angle_180, normalize_hours};
use crate::calendar::local_noon_day_count;
use crate::error::{Result, SunrisetError};
use crate::hour_angle::{self, HourAngle};
use crate::sun_position::{equatorial_position, gmst0, semi_diameter};
use crate::types::{CalendarDate, CrossingResult, DayReport, GeoCoordinate, Horizon, Twilight};

/// Upper limb 35 arcminutes below the horizon, the empirical refraction allowance.
pub const SUNRISE_ALTITUDE: f64 = -35.0 / 60.0;
pub const CIVIL_TWILIGHT_ALTITUDE: f64 = -6.0;
pub const NAUTICAL_TWILIGHT_ALTITUDE: f64 = -12.0;
pub const ASTRONOMICAL_TWILIGHT_ALTITUDE: f64 = -18.0;

struct NoonSun {
    transit: f64,
    declination: f64,
    distance: f64,
}

fn noon_sun(date: CalendarDate, coord: GeoCoordinate) -> NoonSun {
    let d = local_noon_day_count(date, coord.longitude);
    let sidereal = normalize_angle(gmst0(d) + 180.0 + coord.longitude);
    let sun = equatorial_position(d);
    NoonSun {
        transit: 12.0 - degrees_to_hours(normalize_angle_180(sidereal - sun.right_ascension)),
        declination: sun.declination,
        distance: sun.distance,
    }
}

fn target_altitude(horizon: Horizon, distance: f64) -> f64 {
    if horizon.upper_limb {
        horizon.altitude - semi_diameter(distance)
    } else {
        horizon.altitude
    }
}

fn solve_at(date: CalendarDate, coord: GeoCoordinate, horizon: Horizon) -> (f64, HourAngle) {
    let sun = noon_sun(date, coord);
    let altitude = target_altitude(horizon, sun.distance);
    let ha = hour_angle::solve(coord.latitude, sun.declination, altitude);
    if !matches!(ha, HourAngle::Crossing(_)) {
        debug!(
            "{:?} at altitude {:.3} for {:?} {:?}: declination {:.3}",
            ha, altitude, date, coord, sun.declination
        );
    }
    (sun.transit, ha)
}

/// UT of the Sun's transit across the local meridian.
pub fn solar_noon(date: CalendarDate, coord: GeoCoordinate) -> f64 {
    normalize_hours(noon_sun(date, coord).transit)
}

/// Rise and set around `transit` for a solved hour angle.
///
/// A tangent crossing (H of 0 or 180 degrees) yields bit-identical rise and set.
pub fn crossing_times(transit: f64, ha: HourAngle) -> CrossingResult {
    match ha {
        HourAngle::Crossing(h) if h >= 180.0 => {
            let t = normalize_hours(transit + 12.0);
            CrossingResult::Crossing { rise: t, set: t }
        }
        HourAngle::Crossing(h) => {
            let half_arc = degrees_to_hours(h);
            CrossingResult::Crossing {
                rise: normalize_hours(transit - half_arc),
                set: normalize_hours(transit + half_arc),
            }
        }
        HourAngle::AlwaysAbove => CrossingResult::AlwaysAbove,
        HourAngle::AlwaysBelow => CrossingResult::AlwaysBelow,
    }
}

pub fn sun_rise_set_at(
    date: CalendarDate,
    coord: GeoCoordinate,
    horizon: Horizon,
) -> CrossingResult {
    let (transit, ha) = solve_at(date, coord, horizon);
    crossing_times(transit, ha)
}

/// Hours between rise and set; 24 when the Sun never goes below `horizon`,
/// 0 when it never comes above.
pub fn day_length_at(date: CalendarDate, coord: GeoCoordinate, horizon: Horizon) -> f64 {
    solve_at(date, coord, horizon).1.arc_hours()
}

pub fn twilight(date: CalendarDate, coord: GeoCoordinate, twilight: Twilight) -> CrossingResult {
    sun_rise_set_at(date, coord, twilight.horizon())
}

pub fn twilight_length(date: CalendarDate, coord: GeoCoordinate, twilight: Twilight) -> f64 {
    day_length_at(date, coord, twilight.horizon())
}

pub fn sun_rise_set(date: CalendarDate, coord: GeoCoordinate) -> CrossingResult {
    sun_rise_set_at(date, coord, Horizon::VISUAL)
}

pub fn civil_twilight(date: CalendarDate, coord: GeoCoordinate) -> CrossingResult {
    sun_rise_set_at(date, coord, Horizon::CIVIL)
}

pub fn nautical_twilight(date: CalendarDate, coord: GeoCoordinate) -> CrossingResult {
    sun_rise_set_at(date, coord, Horizon::NAUTICAL)
}

pub fn astronomical_twilight(date: CalendarDate, coord: GeoCoordinate) -> CrossingResult {
    sun_rise_set_at(date, coord, Horizon::ASTRONOMICAL)
}

pub fn day_length(date: CalendarDate, coord: GeoCoordinate) -> f64 {
    day_length_at(date, coord, Horizon::VISUAL)
}

pub fn day_civil_twilight_length(date: CalendarDate, coord: GeoCoordinate) -> f64 {
    day_length_at(date, coord, Horizon::CIVIL)
}

pub fn day_nautical_twilight_length(date: CalendarDate, coord: GeoCoordinate) -> f64 {
    day_length_at(date, coord, Horizon::NAUTICAL)
}

pub fn day_astronomical_twilight_length(date: CalendarDate, coord: GeoCoordinate) -> f64 {
    day_length_at(date, coord, Horizon::ASTRONOMICAL)
}

pub fn day_report(date: CalendarDate, coord: GeoCoordinate) -> DayReport {
    DayReport {
        date,
        coordinate: coord,
        solar_noon: solar_noon(date, coord),
        sun_rise_set: sun_rise_set(date, coord),
        civil_twilight: civil_twilight(date, coord),
        nautical_twilight: nautical_twilight(date, coord),
        astronomical_twilight: astronomical_twilight(date, coord),
        day_length: day_length(date, coord),
        civil_length: day_civil_twilight_length(date, coord),
        nautical_length: day_nautical_twilight_length(date, coord),
        astronomical_length: day_astronomical_twilight_length(date, coord),
    }
}

/// Instant on `date` at `ut` hours, for callers that schedule on a result.
pub fn ut_to_datetime(date: CalendarDate, ut: f64) -> Result<DateTime<Utc>> {
    let day = date.to_naive_date().ok_or(SunrisetError::InvalidDate {
        year: date.year,
        month: date.month,
        day: date.day,
    })?;
    if !(0.0..24.0).contains(&ut) {
        return Err(SunrisetError::InvalidTime(ut));
    }
    // Rounding near 24h must not roll over into the next day.
    let millis = ((ut * 3_600_000.0).round() as i64).min(86_399_999);
    let naive = day.and_time(NaiveTime::MIN) + Duration::milliseconds(millis);
    Ok(Utc.from_utc_datetime(&naive))
}
