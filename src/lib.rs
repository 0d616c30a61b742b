pub mod angles;
pub mod calendar;
pub mod error;
pub mod hour_angle;
pub mod riseset;
pub mod sun_position;
pub mod types;

pub use angles::{
    deg_to_rad, normalize_angle, normalize_angle_180, normalize_hours, rad_to_deg, ut_to_hm,
    DEGREES_PER_HOUR,
};

pub use calendar::{day_count, days_since_2000_jan_0, local_noon_day_count};

pub use error::{Result, SunrisetError};

pub use hour_angle::HourAngle;

pub use riseset::{
    astronomical_twilight, civil_twilight, crossing_times, day_astronomical_twilight_length,
    day_civil_twilight_length, day_length, day_length_at, day_nautical_twilight_length,
    day_report, nautical_twilight, solar_noon, sun_rise_set, sun_rise_set_at, twilight,
    twilight_length, ut_to_datetime, ASTRONOMICAL_TWILIGHT_ALTITUDE, CIVIL_TWILIGHT_ALTITUDE,
    NAUTICAL_TWILIGHT_ALTITUDE, SUNRISE_ALTITUDE,
};

pub use sun_position::{
    ecliptic_position, ecliptic_to_equatorial, equatorial_position, gmst0, KEPLER_ITERATIONS,
};

pub use types::{
    CalendarDate, CrossingResult, DayReport, EclipticPosition, EquatorialPosition, GeoCoordinate,
    Horizon, Twilight,
};
