use thiserror::Error;

pub type Result<T> = std::result::Result<T, SunrisetError>;

/// Failures of the checked constructors and chrono conversions.
///
/// The solar computations themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SunrisetError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("UT hours {0} do not name a time of day")]
    InvalidTime(f64),
}
