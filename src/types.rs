use chrono::{Datelike, NaiveDate, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SunrisetError};
use crate::riseset::{
    ASTRONOMICAL_TWILIGHT_ALTITUDE, CIVIL_TWILIGHT_ALTITUDE, NAUTICAL_TWILIGHT_ALTITUDE,
    SUNRISE_ALTITUDE,
};

/// A Gregorian calendar date with no time-of-day or timezone.
///
/// `new` performs no validation; nonsense fields give deterministic
/// nonsense results. Use `try_new` when the date comes from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self> {
        let date = Self::new(year, month, day);
        match date.to_naive_date() {
            Some(_) => Ok(date),
            None => Err(SunrisetError::InvalidDate { year, month, day }),
        }
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        Utc::now().date_naive().into()
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

/// Observer position in degrees, north and east positive.
///
/// Values outside [-90, 90] / [-180, 180] are not rejected by `new`;
/// the formulas stay finite but the results mean nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SunrisetError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SunrisetError::LongitudeOutOfRange(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipticPosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude: f64,
    /// Sun-Earth distance in AU.
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialPosition {
    /// Right ascension in degrees, [0, 360).
    pub right_ascension: f64,
    pub declination: f64,
    /// Sun-Earth distance in AU.
    pub distance: f64,
}

/// Altitude the Sun must reach for a rise/set boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Horizon {
    /// Degrees above the geometric horizon; negative means below.
    pub altitude: f64,
    /// Measure `altitude` at the Sun's upper limb instead of its centre.
    pub upper_limb: bool,
}

impl Horizon {
    pub const VISUAL: Horizon = Horizon::new(SUNRISE_ALTITUDE, true);
    pub const CIVIL: Horizon = Horizon::new(CIVIL_TWILIGHT_ALTITUDE, false);
    pub const NAUTICAL: Horizon = Horizon::new(NAUTICAL_TWILIGHT_ALTITUDE, false);
    pub const ASTRONOMICAL: Horizon = Horizon::new(ASTRONOMICAL_TWILIGHT_ALTITUDE, false);

    pub const fn new(altitude: f64, upper_limb: bool) -> Self {
        Self {
            altitude,
            upper_limb,
        }
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::VISUAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Twilight {
    Visual,
    Civil,
    Nautical,
    Astronomical,
}

impl Twilight {
    pub const ALL: [Twilight; 4] = [
        Twilight::Visual,
        Twilight::Civil,
        Twilight::Nautical,
        Twilight::Astronomical,
    ];

    pub fn horizon(self) -> Horizon {
        match self {
            Twilight::Visual => Horizon::VISUAL,
            Twilight::Civil => Horizon::CIVIL,
            Twilight::Nautical => Horizon::NAUTICAL,
            Twilight::Astronomical => Horizon::ASTRONOMICAL,
        }
    }

    /// Degrees the Sun sinks below the geometric horizon at this boundary.
    ///
    /// For `Visual` this is the 35 arcminute upper-limb altitude only. The
    /// Sun's centre sits a further semi-diameter (about 0.27 degrees, varying
    /// with distance) lower, for an effective centre depression near 0.85.
    pub fn depression(self) -> f64 {
        -self.horizon().altitude
    }
}

/// Outcome of solving for the crossing of one boundary on one day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CrossingResult {
    /// Rise and set in UT hours, each in [0, 24).
    Crossing { rise: f64, set: f64 },
    /// The Sun stays above the boundary all day.
    AlwaysAbove,
    /// The Sun stays below the boundary all day.
    AlwaysBelow,
}

impl CrossingResult {
    /// Integer status: 0 crossing, +1 always above, -1 always below.
    pub fn status(&self) -> i32 {
        match self {
            CrossingResult::Crossing { .. } => 0,
            CrossingResult::AlwaysAbove => 1,
            CrossingResult::AlwaysBelow => -1,
        }
    }

    pub fn times(&self) -> Option<(f64, f64)> {
        match *self {
            CrossingResult::Crossing { rise, set } => Some((rise, set)),
            CrossingResult::AlwaysAbove | CrossingResult::AlwaysBelow => None,
        }
    }

    pub fn is_crossing(&self) -> bool {
        matches!(self, CrossingResult::Crossing { .. })
    }
}

/// Everything known about one date and place, one entry per boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayReport {
    pub date: CalendarDate,
    pub coordinate: GeoCoordinate,
    /// UT hour of meridian transit.
    pub solar_noon: f64,
    pub sun_rise_set: CrossingResult,
    pub civil_twilight: CrossingResult,
    pub nautical_twilight: CrossingResult,
    pub astronomical_twilight: CrossingResult,
    pub day_length: f64,
    pub civil_length: f64,
    pub nautical_length: f64,
    pub astronomical_length: f64,
}

impl DayReport {
    pub fn crossing(&self, twilight: Twilight) -> CrossingResult {
        match twilight {
            Twilight::Visual => self.sun_rise_set,
            Twilight::Civil => self.civil_twilight,
            Twilight::Nautical => self.nautical_twilight,
            Twilight::Astronomical => self.astronomical_twilight,
        }
    }

    pub fn length(&self, twilight: Twilight) -> f64 {
        match twilight {
            Twilight::Visual => self.day_length,
            Twilight::Civil => self.civil_length,
            Twilight::Nautical => self.nautical_length,
            Twilight::Astronomical => self.astronomical_length,
        }
    }

    /// Hours of twilight on each side of the day, morning or evening.
    pub fn twilight_duration(&self, twilight: Twilight) -> f64 {
        (self.length(twilight) - self.day_length) / 2.0
    }
}
