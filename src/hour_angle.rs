//! Hour angle at which the Sun reaches a given altitude.
//!
//! The cosine of the hour angle follows from the spherical triangle
//! pole-zenith-Sun. Its range decides the circumpolar cases: below -1 the
//! Sun never gets down to the altitude, above +1 it never gets up to it.
//! Exactly -1 and +1 are tangent crossings and stay in the crossing branch.

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angles::{acosd, cosd, degrees_to_hours, sind};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HourAngle {
    /// Semi-diurnal arc in degrees, [0, 180].
    Crossing(f64),
    AlwaysAbove,
    AlwaysBelow,
}

impl HourAngle {
    /// Hours the Sun spends above the altitude: 24 for always above, 0 for always below.
    pub fn arc_hours(&self) -> f64 {
        match *self {
            HourAngle::Crossing(h) => 2.0 * degrees_to_hours(h),
            HourAngle::AlwaysAbove => 24.0,
            HourAngle::AlwaysBelow => 0.0,
        }
    }
}

pub fn cos_hour_angle(latitude: f64, declination: f64, altitude: f64) -> f64 {
    (sind(altitude) - sind(latitude) * sind(declination)) / (cosd(latitude) * cosd(declination))
}

/// Classify a hour-angle cosine. A NaN cosine counts as always below.
pub fn classify(cos_h: f64) -> HourAngle {
    let result = if cos_h < -1.0 {
        HourAngle::AlwaysAbove
    } else if cos_h > 1.0 || cos_h.is_nan() {
        HourAngle::AlwaysBelow
    } else if cos_h == -1.0 {
        HourAngle::Crossing(180.0)
    } else {
        HourAngle::Crossing(acosd(cos_h))
    };
    trace!("cos(H) = {} -> {:?}", cos_h, result);
    result
}

pub fn solve(latitude: f64, declination: f64, altitude: f64) -> HourAngle {
    classify(cos_hour_angle(latitude, declination, altitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries_are_crossings() {
        let expected = [(1.0, 0.0), (-1.0, 180.0), (0.0, 90.0)];
        for (cos_h, h) in expected {
            match classify(cos_h) {
                HourAngle::Crossing(got) => {
                    assert!((got - h).abs() < 1e-12, "{} -> {}", cos_h, got)
                }
                other => panic!("{} -> {:?}", cos_h, other),
            }
        }
    }

    #[test]
    fn test_classify_nan() {
        assert_eq!(classify(f64::NAN), HourAngle::AlwaysBelow);
    }

    #[test]
    fn test_arc_hours() {
        assert_eq!(HourAngle::Crossing(90.0).arc_hours(), 12.0);
        assert_eq!(HourAngle::Crossing(180.0).arc_hours(), 24.0);
        assert_eq!(HourAngle::AlwaysAbove.arc_hours(), 24.0);
        assert_eq!(HourAngle::AlwaysBelow.arc_hours(), 0.0);
    }
}
