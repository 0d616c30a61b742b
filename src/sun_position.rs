//! Low-order solar ephemeris: Keplerian orbit of the Earth seen from the Sun's
//! side, rotated into equatorial coordinates with a linear mean obliquity.
//!
//! All angles are degrees and all times are day counts from 2000 Jan 0.0 UT
//! (see [`crate::calendar`]).

use crate::angles::{atan2d, cosd, normalize_angle, rad_to_deg, sind};
use crate::types::{EclipticPosition, EquatorialPosition};

/// Fixed number of refinements of the eccentric anomaly.
pub const KEPLER_ITERATIONS: usize = 3;

pub fn mean_anomaly(d: f64) -> f64 {
    normalize_angle(356.0470 + 0.9856002585 * d)
}

pub fn argument_of_perihelion(d: f64) -> f64 {
    282.9404 + 4.70935e-5 * d
}

pub fn eccentricity(d: f64) -> f64 {
    0.016709 - 1.151e-9 * d
}

pub fn obliquity_of_ecliptic(d: f64) -> f64 {
    23.4393 - 3.563e-7 * d
}

/// Solve `E = M + e sin E` for the eccentric anomaly, in degrees.
///
/// Starts from the second-order series and runs exactly
/// [`KEPLER_ITERATIONS`] fixed-point steps regardless of the input.
pub fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let e_deg = rad_to_deg(e);
    let mut ecc = mean_anomaly + e_deg * sind(mean_anomaly) * (1.0 + e * cosd(mean_anomaly));
    for _ in 0..KEPLER_ITERATIONS {
        ecc = mean_anomaly + e_deg * sind(ecc);
    }
    ecc
}

/// True anomaly in degrees and radius vector in AU for an eccentric anomaly.
pub fn true_anomaly(eccentric_anomaly: f64, e: f64) -> (f64, f64) {
    let x = cosd(eccentric_anomaly) - e;
    let y = (1.0 - e * e).sqrt() * sind(eccentric_anomaly);
    (atan2d(y, x), x.hypot(y))
}

pub fn ecliptic_position(d: f64) -> EclipticPosition {
    let m = mean_anomaly(d);
    let e = eccentricity(d);
    let ecc = eccentric_anomaly(m, e);
    let (v, r) = true_anomaly(ecc, e);
    EclipticPosition {
        longitude: normalize_angle(v + argument_of_perihelion(d)),
        distance: r,
    }
}

/// Rotate an ecliptic position into right ascension and declination.
pub fn ecliptic_to_equatorial(ecliptic: &EclipticPosition, obliquity: f64) -> EquatorialPosition {
    let r = ecliptic.distance;
    let x = r * cosd(ecliptic.longitude);
    let y_ecl = r * sind(ecliptic.longitude);
    let y = y_ecl * cosd(obliquity);
    let z = y_ecl * sind(obliquity);
    EquatorialPosition {
        right_ascension: normalize_angle(atan2d(y, x)),
        declination: atan2d(z, x.hypot(y)),
        distance: r,
    }
}

pub fn equatorial_position(d: f64) -> EquatorialPosition {
    ecliptic_to_equatorial(&ecliptic_position(d), obliquity_of_ecliptic(d))
}

/// Greenwich mean sidereal time at 0h UT, in degrees.
///
/// Equals the Sun's mean longitude plus 180 degrees.
pub fn gmst0(d: f64) -> f64 {
    normalize_angle((180.0 + 356.0470 + 282.9404) + (0.9856002585 + 4.70935e-5) * d)
}

/// Apparent angular radius of the Sun in degrees at `distance` AU.
pub fn semi_diameter(distance: f64) -> f64 {
    0.2666 / distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kepler_circular_orbit() {
        for m in [0.0, 45.0, 123.4, 270.0] {
            assert_eq!(eccentric_anomaly(m, 0.0), m);
        }
    }

    #[test]
    fn test_kepler_satisfies_equation() {
        let e = eccentricity(0.0);
        for m in [1.0, 60.0, 179.0, 250.0, 359.0] {
            let ecc = eccentric_anomaly(m, e);
            let residual = ecc - rad_to_deg(e) * sind(ecc) - m;
            assert!(residual.abs() < 1e-7, "m={} residual={}", m, residual);
        }
    }

    #[test]
    fn test_true_anomaly_at_perihelion() {
        let e = 0.0167;
        let (v, r) = true_anomaly(0.0, e);
        assert_eq!(v, 0.0);
        assert!((r - (1.0 - e)).abs() < 1e-12);
    }
}
