use sunriset::angles::normalize_angle_180;
use sunriset::calendar::day_count;
use sunriset::sun_position::*;
use sunriset::types::{CalendarDate, EclipticPosition};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn d(year: i32, month: i32, day: i32) -> f64 {
    day_count(CalendarDate::new(year, month, day))
}

// ── Orbital elements ──

#[test]
fn test_elements_at_epoch() {
    assert_approx!(mean_anomaly(0.0), 356.0470, 1e-12);
    assert_approx!(argument_of_perihelion(0.0), 282.9404, 1e-12);
    assert_approx!(eccentricity(0.0), 0.016709, 1e-15);
    assert_approx!(obliquity_of_ecliptic(0.0), 23.4393, 1e-12);
}

#[test]
fn test_mean_anomaly_normalized() {
    for day in (-20_000..40_000).step_by(97) {
        let m = mean_anomaly(day as f64);
        assert!((0.0..360.0).contains(&m), "d={} M={}", day, m);
    }
}

// ── Ecliptic position ──

#[test]
fn test_longitude_at_equinox_and_solstices() {
    let equinox = ecliptic_position(d(2023, 3, 20));
    assert_approx!(normalize_angle_180(equinox.longitude), 0.0, 1.0);
    let june = ecliptic_position(d(2023, 6, 21));
    assert_approx!(june.longitude, 90.0, 1.0);
    let december = ecliptic_position(d(2023, 12, 22));
    assert_approx!(december.longitude, 270.0, 1.0);
}

#[test]
fn test_distance_perihelion_aphelion() {
    assert_approx!(ecliptic_position(d(2023, 1, 4)).distance, 0.9833, 0.0005);
    assert_approx!(ecliptic_position(d(2023, 7, 6)).distance, 1.0167, 0.0005);
}

#[test]
fn test_longitude_always_normalized() {
    for day in (-10_000..20_000).step_by(13) {
        let lon = ecliptic_position(day as f64).longitude;
        assert!((0.0..360.0).contains(&lon), "d={} lon={}", day, lon);
    }
}

// ── Equatorial transform ──

#[test]
fn test_declination_at_solstices() {
    assert_approx!(equatorial_position(d(2023, 6, 21)).declination, 23.44, 0.05);
    assert_approx!(equatorial_position(d(2023, 12, 22)).declination, -23.44, 0.05);
    assert_approx!(equatorial_position(d(2023, 3, 20)).declination, 0.0, 0.5);
}

#[test]
fn test_declination_bounded_by_obliquity() {
    for day in 8400..8800 {
        let dd = day as f64 + 0.5;
        let dec = equatorial_position(dd).declination;
        assert!(dec.abs() <= obliquity_of_ecliptic(dd) + 1e-9, "d={} dec={}", day, dec);
    }
}

#[test]
fn test_right_ascension_quadrants() {
    let cases: &[(f64, f64)] = &[(10.0, 0.0), (100.0, 90.0), (200.0, 180.0), (300.0, 270.0)];
    for &(lon, quadrant_start) in cases {
        let eq = ecliptic_to_equatorial(
            &EclipticPosition {
                longitude: lon,
                distance: 1.0,
            },
            23.4393,
        );
        assert!(
            eq.right_ascension >= quadrant_start && eq.right_ascension < quadrant_start + 90.0,
            "lon={} ra={}",
            lon, eq.right_ascension
        );
    }
}

#[test]
fn test_cardinal_longitudes_map_exactly() {
    let eq = ecliptic_to_equatorial(
        &EclipticPosition {
            longitude: 90.0,
            distance: 1.0,
        },
        23.4393,
    );
    assert_approx!(eq.right_ascension, 90.0, 1e-9);
    assert_approx!(eq.declination, 23.4393, 1e-9);
}

#[test]
fn test_distance_preserved() {
    let ecl = ecliptic_position(d(2023, 9, 1));
    let eq = ecliptic_to_equatorial(&ecl, 23.4393);
    assert_eq!(eq.distance, ecl.distance);
}

// ── Sidereal time ──

#[test]
fn test_gmst0_tracks_mean_sun() {
    // GMST0 minus 180 is the Sun's mean longitude, M + w.
    for day in [0.0, 1000.5, 8573.5] {
        let mean_longitude = mean_anomaly(day) + argument_of_perihelion(day);
        assert_approx!(normalize_angle_180(gmst0(day) - 180.0 - mean_longitude), 0.0, 1e-6);
    }
}

#[test]
fn test_semi_diameter() {
    assert_approx!(semi_diameter(1.0), 0.2666, 1e-12);
    assert!(semi_diameter(0.9833) > semi_diameter(1.0167));
}
