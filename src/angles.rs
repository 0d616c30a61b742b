pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn sind(deg: f64) -> f64 {
    deg_to_rad(deg).sin()
}

pub fn cosd(deg: f64) -> f64 {
    deg_to_rad(deg).cos()
}

pub fn acosd(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

pub fn atan2d(y: f64, x: f64) -> f64 {
    rad_to_deg(y.atan2(x))
}

/// Reduce an angle to [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.0
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Reduce an angle to [-180, 180).
pub fn normalize_angle_180(angle: f64) -> f64 {
    normalize_angle(angle + 180.0) - 180.0
}

/// Reduce a time of day to [0, 24).
pub fn normalize_hours(hours: f64) -> f64 {
    let h = hours.rem_euclid(24.0);
    if h >= 24.0 {
        0.0
    } else {
        h
    }
}

pub fn degrees_to_hours(deg: f64) -> f64 {
    deg / DEGREES_PER_HOUR
}

/// Split fractional hours into whole hours and truncated minutes.
pub fn ut_to_hm(ut: f64) -> (u32, u32) {
    let ut = normalize_hours(ut);
    let h = ut.floor();
    let m = (60.0 * (ut - h)).floor().min(59.0);
    (h as u32, m as u32)
}
