use std::f64::consts::{PI, TAU};

/// Normalize a distance into `[0, len)` for closed paths. Zero-length paths map to 0.
pub(crate) fn wrap_distance(d: f64, len: f64) -> f64 {
    if len <= 0.0 {
        return 0.0;
    }
    let w = ((d % len) + len) % len;
    // `((d % L) + L) % L` can round up to exactly L for tiny negative d.
    if w >= len { 0.0 } else { w }
}

/// Wrap an angle difference into `(-PI, PI]`.
pub(crate) fn wrap_angle_delta(delta: f64) -> f64 {
    let mut d = delta.rem_euclid(TAU);
    if d > PI {
        d -= TAU;
    }
    d
}

/// Interpolate between two angles along the shortest arc.
pub(crate) fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    a + wrap_angle_delta(b - a) * t
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
