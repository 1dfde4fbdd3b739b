//! Positions of the sun and phases of the moon, precise enough to fix the
//! civil date of a solar term or a new moon.
//!
//! All instants are Julian dates in dynamical time ([`Tt`]).
//!
//! Algorithms follow Meeus, *Astronomical Algorithms* (2nd ed.): the solar
//! longitude uses the abbreviated VSOP87 series of Appendix III (about one
//! arcsecond, i.e. under half a minute of time), the new moons use the
//! periodic and planetary corrections of Chapter 49 (a few seconds over the
//! supported span).

use crate::time_scales::Tt;

pub mod moon;
pub mod sun;

/// JD of the J2000.0 epoch.
pub const J2000: f64 = 2451545.0;
/// Mean length of the tropical year, in days.
pub const MEAN_TROPICAL_YEAR: f64 = 365.242189;
/// Mean length of the synodic month, in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530588861;

/// Julian centuries since J2000.0.
pub fn centuries(tt: Tt) -> f64 {
    (tt.0 - J2000) / 36525.0
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}
