//! Instants of new moon.

use super::{MEAN_SYNODIC_MONTH, normalize_deg};
use crate::time_scales::Tt;

/// JDE of the mean new moon of lunation 0 (2000 January 6).
const LUNATION_EPOCH: f64 = 2451550.09766;

// Periodic corrections of the new moon, Meeus Table 49.A. Each row is
// [coefficient, power of E, nM, nM', nF, nΩ].
#[rustfmt::skip]
static PERIODIC: [[f64; 6]; 25] = [
    // coeff    E    M    M'    F    Ω
    [-0.40720, 0.0, 0.0,  1.0,  0.0, 0.0],
    [ 0.17241, 1.0, 1.0,  0.0,  0.0, 0.0],
    [ 0.01608, 0.0, 0.0,  2.0,  0.0, 0.0],
    [ 0.01039, 0.0, 0.0,  0.0,  2.0, 0.0],
    [ 0.00739, 1.0, -1.0, 1.0,  0.0, 0.0],
    [-0.00514, 1.0, 1.0,  1.0,  0.0, 0.0],
    [ 0.00208, 2.0, 2.0,  0.0,  0.0, 0.0],
    [-0.00111, 0.0, 0.0,  1.0, -2.0, 0.0],
    [-0.00057, 0.0, 0.0,  1.0,  2.0, 0.0],
    [ 0.00056, 1.0, 1.0,  2.0,  0.0, 0.0],
    [-0.00042, 0.0, 0.0,  3.0,  0.0, 0.0],
    [ 0.00042, 1.0, 1.0,  0.0,  2.0, 0.0],
    [ 0.00038, 1.0, 1.0,  0.0, -2.0, 0.0],
    [-0.00024, 1.0, -1.0, 2.0,  0.0, 0.0],
    [-0.00017, 0.0, 0.0,  0.0,  0.0, 1.0],
    [-0.00007, 0.0, 2.0,  1.0,  0.0, 0.0],
    [ 0.00004, 0.0, 0.0,  2.0, -2.0, 0.0],
    [ 0.00004, 0.0, 3.0,  0.0,  0.0, 0.0],
    [ 0.00003, 0.0, 1.0,  1.0, -2.0, 0.0],
    [ 0.00003, 0.0, 0.0,  2.0,  2.0, 0.0],
    [-0.00003, 0.0, 1.0,  1.0,  2.0, 0.0],
    [ 0.00003, 0.0, -1.0, 1.0,  2.0, 0.0],
    [-0.00002, 0.0, -1.0, 1.0, -2.0, 0.0],
    [-0.00002, 0.0, 1.0,  3.0,  0.0, 0.0],
    [ 0.00002, 0.0, 0.0,  4.0,  0.0, 0.0],
];

// Planetary arguments, Meeus ch. 49: [coefficient, A0, A per lunation].
// A1 also has a T² term, handled separately.
#[rustfmt::skip]
static PLANETARY: [[f64; 3]; 14] = [
    [0.000325, 299.77, 0.107408],
    [0.000165, 251.88, 0.016321],
    [0.000164, 251.83, 26.651886],
    [0.000126, 349.42, 36.412478],
    [0.000110, 84.66, 18.206239],
    [0.000062, 141.74, 53.303771],
    [0.000060, 207.14, 2.453732],
    [0.000056, 154.84, 7.306860],
    [0.000047, 34.52, 27.261239],
    [0.000042, 207.19, 0.121824],
    [0.000040, 291.34, 1.844379],
    [0.000037, 161.72, 24.198154],
    [0.000035, 239.56, 25.513099],
    [0.000023, 331.55, 3.592518],
];

/// Instant of the true new moon of lunation `k`, counted from the new moon of
/// 2000 January 6 (negative before it).
///
/// # Example
///
/// ```
/// use festival_clock::astronomy::moon::new_moon;
///
/// // 1977 February 18, Meeus example 49.a
/// let tt = new_moon(-283);
/// assert!((tt.0 - 2443192.65118).abs() < 1e-4);
/// ```
pub fn new_moon(k: i32) -> Tt {
    let k = f64::from(k);
    let t = k / 1236.85;
    let (t2, t3, t4) = (t * t, t * t * t, t * t * t * t);

    let mean = LUNATION_EPOCH + MEAN_SYNODIC_MONTH * k + 0.00015437 * t2 - 0.000000150 * t3
        + 0.00000000073 * t4;

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let m = normalize_deg(2.5534 + 29.10535670 * k - 0.0000014 * t2 - 0.00000011 * t3);
    let m_moon = normalize_deg(
        201.5643 + 385.81693528 * k + 0.0107582 * t2 + 0.00001238 * t3 - 0.000000058 * t4,
    );
    let f = normalize_deg(
        160.7108 + 390.67050284 * k - 0.0016118 * t2 - 0.00000227 * t3 + 0.000000011 * t4,
    );
    let omega = normalize_deg(124.7746 - 1.56375588 * k + 0.0020672 * t2 + 0.00000215 * t3);

    let periodic: f64 = PERIODIC
        .iter()
        .map(|&[coeff, e_pow, n_m, n_mm, n_f, n_om]| {
            let arg = n_m * m + n_mm * m_moon + n_f * f + n_om * omega;
            coeff * e.powf(e_pow) * arg.to_radians().sin()
        })
        .sum();

    let planetary: f64 = PLANETARY
        .iter()
        .enumerate()
        .map(|(i, &[coeff, a0, a1])| {
            let mut arg = a0 + a1 * k;
            if i == 0 {
                arg -= 0.009173 * t2;
            }
            coeff * arg.to_radians().sin()
        })
        .sum();

    Tt(mean + periodic + planetary)
}

/// Lunation number of the last new moon at or before `tt`.
///
/// # Example
///
/// ```
/// use festival_clock::astronomy::moon::{new_moon, lunation_at_or_before};
/// use festival_clock::time_scales::Tt;
///
/// let k = lunation_at_or_before(Tt(2451545.0));
/// assert_eq!(-1, k);
/// assert!(new_moon(k).0 <= 2451545.0 && new_moon(k + 1).0 > 2451545.0);
/// ```
pub fn lunation_at_or_before(tt: Tt) -> i32 {
    let mut k = ((tt.0 - LUNATION_EPOCH) / MEAN_SYNODIC_MONTH).floor() as i32;
    while new_moon(k).0 > tt.0 {
        k -= 1;
    }
    while new_moon(k + 1).0 <= tt.0 {
        k += 1;
    }
    k
}
