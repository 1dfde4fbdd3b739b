//! Apparent geocentric longitude of the sun and the instants of solar terms.

use super::{MEAN_TROPICAL_YEAR, centuries, normalize_deg, normalize_to_pm180};
use crate::time_scales::Tt;

/// Number of solar terms in a year.
pub const TERMS_PER_YEAR: usize = 24;

/// Ecliptic longitude of solar term 0 (the winter solstice), in degrees.
pub const FIRST_TERM_LONGITUDE: f64 = 270.0;

// Abbreviated VSOP87 series for the heliocentric longitude and radius vector
// of the Earth, Meeus Appendix III. Each row is [A, B, C] contributing
// A·cos(B + C·τ), A in 1e-8 rad (or AU), τ in Julian millennia.
#[rustfmt::skip]
static L0: [[f64; 3]; 64] = [
    [175347046.0, 0.0, 0.0],
    [3341656.0, 4.6692568, 6283.0758500],
    [34894.0, 4.62610, 12566.15170],
    [3497.0, 2.7441, 5753.3849],
    [3418.0, 2.8289, 3.5231],
    [3136.0, 3.6277, 77713.7715],
    [2676.0, 4.4181, 7860.4194],
    [2343.0, 6.1352, 3930.2097],
    [1324.0, 0.7425, 11506.7698],
    [1273.0, 2.0371, 529.6910],
    [1199.0, 1.1096, 1577.3435],
    [990.0, 5.233, 5884.927],
    [902.0, 2.045, 26.298],
    [857.0, 3.508, 398.149],
    [780.0, 1.179, 5223.694],
    [753.0, 2.533, 5507.553],
    [505.0, 4.583, 18849.228],
    [492.0, 4.205, 775.523],
    [357.0, 2.920, 0.067],
    [317.0, 5.849, 11790.629],
    [284.0, 1.899, 796.298],
    [271.0, 0.315, 10977.079],
    [243.0, 0.345, 5486.778],
    [206.0, 4.806, 2544.314],
    [205.0, 1.869, 5573.143],
    [202.0, 2.458, 6069.777],
    [156.0, 0.833, 213.299],
    [132.0, 3.411, 2942.463],
    [126.0, 1.083, 20.775],
    [115.0, 0.645, 0.980],
    [103.0, 0.636, 4694.003],
    [102.0, 0.976, 15720.839],
    [102.0, 4.267, 7.114],
    [99.0, 6.21, 2146.17],
    [98.0, 0.68, 155.42],
    [86.0, 5.98, 161000.69],
    [85.0, 1.30, 6275.96],
    [85.0, 3.67, 71430.70],
    [80.0, 1.81, 17260.15],
    [79.0, 3.04, 12036.46],
    [75.0, 1.76, 5088.63],
    [74.0, 3.50, 3154.69],
    [74.0, 4.68, 801.82],
    [70.0, 0.83, 9437.76],
    [62.0, 3.98, 8827.39],
    [61.0, 1.82, 7084.90],
    [57.0, 2.78, 6286.60],
    [56.0, 4.39, 14143.50],
    [56.0, 3.47, 6279.55],
    [52.0, 0.19, 12139.55],
    [52.0, 1.33, 1748.02],
    [51.0, 0.28, 5856.48],
    [49.0, 0.49, 1194.45],
    [41.0, 5.37, 8429.24],
    [41.0, 2.40, 19651.05],
    [39.0, 6.17, 10447.39],
    [37.0, 6.04, 10213.29],
    [37.0, 2.57, 1059.38],
    [36.0, 1.71, 2352.87],
    [36.0, 1.78, 6812.77],
    [33.0, 0.59, 17789.85],
    [30.0, 0.44, 83996.85],
    [30.0, 2.74, 1349.87],
    [25.0, 3.16, 4690.48],
];

#[rustfmt::skip]
static L1: [[f64; 3]; 34] = [
    [628331966747.0, 0.0, 0.0],
    [206059.0, 2.678235, 6283.075850],
    [4303.0, 2.6351, 12566.1517],
    [425.0, 1.590, 3.523],
    [119.0, 5.796, 26.298],
    [109.0, 2.966, 1577.344],
    [93.0, 2.59, 18849.23],
    [72.0, 1.14, 529.69],
    [68.0, 1.87, 398.15],
    [67.0, 4.41, 5507.55],
    [59.0, 2.89, 5223.69],
    [56.0, 2.17, 155.42],
    [45.0, 0.40, 796.30],
    [36.0, 0.47, 775.52],
    [29.0, 2.65, 7.11],
    [21.0, 5.34, 0.98],
    [19.0, 1.85, 5486.78],
    [19.0, 4.97, 213.30],
    [17.0, 2.99, 6275.96],
    [16.0, 0.03, 2544.31],
    [16.0, 1.43, 2146.17],
    [15.0, 1.21, 10977.08],
    [12.0, 2.83, 1748.02],
    [12.0, 3.26, 5088.63],
    [12.0, 5.27, 1194.45],
    [12.0, 2.08, 4694.00],
    [11.0, 0.77, 553.57],
    [10.0, 1.30, 6286.60],
    [10.0, 4.24, 1349.87],
    [9.0, 2.70, 242.73],
    [9.0, 5.64, 951.72],
    [8.0, 5.30, 2352.87],
    [6.0, 2.65, 9437.76],
    [6.0, 4.67, 4690.48],
];

#[rustfmt::skip]
static L2: [[f64; 3]; 20] = [
    [52919.0, 0.0, 0.0],
    [8720.0, 1.0721, 6283.0758],
    [309.0, 0.867, 12566.152],
    [27.0, 0.05, 3.52],
    [16.0, 5.19, 26.30],
    [16.0, 3.68, 155.42],
    [10.0, 0.76, 18849.23],
    [9.0, 2.06, 77713.77],
    [7.0, 0.83, 775.52],
    [5.0, 4.66, 1577.34],
    [4.0, 1.03, 7.11],
    [4.0, 3.44, 5573.14],
    [3.0, 5.14, 796.30],
    [3.0, 6.05, 5507.55],
    [3.0, 1.19, 242.73],
    [3.0, 6.12, 529.69],
    [3.0, 0.31, 398.15],
    [3.0, 2.28, 553.57],
    [2.0, 4.38, 5223.69],
    [2.0, 3.75, 0.98],
];

#[rustfmt::skip]
static L3: [[f64; 3]; 7] = [
    [289.0, 5.844, 6283.076],
    [35.0, 0.0, 0.0],
    [17.0, 5.49, 12566.15],
    [3.0, 5.20, 155.42],
    [1.0, 4.72, 3.52],
    [1.0, 5.30, 18849.23],
    [1.0, 5.97, 242.73],
];

#[rustfmt::skip]
static L4: [[f64; 3]; 3] = [
    [114.0, 3.142, 0.0],
    [8.0, 4.13, 6283.08],
    [1.0, 3.84, 12566.15],
];

#[rustfmt::skip]
static L5: [[f64; 3]; 1] = [
    [1.0, 3.14, 0.0],
];

#[rustfmt::skip]
static R0: [[f64; 3]; 6] = [
    [100013989.0, 0.0, 0.0],
    [1670700.0, 3.0984635, 6283.0758500],
    [13956.0, 3.05525, 12566.15170],
    [3084.0, 5.1985, 77713.7715],
    [1628.0, 1.1739, 5753.3849],
    [1576.0, 2.8469, 7860.4194],
];

#[rustfmt::skip]
static R1: [[f64; 3]; 2] = [
    [103019.0, 1.107490, 6283.075850],
    [1721.0, 1.0644, 12566.1517],
];

fn series(terms: &[[f64; 3]], tau: f64) -> f64 {
    terms
        .iter()
        .map(|&[a, b, c]| a * (b + c * tau).cos())
        .sum()
}

/// Heliocentric ecliptic longitude of the Earth (radians, not normalized) and
/// its distance from the sun (AU), referred to the mean equinox of date.
fn earth_heliocentric(tt: Tt) -> (f64, f64) {
    let tau = centuries(tt) / 10.0;
    let powers: [&[[f64; 3]]; 6] = [&L0, &L1, &L2, &L3, &L4, &L5];
    let l = powers
        .iter()
        .rev()
        .fold(0.0, |acc, terms| acc * tau + series(terms, tau));
    let r = series(&R0, tau) + series(&R1, tau) * tau;
    (l * 1e-8, r * 1e-8)
}

/// Nutation in longitude, in arcseconds (Meeus ch. 22, 0.5″ precision).
pub fn nutation_in_longitude(tt: Tt) -> f64 {
    let t = centuries(tt);
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481267.8813 * t).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Apparent geocentric ecliptic longitude of the sun in degrees [0, 360).
///
/// Includes the FK5 frame correction, nutation and annual aberration.
///
/// # Example
///
/// ```
/// use festival_clock::astronomy::sun::apparent_longitude;
/// use festival_clock::time_scales::Tt;
///
/// // 1992 October 13.0 TD, Meeus example 25.b: 199°54′21.8″
/// let lon = apparent_longitude(Tt(2448908.5));
/// assert!((lon - 199.90606).abs() < 0.003);
/// ```
pub fn apparent_longitude(tt: Tt) -> f64 {
    let (l, r) = earth_heliocentric(tt);
    let geometric = l.to_degrees() + 180.0;
    let fk5 = -0.09033;
    let aberration = -20.4898 / r;
    normalize_deg(geometric + (fk5 + nutation_in_longitude(tt) + aberration) / 3600.0)
}

/// Finds the instant near `guess` when the apparent longitude of the sun is
/// `target_deg`.
///
/// The sun moves about a degree a day, so `guess` may be off by weeks.
pub fn longitude_crossing(target_deg: f64, guess: Tt) -> Tt {
    let mut jd = guess.0;
    for _ in 0..50 {
        let diff = normalize_to_pm180(target_deg - apparent_longitude(Tt(jd)));
        jd += diff * MEAN_TROPICAL_YEAR / 360.0;
        if diff.abs() < 1e-9 {
            break;
        }
    }
    Tt(jd)
}

/// Ecliptic longitude of solar term `index`, in degrees.
pub fn term_longitude(index: usize) -> f64 {
    normalize_deg(FIRST_TERM_LONGITUDE + 15.0 * index as f64)
}

/// Instant of solar term `index` (`0..=24`) of the annus `annus`.
///
/// Index 0 is the winter solstice in December of `annus - 1`; 24 is the next
/// winter solstice, which is index 0 of the following annus.
///
/// # Example
///
/// ```
/// use festival_clock::astronomy::sun::solar_term;
///
/// // the 1962 June solstice, Meeus example 27.a gives JDE 2437837.39245
/// let tt = solar_term(1962, 12);
/// assert!((tt.0 - 2437837.39245).abs() < 5e-4);
/// ```
pub fn solar_term(annus: i32, index: usize) -> Tt {
    // 1999 winter solstice fell on JD 2451535.2
    let guess = 2451535.2
        + f64::from(annus - 2000) * MEAN_TROPICAL_YEAR
        + index as f64 * MEAN_TROPICAL_YEAR / TERMS_PER_YEAR as f64;
    longitude_crossing(term_longitude(index), Tt(guess))
}
