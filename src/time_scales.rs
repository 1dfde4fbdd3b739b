//! Deals with different time scales, specifically, conversion from TT into UT.
//!
//! Astronomical positions are computed in dynamical time, while the civil date
//! at an instant depends on Earth's rotation. The difference, ΔT = TT − UT, is
//! taken from the polynomial fits of Espenak & Meeus (NASA, 2006), which cover
//! the whole range the lunisolar tables need.

use crate::date::JulianDay;
use crate::error::Result;

/// [Terrestrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented in Julian date (JD).
///
/// Note: TDB differs no more than milliseconds from TT, so ephemeris results
/// in TDB are used here as TT without conversion.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time), the civil
/// time used for determining the actual date at a given time point,
/// represented in Julian date (JD).
///
/// UTC and UT1 never differ by more than 0.9 s, which is below the precision of
/// the ΔT model, so no distinction is made.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Converts a TT instant into UT.
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::time_scales::{Tt, Ut};
    /// let ut = Ut::convert(Tt(2451545.0));
    /// assert!((ut.0 - (2451545.0 - 63.86 / 86400.0)).abs() < 1e-7);
    /// ```
    pub fn convert(tt: Tt) -> Self {
        Ut(tt.0 - delta_t(tt) / 86400.0)
    }
    /// Returns the date at the time point in timezone ahead (east) of UTC by
    /// `tz_offset_minutes` minutes.
    ///
    /// For Beijing time (UTC+8), `tz_offset_minutes` should be +480.
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::time_scales::Ut;
    /// // 2000-01-01T20:00Z is already January 2 in Beijing
    /// let ut = Ut(2451545.0 + 8.0 / 24.0);
    /// assert_eq!("2000-01-01", ut.date_in_timezone(0).unwrap().to_gregorian().to_string());
    /// assert_eq!("2000-01-02", ut.date_in_timezone(480).unwrap().to_gregorian().to_string());
    /// ```
    pub fn date_in_timezone(&self, tz_offset_minutes: i32) -> Result<JulianDay> {
        self.date_at_offset(tz_offset_minutes * 60)
    }
    /// Like [`Ut::date_in_timezone`], with the offset in seconds, for zones
    /// such as a local mean time.
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::time_scales::Ut;
    /// // 16:10 UT
    /// let ut = Ut(2451545.0 + (4.0 * 60.0 + 10.0) / 1440.0);
    /// assert_eq!("2000-01-02", ut.date_at_offset(8 * 3600).unwrap().to_gregorian().to_string());
    /// assert_eq!("2000-01-01", ut.date_at_offset(27940).unwrap().to_gregorian().to_string());
    /// ```
    pub fn date_at_offset(&self, offset_seconds: i32) -> Result<JulianDay> {
        let jdn = (self.0 + f64::from(offset_seconds) / 86400.0).round();
        JulianDay::from_jdn(jdn as i32)
    }
}

/// ΔT = TT − UT in seconds at the given instant.
///
/// Outside 1860..2150 the long-term parabola of Morrison & Stephenson is used;
/// nothing in this crate asks for such years.
pub fn delta_t(tt: Tt) -> f64 {
    let y = (tt.0 - 2451544.5) / 365.2425 + 2000.0;
    match y {
        y if y < 1860.0 => long_term(y),
        y if y < 1900.0 => {
            let t = y - 1860.0;
            7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
                - 0.0004473624 * t.powi(4)
                + t.powi(5) / 233174.0
        }
        y if y < 1920.0 => {
            let t = y - 1900.0;
            -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
                - 0.000197 * t.powi(4)
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            63.86 + 0.3345 * t - 0.060374 * t.powi(2)
                + 0.0017275 * t.powi(3)
                + 0.000651814 * t.powi(4)
                + 0.00002373599 * t.powi(5)
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            62.92 + 0.32217 * t + 0.005589 * t.powi(2)
        }
        y if y < 2150.0 => long_term(y) - 0.5628 * (2150.0 - y),
        y => long_term(y),
    }
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tt_for_year(y: f64) -> Tt {
        Tt(2451544.5 + (y - 2000.0) * 365.2425)
    }

    #[test]
    fn delta_t_known_values() {
        // observed values rounded to the second, the fits are within a few
        for (year, observed) in [
            (1900.0, -2.8),
            (1950.0, 29.1),
            (1975.0, 45.5),
            (2000.0, 63.8),
            (2010.0, 66.1),
        ] {
            let dt = delta_t(tt_for_year(year));
            assert!((dt - observed).abs() < 3.0, "{year}: {dt}");
        }
    }

    #[test]
    fn delta_t_is_continuous() {
        for boundary in [1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let before = delta_t(tt_for_year(boundary - 1e-6));
            let after = delta_t(tt_for_year(boundary + 1e-6));
            assert!((before - after).abs() < 1.0, "{boundary}");
        }
    }

    #[test]
    fn tt_to_ut() {
        let tt = Tt(2451543.166666667);
        let ut = Ut::convert(tt);
        assert!((tt.0 - ut.0) * 86400.0 > 60.0);
        assert_eq!(
            "1999-12-30",
            ut.date_in_timezone(480).unwrap().to_gregorian().to_string()
        );
        let cst_midnight = 2451543.5 - 8.0 / 24.0;
        let ut_midnight = Ut(cst_midnight + 1.0 / 86400.0);
        let ut_before_midnight = Ut(cst_midnight - 1.0 / 86400.0);
        assert_eq!(
            "1999-12-30",
            ut_before_midnight
                .date_in_timezone(480)
                .unwrap()
                .to_gregorian()
                .to_string()
        );
        assert_eq!(
            "1999-12-31",
            ut_midnight
                .date_in_timezone(480)
                .unwrap()
                .to_gregorian()
                .to_string()
        );
    }

    #[test]
    fn seconds_offset() {
        // 1916-02-03T16:05:00 UT
        let noon = f64::from(JulianDay::from_gregorian(1916, 2, 3).unwrap().jdn());
        let ut = Ut(noon + 4.0 / 24.0 + 5.0 / 1440.0);
        let date = |offset: i32| ut.date_at_offset(offset).unwrap().to_gregorian().to_string();
        assert_eq!("1916-02-04", date(8 * 3600));
        assert_eq!("1916-02-03", date(7 * 3600 + 45 * 60 + 40));
        assert_eq!(
            date(480 * 60),
            ut.date_in_timezone(480).unwrap().to_gregorian().to_string()
        );
    }
}
