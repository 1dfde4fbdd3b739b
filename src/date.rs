//! Gregorian dates and Julian day numbers.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{Error, Result};

/// First supported Gregorian year.
pub const MIN_YEAR: i32 = 1;
/// Last supported Gregorian year.
pub const MAX_YEAR: i32 = 9999;

/// A Julian day number (JDN), the calendar-independant day count every other
/// date type converts through.
///
/// Supported range is January 1, 1 AD through December 31, 9999 AD,
/// proleptic Gregorian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct JulianDay {
    jdn: i32,
}

impl JulianDay {
    /// JDN of 0001-01-01.
    pub const MIN: JulianDay = JulianDay { jdn: 1_721_426 };
    /// JDN of 9999-12-31.
    pub const MAX: JulianDay = JulianDay { jdn: 5_373_484 };

    /// Creates a `JulianDay` from a day number.
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::JulianDay;
    ///
    /// assert!(JulianDay::from_jdn(2451545).is_ok());
    /// assert!(JulianDay::from_jdn(0).is_err());
    /// ```
    pub fn from_jdn(jdn: i32) -> Result<Self> {
        if (Self::MIN.jdn..=Self::MAX.jdn).contains(&jdn) {
            Ok(Self { jdn })
        } else {
            Err(Error::JulianDayOutOfRange { jdn: jdn.into() })
        }
    }
    /// Returns the Julian day number.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `JulianDay` from a Gregorian calendar date.
    ///
    /// Fails with [`Error::InvalidDate`] if the date does not exist or its
    /// year is outside [`MIN_YEAR`]`..=`[`MAX_YEAR`].
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::JulianDay;
    ///
    /// let jd = JulianDay::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, jd.jdn());
    /// assert!(JulianDay::from_gregorian(2023, 2, 29).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self> {
        Ok(GregorianDate::new(year, month, day)?.to_julian_day())
    }

    /// Represents the day in the Gregorian calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::JulianDay;
    ///
    /// let date = JulianDay::from_jdn(2451545).unwrap().to_gregorian();
    /// assert_eq!((2000, 1, 1), (date.year(), date.month(), date.day()));
    /// ```
    pub fn to_gregorian(&self) -> GregorianDate {
        let jdn = self.jdn;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        // in range by construction, see `MIN` and `MAX`
        GregorianDate {
            year,
            month: month as u32,
            day: day as u32,
        }
    }

    /// Moves the day by `days`, failing if the result leaves the supported
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::JulianDay;
    ///
    /// let jd = JulianDay::from_gregorian(2024, 12, 31).unwrap();
    /// assert_eq!("2025-01-01", jd.checked_add(1).unwrap().to_gregorian().to_string());
    /// assert!(JulianDay::MAX.checked_add(1).is_err());
    /// ```
    pub fn checked_add(self, days: i32) -> Result<Self> {
        let jdn = i64::from(self.jdn) + i64::from(days);
        i32::try_from(jdn)
            .map_err(|_| Error::JulianDayOutOfRange { jdn })
            .and_then(Self::from_jdn)
    }
}

impl Sub<JulianDay> for JulianDay {
    type Output = i32;
    fn sub(self, rhs: JulianDay) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// Signed day difference `a - b`; positive means `a` is later.
pub fn day_difference(a: JulianDay, b: JulianDay) -> i32 {
    a - b
}

/// A valid date of the proleptic Gregorian calendar.
///
/// Field order makes the derived ordering the calendar order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct GregorianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl GregorianDate {
    /// Validates and creates a date.
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::GregorianDate;
    ///
    /// assert!(GregorianDate::new(2024, 2, 29).is_ok());
    /// assert!(GregorianDate::new(2023, 2, 29).is_err());
    /// assert!(GregorianDate::new(2023, 13, 1).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        let valid = (MIN_YEAR..=MAX_YEAR).contains(&year)
            && (1..=12).contains(&month)
            && (1..=days_in_month(year, month)).contains(&day);
        if !valid {
            return Err(Error::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Converts to a Julian day number.
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::GregorianDate;
    ///
    /// let date = GregorianDate::new(1970, 1, 1).unwrap();
    /// assert_eq!(2440588, date.to_julian_day().jdn());
    /// ```
    pub fn to_julian_day(&self) -> JulianDay {
        let (y, m, d) = (self.year, self.month as i32, self.day as i32);
        let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
            + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075;
        JulianDay { jdn }
    }

    /// Moves the date by `days`.
    pub fn checked_add_days(&self, days: i32) -> Result<Self> {
        Ok(self.to_julian_day().checked_add(days)?.to_gregorian())
    }
}

impl From<GregorianDate> for JulianDay {
    fn from(date: GregorianDate) -> Self {
        date.to_julian_day()
    }
}

impl From<JulianDay> for GregorianDate {
    fn from(jd: JulianDay) -> Self {
        jd.to_gregorian()
    }
}

impl TryFrom<chrono::NaiveDate> for GregorianDate {
    type Error = Error;
    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Self::new(date.year(), date.month(), date.day())
    }
}

/// Formats the date in ISO 8601 format.
///
/// ```
/// use festival_clock::GregorianDate;
///
/// let date = GregorianDate::new(2021, 9, 8).unwrap();
/// assert_eq!("2021-09-08", date.to_string());
/// ```
impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// ```
/// use festival_clock::GregorianDate;
///
/// let date: GregorianDate = "2024-06-10".parse().unwrap();
/// assert_eq!(GregorianDate::new(2024, 6, 10).unwrap(), date);
/// ```
impl FromStr for GregorianDate {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::InvalidArgument(format!("expected YYYY-MM-DD, got {s:?}"));
        let mut it = s.trim().splitn(3, '-');
        let mut field = || it.next().ok_or_else(malformed);
        let (y, m, d) = (field()?, field()?, field()?);
        Self::new(
            y.parse().map_err(|_| malformed())?,
            m.parse().map_err(|_| malformed())?,
            d.parse().map_err(|_| malformed())?,
        )
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in `month` of `year`; `0` for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn from_gregorian() {
        assert_eq!(2440588, ymd(1970, 1, 1).to_julian_day().jdn());
        assert_eq!(2459466, ymd(2021, 9, 8).to_julian_day().jdn());
        assert_eq!(JulianDay::MIN, ymd(1, 1, 1).to_julian_day());
        assert_eq!(JulianDay::MAX, ymd(9999, 12, 31).to_julian_day());
    }

    #[test]
    fn to_gregorian() {
        for (jdn, std) in [
            (2440588, (1970, 1, 1)),
            (2459466, (2021, 9, 8)),
            (2451545, (2000, 1, 1)),
            (2451604, (2000, 2, 29)),
        ] {
            let date = JulianDay::from_jdn(jdn).unwrap().to_gregorian();
            assert_eq!(std, (date.year(), date.month(), date.day()));
        }
    }

    #[test]
    fn invalid_dates() {
        for (y, m, d) in [
            (2023, 2, 29),
            (1900, 2, 29),
            (2024, 4, 31),
            (2024, 0, 1),
            (2024, 1, 0),
            (0, 1, 1),
            (10000, 1, 1),
        ] {
            assert_eq!(
                Err(Error::InvalidDate {
                    year: y,
                    month: m,
                    day: d
                }),
                GregorianDate::new(y, m, d),
                "{y:04}-{m:02}-{d:02}"
            );
        }
        assert!(GregorianDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn round_trip_and_monotonic() {
        let mut jd = ymd(1899, 12, 1).to_julian_day();
        let end = ymd(2101, 2, 1).to_julian_day();
        let mut prev = jd.to_gregorian();
        while jd < end {
            let date = jd.to_gregorian();
            assert_eq!(jd, date.to_julian_day(), "{date}");
            jd = jd.checked_add(1).unwrap();
            let next = jd.to_gregorian();
            assert!(prev <= date && date < next, "{date}");
            prev = date;
        }
    }

    #[test]
    fn round_trip_extremes() {
        for date in [ymd(1, 1, 1), ymd(1582, 10, 15), ymd(9999, 12, 31)] {
            assert_eq!(date, date.to_julian_day().to_gregorian());
        }
    }

    #[test]
    fn differences() {
        let a = ymd(2025, 1, 1).to_julian_day();
        let b = ymd(2024, 1, 1).to_julian_day();
        assert_eq!(366, day_difference(a, b));
        assert_eq!(-366, b - a);
    }

    #[test]
    fn out_of_range_arithmetic() {
        assert_eq!(
            Err(Error::JulianDayOutOfRange {
                jdn: JulianDay::MIN.jdn() as i64 - 1
            }),
            JulianDay::MIN.checked_add(-1)
        );
        assert!(JulianDay::MAX.checked_add(i32::MAX).is_err());
    }

    #[test]
    fn parse_and_format() {
        assert_eq!(ymd(2021, 9, 8), "2021-09-08".parse().unwrap());
        assert_eq!("0001-01-01", ymd(1, 1, 1).to_string());
        assert!(matches!(
            "2021/09/08".parse::<GregorianDate>(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            "2021-02-30".parse::<GregorianDate>(),
            Err(Error::InvalidDate { .. })
        ));
    }

    #[test]
    fn from_chrono() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert_eq!(Ok(ymd(2024, 2, 10)), GregorianDate::try_from(naive));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(29, days_in_month(2000, 2));
        assert_eq!(28, days_in_month(2100, 2));
        assert_eq!(31, days_in_month(2023, 12));
        assert_eq!(0, days_in_month(2023, 13));
    }
}
