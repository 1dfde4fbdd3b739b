//! 農曆
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 月份按「歲」編排：自冬至所在月（十一月）至次一冬至所在月之前。年號在正月初一
//! 更替，故歲首的十一、十二月屬上一年。
//!
//! 日期依 [`ephemeris`] 曆表以北京時間推算，曆表覆蓋 [`ephemeris::FIRST_ANNUS`]
//! 至 [`ephemeris::LAST_ANNUS`] 各歲；公曆日期轉換支持 [`FIRST_YEAR`]`..=`[`LAST_YEAR`]
//! 年。
//!
//! # 用例
//!
//! ```
//! use festival_clock::GregorianDate;
//! use festival_clock::lunisolar::{self, Month::*};
//!
//! let date = GregorianDate::new(2000, 1, 1).unwrap();
//! let lunar = lunisolar::to_lunisolar(date).unwrap();
//!
//! assert_eq!((1999, Common(11), 25), (lunar.year, lunar.month, lunar.day));
//! assert_eq!("己卯年冬月廿五", lunar.to_string());
//! ```

use std::fmt as std_fmt;

use crate::date::{GregorianDate, JulianDay};
use crate::error::{Error, Result};

use self::ephemeris::Ephemeris;

pub mod ephemeris;
pub mod fmt;

/// [`to_lunisolar`] 支持的首個公元年
pub const FIRST_YEAR: i32 = 1901;
/// [`to_lunisolar`] 支持的最末公元年
pub const LAST_YEAR: i32 = 2099;

/// 一年的節氣數
pub const SOLAR_TERMS: usize = 24;

/// 月名，`Common` 為平月，`Leap` 為閏月，閏月與前一月同序號。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}

impl Month {
    /// 月序號，無論平閏。
    pub fn num(&self) -> u32 {
        match *self {
            Month::Common(v) | Month::Leap(v) => v,
        }
    }
    /// 閏月為 `true`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 月名的文本形式，見 [`fmt::month`]。
    ///
    /// # Panics
    ///
    /// 月序號不在 `1..=12` 內時 panic。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// 月首
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NewMoon {
    pub month: Month,
    /// 月首所在日期
    pub date: JulianDay,
}

/// 農曆日期
///
/// 由 [`to_lunisolar`] 或 [`Annus::ymd_for`] 取得者必然有效；自行構造時須保證月序號在
/// `1..=12`、日在 `1..=30` 內，否則 `Display` 會 panic。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunisolarDate {
    /// 年，以其正月所在公元年計
    pub year: i32,
    pub month: Month,
    /// 日，`1..=30`
    pub day: u32,
}

impl LunisolarDate {
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }
    pub fn month_number(&self) -> u32 {
        self.month.num()
    }
}

/// 以干支紀年寫出日期，如「甲辰年五月初五」。
///
/// # Panics
///
/// 月序號不在 `1..=12` 或日不在 `1..=30` 內時 panic。
impl std_fmt::Display for LunisolarDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(
            f,
            "{}年{}{}",
            fmt::sexagenary(fmt::sexagenary_for_year(self.year)),
            self.month.name(),
            fmt::day(self.day)
        )
    }
}

/// 「歲」，自冬至所在月至次一冬至所在月前一月。
///
/// # 用例
///
/// ```
/// use festival_clock::JulianDay;
/// use festival_clock::lunisolar::Annus;
///
/// let date = JulianDay::from_gregorian(1999, 12, 31).unwrap();
/// let annus = Annus::from_date(date).unwrap();
///
/// assert_eq!(2000, annus.annus);
/// ```
#[derive(Debug, Clone)]
pub struct Annus {
    /// 序號，為該歲大部分時段所在的公元年
    pub annus: i32,
    /// 該歲的曆表
    pub ephemeris: &'static Ephemeris,
    /// 全部月首，另含次歲首月以標記本歲末日
    pub months: Vec<NewMoon>,
}

/// 給定日期不在該歲，並指出在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherAnnus {
    Before,
    After,
}

impl Annus {
    /// 排出公元 `annus` 年對應之歲的各月。
    ///
    /// 冬至當日或之前最後一朔為十一月首。至次一十一月若有十三個月，則首個不含中氣之月
    /// 為閏月。
    pub fn new(annus: i32) -> Result<Self> {
        use Month::*;

        let ephemeris = Ephemeris::get(annus)?;
        let new_moons = &ephemeris.new_moon;
        let ws = ephemeris.solar_term[0];
        let ws_next = ephemeris.solar_term[SOLAR_TERMS];
        let m11_idx = new_moons.partition_point(|date| date <= &ws) - 1;
        let m11n_idx = new_moons.partition_point(|date| date <= &ws_next) - 1;
        let mut needs_leap = match m11n_idx - m11_idx {
            12 => false,
            13 => true,
            n => panic!("{n} months between winter solstices of annus {annus}"),
        };

        let mut months = Vec::with_capacity(m11n_idx - m11_idx + 1);
        let mut month = 10;
        let mut term = 0;
        for i in m11_idx..=m11n_idx {
            if needs_leap && new_moons[i + 1] <= ephemeris.solar_term[term] {
                months.push(NewMoon {
                    month: Leap(month),
                    date: new_moons[i],
                });
                needs_leap = false;
                continue;
            }
            month = month % 12 + 1;
            months.push(NewMoon {
                month: Common(month),
                date: new_moons[i],
            });
            term += 2;
        }
        assert!(!needs_leap, "no leap month found in annus {annus}");

        Ok(Annus {
            annus,
            ephemeris,
            months,
        })
    }

    /// 取得給定日期所在之歲。
    pub fn from_date(date: JulianDay) -> Result<Self> {
        let mut y = date.to_gregorian().year();
        loop {
            let annus = Self::new(y)?;
            match annus.locate(date) {
                Ok(_) => return Ok(annus),
                Err(OtherAnnus::Before) => y -= 1,
                Err(OtherAnnus::After) => y += 1,
            }
        }
    }

    fn first_day(&self) -> JulianDay {
        self.months[0].date
    }
    fn end(&self) -> JulianDay {
        self.months[self.months.len() - 1].date
    }

    /// 給定日期所在月於 `months` 中的下標
    fn locate(&self, date: JulianDay) -> std::result::Result<usize, OtherAnnus> {
        if date < self.first_day() {
            Err(OtherAnnus::Before)
        } else if date >= self.end() {
            Err(OtherAnnus::After)
        } else {
            Ok(self.months.partition_point(|m| m.date <= date) - 1)
        }
    }

    /// 取得給定日期的農曆年月日；不在該歲則指出在前還是在後。
    ///
    /// # 用例
    ///
    /// ```
    /// use festival_clock::JulianDay;
    /// use festival_clock::lunisolar::{Annus, Month::*, OtherAnnus};
    ///
    /// let annus = Annus::new(2017).unwrap();
    /// let date = JulianDay::from_gregorian(2017, 7, 23).unwrap();
    /// assert_eq!(Leap(6), annus.ymd_for(date).unwrap().month);
    ///
    /// let date = JulianDay::from_gregorian(2017, 12, 18).unwrap();
    /// assert_eq!(Err(OtherAnnus::After), annus.ymd_for(date));
    /// ```
    pub fn ymd_for(&self, date: JulianDay) -> std::result::Result<LunisolarDate, OtherAnnus> {
        let m = self.months[self.locate(date)?];
        let year = if m.month.num() >= 11 {
            self.annus - 1
        } else {
            self.annus
        };
        Ok(LunisolarDate {
            year,
            month: m.month,
            day: (date - m.date + 1) as u32,
        })
    }

    /// 給定日期是否為除夕，即次日為正月初一。
    pub fn is_new_years_eve(&self, date: JulianDay) -> std::result::Result<bool, OtherAnnus> {
        let idx = self.locate(date)?;
        let next = self.months[idx + 1];
        Ok(next.month == Month::Common(1) && next.date - date == 1)
    }
}

/// 日期所處節氣
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SolarTermPosition {
    /// 該節氣所在公元年
    pub year: i32,
    /// 節氣序號，同 [`solar_term_date`]，0 為小寒，23 為冬至
    pub index: usize,
    /// 交節後第幾日，交節當日為 0
    pub days_since: i32,
}

impl SolarTermPosition {
    pub fn name(&self) -> &'static str {
        fmt::solar_term(self.index)
    }
}

fn check_year(year: i32) -> Result<()> {
    if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(Error::UnsupportedYearRange {
            year,
            min: FIRST_YEAR,
            max: LAST_YEAR,
        })
    }
}

/// 公元年內節氣序號轉為 (歲, 歲內序號)。歲內序號 0 為歲首冬至，落在前一公元年。
fn annus_term(year: i32, index: usize) -> (i32, usize) {
    if index == SOLAR_TERMS - 1 {
        (year + 1, 0)
    } else {
        (year, index + 1)
    }
}

/// (歲, 歲內序號) 轉為公元年內節氣序號，見 [`annus_term`]。
fn year_term(annus: i32, index: usize) -> (i32, usize) {
    if index == 0 {
        (annus - 1, SOLAR_TERMS - 1)
    } else {
        (annus, index - 1)
    }
}

/// 公曆日期轉為農曆。
///
/// 年份不在 [`FIRST_YEAR`]`..=`[`LAST_YEAR`] 內則返回 [`Error::UnsupportedYearRange`]。
///
/// # 用例
///
/// ```
/// use festival_clock::GregorianDate;
/// use festival_clock::lunisolar::{to_lunisolar, Month::*};
///
/// let lunar = to_lunisolar(GregorianDate::new(2024, 2, 10).unwrap()).unwrap();
/// assert_eq!((2024, Common(1), 1), (lunar.year, lunar.month, lunar.day));
///
/// assert!(to_lunisolar(GregorianDate::new(2100, 1, 1).unwrap()).is_err());
/// ```
pub fn to_lunisolar(date: GregorianDate) -> Result<LunisolarDate> {
    check_year(date.year())?;
    let jd = date.to_julian_day();
    let annus = Annus::from_date(jd)?;
    // `from_date` only returns an annus containing `jd`
    annus.ymd_for(jd).map_err(|side| {
        Error::InvalidArgument(format!("{date} lies {side:?} annus {}", annus.annus))
    })
}

/// 給定日期是否為除夕。
pub fn is_lunisolar_new_years_eve(date: GregorianDate) -> Result<bool> {
    check_year(date.year())?;
    let jd = date.to_julian_day();
    let annus = Annus::from_date(jd)?;
    annus.is_new_years_eve(jd).map_err(|side| {
        Error::InvalidArgument(format!("{date} lies {side:?} annus {}", annus.annus))
    })
}

/// 公元 `year` 年內第 `term_index` 個節氣的北京日期。
///
/// 序號按年內先後，0 為小寒，23 為冬至，名稱見 [`fmt::SOLAR_TERM_NAMES`]。序號不小於 24
/// 返回 [`Error::InvalidArgument`]，年份不在 [`FIRST_YEAR`]`..=`[`LAST_YEAR`] 內返回
/// [`Error::UnsupportedYearRange`]。
///
/// # 用例
///
/// ```
/// use festival_clock::lunisolar::solar_term_date;
///
/// assert_eq!("2024-01-06", solar_term_date(2024, 0).unwrap().to_string()); // 小寒
/// assert_eq!("2024-04-04", solar_term_date(2024, 6).unwrap().to_string()); // 清明
/// assert_eq!("2024-12-21", solar_term_date(2024, 23).unwrap().to_string()); // 冬至
/// assert!(solar_term_date(2024, 24).is_err());
/// ```
pub fn solar_term_date(year: i32, term_index: usize) -> Result<GregorianDate> {
    if term_index >= SOLAR_TERMS {
        return Err(Error::InvalidArgument(format!(
            "solar term index {term_index} not in 0..{SOLAR_TERMS}"
        )));
    }
    check_year(year)?;
    let (annus, index) = annus_term(year, term_index);
    Ok(Ephemeris::get(annus)?.solar_term[index].to_gregorian())
}

/// 給定日期所處節氣，及交節後的日數。
///
/// # 用例
///
/// ```
/// use festival_clock::GregorianDate;
/// use festival_clock::lunisolar::solar_term_for;
///
/// let pos = solar_term_for(GregorianDate::new(2000, 1, 1).unwrap()).unwrap();
/// assert_eq!((1999, 23, 10), (pos.year, pos.index, pos.days_since));
/// assert_eq!("冬至", pos.name());
/// ```
pub fn solar_term_for(date: GregorianDate) -> Result<SolarTermPosition> {
    let jd = date.to_julian_day();
    let mut annus = date.year();
    let mut eph = Ephemeris::get(annus)?;
    if jd >= eph.solar_term[SOLAR_TERMS] {
        annus += 1;
        eph = Ephemeris::get(annus)?;
    } else if jd < eph.solar_term[0] {
        annus -= 1;
        eph = Ephemeris::get(annus)?;
    }
    let index = eph.solar_term[..SOLAR_TERMS].partition_point(|&d| d <= jd) - 1;
    let days_since = jd - eph.solar_term[index];
    let (year, index) = year_term(annus, index);
    Ok(SolarTermPosition {
        year,
        index,
        days_since,
    })
}
