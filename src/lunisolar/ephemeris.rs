//! 節氣與朔日曆表
//!
//! 表中按歲保存各節氣、各朔所在的北京日期，由 [`crate::astronomy`] 在首次取用時
//! 一次算出，此後只讀，僅以 `&'static` 共享引用交出。
//!
//! 1929 年以前曆法用北京地方平時（UTC+7:45:40），其後用東八區標準時，見
//! [`beijing_date`]。

use std::sync::OnceLock;
use std::time::Instant;

use crate::astronomy::{moon, sun};
use crate::date::JulianDay;
use crate::error::{Error, Result};
use crate::time_scales::{Tt, Ut};

/// 表中首歲
pub const FIRST_ANNUS: i32 = 1901;
/// 表中末歲
pub const LAST_ANNUS: i32 = 2100;

/// 每歲保存的朔數，足以排出含閏月之歲，前後各留一月
pub const NEW_MOONS: usize = 17;

/// 北京地方平時與世界時之差，單位為秒
pub const BEIJING_MEAN_TIME: i32 = 7 * 3600 + 45 * 60 + 40;
/// 東八區標準時與世界時之差，單位為秒
pub const BEIJING_STANDARD_TIME: i32 = 8 * 3600;
/// 改用標準時的時刻，即東八區 1929-01-01 零時，以世界時儒略日表示
const STANDARD_TIME_ADOPTED: f64 = 2425612.5 - 8.0 / 24.0;

/// 保存一歲的曆表數據
#[derive(Debug)]
pub struct Ephemeris {
    /// 序號，為該歲大部分時段所在公元年
    pub annus: i32,
    /// 從冬至開始的各節氣日期，亦含次歲冬至以便計算末日
    pub solar_term: [JulianDay; 25],
    /// 連續各朔日期，從冬至前第二朔開始
    pub new_moon: [JulianDay; NEW_MOONS],
}

static TABLE: OnceLock<Vec<Ephemeris>> = OnceLock::new();

impl Ephemeris {
    /// 取得公元 `annus` 年對應的歲的曆表。
    ///
    /// 超出 [`FIRST_ANNUS`]`..=`[`LAST_ANNUS`] 則返回
    /// [`Error::UnsupportedYearRange`]。
    pub fn get(annus: i32) -> Result<&'static Self> {
        if !(FIRST_ANNUS..=LAST_ANNUS).contains(&annus) {
            return Err(Error::UnsupportedYearRange {
                year: annus,
                min: FIRST_ANNUS,
                max: LAST_ANNUS,
            });
        }
        let table = TABLE.get_or_init(|| {
            build_table().unwrap_or_else(|e| panic!("error computing ephemeris table: {e}"))
        });
        Ok(&table[(annus - FIRST_ANNUS) as usize])
    }

    /// 依天文算法計算一歲的曆表。
    pub fn compute(annus: i32) -> Result<Self> {
        let mut solar_term = [JulianDay::MIN; 25];
        for (i, slot) in solar_term.iter_mut().enumerate() {
            *slot = beijing_date(sun::solar_term(annus, i))?;
        }

        let first = moon::lunation_at_or_before(sun::solar_term(annus, 0)) - 1;
        let mut new_moon = [JulianDay::MIN; NEW_MOONS];
        for (k, slot) in (first..).zip(new_moon.iter_mut()) {
            *slot = beijing_date(moon::new_moon(k))?;
        }

        Ok(Self {
            annus,
            solar_term,
            new_moon,
        })
    }
}

fn build_table() -> Result<Vec<Ephemeris>> {
    let started = Instant::now();
    let table = (FIRST_ANNUS..=LAST_ANNUS)
        .map(Ephemeris::compute)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(
        first = FIRST_ANNUS,
        last = LAST_ANNUS,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "computed lunisolar ephemeris table"
    );
    Ok(table)
}

/// 將給定曆表時間轉為曆法所用的北京日期：1929 年前用地方平時，其後用
/// 東八區標準時。
pub fn beijing_date(tt: Tt) -> Result<JulianDay> {
    let ut = Ut::convert(tt);
    let offset = if ut.0 < STANDARD_TIME_ADOPTED {
        BEIJING_MEAN_TIME
    } else {
        BEIJING_STANDARD_TIME
    };
    ut.date_at_offset(offset)
}
