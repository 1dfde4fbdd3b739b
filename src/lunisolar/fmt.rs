//! 農曆日期、節氣的中文名稱

use super::Month;

/// 漢數字。`1..=9` 為「一」至「九」，第 0 項取「十」，排日名時可直接以個位取字。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 二十四節氣名，按公曆年內先後排列，自小寒起，至冬至止。
pub const SOLAR_TERM_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

/// 六十甲子序號轉為干支，`1` 為甲子，`60` 為癸亥。
///
/// # 用例
///
/// ```
/// use festival_clock::lunisolar::fmt;
///
/// assert_eq!("乙巳", fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    static STEMS: &[&str] = &["癸", "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬"];
    static BRANCHES: &[&str] = &[
        "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
    ];
    STEMS[(num % 10) as usize].to_owned() + BRANCHES[(num % 12) as usize]
}

/// 農曆年的干支序號，以 1984 甲子年起算。
///
/// # 用例
///
/// ```
/// use festival_clock::lunisolar::fmt;
///
/// assert_eq!(1, fmt::sexagenary_for_year(1984));
/// assert_eq!("甲辰", fmt::sexagenary(fmt::sexagenary_for_year(2024)));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year - 1984).rem_euclid(60) as u32 + 1
}

/// 月名，含「月」字；一月、十一月、十二月作「正月」「冬月」「腊月」，閏月加「闰」。
///
/// # 用例
///
/// ```
/// use festival_clock::lunisolar::{fmt, Month::*};
///
/// assert_eq!("冬月", fmt::month(Common(11)));
/// assert_eq!("闰正月", fmt::month(Leap(1)));
/// assert_eq!("闰五月", fmt::month(Leap(5)));
/// ```
///
/// # Panics
///
/// 月序號不在 `1..=12` 內時 panic。
pub fn month(m: Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "腊",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 日名：初一至初十，十一至二十，廿一至廿九，三十。
///
/// # 用例
///
/// ```
/// use festival_clock::lunisolar::fmt;
///
/// assert_eq!("初十", fmt::day(10));
/// assert_eq!("廿五", fmt::day(25));
/// assert_eq!("三十", fmt::day(30));
/// ```
///
/// # Panics
///
/// 日不在 `1..=30` 內時 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// 第 `index` 個節氣的名稱，序號同 [`super::solar_term_date`]，0 為小寒。
///
/// # 用例
///
/// ```
/// use festival_clock::lunisolar::fmt;
///
/// assert_eq!("清明", fmt::solar_term(6));
/// assert_eq!("冬至", fmt::solar_term(23));
/// ```
pub fn solar_term(index: usize) -> &'static str {
    SOLAR_TERM_NAMES[index % SOLAR_TERM_NAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("甲子", 1), ("庚寅", 27), ("癸亥", 60)] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_year_sexagenary() {
        for (std, year) in [("庚子", 2020), ("乙巳", 2025), ("辛丑", 1901), ("己未", 2099)] {
            assert_eq!(std, sexagenary(sexagenary_for_year(year)), "{year}");
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    fn test_month() {
        assert_eq!("正月", month(Month::Common(1)));
        assert_eq!("十月", month(Month::Common(10)));
        assert_eq!("腊月", month(Month::Common(12)));
        assert_eq!("闰六月", month(Month::Leap(6)));
    }

    #[test]
    fn test_solar_term() {
        assert_eq!("小寒", solar_term(0));
        assert_eq!("立春", solar_term(2));
        assert_eq!("夏至", solar_term(11));
        assert_eq!("小寒", solar_term(24));
    }

    #[test]
    #[should_panic(expected = "month 13 not in 1..=12")]
    fn month_out_of_range() {
        month(Month::Common(13));
    }
}
