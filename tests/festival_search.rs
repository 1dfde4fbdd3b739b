//! End-to-end searches through the public API.

use festival_clock::lunisolar::{self, Month};
use festival_clock::service::{FestivalInfo, FestivalService, FixedDate};
use festival_clock::{
    Category, Error, Festival, FestivalRegistry, FestivalRule, GregorianDate, JulianDay,
    NearestFestivalFinder, find_nearest,
};

fn ymd(y: i32, m: u32, d: u32) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

fn next(y: i32, m: u32, d: u32, horizon: i32) -> Option<(&'static str, i32)> {
    find_nearest(ymd(y, m, d), horizon)
        .unwrap()
        .map(|found| (found.festival.id, found.offset_days))
}

#[test]
fn julian_day_round_trip() {
    let mut jd = JulianDay::from_gregorian(1900, 1, 1).unwrap();
    let end = JulianDay::from_gregorian(2101, 1, 1).unwrap();
    while jd < end {
        let date = jd.to_gregorian();
        assert_eq!(jd, date.to_julian_day());
        let next = jd.checked_add(1).unwrap();
        assert!(next.to_gregorian() > date);
        jd = next;
    }
}

#[test]
fn festivals_of_2025() {
    assert_eq!(Some(("spring_festival_eve", 0)), next(2025, 1, 28, 60));
    assert_eq!(Some(("spring_festival", 0)), next(2025, 1, 29, 60));
    assert_eq!(Some(("lantern", 0)), next(2025, 2, 12, 60));
    assert_eq!(Some(("dragon_boat", 11)), next(2025, 5, 20, 60));
    assert_eq!(Some(("national_day", 0)), next(2025, 10, 1, 60));
    assert_eq!(Some(("mid_autumn", 4)), next(2025, 10, 2, 60));
}

#[test]
fn leap_month_festival_in_both_months() {
    // 2025 has a leap sixth month starting on July 25
    let lunar = lunisolar::to_lunisolar(ymd(2025, 7, 25)).unwrap();
    assert_eq!((Month::Leap(6), 1), (lunar.month, lunar.day));

    let registry = FestivalRegistry::new(vec![Festival::new(
        "sixth_sixth",
        "六月六",
        Category::Traditional,
        FestivalRule::FixedLunisolar {
            month: 6,
            day: 6,
            leap_only: false,
        },
        1,
    )]);
    let finder = NearestFestivalFinder::new(&registry);
    let first = finder.find_nearest(ymd(2025, 6, 20), 60).unwrap().unwrap();
    let second = finder
        .find_nearest(first.date.checked_add_days(1).unwrap(), 60)
        .unwrap()
        .unwrap();
    assert_eq!(ymd(2025, 6, 30), first.date);
    assert_eq!(ymd(2025, 7, 30), second.date);
}

#[test]
fn registry_order_is_not_definition_order() {
    let rule = FestivalRule::FixedSolar { month: 6, day: 1 };
    let registry = FestivalRegistry::new(vec![
        Festival::new("minor", "小", Category::Other, rule, 50),
        Festival::new("major", "大", Category::Statutory, rule, 10),
    ]);
    let found = NearestFestivalFinder::new(&registry)
        .find_nearest(ymd(2024, 5, 30), 5)
        .unwrap()
        .unwrap();
    assert_eq!(("major", 2), (found.festival.id, found.offset_days));
}

#[test]
fn supported_range_contract() {
    assert!(matches!(
        find_nearest(ymd(1900, 6, 1), 60),
        Err(Error::UnsupportedYearRange { year: 1900, .. })
    ));
    assert!(matches!(
        find_nearest(ymd(2100, 6, 1), 60),
        Err(Error::UnsupportedYearRange { year: 2100, .. })
    ));
    assert!(find_nearest(ymd(1901, 1, 1), 60).is_ok());
    assert!(matches!(find_nearest(ymd(2024, 1, 1), 0), Err(Error::InvalidArgument(_))));
}

#[test]
fn service_record() {
    let info = FestivalService::new(FixedDate(ymd(2024, 12, 31))).next_festival();
    assert_eq!(
        r#"{"name":"元旦","days":1,"type":"statutory"}"#,
        serde_json::to_string(&info).unwrap()
    );
    let info = FestivalService::new(FixedDate(ymd(1899, 1, 1))).next_festival();
    assert_eq!(FestivalInfo::none(), info);
}
