//! Festival catalog.
//!
//! A [`FestivalRegistry`] is an immutable list of [`Festival`]s in priority
//! order. [`FestivalRegistry::standard`] holds the built-in Chinese catalog;
//! [`finder`] searches a registry for the next festival from a date.

use std::fmt;
use std::sync::OnceLock;

pub mod finder;

/// Kind of festival, shown to the user next to its name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Category {
    /// Traditional festival of the lunisolar calendar
    Traditional,
    /// Public holiday
    Statutory,
    /// One of the 24 solar terms
    SolarTerm,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Traditional => "traditional",
            Category::Statutory => "statutory",
            Category::SolarTerm => "solar_term",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When a festival falls.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FestivalRule {
    /// Same Gregorian month and day every year.
    FixedSolar { month: u32, day: u32 },
    /// Same lunisolar month and day every year.
    ///
    /// Unless `leap_only`, both the ordinary month and a leap month of the
    /// same number match; with `leap_only`, only the leap month does.
    FixedLunisolar { month: u32, day: u32, leap_only: bool },
    /// Day of solar term `term_index` of the Gregorian year, 0 being 小寒 and
    /// 23 冬至, see [`crate::lunisolar::solar_term_date`].
    SolarTerm { term_index: usize },
    /// Last day of the lunisolar year, whether 腊月 has 29 or 30 days.
    LunisolarNewYearEve,
}

/// A catalog entry.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Festival {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: Category,
    pub rule: FestivalRule,
    /// Lower wins when several festivals fall on the same day
    pub priority: i32,
}

impl Festival {
    pub const fn new(
        id: &'static str,
        display_name: &'static str,
        category: Category,
        rule: FestivalRule,
        priority: i32,
    ) -> Self {
        Self {
            id,
            display_name,
            category,
            rule,
            priority,
        }
    }
}

/// Festivals ordered by ascending priority, then by the order given.
///
/// # Example
///
/// ```
/// use festival_clock::festival::{Category, Festival, FestivalRegistry, FestivalRule};
///
/// let registry = FestivalRegistry::new(vec![
///     Festival::new("b", "B", Category::Other, FestivalRule::FixedSolar { month: 1, day: 2 }, 5),
///     Festival::new("a", "A", Category::Other, FestivalRule::FixedSolar { month: 1, day: 1 }, 1),
/// ]);
/// assert_eq!("a", registry.all()[0].id);
/// assert_eq!(Some("B"), registry.get("b").map(|f| f.display_name));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FestivalRegistry {
    festivals: Vec<Festival>,
}

impl FestivalRegistry {
    pub fn new(mut festivals: Vec<Festival>) -> Self {
        // stable, keeps catalog order among equal priorities
        festivals.sort_by_key(|f| f.priority);
        Self { festivals }
    }

    /// A registry without festivals.
    pub const fn empty() -> Self {
        Self {
            festivals: Vec::new(),
        }
    }

    /// The built-in catalog.
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<FestivalRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| Self::new(standard_festivals()))
    }

    pub fn all(&self) -> &[Festival] {
        &self.festivals
    }
    pub fn len(&self) -> usize {
        self.festivals.len()
    }
    pub fn is_empty(&self) -> bool {
        self.festivals.is_empty()
    }
    pub fn get(&self, id: &str) -> Option<&Festival> {
        self.festivals.iter().find(|f| f.id == id)
    }
}

const STATUTORY: i32 = 10;
const TRADITIONAL: i32 = 20;
const SOLAR_TERM: i32 = 30;
const OTHER: i32 = 40;

fn standard_festivals() -> Vec<Festival> {
    use Category as C;
    use FestivalRule::*;

    let solar = |month, day| FixedSolar { month, day };
    let lunar = |month, day| FixedLunisolar {
        month,
        day,
        leap_only: false,
    };

    vec![
        Festival::new("new_year", "元旦", C::Statutory, solar(1, 1), STATUTORY),
        Festival::new("spring_festival_eve", "除夕", C::Statutory, LunisolarNewYearEve, STATUTORY),
        Festival::new("spring_festival", "春节", C::Statutory, lunar(1, 1), STATUTORY),
        Festival::new("qingming", "清明节", C::Statutory, SolarTerm { term_index: 6 }, STATUTORY),
        Festival::new("labour_day", "劳动节", C::Statutory, solar(5, 1), STATUTORY),
        Festival::new("dragon_boat", "端午节", C::Statutory, lunar(5, 5), STATUTORY),
        // listed first so it wins when both fall on October 1
        Festival::new("national_day", "国庆节", C::Statutory, solar(10, 1), STATUTORY),
        Festival::new("mid_autumn", "中秋节", C::Statutory, lunar(8, 15), STATUTORY),
        Festival::new("lantern", "元宵节", C::Traditional, lunar(1, 15), TRADITIONAL),
        Festival::new("longtaitou", "龙抬头", C::Traditional, lunar(2, 2), TRADITIONAL),
        Festival::new("qixi", "七夕节", C::Traditional, lunar(7, 7), TRADITIONAL),
        Festival::new("zhongyuan", "中元节", C::Traditional, lunar(7, 15), TRADITIONAL),
        Festival::new("double_ninth", "重阳节", C::Traditional, lunar(9, 9), TRADITIONAL),
        Festival::new("laba", "腊八节", C::Traditional, lunar(12, 8), TRADITIONAL),
        Festival::new("xiaonian", "小年", C::Traditional, lunar(12, 23), TRADITIONAL),
        Festival::new("winter_solstice", "冬至", C::SolarTerm, SolarTerm { term_index: 23 }, SOLAR_TERM),
        Festival::new("start_of_spring", "立春", C::SolarTerm, SolarTerm { term_index: 2 }, SOLAR_TERM),
        Festival::new("valentines_day", "情人节", C::Other, solar(2, 14), OTHER),
        Festival::new("womens_day", "妇女节", C::Other, solar(3, 8), OTHER),
        Festival::new("arbor_day", "植树节", C::Other, solar(3, 12), OTHER),
        Festival::new("april_fools_day", "愚人节", C::Other, solar(4, 1), OTHER),
        Festival::new("youth_day", "青年节", C::Other, solar(5, 4), OTHER),
        Festival::new("childrens_day", "儿童节", C::Other, solar(6, 1), OTHER),
        Festival::new("party_day", "建党节", C::Other, solar(7, 1), OTHER),
        Festival::new("army_day", "建军节", C::Other, solar(8, 1), OTHER),
        Festival::new("teachers_day", "教师节", C::Other, solar(9, 10), OTHER),
        Festival::new("christmas_eve", "平安夜", C::Other, solar(12, 24), OTHER),
        Festival::new("christmas", "圣诞节", C::Other, solar(12, 25), OTHER),
    ]
}
