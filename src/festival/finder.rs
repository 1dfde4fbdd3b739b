//! Search for the nearest upcoming festival.

use tracing::{debug, trace};

use super::{Festival, FestivalRegistry, FestivalRule};
use crate::date::GregorianDate;
use crate::error::{Error, Result};
use crate::lunisolar::{self, LunisolarDate};

/// Largest horizon [`NearestFestivalFinder::find_nearest`] accepts, in days.
pub const MAX_HORIZON_DAYS: i32 = 400;

/// A festival found by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalMatch<'r> {
    pub festival: &'r Festival,
    /// Days from the reference date, 0 for the reference date itself
    pub offset_days: i32,
    pub date: GregorianDate,
}

/// Finds the first festival of a registry on or after a date.
#[derive(Debug, Clone, Copy)]
pub struct NearestFestivalFinder<'r> {
    registry: &'r FestivalRegistry,
}

impl<'r> NearestFestivalFinder<'r> {
    pub fn new(registry: &'r FestivalRegistry) -> Self {
        Self { registry }
    }

    /// Finds the festival with the smallest offset in `0..=horizon_days` from
    /// `reference`. Festivals falling on the same day are ranked by registry
    /// order.
    ///
    /// Fails with [`Error::InvalidArgument`] unless `horizon_days` is in
    /// `1..=`[`MAX_HORIZON_DAYS`]. Conversion errors stop the search and are
    /// returned, unless a festival was already found at a smaller offset.
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::GregorianDate;
    /// use festival_clock::festival::FestivalRegistry;
    /// use festival_clock::festival::finder::NearestFestivalFinder;
    ///
    /// let finder = NearestFestivalFinder::new(FestivalRegistry::standard());
    /// let reference = GregorianDate::new(2024, 12, 31).unwrap();
    /// let found = finder.find_nearest(reference, 5).unwrap().unwrap();
    ///
    /// assert_eq!(("元旦", 1), (found.festival.display_name, found.offset_days));
    /// ```
    pub fn find_nearest(
        &self,
        reference: GregorianDate,
        horizon_days: i32,
    ) -> Result<Option<FestivalMatch<'r>>> {
        if !(1..=MAX_HORIZON_DAYS).contains(&horizon_days) {
            return Err(Error::InvalidArgument(format!(
                "horizon of {horizon_days} days not in 1..={MAX_HORIZON_DAYS}"
            )));
        }
        if self.registry.is_empty() {
            return Ok(None);
        }

        let start = reference.to_julian_day();
        for offset in 0..=horizon_days {
            let date = start.checked_add(offset)?.to_gregorian();
            let mut day = Candidate::new(date)?;
            trace!(%date, lunar = %day.lunar, "checking festivals");

            for festival in self.registry.all() {
                if day.matches(&festival.rule)? {
                    debug!(id = festival.id, %date, offset, "found festival");
                    return Ok(Some(FestivalMatch {
                        festival,
                        offset_days: offset,
                        date,
                    }));
                }
            }
        }
        debug!(%reference, horizon_days, "no festival within horizon");
        Ok(None)
    }
}

/// Finds the nearest festival of [`FestivalRegistry::standard`].
///
/// # Example
///
/// ```
/// use festival_clock::{find_nearest, GregorianDate};
///
/// let found = find_nearest(GregorianDate::new(2024, 9, 11).unwrap(), 60).unwrap();
/// assert_eq!(Some(("中秋节", 6)), found.map(|m| (m.festival.display_name, m.offset_days)));
/// ```
pub fn find_nearest(
    reference: GregorianDate,
    horizon_days: i32,
) -> Result<Option<FestivalMatch<'static>>> {
    NearestFestivalFinder::new(FestivalRegistry::standard()).find_nearest(reference, horizon_days)
}

/// One day of the search; the new year's eve flag is only computed when a
/// rule asks for it.
struct Candidate {
    date: GregorianDate,
    lunar: LunisolarDate,
    new_years_eve: Option<bool>,
}

impl Candidate {
    fn new(date: GregorianDate) -> Result<Self> {
        Ok(Self {
            date,
            lunar: lunisolar::to_lunisolar(date)?,
            new_years_eve: None,
        })
    }

    fn matches(&mut self, rule: &FestivalRule) -> Result<bool> {
        Ok(match *rule {
            FestivalRule::FixedSolar { month, day } => {
                self.date.month() == month && self.date.day() == day
            }
            FestivalRule::FixedLunisolar {
                month,
                day,
                leap_only,
            } => {
                self.lunar.month_number() == month
                    && self.lunar.day == day
                    && (!leap_only || self.lunar.is_leap_month())
            }
            FestivalRule::SolarTerm { term_index } => self.is_solar_term(term_index)?,
            FestivalRule::LunisolarNewYearEve => self.is_new_years_eve()?,
        })
    }

    fn is_solar_term(&self, term_index: usize) -> Result<bool> {
        Ok(lunisolar::solar_term_date(self.date.year(), term_index)? == self.date)
    }

    fn is_new_years_eve(&mut self) -> Result<bool> {
        if let Some(eve) = self.new_years_eve {
            return Ok(eve);
        }
        let eve = lunisolar::is_lunisolar_new_years_eve(self.date)?;
        self.new_years_eve = Some(eve);
        Ok(eve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::festival::Category;

    fn ymd(y: i32, m: u32, d: u32) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    fn registry(rules: &[(&'static str, FestivalRule, i32)]) -> FestivalRegistry {
        FestivalRegistry::new(
            rules
                .iter()
                .map(|&(id, rule, priority)| Festival::new(id, id, Category::Other, rule, priority))
                .collect(),
        )
    }

    fn offset(registry: &FestivalRegistry, reference: GregorianDate, horizon: i32) -> Option<i32> {
        NearestFestivalFinder::new(registry)
            .find_nearest(reference, horizon)
            .unwrap()
            .map(|m| m.offset_days)
    }

    #[test]
    fn new_year() {
        let reg = registry(&[("new_year", FestivalRule::FixedSolar { month: 1, day: 1 }, 1)]);
        let found = NearestFestivalFinder::new(&reg)
            .find_nearest(ymd(2024, 12, 31), 5)
            .unwrap()
            .unwrap();
        assert_eq!("new_year", found.festival.id);
        assert_eq!(1, found.offset_days);
        assert_eq!(ymd(2025, 1, 1), found.date);
    }

    #[test]
    fn empty_registry() {
        let reg = FestivalRegistry::default();
        for (reference, horizon) in [(ymd(2024, 1, 1), 1), (ymd(1850, 6, 1), 400), (ymd(9999, 12, 31), 30)] {
            assert_eq!(None, offset(&reg, reference, horizon));
        }
    }

    #[test]
    fn tie_break_by_priority() {
        let rule = FestivalRule::FixedSolar { month: 3, day: 1 };
        let reg = registry(&[("late", rule, 5), ("early", rule, 1)]);
        let found = NearestFestivalFinder::new(&reg)
            .find_nearest(ymd(2024, 2, 20), 30)
            .unwrap()
            .unwrap();
        assert_eq!(("early", 10), (found.festival.id, found.offset_days));
    }

    #[test]
    fn nearest_beats_priority() {
        let reg = registry(&[
            ("later", FestivalRule::FixedSolar { month: 3, day: 2 }, 1),
            ("sooner", FestivalRule::FixedSolar { month: 3, day: 1 }, 9),
        ]);
        assert_eq!(Some(10), offset(&reg, ymd(2024, 2, 20), 30));
    }

    #[test]
    fn leap_month() {
        // 2009 has a leap fifth month starting on June 23
        let any = registry(&[(
            "duanwu",
            FestivalRule::FixedLunisolar {
                month: 5,
                day: 5,
                leap_only: false,
            },
            1,
        )]);
        assert_eq!(Some(8), offset(&any, ymd(2009, 5, 20), 60));
        assert_eq!(Some(26), offset(&any, ymd(2009, 6, 1), 60));

        let leap = registry(&[(
            "duanwu",
            FestivalRule::FixedLunisolar {
                month: 5,
                day: 5,
                leap_only: true,
            },
            1,
        )]);
        assert_eq!(Some(38), offset(&leap, ymd(2009, 5, 20), 60));
        assert_eq!(None, offset(&leap, ymd(2024, 5, 20), 60));
    }

    #[test]
    fn cross_year_solar_term() {
        let reg = registry(&[("dongzhi", FestivalRule::SolarTerm { term_index: 23 }, 1)]);
        let found = NearestFestivalFinder::new(&reg)
            .find_nearest(ymd(2024, 12, 15), 30)
            .unwrap()
            .unwrap();
        assert_eq!((6, ymd(2024, 12, 21)), (found.offset_days, found.date));
        assert_eq!(ymd(2024, 12, 21), lunisolar::solar_term_date(2024, 23).unwrap());

        let reg = registry(&[("xiaohan", FestivalRule::SolarTerm { term_index: 0 }, 1)]);
        let found = NearestFestivalFinder::new(&reg)
            .find_nearest(ymd(2024, 12, 25), 30)
            .unwrap()
            .unwrap();
        assert_eq!(ymd(2025, 1, 5), found.date);
    }

    #[test]
    fn new_years_eve() {
        let reg = registry(&[("chuxi", FestivalRule::LunisolarNewYearEve, 1)]);
        // 腊月 of 甲辰 has 29 days
        let found = NearestFestivalFinder::new(&reg)
            .find_nearest(ymd(2025, 1, 1), 60)
            .unwrap()
            .unwrap();
        assert_eq!(ymd(2025, 1, 28), found.date);
    }

    #[test]
    fn standard_catalog() {
        for ((y, m, d), horizon, id, days) in [
            ((2024, 9, 11), 60, "mid_autumn", 6),
            ((2020, 10, 1), 1, "national_day", 0),
            ((2024, 2, 5), 10, "spring_festival_eve", 4),
            ((2024, 4, 1), 10, "april_fools_day", 0),
            ((2024, 4, 2), 10, "qingming", 2),
            ((2024, 12, 20), 3, "winter_solstice", 1),
        ] {
            let found = find_nearest(ymd(y, m, d), horizon).unwrap().unwrap();
            assert_eq!((id, days), (found.festival.id, found.offset_days), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn horizon_is_inclusive() {
        let reg = registry(&[("new_year", FestivalRule::FixedSolar { month: 1, day: 1 }, 1)]);
        assert_eq!(Some(5), offset(&reg, ymd(2024, 12, 27), 5));
        assert_eq!(None, offset(&reg, ymd(2024, 12, 27), 4));
    }

    #[test]
    fn send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<FestivalRegistry>();
        assert_impl::<NearestFestivalFinder<'static>>();
        assert_impl::<FestivalMatch<'static>>();
    }

    #[test]
    fn invalid_horizon() {
        for horizon in [0, -1, MAX_HORIZON_DAYS + 1] {
            assert!(matches!(
                find_nearest(ymd(2024, 1, 1), horizon),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert!(find_nearest(ymd(2024, 1, 1), MAX_HORIZON_DAYS).is_ok());
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            find_nearest(ymd(1900, 12, 31), 5),
            Err(Error::UnsupportedYearRange { .. })
        ));
        assert!(matches!(
            find_nearest(ymd(2100, 1, 1), 5),
            Err(Error::UnsupportedYearRange { .. })
        ));

        let late = registry(&[("late", FestivalRule::FixedSolar { month: 1, day: 2 }, 1)]);
        assert!(NearestFestivalFinder::new(&late)
            .find_nearest(ymd(2099, 12, 30), 5)
            .is_err());
        let early = registry(&[("early", FestivalRule::FixedSolar { month: 12, day: 31 }, 1)]);
        assert_eq!(Some(1), offset(&early, ymd(2099, 12, 30), 5));
    }

    #[test]
    fn bounded_and_deterministic() {
        let mut date = ymd(2023, 1, 1);
        for _ in 0..40 {
            for horizon in [1, 7, 60] {
                let first = find_nearest(date, horizon).unwrap();
                assert_eq!(first, find_nearest(date, horizon).unwrap());
                if let Some(found) = first {
                    assert!((0..=horizon).contains(&found.offset_days));
                    assert_eq!(date.checked_add_days(found.offset_days).unwrap(), found.date);
                }
            }
            date = date.checked_add_days(17).unwrap();
        }
    }
}
