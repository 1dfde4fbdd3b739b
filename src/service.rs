//! Application-facing wrapper around the festival search.

use chrono::Local;
use serde::Serialize;
use tracing::warn;

use crate::date::GregorianDate;
use crate::error::Result;
use crate::festival::FestivalRegistry;
use crate::festival::finder::{FestivalMatch, NearestFestivalFinder};

/// Horizon used by [`FestivalService`] unless overridden, in days.
pub const DEFAULT_HORIZON_DAYS: i32 = 60;

/// Name reported when no festival is found.
pub const NONE_NAME: &str = "none";

/// Source of the current date.
pub trait DateSupplier {
    fn today(&self) -> Result<GregorianDate>;
}

/// Today's date on the local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl DateSupplier for SystemClock {
    fn today(&self) -> Result<GregorianDate> {
        GregorianDate::try_from(Local::now().date_naive())
    }
}

/// Always the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedDate(pub GregorianDate);

impl DateSupplier for FixedDate {
    fn today(&self) -> Result<GregorianDate> {
        Ok(self.0)
    }
}

/// Record handed to the presentation layer.
///
/// # Example
///
/// ```
/// use festival_clock::service::FestivalInfo;
///
/// let json = serde_json::to_string(&FestivalInfo::none()).unwrap();
/// assert_eq!(r#"{"name":"none","days":0,"type":""}"#, json);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FestivalInfo {
    pub name: String,
    pub days: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FestivalInfo {
    /// The record for "no festival within the horizon".
    pub fn none() -> Self {
        Self {
            name: NONE_NAME.to_owned(),
            days: 0,
            kind: String::new(),
        }
    }
}

impl From<FestivalMatch<'_>> for FestivalInfo {
    fn from(found: FestivalMatch<'_>) -> Self {
        Self {
            name: found.festival.display_name.to_owned(),
            days: found.offset_days,
            kind: found.festival.category.to_string(),
        }
    }
}

/// Finds the next festival from today, never failing.
#[derive(Debug, Clone)]
pub struct FestivalService<S> {
    supplier: S,
    registry: &'static FestivalRegistry,
    horizon_days: i32,
}

impl<S: DateSupplier> FestivalService<S> {
    /// Service over the standard catalog with [`DEFAULT_HORIZON_DAYS`].
    pub fn new(supplier: S) -> Self {
        Self {
            supplier,
            registry: FestivalRegistry::standard(),
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    pub fn with_horizon(mut self, horizon_days: i32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    pub fn with_registry(mut self, registry: &'static FestivalRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The next festival, or [`FestivalInfo::none`] if there is none within
    /// the horizon or the search fails; failures are logged.
    ///
    /// # Example
    ///
    /// ```
    /// use festival_clock::GregorianDate;
    /// use festival_clock::service::{FestivalService, FixedDate};
    ///
    /// let today = GregorianDate::new(2024, 9, 11).unwrap();
    /// let info = FestivalService::new(FixedDate(today)).next_festival();
    /// assert_eq!(("中秋节", 6, "statutory"), (info.name.as_str(), info.days, info.kind.as_str()));
    /// ```
    pub fn next_festival(&self) -> FestivalInfo {
        match self.search() {
            Ok(Some(found)) => found.into(),
            Ok(None) => FestivalInfo::none(),
            Err(e) => {
                warn!(error = %e, "festival search failed");
                FestivalInfo::none()
            }
        }
    }

    fn search(&self) -> Result<Option<FestivalMatch<'static>>> {
        let today = self.supplier.today()?;
        NearestFestivalFinder::new(self.registry).find_nearest(today, self.horizon_days)
    }
}
