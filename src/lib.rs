//! Finds the next festival from a date, for a holiday countdown.
//!
//! The catalog mixes fixed Gregorian dates, fixed dates of the Chinese
//! lunisolar calendar and solar terms, so the crate carries its own
//! Gregorian ⇄ Julian day conversion and a lunisolar calendar computed from
//! the positions of the sun and moon.
//!
//! Lunisolar dates are supported for Gregorian years 1901 to 2099.
//!
//! # Examples
//!
//! Basic usage with [`GregorianDate`] and [`JulianDay`]:
//!
//! ```
//! use festival_clock::{GregorianDate, JulianDay};
//!
//! let date = GregorianDate::new(2000, 1, 1).unwrap();
//! assert_eq!(2451545, JulianDay::from(date).jdn());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use festival_clock::GregorianDate;
//! use festival_clock::lunisolar::{to_lunisolar, Month::*};
//!
//! let lunar = to_lunisolar(GregorianDate::new(2017, 7, 23).unwrap()).unwrap();
//! assert_eq!((2017, Leap(6), 1), (lunar.year, lunar.month, lunar.day));
//! ```
//!
//! Next festival:
//!
//! ```
//! use festival_clock::{find_nearest, GregorianDate};
//!
//! let found = find_nearest(GregorianDate::new(2024, 12, 31).unwrap(), 5)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(("元旦", 1), (found.festival.display_name, found.offset_days));
//! ```

pub mod astronomy;
pub mod date;
pub mod error;
pub mod festival;
pub mod lunisolar;
pub mod service;
pub mod time_scales;

pub use date::{GregorianDate, JulianDay, YearType, day_difference};
pub use error::{Error, Result};
pub use festival::finder::{FestivalMatch, MAX_HORIZON_DAYS, NearestFestivalFinder, find_nearest};
pub use festival::{Category, Festival, FestivalRegistry, FestivalRule};
pub use lunisolar::LunisolarDate;
