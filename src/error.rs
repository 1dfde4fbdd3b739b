//! Error type shared by every fallible operation of the crate.

/// Errors reported by date conversion, the lunisolar calendar and the
/// festival search.
///
/// The engine never recovers from these; they always reach the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The Gregorian date does not exist, or its year is outside `1..=9999`.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year as given.
        year: i32,
        /// Month as given.
        month: u32,
        /// Day as given.
        day: u32,
    },

    /// Day arithmetic left the supported Julian day number span.
    #[error("julian day number {jdn} is outside the supported range")]
    JulianDayOutOfRange {
        /// The offending day number.
        jdn: i64,
    },

    /// No astronomical data is computed for the year.
    #[error("year {year} is outside the supported range {min}..={max}")]
    UnsupportedYearRange {
        /// The requested year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// An argument violates the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
