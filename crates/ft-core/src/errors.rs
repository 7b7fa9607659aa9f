//! Error types for feiertage-rs.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  Precondition
//! checks are written with the [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// The top-level error type used throughout feiertage-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Year outside the supported Gregorian range.
    #[error("year {0} outside the supported range [1583, 9999]")]
    InvalidYear(i32),

    /// Date-related error: an invalid day/month combination or arithmetic
    /// that leaves the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A required form field was left empty.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Invalid argument, e.g. a non-numeric form field.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Rolling a date forward did not reach a business day within the
    /// configured number of steps.
    #[error("no business day within {limit} days after {start}")]
    RollLimitExceeded {
        /// The date the roll started from, formatted as `YYYY-MM-DD`.
        start: String,
        /// The configured step limit.
        limit: u32,
    },
}

/// Shorthand `Result` type used throughout feiertage-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ft_core::{ensure, errors::Error};
/// fn positive_weeks(weeks: i32) -> ft_core::errors::Result<i32> {
///     ensure!(weeks > 0, "weeks must be positive, got {weeks}");
///     Ok(weeks)
/// }
/// assert!(positive_weeks(2).is_ok());
/// assert!(matches!(positive_weeks(0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
