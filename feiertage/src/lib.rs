//! # feiertage
//!
//! German statutory holidays and the deadline arithmetic built on them.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than on `ft-core` / `ft-time` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use feiertage::time::{add_months, add_weeks, easter_sunday, is_holiday, Date};
//!
//! let easter = easter_sunday(2024).unwrap();
//! assert_eq!(easter, Date::from_ymd(2024, 3, 31).unwrap());
//! assert!(is_holiday(easter - 2)); // Good Friday
//!
//! // Due date six months after the begin date, moved to a working day.
//! let begin = Date::from_ymd(2024, 7, 1).unwrap();
//! let due = add_months(begin, 6).unwrap();
//! assert_eq!(due, Date::from_ymd(2025, 1, 2).unwrap());
//!
//! // Prolongation by two weeks.
//! let prolonged = add_weeks(due, 2).unwrap();
//! assert_eq!(prolonged, Date::from_ymd(2025, 1, 16).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and settings.
pub use ft_core as core;

/// Dates, holidays, calendars, and deadline arithmetic.
pub use ft_time as time;

pub use ft_core::{Error, Result, Settings};
