//! # ft-time
//!
//! Date type, Easter computation, German statutory holidays, business-day
//! calendar, and the deadline arithmetic built on top of them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and built-in implementations.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Due-date and prolongation-date arithmetic.
pub mod deadline;

/// Easter Sunday.
pub mod easter;

/// Conversion between form fields and dates, plus form validation.
pub mod form;

/// German statutory holidays.
pub mod holiday;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, Germany};
pub use date::Date;
pub use deadline::{add_months, add_weeks, roll_forward};
pub use easter::easter_sunday;
pub use form::DateFields;
pub use holiday::{holiday_for_date, holidays_for_year, is_holiday, Holiday, HolidayDefinition};
pub use weekday::Weekday;
