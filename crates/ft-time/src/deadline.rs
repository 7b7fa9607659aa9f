//! Deadline arithmetic: due dates a number of months after a begin date and
//! prolongation dates a number of weeks after a due date.
//!
//! Both computations build a *candidate* date and then roll it forward on
//! the [`Germany`] calendar, so the result is always a working day.

use crate::calendar::{Calendar, Germany};
use crate::date::Date;
use ft_core::errors::{Error, Result};
use ft_core::settings::Settings;
use ft_core::Integer;
use log::debug;

/// Roll `date` forward over weekends and German statutory holidays.
///
/// Shorthand for `Germany.roll_forward(date)`.
pub fn roll_forward(date: Date) -> Result<Date> {
    Germany.roll_forward(date)
}

/// Candidate due date: `months` calendar months after `begin`, before
/// rolling.
///
/// The zero-based month index `begin.month - 1 + months` is wrapped with a
/// truncating remainder, and the year advances by exactly one when the index
/// passes December.  Offsets of 24 months or more therefore still add a
/// single year.  A negative wrapped index counts back from January of the
/// computed year (index -1 is the preceding December).
///
/// The day of the month is carried over unchanged and *not* clamped to the
/// length of the target month; overflow spills into the following month
/// (January 31 + 1 month is "February 31", i.e. early March).
pub fn due_date_candidate(begin: Date, months: Integer) -> Result<Date> {
    let (year, month, day) = begin.ymd();
    let zero_based = i32::from(month) - 1;
    let index = zero_based
        .checked_add(months)
        .ok_or_else(|| Error::InvalidArgument(format!("month offset {months} overflows")))?;
    let year = if index > 11 { i32::from(year) + 1 } else { i32::from(year) };
    Date::from_ymd_lenient(year, index % 12 + 1, i32::from(day))
}

/// Candidate prolongation date: `weeks` weeks after `due`, before rolling.
pub fn prolongation_candidate(due: Date, weeks: Integer) -> Result<Date> {
    let days = weeks
        .checked_mul(7)
        .ok_or_else(|| Error::InvalidArgument(format!("week offset {weeks} overflows")))?;
    due.add_days(days)
}

/// Due date `months` months after `begin`, rolled forward to a business day.
///
/// ```
/// use ft_time::{add_months, Date};
///
/// // "February 31, 2024" is Saturday March 2 and rolls to Monday March 4.
/// let begin = Date::from_ymd(2024, 1, 31).unwrap();
/// assert_eq!(add_months(begin, 1).unwrap(), Date::from_ymd(2024, 3, 4).unwrap());
/// ```
pub fn add_months(begin: Date, months: Integer) -> Result<Date> {
    add_months_with(begin, months, &Settings::default())
}

/// [`add_months`] with explicit settings.
pub fn add_months_with(begin: Date, months: Integer, settings: &Settings) -> Result<Date> {
    let candidate = due_date_candidate(begin, months)?;
    let due = Germany.roll_forward_with(candidate, settings)?;
    debug!("due date: {begin} + {months} months -> candidate {candidate} -> {due}");
    Ok(due)
}

/// Prolongation date `weeks` weeks after `due`, rolled forward to a
/// business day.
///
/// ```
/// use ft_time::{add_weeks, Date};
///
/// let due = Date::from_ymd(2024, 5, 1).unwrap();
/// assert_eq!(add_weeks(due, 2).unwrap(), Date::from_ymd(2024, 5, 15).unwrap());
/// ```
pub fn add_weeks(due: Date, weeks: Integer) -> Result<Date> {
    add_weeks_with(due, weeks, &Settings::default())
}

/// [`add_weeks`] with explicit settings.
pub fn add_weeks_with(due: Date, weeks: Integer, settings: &Settings) -> Result<Date> {
    let candidate = prolongation_candidate(due, weeks)?;
    let prolonged = Germany.roll_forward_with(candidate, settings)?;
    debug!("prolongation: {due} + {weeks} weeks -> candidate {candidate} -> {prolonged}");
    Ok(prolonged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn months_without_overflow() {
        assert_eq!(due_date_candidate(date(2024, 3, 15), 6), Ok(date(2024, 9, 15)));
    }

    #[test]
    fn months_roll_into_next_year() {
        // November + 3 months → February of the next year
        assert_eq!(due_date_candidate(date(2023, 11, 20), 3), Ok(date(2024, 2, 20)));
        // December + 12 months → December of the next year
        assert_eq!(due_date_candidate(date(2023, 12, 4), 12), Ok(date(2024, 12, 4)));
    }

    #[test]
    fn day_is_not_clamped() {
        assert_eq!(due_date_candidate(date(2024, 1, 31), 1), Ok(date(2024, 3, 2)));
        assert_eq!(due_date_candidate(date(2023, 1, 31), 1), Ok(date(2023, 3, 3)));
        assert_eq!(due_date_candidate(date(2024, 3, 31), 1), Ok(date(2024, 5, 1)));
    }

    #[test]
    fn due_date_rolls_over_weekend() {
        assert_eq!(add_months(date(2024, 1, 31), 1), Ok(date(2024, 3, 4)));
    }

    #[test]
    fn due_date_rolls_over_labour_day() {
        // March 31 + 1 month → May 1 2024 (Wednesday, Labour Day) → May 2
        assert_eq!(add_months(date(2024, 3, 31), 1), Ok(date(2024, 5, 2)));
    }

    #[test]
    fn due_date_rolls_over_christmas() {
        // 2027-12-25 is a Saturday; Dec 26 Sunday; Dec 27 Monday
        assert_eq!(add_months(date(2027, 6, 25), 6), Ok(date(2027, 12, 27)));
    }

    #[test]
    fn long_offsets_carry_one_year() {
        assert_eq!(due_date_candidate(date(2024, 1, 15), 24), Ok(date(2025, 1, 15)));
        assert_eq!(due_date_candidate(date(2024, 1, 15), 25), Ok(date(2025, 2, 15)));
        assert_eq!(due_date_candidate(date(2024, 6, 15), 30), Ok(date(2025, 12, 15)));
        assert_eq!(due_date_candidate(date(2024, 11, 15), 13), Ok(date(2025, 12, 15)));
    }

    #[test]
    fn long_offset_due_date_is_rolled() {
        // 2025-03-15 is a Saturday
        assert_eq!(add_months(date(2024, 3, 15), 24), Ok(date(2025, 3, 17)));
    }

    #[test]
    fn negative_months() {
        assert_eq!(due_date_candidate(date(2024, 2, 10), -3), Ok(date(2023, 11, 10)));
        // index -13 wraps to -1: December before the begin year
        assert_eq!(due_date_candidate(date(2024, 1, 10), -13), Ok(date(2023, 12, 10)));
    }

    #[test]
    fn weeks_plain() {
        assert_eq!(add_weeks(date(2024, 5, 1), 2), Ok(date(2024, 5, 15)));
        assert_eq!(prolongation_candidate(date(2024, 12, 20), 2), Ok(date(2025, 1, 3)));
    }

    #[test]
    fn weeks_land_on_holiday() {
        // 2024-05-16 + 2 weeks = 2024-05-30, Corpus Christi (Thursday) → Friday
        assert_eq!(add_weeks(date(2024, 5, 16), 2), Ok(date(2024, 5, 31)));
    }

    #[test]
    fn weeks_overflow() {
        assert!(matches!(
            prolongation_candidate(date(2024, 5, 1), i32::MAX),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn roll_forward_shorthand() {
        assert_eq!(roll_forward(date(2024, 12, 25)), Ok(date(2024, 12, 27)));
    }
}
