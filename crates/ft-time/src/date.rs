//! `Date` type: one civil day in the proleptic Gregorian calendar.
//!
//! Dates are stored as a serial number of days.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1583, the first full year of the Gregorian
//!   calendar.
//! * The valid date range is 1583-01-01 to 9999-12-31.
//!
//! Two families of constructors exist.  [`Date::from_ymd`] rejects any
//! day/month combination that does not exist.  [`Date::from_ymd_lenient`]
//! normalizes overflow instead, carrying excess days and months into the
//! following month and year, which is what the deadline arithmetic relies on.

use crate::weekday::Weekday;
use ft_core::errors::{Error, Result};

/// First supported year.
pub const MIN_YEAR: u16 = 1583;

/// Last supported year.
pub const MAX_YEAR: u16 = 9999;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Ymd", try_from = "Ymd")
)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(MAX_YEAR, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` lies outside `[Date::MIN, Date::MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// The combination must name an existing day.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        check_year(i32::from(year))?;
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from year, month, and day, normalizing overflow.
    ///
    /// `month` is 1-based; values outside 1–12 carry into the year
    /// (month 13 is January of the following year, month 0 is December of
    /// the previous one).  `day` is counted from the first of the resulting
    /// month, so day 31 of a 30-day month is the first of the next month and
    /// day 0 is the last day of the previous month.
    ///
    /// ```
    /// use ft_time::Date;
    ///
    /// // "February 31, 2024" is March 2, 2024.
    /// let d = Date::from_ymd_lenient(2024, 2, 31).unwrap();
    /// assert_eq!(d, Date::from_ymd(2024, 3, 2).unwrap());
    /// ```
    ///
    /// # Errors
    /// Returns an error only if the normalized date leaves the supported
    /// range.
    pub fn from_ymd_lenient(year: i32, month: i32, day: i32) -> Result<Self> {
        let zero_based = month
            .checked_sub(1)
            .ok_or_else(|| Error::Date(format!("month {month} out of range")))?;
        let y = year
            .checked_add(zero_based.div_euclid(12))
            .ok_or(Error::InvalidYear(year))?;
        let m = zero_based.rem_euclid(12) + 1;
        check_year(y)?;
        let first = serial_from_ymd(y as u16, m as u8, 1);
        let serial = first.checked_add(day).and_then(|s| s.checked_sub(1)).ok_or_else(|| {
            Error::Date(format!("day {day} overflows {y}-{m:02}"))
        })?;
        Self::from_serial(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1583–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1583-01-01) is a Saturday.
        Weekday::from_index((self.0 + 4).rem_euclid(7) as usize)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {self} + {n} days overflows"))
        })?;
        Self::from_serial(serial)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

/// # Panics
/// Panics if the result leaves the supported range; use [`Date::add_days`]
/// to handle that case.
impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

/// # Panics
/// Panics if the result leaves the supported range.
impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Serde representation ──────────────────────────────────────────────────────

/// Wire shape of a [`Date`]: three named integers.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Ymd {
    year: u16,
    month: u8,
    day: u8,
}

#[cfg(feature = "serde")]
impl From<Date> for Ymd {
    fn from(d: Date) -> Self {
        let (year, month, day) = d.ymd();
        Ymd { year, month, day }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Ymd> for Date {
    type Error = Error;
    fn try_from(v: Ymd) -> Result<Self> {
        Date::from_ymd(v.year, v.month, v.day)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn check_year(year: i32) -> Result<()> {
    if year < i32::from(MIN_YEAR) || year > i32::from(MAX_YEAR) {
        return Err(Error::InvalidYear(year));
    }
    Ok(())
}

/// Leap years in `[1, year]`.
const fn leap_years_through(year: i32) -> i32 {
    year / 4 - year / 100 + year / 400
}

/// Convert (year, month, day) to a serial number.  Serial 1 = 1583-01-01.
const fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let mut serial = (y - MIN_YEAR as i32) * 365;
    serial += leap_years_through(y - 1) - leap_years_through(MIN_YEAR as i32 - 1);
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // 365.2425 days per year, so this estimate is never more than one year off
    let mut y = (MIN_YEAR as i32 + (serial - 1) * 400 / 146_097) as u16;
    while serial < serial_from_ymd(y, 1, 1) {
        y -= 1;
    }
    while y < MAX_YEAR && serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days || m == 12 {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1583, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
        assert_eq!(d.weekday(), Weekday::Saturday);
        assert_eq!(Date::MAX.serial(), 3_074_246);
        assert_eq!(Date::MAX.ymd(), (9999, 12, 31));
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1583, 1, 1),
            (1600, 2, 29), // leap century
            (1900, 2, 28), // non-leap century
            (2000, 2, 29),
            (2024, 12, 31),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_serial_of_known_date() {
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().serial(), 161_073);
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2024-03-02 is a Saturday
        let d2 = Date::from_ymd(2024, 3, 2).unwrap();
        assert_eq!(d2.weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_strict_rejects_invalid() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 4, 31).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 1, 0).is_err());
        assert_eq!(Date::from_ymd(1582, 12, 31), Err(Error::InvalidYear(1582)));
    }

    #[test]
    fn test_lenient_normalizes() {
        let d = |y, m, dd| Date::from_ymd(y, m, dd).unwrap();
        assert_eq!(Date::from_ymd_lenient(2024, 2, 31).unwrap(), d(2024, 3, 2));
        assert_eq!(Date::from_ymd_lenient(2023, 2, 31).unwrap(), d(2023, 3, 3));
        assert_eq!(Date::from_ymd_lenient(2024, 4, 31).unwrap(), d(2024, 5, 1));
        assert_eq!(Date::from_ymd_lenient(2024, 13, 5).unwrap(), d(2025, 1, 5));
        assert_eq!(Date::from_ymd_lenient(2024, 0, 5).unwrap(), d(2023, 12, 5));
        assert_eq!(Date::from_ymd_lenient(2024, 3, 0).unwrap(), d(2024, 2, 29));
        assert_eq!(Date::from_ymd_lenient(2024, 12, 32).unwrap(), d(2025, 1, 1));
    }

    #[test]
    fn test_lenient_out_of_range() {
        assert!(Date::from_ymd_lenient(1583, 1, 0).is_err());
        assert!(Date::from_ymd_lenient(9999, 12, 32).is_err());
        assert_eq!(
            Date::from_ymd_lenient(10_000, 1, 1),
            Err(Error::InvalidYear(10_000))
        );
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.ymd(), (2023, 2, 1));
        assert_eq!(Date::from_ymd(2023, 2, 1).unwrap() - d, 31);
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(2024, 5, 1).unwrap();
        assert_eq!(d.to_string(), "2024-05-01");
        assert_eq!(format!("{d:?}"), "Date(2024-05-01)");
    }
}
