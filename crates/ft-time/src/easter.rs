//! Easter Sunday in the Gregorian calendar.

use crate::date::{Date, MAX_YEAR, MIN_YEAR};
use ft_core::errors::{Error, Result};

/// Compute the date of Easter Sunday in `year`.
///
/// Uses the Meeus/Jones/Butcher algorithm, which holds without exceptions
/// for every Gregorian year.
///
/// ```
/// use ft_time::{easter_sunday, Date};
///
/// assert_eq!(easter_sunday(2024).unwrap(), Date::from_ymd(2024, 3, 31).unwrap());
/// ```
///
/// # Errors
/// Returns `Error::InvalidYear` for years before 1583 or after 9999.
pub fn easter_sunday(year: u16) -> Result<Date> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::InvalidYear(i32::from(year)));
    }
    let y = i32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    let month = n / 31;
    let day = n % 31 + 1;
    Date::from_ymd(year, month as u8, day as u8)
}
