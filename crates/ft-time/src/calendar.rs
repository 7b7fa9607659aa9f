//! `Calendar` trait and the German statutory-holiday calendar.
//!
//! A calendar knows which dates are business days and can roll a date
//! forward to the next one.

use crate::date::Date;
use crate::holiday;
use ft_core::errors::{Error, Result};
use ft_core::settings::Settings;
use log::{trace, warn};

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Germany (statutory holidays)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a holiday in this calendar.  Weekends are
    /// reported separately by [`is_weekend`](Self::is_weekend).
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Roll `date` forward to the first business day on or after it, using
    /// the default [`Settings`].
    fn roll_forward(&self, date: Date) -> Result<Date> {
        self.roll_forward_with(date, &Settings::default())
    }

    /// Roll `date` forward to the first business day on or after it.
    ///
    /// # Errors
    /// Returns `Error::RollLimitExceeded` if no business day is found within
    /// `settings.max_roll_days()` steps, or `Error::Date` if stepping leaves
    /// the supported date range.
    fn roll_forward_with(&self, start: Date, settings: &Settings) -> Result<Date> {
        let limit = settings.max_roll_days();
        let mut date = start;
        let mut steps = 0u32;
        while !self.is_business_day(date) {
            if steps == limit {
                warn!("{}: no business day within {limit} days after {start}", self.name());
                return Err(Error::RollLimitExceeded {
                    start: start.to_string(),
                    limit,
                });
            }
            trace!(
                "{}: {date} ({}) is not a business day",
                self.name(),
                date.weekday().german_name()
            );
            date = date.add_days(1)?;
            steps += 1;
        }
        Ok(date)
    }
}

/// The German statutory-holiday calendar: Saturdays, Sundays, and the
/// twelve holidays of [`holiday::holidays_for_year`] are non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

impl Calendar for Germany {
    fn name(&self) -> &str {
        "Germany (statutory holidays)"
    }

    fn is_holiday(&self, date: Date) -> bool {
        holiday::is_holiday(date)
    }
}
