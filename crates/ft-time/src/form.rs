//! Adapter between raw form values and [`Date`].
//!
//! The thesis application form holds dates as three separate numeric fields
//! (day, month, year) and the stored due date as an ISO string.  Nothing in
//! this module performs I/O; it only converts values and checks the
//! constraints the form enforces.

use crate::date::Date;
use crate::deadline::{add_months, add_weeks};
use ft_core::ensure;
use ft_core::errors::{Error, Result};
use ft_core::Integer;

/// The three numeric fields of a date on the form.  `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateFields {
    /// Day of month.
    pub day: Integer,
    /// Month (1 = January).
    pub month: Integer,
    /// Year.
    pub year: Integer,
}

impl DateFields {
    /// Parse the raw text of the three fields.
    ///
    /// # Errors
    /// `Error::MissingInput` if a field is blank, `Error::InvalidArgument` if
    /// it is not an integer.
    pub fn parse(day: &str, month: &str, year: &str) -> Result<Self> {
        Ok(Self {
            day: parse_field("day", day)?,
            month: parse_field("month", month)?,
            year: parse_field("year", year)?,
        })
    }

    /// Convert to a [`Date`], normalizing out-of-range day or month values
    /// the way [`Date::from_ymd_lenient`] does.
    pub fn to_date(self) -> Result<Date> {
        Date::from_ymd_lenient(self.year, self.month, self.day)
    }
}

impl From<Date> for DateFields {
    fn from(d: Date) -> Self {
        let (year, month, day) = d.ymd();
        Self {
            day: Integer::from(day),
            month: Integer::from(month),
            year: Integer::from(year),
        }
    }
}

fn parse_field(name: &str, raw: &str) -> Result<Integer> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::MissingInput(name.to_string()));
    }
    raw.parse()
        .map_err(|_| Error::InvalidArgument(format!("{name} {raw:?} is not a number")))
}

/// Parse a `YYYY-MM-DD` string as stored in the due-date field.
///
/// The components are normalized leniently, like [`DateFields::to_date`].
pub fn parse_iso_date(raw: &str) -> Result<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::MissingInput("due_date".into()));
    }
    let mut parts = raw.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::InvalidArgument(format!(
            "{raw:?} is not a YYYY-MM-DD date"
        )));
    };
    DateFields::parse(day, month, year)?.to_date()
}

/// Fill the due-date fields: `months` months after the begin-date fields,
/// rolled forward to a business day.
pub fn due_date_fields(begin: DateFields, months: Integer) -> Result<DateFields> {
    add_months(begin.to_date()?, months).map(DateFields::from)
}

/// Fill the prolongation-date fields from the stored ISO due date and the
/// raw week-count field.
pub fn prolongation_date_fields(due_date: &str, weeks: &str) -> Result<DateFields> {
    let due = parse_iso_date(due_date)?;
    let weeks = parse_field("weeks", weeks)?;
    add_weeks(due, weeks).map(DateFields::from)
}

/// Check that the due date lies strictly after the begin date.
pub fn validate_due_date(begin: Date, due: Date) -> Result<()> {
    ensure!(due > begin, "due_date: {due} must be later than begin date {begin}");
    Ok(())
}

/// Check that the prolongation date lies strictly after the due date.
pub fn validate_prolongation(due: Date, prolongation: Date) -> Result<()> {
    ensure!(
        prolongation > due,
        "prolongation_date: {prolongation} must be later than due date {due}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn parse_fields() {
        let f = DateFields::parse(" 31", "1", "2024 ").unwrap();
        assert_eq!(f, DateFields { day: 31, month: 1, year: 2024 });
        assert_eq!(f.to_date(), Ok(date(2024, 1, 31)));
    }

    #[test]
    fn missing_and_malformed_fields() {
        assert_eq!(
            DateFields::parse("", "1", "2024"),
            Err(Error::MissingInput("day".into()))
        );
        assert!(matches!(
            DateFields::parse("1", "Jan", "2024"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn fields_normalize() {
        let f = DateFields { day: 31, month: 4, year: 2024 };
        assert_eq!(f.to_date(), Ok(date(2024, 5, 1)));
    }

    #[test]
    fn iso_dates() {
        assert_eq!(parse_iso_date("2018-03-30"), Ok(date(2018, 3, 30)));
        assert!(matches!(parse_iso_date("2018-03"), Err(Error::InvalidArgument(_))));
        assert!(matches!(parse_iso_date("2018-03-30-1"), Err(Error::InvalidArgument(_))));
        assert_eq!(parse_iso_date("  "), Err(Error::MissingInput("due_date".into())));
    }

    #[test]
    fn due_date_action() {
        let begin = DateFields { day: 31, month: 1, year: 2024 };
        assert_eq!(
            due_date_fields(begin, 1),
            Ok(DateFields { day: 4, month: 3, year: 2024 })
        );
    }

    #[test]
    fn prolongation_action() {
        // 2018-03-30 is Good Friday; +4 weeks = 2018-04-27 (Friday)
        assert_eq!(
            prolongation_date_fields("2018-03-30", "4"),
            Ok(DateFields { day: 27, month: 4, year: 2018 })
        );
        assert_eq!(
            prolongation_date_fields("2018-03-30", ""),
            Err(Error::MissingInput("weeks".into()))
        );
    }

    #[test]
    fn validation() {
        let due = date(2018, 3, 30);
        assert!(validate_prolongation(due, date(2018, 4, 27)).is_ok());
        assert!(matches!(validate_prolongation(due, due), Err(Error::Precondition(_))));
        assert!(validate_prolongation(due, date(2018, 2, 28)).is_err());
        assert!(validate_due_date(date(2018, 1, 1), due).is_ok());
        assert!(validate_due_date(due, due).is_err());
    }
}
