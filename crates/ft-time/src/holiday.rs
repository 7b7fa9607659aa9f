//! German statutory holidays.
//!
//! The holiday set is fixed: seven holidays on fixed calendar days and five
//! that move with Easter.
//!
//! | Holiday                   | Date      |
//! |---------------------------|-----------|
//! | Neujahrstag               | Jan 1     |
//! | Heilige Drei Könige       | Jan 6     |
//! | Karfreitag                | Easter −2 |
//! | Ostermontag               | Easter +1 |
//! | Tag der Arbeit            | May 1     |
//! | Christi Himmelfahrt       | Easter +39|
//! | Pfingstmontag             | Easter +50|
//! | Fronleichnam              | Easter +60|
//! | Tag der Deutschen Einheit | Oct 3     |
//! | Allerheiligen             | Nov 1     |
//! | 1. Weihnachtsfeiertag     | Dec 25    |
//! | 2. Weihnachtsfeiertag     | Dec 26    |

use crate::date::Date;
use crate::easter::easter_sunday;
use ft_core::errors::Result;
use log::trace;

/// A named German statutory holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// New Year's Day (Jan 1).
    NewYearsDay,
    /// Epiphany (Jan 6).
    Epiphany,
    /// Good Friday (Easter − 2).
    GoodFriday,
    /// Easter Monday (Easter + 1).
    EasterMonday,
    /// Labour Day (May 1).
    LabourDay,
    /// Ascension Day (Easter + 39).
    AscensionDay,
    /// Whit Monday (Easter + 50).
    WhitMonday,
    /// Corpus Christi (Easter + 60).
    CorpusChristi,
    /// Day of German Unity (Oct 3).
    GermanUnityDay,
    /// All Saints' Day (Nov 1).
    AllSaintsDay,
    /// Christmas Day (Dec 25).
    ChristmasDay,
    /// St Stephen's Day (Dec 26).
    StStephensDay,
}

/// Where a holiday falls within a year.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Fixed { month: u8, day: u8 },
    EasterOffset(i32),
}

/// The holiday table in iteration order.
const RULES: [(Holiday, Rule); 12] = [
    (Holiday::NewYearsDay, Rule::Fixed { month: 1, day: 1 }),
    (Holiday::Epiphany, Rule::Fixed { month: 1, day: 6 }),
    (Holiday::GoodFriday, Rule::EasterOffset(-2)),
    (Holiday::EasterMonday, Rule::EasterOffset(1)),
    (Holiday::LabourDay, Rule::Fixed { month: 5, day: 1 }),
    (Holiday::AscensionDay, Rule::EasterOffset(39)),
    (Holiday::WhitMonday, Rule::EasterOffset(50)),
    (Holiday::CorpusChristi, Rule::EasterOffset(60)),
    (Holiday::GermanUnityDay, Rule::Fixed { month: 10, day: 3 }),
    (Holiday::AllSaintsDay, Rule::Fixed { month: 11, day: 1 }),
    (Holiday::ChristmasDay, Rule::Fixed { month: 12, day: 25 }),
    (Holiday::StStephensDay, Rule::Fixed { month: 12, day: 26 }),
];

impl Holiday {
    /// English name.
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::Epiphany => "Epiphany",
            Holiday::GoodFriday => "Good Friday",
            Holiday::EasterMonday => "Easter Monday",
            Holiday::LabourDay => "Labour Day",
            Holiday::AscensionDay => "Ascension Day",
            Holiday::WhitMonday => "Whit Monday",
            Holiday::CorpusChristi => "Corpus Christi",
            Holiday::GermanUnityDay => "Day of German Unity",
            Holiday::AllSaintsDay => "All Saints' Day",
            Holiday::ChristmasDay => "Christmas Day",
            Holiday::StStephensDay => "St Stephen's Day",
        }
    }

    /// German name, as printed on official calendars.
    pub fn german_name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "Neujahrstag",
            Holiday::Epiphany => "Heilige Drei Könige",
            Holiday::GoodFriday => "Karfreitag",
            Holiday::EasterMonday => "Ostermontag",
            Holiday::LabourDay => "Tag der Arbeit",
            Holiday::AscensionDay => "Christi Himmelfahrt",
            Holiday::WhitMonday => "Pfingstmontag",
            Holiday::CorpusChristi => "Fronleichnam",
            Holiday::GermanUnityDay => "Tag der Deutschen Einheit",
            Holiday::AllSaintsDay => "Allerheiligen",
            Holiday::ChristmasDay => "1. Weihnachtsfeiertag",
            Holiday::StStephensDay => "2. Weihnachtsfeiertag",
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A holiday together with the date it falls on in a particular year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayDefinition {
    /// Which holiday.
    pub holiday: Holiday,
    /// The day it falls on.
    pub date: Date,
}

/// Return the twelve statutory holidays of `year`, in table order.
///
/// Two entries may share a date: Ascension Day coincides with Labour Day
/// whenever Easter falls on March 23 (e.g. 2008).
///
/// # Errors
/// Returns `Error::InvalidYear` for years outside 1583–9999.
pub fn holidays_for_year(year: u16) -> Result<[HolidayDefinition; 12]> {
    let easter = easter_sunday(year)?;
    trace!("Easter Sunday {year}: {easter}");
    let mut out = [HolidayDefinition {
        holiday: Holiday::NewYearsDay,
        date: easter,
    }; 12];
    for (slot, (holiday, rule)) in out.iter_mut().zip(RULES) {
        let date = match rule {
            Rule::Fixed { month, day } => Date::from_ymd(year, month, day)?,
            Rule::EasterOffset(offset) => easter.add_days(offset)?,
        };
        *slot = HolidayDefinition { holiday, date };
    }
    Ok(out)
}

/// Return the holiday falling on `date`, if any.
///
/// When two holidays share the date, the one listed first wins.
pub fn holiday_for_date(date: Date) -> Option<HolidayDefinition> {
    let holidays = holidays_for_year(date.year()).ok()?;
    holidays.into_iter().find(|h| h.date == date)
}

/// Return `true` if `date` is a German statutory holiday.
///
/// Weekends are not holidays in this sense; see
/// [`Calendar::is_business_day`](crate::calendar::Calendar::is_business_day).
pub fn is_holiday(date: Date) -> bool {
    holiday_for_date(date).is_some()
}
