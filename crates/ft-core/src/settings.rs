//! Settings consulted when adjusting dates.
//!
//! [`Settings`] is a plain value passed to the `*_with` variants of the
//! date-adjustment functions.  The variants without a settings parameter use
//! [`Settings::default()`].

/// Limits applied while rolling a date forward to the next business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Settings {
    max_roll_days: u32,
}

impl Settings {
    /// Default for [`max_roll_days`](Self::max_roll_days).
    ///
    /// The longest run of consecutive non-business days in the German
    /// calendar is four (Good Friday through Easter Monday, or Christmas
    /// falling next to a weekend), so two weeks is never reached in practice.
    pub const DEFAULT_MAX_ROLL_DAYS: u32 = 14;

    /// Create settings with the default limits.
    pub const fn new() -> Self {
        Self {
            max_roll_days: Self::DEFAULT_MAX_ROLL_DAYS,
        }
    }

    /// Maximum number of single-day steps a roll-forward may take before it
    /// gives up with `Error::RollLimitExceeded`.
    pub const fn max_roll_days(&self) -> u32 {
        self.max_roll_days
    }

    /// Return a copy with a different roll limit.
    #[must_use]
    pub const fn with_max_roll_days(mut self, days: u32) -> Self {
        self.max_roll_days = days;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit() {
        assert_eq!(Settings::default().max_roll_days(), 14);
        assert_eq!(Settings::default(), Settings::new());
    }

    #[test]
    fn builder_overrides_limit() {
        let s = Settings::new().with_max_roll_days(3);
        assert_eq!(s.max_roll_days(), 3);
    }
}
