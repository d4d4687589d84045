//! Named-range resolution.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use super::error::PeriodError;
use super::types::{Period, PeriodPair, PeriodSelection, PeriodToken, days_before};

/// Converts period tokens into concrete windows.
pub struct DateRangeResolver;

impl DateRangeResolver {
    /// Resolves a named range against the evaluation date.
    ///
    /// Every window includes both endpoints: `last7days` ending on the 16th
    /// starts on the 10th.
    #[must_use]
    pub fn resolve(token: PeriodToken, today: NaiveDate) -> Period {
        let start_date = match token.fixed_days() {
            Some(days) => days_before(today, days - 1),
            None => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        };

        Period {
            start_date,
            end_date: today,
        }
    }

    /// Resolves a selection, validating explicit bounds.
    pub fn resolve_selection(
        selection: PeriodSelection,
        today: NaiveDate,
    ) -> Result<Period, PeriodError> {
        match selection {
            PeriodSelection::Named { token } => Ok(Self::resolve(token, today)),
            PeriodSelection::Custom {
                start_date,
                end_date,
            } => Period::custom(start_date, end_date),
        }
    }

    /// Resolves a selection and pairs it with the previous window.
    pub fn resolve_pair(
        selection: PeriodSelection,
        today: NaiveDate,
    ) -> Result<PeriodPair, PeriodError> {
        Self::resolve_selection(selection, today).map(PeriodPair::new)
    }
}

/// Maps instants to calendar dates in the salon's timezone.
#[derive(Debug, Clone, Copy)]
pub struct ReportClock {
    tz: Tz,
}

impl ReportClock {
    /// Creates a clock for the given timezone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The timezone defining day boundaries.
    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.tz
    }

    /// Today's local date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    /// The local calendar date of an instant.
    #[must_use]
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }
}

impl Default for ReportClock {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}
