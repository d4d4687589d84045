//! Period data types.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// Named reporting range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodToken {
    /// The evaluation date only.
    #[serde(rename = "today")]
    Today,
    /// Seven days ending today.
    #[serde(rename = "week")]
    Week,
    /// Thirty days ending today.
    #[serde(rename = "month")]
    Month,
    /// Seven days ending today.
    #[serde(rename = "last7days")]
    Last7Days,
    /// Thirty days ending today.
    #[serde(rename = "last30days")]
    Last30Days,
    /// Ninety days ending today.
    #[serde(rename = "last90days")]
    Last90Days,
    /// January 1 of the current year through today.
    #[serde(rename = "thisYear")]
    ThisYear,
}

impl PeriodToken {
    /// All tokens, in the order dashboards list them.
    pub const ALL: [Self; 7] = [
        Self::Today,
        Self::Week,
        Self::Month,
        Self::Last7Days,
        Self::Last30Days,
        Self::Last90Days,
        Self::ThisYear,
    ];

    /// Returns the wire name of the token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Last7Days => "last7days",
            Self::Last30Days => "last30days",
            Self::Last90Days => "last90days",
            Self::ThisYear => "thisYear",
        }
    }

    /// Fixed window length in days, or `None` for year-to-date.
    #[must_use]
    pub const fn fixed_days(self) -> Option<u64> {
        match self {
            Self::Today => Some(1),
            Self::Week | Self::Last7Days => Some(7),
            Self::Month | Self::Last30Days => Some(30),
            Self::Last90Days => Some(90),
            Self::ThisYear => None,
        }
    }
}

impl std::fmt::Display for PeriodToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PeriodToken {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "last7days" | "last_7_days" => Ok(Self::Last7Days),
            "last30days" | "last_30_days" => Ok(Self::Last30Days),
            "last90days" | "last_90_days" => Ok(Self::Last90Days),
            "thisYear" | "this_year" | "year" => Ok(Self::ThisYear),
            other => Err(PeriodError::UnknownToken(other.to_string())),
        }
    }
}

/// Inclusive calendar-date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// First day of the window.
    pub start_date: NaiveDate,
    /// Last day of the window.
    pub end_date: NaiveDate,
}

impl Period {
    /// Creates a period from explicit bounds.
    pub fn custom(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, PeriodError> {
        if start_date > end_date {
            return Err(PeriodError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// A one-day period.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// Number of calendar days, counting both endpoints.
    #[must_use]
    pub fn days(&self) -> u64 {
        let span = (self.end_date - self.start_date).num_days();
        u64::try_from(span).map_or(0, |d| d + 1)
    }

    /// Returns true if the date falls inside the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The equal-length window ending the day before this one starts.
    #[must_use]
    pub fn previous(&self) -> Self {
        let end_date = days_before(self.start_date, 1);
        let start_date = days_before(end_date, self.days().saturating_sub(1));
        Self {
            start_date,
            end_date,
        }
    }

    /// Every calendar day of the window, in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let days = usize::try_from(self.days()).unwrap_or(usize::MAX);
        self.start_date.iter_days().take(days)
    }

    /// First day of every calendar month overlapping the window, in order.
    #[must_use]
    pub fn months(&self) -> Vec<NaiveDate> {
        let mut months = Vec::new();
        let last = first_of_month(self.end_date);
        let mut cursor = first_of_month(self.start_date);
        while cursor <= last {
            months.push(cursor);
            match cursor.checked_add_months(Months::new(1)) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        months
    }
}

/// A current window paired with its comparison window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPair {
    /// Window being reported.
    pub current: Period,
    /// Adjacent window of equal length used for change percentages.
    pub previous: Period,
}

impl PeriodPair {
    /// Pairs a window with its previous window.
    #[must_use]
    pub fn new(current: Period) -> Self {
        Self {
            current,
            previous: current.previous(),
        }
    }
}

/// How a caller selected the reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PeriodSelection {
    /// A named range resolved against the evaluation date.
    Named {
        /// The named range.
        token: PeriodToken,
    },
    /// Explicit inclusive bounds.
    Custom {
        /// First day.
        start_date: NaiveDate,
        /// Last day.
        end_date: NaiveDate,
    },
}

impl PeriodSelection {
    /// Builds a selection from optional query parameters.
    ///
    /// Explicit bounds win over the token; a lone bound is rejected; with
    /// neither, `fallback` is used.
    pub fn from_parts(
        token: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        fallback: PeriodToken,
    ) -> Result<Self, PeriodError> {
        match (start_date, end_date) {
            (Some(start_date), Some(end_date)) => {
                Period::custom(start_date, end_date)?;
                Ok(Self::Custom {
                    start_date,
                    end_date,
                })
            }
            (Some(_), None) | (None, Some(_)) => Err(PeriodError::IncompleteBounds),
            (None, None) => {
                let token = match token {
                    Some(raw) => raw.parse()?,
                    None => fallback,
                };
                Ok(Self::Named { token })
            }
        }
    }
}

impl From<PeriodToken> for PeriodSelection {
    fn from(token: PeriodToken) -> Self {
        Self::Named { token }
    }
}

pub(crate) fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
