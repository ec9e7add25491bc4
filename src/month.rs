//! The `YYYY-MM` month key used to bucket transactions and budgets.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime};

use crate::Error;

/// A calendar month, e.g. June 2024.
///
/// Serialized as the string `"2024-06"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: Month,
}

impl MonthKey {
    /// Create a month key from a year and month.
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The month that `date` falls in.
    pub fn from_date(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The month that `now` falls in.
    ///
    /// `now` should already be in the user's local offset, otherwise the month
    /// may be off by one around midnight on the last day of the month.
    pub fn current(now: OffsetDateTime) -> Self {
        Self::from_date(now.date())
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month of the year.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The month immediately before this one.
    pub fn previous(&self) -> Self {
        match self.month {
            Month::January => Self::new(self.year - 1, Month::December),
            month => Self::new(self.year, month.previous()),
        }
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The `count` months ending at (and including) this month, oldest first.
    pub fn trailing(&self, count: usize) -> Vec<MonthKey> {
        let mut months = Vec::with_capacity(count);
        let mut month = *self;

        for _ in 0..count {
            months.push(month);
            month = month.previous();
        }

        months.reverse();
        months
    }

    /// The short display label for the month, e.g. "Jun 2024".
    pub fn label(&self) -> String {
        format!("{} {}", short_month_name(self.month), self.year)
    }
}

impl Ord for MonthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month as u8).cmp(&(other.year, other.month as u8))
    }
}

impl PartialOrd for MonthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month as u8)
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMonth(s.to_owned());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;

        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let month = Month::try_from(month).map_err(|_| invalid())?;

        Ok(Self::new(year, month))
    }
}

impl TryFrom<String> for MonthKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}

/// The three-letter English abbreviation for `month`, e.g. "Jan".
pub fn short_month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use crate::Error;

    use super::MonthKey;

    #[test]
    fn parses_year_month_string() {
        let month: MonthKey = "2024-06".parse().unwrap();

        assert_eq!(month, MonthKey::new(2024, Month::June));
        assert_eq!(month.to_string(), "2024-06");
    }

    #[test]
    fn rejects_malformed_month_strings() {
        for input in ["2024-6", "2024-13", "2024-00", "June 2024", "", "24-06"] {
            assert_eq!(
                input.parse::<MonthKey>(),
                Err(Error::InvalidMonth(input.to_owned())),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn previous_wraps_around_the_year() {
        let month = MonthKey::new(2024, Month::January);

        assert_eq!(month.previous(), MonthKey::new(2023, Month::December));
    }

    #[test]
    fn trailing_months_are_oldest_first() {
        let months = MonthKey::new(2024, Month::February).trailing(4);

        let keys: Vec<String> = months.iter().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn contains_checks_year_and_month() {
        let month = MonthKey::new(2024, Month::June);

        assert!(month.contains(date!(2024 - 06 - 01)));
        assert!(month.contains(date!(2024 - 06 - 30)));
        assert!(!month.contains(date!(2024 - 07 - 01)));
        assert!(!month.contains(date!(2023 - 06 - 15)));
    }

    #[test]
    fn orders_chronologically() {
        let mut months = vec![
            MonthKey::new(2024, Month::February),
            MonthKey::new(2023, Month::December),
            MonthKey::new(2024, Month::January),
        ];

        months.sort();

        assert_eq!(
            months,
            vec![
                MonthKey::new(2023, Month::December),
                MonthKey::new(2024, Month::January),
                MonthKey::new(2024, Month::February),
            ]
        );
    }

    #[test]
    fn label_uses_short_month_name() {
        assert_eq!(MonthKey::new(2024, Month::June).label(), "Jun 2024");
    }

    #[test]
    fn serializes_as_string() {
        let month = MonthKey::new(2024, Month::March);

        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2024-03\"");

        let parsed: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, month);
    }
}
