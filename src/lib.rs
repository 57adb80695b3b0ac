mod component;
mod consts;
mod format;
mod prelude;
#[cfg(test)]
mod test_utils;

pub use component::{
    DateComponent, DayComponent, MonthComponent, MonthStyle, YearComponent, days_in_month,
};
pub use consts::*;
pub use format::DateString;

use chrono::{Local, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A calendar date specified down to the year, year-month, or
/// year-month-day, with validation, comparison, and string rendering.
///
/// Validity is a prefix property: a date is meaningfully valid while
/// only a prefix of its components is specified (year, or year+month).
/// The composite keeps its coarser components consistent with the
/// most-recently-set finer one: replacing the day recomputes the month
/// and year from the day's own back-references, and replacing the month
/// recomputes the year.
#[derive(Debug, Clone, Copy)]
pub struct CxDate {
    year: YearComponent,
    month: MonthComponent,
    day: DayComponent,
    pattern: &'static str,
}

/// Error type for parsing a date from its canonical rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Empty date string.
    #[error("Empty date string")]
    EmptyInput,

    /// Malformed structure or a non-numeric field.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

impl CxDate {
    /// Creates an empty date: all three components are empty and the
    /// whole is invalid.
    pub const fn new() -> Self {
        Self {
            year: YearComponent::empty(),
            month: MonthComponent::empty(),
            day: DayComponent::empty(),
            pattern: DEFAULT_PATTERN,
        }
    }

    /// Decomposes a calendar date into day, month, and year components
    /// through the cascading back-references.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_day(DayComponent::from_date(date))
    }

    /// Today, per the local clock.
    pub fn now() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Creates a date from a day component. The month and year are
    /// determined by walking the day's back-references.
    pub fn from_day(day: DayComponent) -> Self {
        let month = day.month().unwrap_or_default();
        Self {
            year: month.year().unwrap_or_default(),
            month,
            day,
            pattern: DEFAULT_PATTERN,
        }
    }

    /// Creates a date from a month component. The year is determined by
    /// the month's back-reference; the day is left empty.
    pub fn from_month(month: MonthComponent) -> Self {
        Self {
            year: month.year().unwrap_or_default(),
            month,
            day: DayComponent::empty(),
            pattern: DEFAULT_PATTERN,
        }
    }

    /// Creates a date from a year component alone; the month and day
    /// are left empty.
    pub const fn from_year(year: YearComponent) -> Self {
        Self {
            year,
            month: MonthComponent::empty(),
            day: DayComponent::empty(),
            pattern: DEFAULT_PATTERN,
        }
    }

    /// Replaces the format pattern used by [`formatted_value`]
    /// (strftime syntax).
    ///
    /// [`formatted_value`]: CxDate::formatted_value
    pub const fn with_pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = pattern;
        self
    }

    /// The year component.
    pub const fn year(&self) -> YearComponent {
        self.year
    }

    /// The month component.
    pub const fn month(&self) -> MonthComponent {
        self.month
    }

    /// The day component.
    pub const fn day(&self) -> DayComponent {
        self.day
    }

    /// Replaces the year component.
    pub const fn set_year(&mut self, year: YearComponent) {
        self.year = year;
    }

    /// Replaces the month component and recomputes the year from the
    /// month's back-reference.
    pub fn set_month(&mut self, month: MonthComponent) {
        self.month = month;
        self.year = month.year().unwrap_or_default();
    }

    /// Replaces the day component and recomputes the month and year
    /// from the day's back-references.
    pub fn set_day(&mut self, day: DayComponent) {
        self.day = day;
        self.month = day.month().unwrap_or_default();
        self.year = self.month.year().unwrap_or_default();
    }

    /// Returns `true` if the valid prefix of the date is non-empty.
    ///
    /// Finer components only extend the prefix; they cannot compensate
    /// for an invalid year, so this reduces to the year's validity.
    pub fn is_valid(&self) -> bool {
        self.year.is_valid()
    }

    /// The most specific calendar date the components resolve to: the
    /// day if it is valid, else the first of the month, else the first
    /// of the year.
    ///
    /// Returns `None` when no component is valid, or when the most
    /// specific valid component does not name a real date (day 31 of
    /// February). A missing result is surfaced as `None`, never
    /// substituted with the current date.
    pub fn resolve(&self) -> Option<NaiveDate> {
        if self.day.is_valid() {
            self.day.resolve()
        } else if self.month.is_valid() {
            self.month.resolve()
        } else if self.year.is_valid() {
            self.year.resolve()
        } else {
            None
        }
    }

    /// Renders [`resolve`] through the configured pattern, or the
    /// placeholder marker when nothing resolves.
    ///
    /// [`resolve`]: CxDate::resolve
    pub fn formatted_value(&self) -> String {
        self.resolve()
            .map_or_else(|| PLACEHOLDER.to_owned(), |date| date.format(self.pattern).to_string())
    }

    /// Selective merge: for each of year, month, and day independently,
    /// keeps this date's component where it is already valid and takes
    /// `other`'s where it is not. Components are substituted as-is; no
    /// cascading propagation occurs.
    pub fn updated_valid_components(&self, other: &Self) -> Self {
        Self {
            year: if self.year.is_valid() { self.year } else { other.year },
            month: if self.month.is_valid() { self.month } else { other.month },
            day: if self.day.is_valid() { self.day } else { other.day },
            pattern: DEFAULT_PATTERN,
        }
    }
}

impl Default for CxDate {
    fn default() -> Self {
        Self::new()
    }
}

impl From<NaiveDate> for CxDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// Hyphen-joined rendering of the valid prefix: `"2023"`, `"2023-1"`,
/// or `"2023-1-1"`; the placeholder marker when nothing is valid.
impl fmt::Display for CxDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year.is_valid() && self.month.is_valid() && self.day.is_valid() {
            write!(f, "{}-{}-{}", self.year, self.month, self.day)
        } else if self.year.is_valid() && self.month.is_valid() {
            write!(f, "{}-{}", self.year, self.month)
        } else if self.year.is_valid() {
            write!(f, "{}", self.year)
        } else {
            f.write_str(PLACEHOLDER)
        }
    }
}

impl FromStr for CxDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if trimmed == PLACEHOLDER {
            return Ok(Self::new());
        }

        // Canonical rendering only: YYYY, YYYY-M, or YYYY-M-D. Fields
        // must be numeric; out-of-range values still construct a date
        // and simply report it invalid.
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.len() {
            1 => Ok(Self::from_year(YearComponent::new(parse_i32(parts[0])?))),
            2 => Ok(Self::from_month(MonthComponent::new(
                parse_i32(parts[0])?,
                parse_u8(parts[1])?,
            ))),
            3 => Ok(Self::from_day(DayComponent::new(
                MonthComponent::new(parse_i32(parts[0])?, parse_u8(parts[1])?),
                parse_u8(parts[2])?,
            ))),
            _ => Err(ParseError::InvalidFormat(format!(
                "Too many {} separators: expected 0-2, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            ))),
        }
    }
}

fn parse_i32(s: &str) -> Result<i32, ParseError> {
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

// The format pattern is presentation configuration, not identity:
// equality, ordering, and hashing consider only the components.

impl PartialEq for CxDate {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }
}

impl Eq for CxDate {}

impl PartialOrd for CxDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CxDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
            .then_with(|| self.day.cmp(&other.day))
    }
}

impl Hash for CxDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.year.hash(state);
        self.month.hash(state);
        self.day.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{day, month, year, ymd};

    #[test]
    fn test_empty_date_is_invalid() {
        let date = CxDate::new();
        assert!(!date.year().is_valid());
        assert!(!date.month().is_valid());
        assert!(!date.day().is_valid());
        assert!(!date.is_valid());
        assert_eq!(date, CxDate::default());
    }

    #[test]
    fn test_from_date_decomposes_components() {
        let date = CxDate::from_date(ymd(1991, 8, 15));
        assert_eq!(date.year().value(), 1991);
        assert_eq!(date.month().value(), 8);
        assert_eq!(date.day().value(), 15);
        assert!(date.is_valid());
    }

    #[test]
    fn test_now_is_valid() {
        let date = CxDate::now();
        assert!(date.is_valid());
        assert!(date.resolve().is_some());
    }

    #[test]
    fn test_year_only_date() {
        let date = CxDate::from_year(year(2023));
        assert!(date.is_valid());
        assert!(!date.month().is_valid());
        assert!(!date.day().is_valid());
        assert_eq!(date.to_string(), "2023");
    }

    #[test]
    fn test_year_month_date() {
        let date = CxDate::from_month(month(2023, 1));
        assert_eq!(date.year().value(), 2023);
        assert_eq!(date.month().value(), 1);
        assert!(date.is_valid());
        assert_eq!(date.to_string(), "2023-1");
    }

    #[test]
    fn test_full_date() {
        let date = CxDate::from_day(day(2023, 1, 1));
        assert_eq!(date.year().value(), 2023);
        assert_eq!(date.month().value(), 1);
        assert_eq!(date.day().value(), 1);
        assert!(date.is_valid());
        assert_eq!(date.to_string(), "2023-1-1");
    }

    #[test]
    fn test_symbolic_month_description() {
        let january = MonthComponent::new(2023, 1);
        let mut date = CxDate::from_month(january);
        assert_eq!(date.to_string(), "2023-1");

        // Symbol rendering only when a style is explicitly supplied.
        date.set_month(MonthComponent::symbolic(1, MonthStyle::Short));
        assert_eq!(date.month().to_string(), "Jan");
    }

    #[test]
    fn test_display_placeholder_when_invalid() {
        assert_eq!(CxDate::new().to_string(), PLACEHOLDER);

        // A valid day cannot compensate for an invalid year.
        let date = CxDate::from_day(day(0, 1, 15));
        assert!(!date.is_valid());
        assert_eq!(date.to_string(), PLACEHOLDER);
    }

    #[test]
    fn test_formatted_value_default_pattern() {
        let date = CxDate::from_day(day(2023, 1, 1));
        assert_eq!(date.formatted_value(), "2023-01-01");
    }

    #[test]
    fn test_formatted_value_custom_pattern() {
        let date = CxDate::from_day(day(2023, 1, 1)).with_pattern("%B %-d, %Y");
        assert_eq!(date.formatted_value(), "January 1, 2023");
    }

    #[test]
    fn test_formatted_value_placeholder_when_unresolvable() {
        assert_eq!(CxDate::new().formatted_value(), PLACEHOLDER);
    }

    #[test]
    fn test_set_day_cascades_month_and_year() {
        let mut date = CxDate::new();
        date.set_day(day(2023, 1, 1));
        assert_eq!(date.year().value(), 2023);
        assert_eq!(date.month().value(), 1);
        assert_eq!(date.day().value(), 1);
        assert_eq!(date.to_string(), "2023-1-1");
    }

    #[test]
    fn test_set_month_cascades_year() {
        let mut date = CxDate::from_date(ymd(1991, 8, 15));
        date.set_month(month(2023, 1));
        assert_eq!(date.year().value(), 2023);
        assert_eq!(date.month().value(), 1);
    }

    #[test]
    fn test_set_year_leaves_finer_components() {
        let mut date = CxDate::new();
        date.set_year(year(2023));
        assert_eq!(date.year().value(), 2023);
        assert!(!date.month().is_valid());
        assert!(date.is_valid());
        assert_eq!(date.to_string(), "2023");
    }

    #[test]
    fn test_resolve_most_specific_component() {
        assert_eq!(CxDate::from_day(day(2023, 6, 15)).resolve(), Some(ymd(2023, 6, 15)));
        assert_eq!(CxDate::from_month(month(2023, 6)).resolve(), Some(ymd(2023, 6, 1)));
        assert_eq!(CxDate::from_year(year(2023)).resolve(), Some(ymd(2023, 1, 1)));
        assert_eq!(CxDate::new().resolve(), None);
    }

    #[test]
    fn test_resolve_never_fabricates_a_date() {
        // Day 31 of February passes component validation but names no
        // real date; the result is absent, not substituted.
        let date = CxDate::from_day(day(2023, 2, 31));
        assert_eq!(date.resolve(), None);
        assert_eq!(date.formatted_value(), PLACEHOLDER);
    }

    #[test]
    fn test_updated_valid_components_fills_gaps() {
        let partial = CxDate::from_year(year(2021));
        let full = CxDate::from_day(day(2023, 6, 15));

        let merged = partial.updated_valid_components(&full);
        assert_eq!(merged.year(), year(2021));
        assert_eq!(merged.month(), full.month());
        assert_eq!(merged.day(), full.day());
    }

    #[test]
    fn test_updated_valid_components_keeps_valid_receiver() {
        let receiver = CxDate::from_day(day(2023, 6, 15));
        let other = CxDate::from_day(day(1991, 8, 1));

        let merged = receiver.updated_valid_components(&other);
        assert_eq!(merged, receiver);
    }

    #[test]
    fn test_equality_ignores_pattern() {
        let a = CxDate::from_day(day(2023, 6, 15));
        let b = CxDate::from_day(day(2023, 6, 15)).with_pattern("%Y");
        assert_eq!(a, b);
    }

    #[test]
    fn test_ordering_lexicographic() {
        let year_only = CxDate::from_year(year(2023));
        let with_month = CxDate::from_month(month(2023, 1));
        let full = CxDate::from_day(day(2023, 1, 1));
        let later = CxDate::from_day(day(2023, 1, 2));
        let earlier_year = CxDate::from_year(year(2022));

        assert!(earlier_year < year_only);
        assert!(year_only < with_month);
        assert!(with_month < full);
        assert!(full < later);
    }

    #[test]
    fn test_ordering_across_years_and_months() {
        let dec = CxDate::from_day(day(2022, 12, 31));
        let jan = CxDate::from_day(day(2023, 1, 1));
        assert!(dec < jan);

        let jan31 = CxDate::from_day(day(2023, 1, 31));
        let feb1 = CxDate::from_day(day(2023, 2, 1));
        assert!(jan31 < feb1);
    }

    #[test]
    fn test_from_str_year_only() {
        let date = "2023".parse::<CxDate>().unwrap();
        assert_eq!(date, CxDate::from_year(year(2023)));
    }

    #[test]
    fn test_from_str_year_month() {
        let date = "2023-1".parse::<CxDate>().unwrap();
        assert_eq!(date, CxDate::from_month(month(2023, 1)));
    }

    #[test]
    fn test_from_str_full() {
        let date = "2023-01-01".parse::<CxDate>().unwrap();
        assert_eq!(date, CxDate::from_day(day(2023, 1, 1)));
        assert_eq!(date.formatted_value(), "2023-01-01");
    }

    #[test]
    fn test_from_str_placeholder_is_empty_date() {
        let date = PLACEHOLDER.parse::<CxDate>().unwrap();
        assert_eq!(date, CxDate::new());
    }

    #[test]
    fn test_from_str_out_of_range_is_invalid_not_error() {
        // Advisory validation: values parse, the date just reports
        // itself invalid where the prefix breaks.
        let date = "2023-13".parse::<CxDate>().unwrap();
        assert!(date.year().is_valid());
        assert!(!date.month().is_valid());
        assert_eq!(date.to_string(), "2023");
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!("".parse::<CxDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!("   ".parse::<CxDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "199A".parse::<CxDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-XX-01".parse::<CxDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        let result = "2023-01-01-05".parse::<CxDate>();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Too many - separators"));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for text in ["2023", "2023-1", "2023-1-1", PLACEHOLDER] {
            let date = text.parse::<CxDate>().unwrap();
            assert_eq!(date.to_string(), text);
        }
    }

    #[test]
    fn test_from_naive_date() {
        let date: CxDate = ymd(2024, 2, 29).into();
        assert_eq!(date.formatted_value(), "2024-02-29");
    }
}
