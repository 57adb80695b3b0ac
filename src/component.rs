use crate::consts::{MAX_DAY, MAX_MONTH, MIN_DAY, MIN_MONTH, MONTH_ABBREV_LEN};
use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Common contract for the year, month, and day components of a date.
///
/// Validation is advisory: every integer constructs a component, and
/// `is_valid` reports whether the stored value falls in the meaningful
/// range. Exactly three concrete implementations exist; the trait is a
/// shared surface, not an extension point.
pub trait DateComponent: fmt::Display {
    /// The underlying integer type of the component.
    type Value: Copy;

    /// Returns the raw stored value, including sentinel zeroes.
    fn value(&self) -> Self::Value;

    /// Returns `true` if the component falls in its meaningful range
    /// (and, where a back-reference exists, the referenced parent is
    /// valid too).
    fn is_valid(&self) -> bool;

    /// Resolves the component to the most specific calendar date it
    /// names (its first day, for year and month components).
    ///
    /// Returns `None` when the component is invalid or the fields do
    /// not name a real date.
    fn resolve(&self) -> Option<NaiveDate>;
}

/// How a [`MonthComponent`] renders itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthStyle {
    /// Decimal month number, no padding ("1".."12").
    #[default]
    Numeric,
    /// Abbreviated month symbol ("Jan".."Dec").
    Short,
    /// Full month symbol ("January".."December").
    Long,
}

/// Looks up the month symbol for a value and style.
/// Out-of-range values degrade to an empty string rather than failing.
fn month_symbol(value: u8, style: MonthStyle) -> &'static str {
    match chrono::Month::try_from(value) {
        Ok(month) => match style {
            MonthStyle::Short => &month.name()[..MONTH_ABBREV_LEN],
            MonthStyle::Numeric | MonthStyle::Long => month.name(),
        },
        Err(_) => "",
    }
}

/// A validated integer year. Valid iff the value is positive; the empty
/// sentinel uses value 0, which is invalid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
#[display(fmt = "{}", value)]
pub struct YearComponent {
    value: i32,
}

impl YearComponent {
    /// Creates a year component. All integers are accepted; validity is
    /// advisory, not enforced at construction.
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    /// Extracts the year field of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self { value: date.year() }
    }

    /// The empty sentinel (value 0, invalid).
    pub const fn empty() -> Self {
        Self { value: 0 }
    }
}

impl DateComponent for YearComponent {
    type Value = i32;

    fn value(&self) -> i32 {
        self.value
    }

    fn is_valid(&self) -> bool {
        self.value > 0
    }

    fn resolve(&self) -> Option<NaiveDate> {
        if !self.is_valid() {
            return None;
        }
        NaiveDate::from_ymd_opt(self.value, 1, 1)
    }
}

/// A validated integer month, optionally carrying a back-reference to
/// its owning year. The reference is relational, not ownership: it only
/// makes month comparisons year-aware.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthComponent {
    year: Option<YearComponent>,
    value: u8,
    style: MonthStyle,
}

impl MonthComponent {
    /// Creates a month owned by a year.
    pub const fn new(year: i32, month: u8) -> Self {
        Self {
            year: Some(YearComponent::new(year)),
            value: month,
            style: MonthStyle::Numeric,
        }
    }

    /// Creates a bare month with a display style and no year reference.
    /// Useful for rendering month symbols ("Jan", "January") on their
    /// own; the symbol lookup fails soft to an empty string when the
    /// value is out of range.
    pub const fn symbolic(month: u8, style: MonthStyle) -> Self {
        Self {
            year: None,
            value: month,
            style,
        }
    }

    /// Extracts the year and month fields of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: Some(YearComponent::from_date(date)),
            value: u8::try_from(date.month()).unwrap_or(0),
            style: MonthStyle::Numeric,
        }
    }

    /// The empty sentinel (value 0, no year reference, invalid).
    pub const fn empty() -> Self {
        Self {
            year: None,
            value: 0,
            style: MonthStyle::Numeric,
        }
    }

    /// The owning year, when a reference exists.
    pub const fn year(&self) -> Option<YearComponent> {
        self.year
    }
}

impl DateComponent for MonthComponent {
    type Value = u8;

    fn value(&self) -> u8 {
        self.value
    }

    fn is_valid(&self) -> bool {
        (MIN_MONTH..=MAX_MONTH).contains(&self.value)
            && self.year.is_none_or(|year| year.is_valid())
    }

    fn resolve(&self) -> Option<NaiveDate> {
        if !self.is_valid() {
            return None;
        }
        let year = self.year?;
        NaiveDate::from_ymd_opt(year.value(), u32::from(self.value), 1)
    }
}

impl fmt::Display for MonthComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            MonthStyle::Numeric => write!(f, "{}", self.value),
            style => f.write_str(month_symbol(self.value, style)),
        }
    }
}

// Style is a rendering option, not identity: equality, ordering, and
// hashing consider only the year reference and the value.

impl PartialEq for MonthComponent {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year && self.value == other.value
    }
}

impl Eq for MonthComponent {}

impl PartialOrd for MonthComponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthComponent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Owning year first (absent sorts before present), then value.
        self.year
            .cmp(&other.year)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl Hash for MonthComponent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.year.hash(state);
        self.value.hash(state);
    }
}

/// A validated integer day, optionally carrying a back-reference to its
/// owning month.
///
/// Day validation is deliberately not calendar-aware: day 31 is accepted
/// even for months with fewer days. The calendar-correct queries live in
/// [`DayComponent::days_of_month`] and [`days_in_month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DayComponent {
    month: Option<MonthComponent>,
    value: u8,
}

impl DayComponent {
    /// Creates a day owned by a month.
    pub const fn new(month: MonthComponent, day: u8) -> Self {
        Self {
            month: Some(month),
            value: day,
        }
    }

    /// Extracts the year, month, and day fields of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: Some(MonthComponent::from_date(date)),
            value: u8::try_from(date.day()).unwrap_or(0),
        }
    }

    /// The empty sentinel (value 0, no month reference, invalid).
    pub const fn empty() -> Self {
        Self {
            month: None,
            value: 0,
        }
    }

    /// The owning month, when a reference exists.
    pub const fn month(&self) -> Option<MonthComponent> {
        self.month
    }

    /// Enumerates the days of the month containing `reference`, in
    /// order, with calendar-correct length (28 for February 2023, 29
    /// for February 2024). Each returned component carries the
    /// reference's month as its back-reference.
    ///
    /// Returns an empty vector when the month range cannot be resolved.
    pub fn days_of_month(reference: NaiveDate) -> Vec<Self> {
        let Some(count) = days_in_month(reference.year(), reference.month()) else {
            return Vec::new();
        };
        let month = MonthComponent::from_date(reference);
        (MIN_DAY..=count)
            .map(|value| Self {
                month: Some(month),
                value,
            })
            .collect()
    }

    /// Number of placeholder slots preceding day 1 in a Sunday-first
    /// month grid: the weekday of the first of the month, counted from
    /// Sunday. Used by presentation layers to lay out a month view.
    pub fn leading_blank_count(reference: NaiveDate) -> u32 {
        reference
            .with_day(1)
            .map_or(0, |first| first.weekday().num_days_from_sunday())
    }
}

impl DateComponent for DayComponent {
    type Value = u8;

    fn value(&self) -> u8 {
        self.value
    }

    fn is_valid(&self) -> bool {
        (MIN_DAY..=MAX_DAY).contains(&self.value)
            && self.month.is_none_or(|month| month.is_valid())
    }

    fn resolve(&self) -> Option<NaiveDate> {
        if !self.is_valid() {
            return None;
        }
        let month = self.month?;
        let year = month.year()?;
        NaiveDate::from_ymd_opt(
            year.value(),
            u32::from(month.value()),
            u32::from(self.value),
        )
    }
}

impl fmt::Display for DayComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Number of days in a month, resolved through the calendar (distance
/// between consecutive first-of-month dates). `None` when the fields do
/// not name a real month.
pub fn days_in_month(year: i32, month: u32) -> Option<u8> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == u32::from(MAX_MONTH) {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    u8::try_from(next.signed_duration_since(first).num_days()).ok()
}
