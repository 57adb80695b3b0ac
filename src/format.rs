use chrono::NaiveDate;

const ABBREVIATED_MONTH: &str = "%b";
const FULL_MONTH: &str = "%B";
const WEEKDAY_MONTH_DAY: &str = "%A, %B %-d";
const FULL_DATE: &str = "%B %-d, %Y";
const MONTH_DAY: &str = "%B %-d";
const YEAR: &str = "%Y";
const DAY: &str = "%-d";

/// Fixed-pattern display helpers for calendar dates.
///
/// Each helper is a pure formatting call through a fixed pattern; no
/// formatter state is cached or shared.
pub trait DateString {
    /// Abbreviated month symbol, e.g. `"Jan"`.
    fn abbreviated_month(&self) -> String;

    /// Full month symbol, e.g. `"January"`.
    fn full_month(&self) -> String;

    /// Weekday with month and day, e.g. `"Sunday, January 15"`.
    fn weekday_month_day(&self) -> String;

    /// Month, day, and year, e.g. `"January 15, 2023"`.
    fn full_date(&self) -> String;

    /// Month and day, e.g. `"January 15"`.
    fn month_day(&self) -> String;

    /// Bare year, e.g. `"2023"`.
    fn year_string(&self) -> String;

    /// Bare day of month, e.g. `"15"`.
    fn day_string(&self) -> String;
}

impl DateString for NaiveDate {
    fn abbreviated_month(&self) -> String {
        self.format(ABBREVIATED_MONTH).to_string()
    }

    fn full_month(&self) -> String {
        self.format(FULL_MONTH).to_string()
    }

    fn weekday_month_day(&self) -> String {
        self.format(WEEKDAY_MONTH_DAY).to_string()
    }

    fn full_date(&self) -> String {
        self.format(FULL_DATE).to_string()
    }

    fn month_day(&self) -> String {
        self.format(MONTH_DAY).to_string()
    }

    fn year_string(&self) -> String {
        self.format(YEAR).to_string()
    }

    fn day_string(&self) -> String {
        self.format(DAY).to_string()
    }
}
