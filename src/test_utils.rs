//! Shared constructors for tests.

use crate::{DayComponent, MonthComponent, YearComponent};
use chrono::NaiveDate;

pub fn year(value: i32) -> YearComponent {
    YearComponent::new(value)
}

pub fn month(year: i32, month: u8) -> MonthComponent {
    MonthComponent::new(year, month)
}

pub fn day(year: i32, month_value: u8, day: u8) -> DayComponent {
    DayComponent::new(month(year, month_value), day)
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
