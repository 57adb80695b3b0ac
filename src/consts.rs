/// Rendered when no component of a date is valid.
pub const PLACEHOLDER: &str = "--";

/// Separator between year, month, and day in the canonical rendering.
pub const DATE_SEPARATOR: char = '-';

/// Canonical format pattern (strftime syntax), the `yyyy-MM-dd` equivalent.
pub const DEFAULT_PATTERN: &str = "%Y-%m-%d";

/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Minimum valid day of month
pub const MIN_DAY: u8 = 1;

/// Maximum day a component accepts. Deliberately not calendar-aware:
/// day 31 is accepted for every month at the component level.
pub const MAX_DAY: u8 = 31;

/// Length of abbreviated month symbols ("Jan", "Feb", ...)
pub(crate) const MONTH_ABBREV_LEN: usize = 3;
