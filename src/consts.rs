/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for truncation lower bounds
pub const MIN_DAY: u8 = 1;

/// Largest possible day of month (31-day months)
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Last hour of the day (24-hour clock)
pub const MAX_HOUR: u8 = 23;

/// Last minute of an hour
pub const MAX_MINUTE: u8 = 59;

/// Last second of a minute
pub const MAX_SECOND: u8 = 59;

/// Hours shown on a 12-hour wheel
pub const HOURS_PER_MERIDIEM: u8 = 12;

/// Seconds per minute, used for duration column decomposition
pub const SECONDS_PER_MINUTE: u64 = 60;
/// Seconds per hour, used for duration column decomposition
pub const SECONDS_PER_HOUR: u64 = 3_600;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between the date and time halves of a date-time
pub const DATE_TIME_SEPARATOR: char = ' ';

/// Default year wheel range when the host does not supply one
pub const DEFAULT_MIN_YEAR: u16 = 1922;
/// Default year wheel range when the host does not supply one
pub const DEFAULT_MAX_YEAR: u16 = 2122;

/// Month columns narrower than this (in display-independent units)
/// fall back to abbreviated month names
pub const MIN_FULL_MONTH_NAME_WIDTH: f32 = 55.0;
