mod consts;
mod date;
mod datetime;
mod duration;
mod options;
mod order;
mod prelude;
mod snap;
mod time;
mod types;

pub use consts::*;
pub use date::{CalendarDate, DateBounds, DateField, apply_date_change};
pub use datetime::{
    CalendarDateTime, DateTimeBounds, DateTimeError, DateTimeField, apply_date_time_change,
};
pub use duration::{
    DurationBounds, DurationField, DurationFormat, apply_duration_change, duration_unit_items,
};
pub use options::{
    MonthNameStyle, MonthNames, WheelItem, day_items, hour_items, index_of_value, item_at,
    meridiem_items, minute_items, month_items, month_name_style, second_items, year_items,
};
pub use order::{DateFieldOrder, resolve_field_order};
pub use snap::{
    SnappedDate, SnappedDateTime, SnappedDuration, SnappedTime, snap_date_column,
    snap_date_time_column, snap_duration_column, snap_time_column,
};
pub use time::{
    Meridiem, TimeBounds, TimeField, TimeFormat, WallTime, apply_time_change, to_hour12, to_hour24,
};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;

/// Error for invalid field values and unparsable field input.
/// Only misbehaving callers can trigger the value variants: wheel option
/// lists never hold out-of-range values.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FieldError {
    #[display(fmt = "Invalid format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
    #[display(fmt = "Invalid second: {} (must be 0-{})", "_0", MAX_SECOND)]
    InvalidSecond(u8),
    #[display(fmt = "Empty input")]
    EmptyInput,
}

impl std::error::Error for FieldError {}
