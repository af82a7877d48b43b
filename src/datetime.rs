use std::str::FromStr;

use crate::consts::DATE_TIME_SEPARATOR;
use crate::date::{CalendarDate, DateField};
use crate::prelude::*;
use crate::time::{TimeField, WallTime};
use crate::FieldError;

/// A calendar date paired with a wall-clock time, edited as one value by
/// date-time wheels. Ordering is date-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{date} {time}")]
pub struct CalendarDateTime {
    date: CalendarDate,
    time: WallTime,
}

/// The column being edited on a date-time wheel: one of the date columns
/// or one of the time columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub enum DateTimeField {
    #[display(fmt = "{_0}")]
    Date(DateField),
    #[display(fmt = "{_0}")]
    Time(TimeField),
}

/// Error type for date-time operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// Error in the date or time half.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Invalid date-time format.
    #[error("Invalid date-time format: {0}")]
    InvalidFormat(String),
}

/// Inclusive date-time bounds. `min <= max` is a caller precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "[{min}, {max}]")]
pub struct DateTimeBounds {
    min: CalendarDateTime,
    max: CalendarDateTime,
}

impl DateTimeBounds {
    pub const fn new(min: CalendarDateTime, max: CalendarDateTime) -> Self {
        Self { min, max }
    }

    /// Returns the earliest allowed date-time
    pub const fn min(&self) -> CalendarDateTime {
        self.min
    }

    /// Returns the latest allowed date-time
    pub const fn max(&self) -> CalendarDateTime {
        self.max
    }
}

impl CalendarDateTime {
    pub const fn new(date: CalendarDate, time: WallTime) -> Self {
        Self { date, time }
    }

    /// Returns the date half
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the time half
    pub const fn time(&self) -> WallTime {
        self.time
    }

    /// Returns the named column as a wheel option value
    pub const fn field_value(&self, field: DateTimeField) -> i32 {
        match field {
            DateTimeField::Date(f) => self.date.field_value(f),
            DateTimeField::Time(f) => self.time.field_value(f),
        }
    }

    /// Replaces the named column on the relevant half. Date edits keep
    /// the day-truncation behavior of `CalendarDate::with_field`.
    pub const fn with_field(self, field: DateTimeField, value: i32) -> Self {
        match field {
            DateTimeField::Date(f) => Self {
                date: self.date.with_field(f, value),
                ..self
            },
            DateTimeField::Time(f) => Self {
                time: self.time.with_field(f, value),
                ..self
            },
        }
    }

    /// Clamps this date-time into the inclusive bounds. Clamping applies
    /// to the composite value, so a time edit on the minimum date can
    /// move the result to the bound's time as well.
    pub fn clamp_to(self, bounds: &DateTimeBounds) -> Self {
        if self < bounds.min {
            bounds.min
        } else if self > bounds.max {
            bounds.max
        } else {
            self
        }
    }
}

/// Applies a single column change to a date-time: replace the named
/// column on the relevant half, then clamp the composite value.
pub fn apply_date_time_change(
    current: CalendarDateTime,
    field: DateTimeField,
    value: i32,
    bounds: &DateTimeBounds,
) -> CalendarDateTime {
    current.with_field(field, value).clamp_to(bounds)
}

impl FromStr for CalendarDateTime {
    type Err = DateTimeError;

    /// Parses `YYYY-MM-DD HH:MM[:SS]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (date_str, time_str) =
            trimmed
                .split_once(DATE_TIME_SEPARATOR)
                .ok_or_else(|| {
                    DateTimeError::InvalidFormat(format!(
                        "Expected a date and a time separated by '{DATE_TIME_SEPARATOR}': {s}"
                    ))
                })?;

        let date = date_str.parse::<CalendarDate>()?;
        let time = time_str.parse::<WallTime>()?;
        Ok(Self { date, time })
    }
}

impl serde::Serialize for CalendarDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date_time(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> CalendarDateTime {
        CalendarDateTime::new(
            CalendarDate::new(year, month, day).expect("test date must be valid"),
            WallTime::new(hour, minute, 0).expect("test time must be valid"),
        )
    }

    #[test]
    fn test_ordering_is_date_major() {
        assert!(date_time(2024, 1, 1, 23, 59) < date_time(2024, 1, 2, 0, 0));
        assert!(date_time(2024, 1, 1, 10, 0) < date_time(2024, 1, 1, 10, 30));
    }

    #[test]
    fn test_date_edit_truncates_day() {
        let dt = date_time(2025, 1, 31, 12, 0);
        let edited = dt.with_field(DateTimeField::Date(DateField::Month), 2);
        assert_eq!(edited, date_time(2025, 2, 28, 12, 0));
    }

    #[test]
    fn test_time_edit_keeps_date() {
        let dt = date_time(2025, 10, 20, 5, 30);
        let edited = dt.with_field(DateTimeField::Time(TimeField::Hour), 19);
        assert_eq!(edited, date_time(2025, 10, 20, 19, 30));
    }

    #[test]
    fn test_clamp_across_date_time_boundary() {
        // Moving the hour past the max on the max date clamps the whole
        // composite, pulling the minute back too
        let bounds = DateTimeBounds::new(
            date_time(2025, 10, 1, 0, 0),
            date_time(2025, 10, 20, 5, 30),
        );
        let result = apply_date_time_change(
            date_time(2025, 10, 20, 5, 30),
            DateTimeField::Time(TimeField::Hour),
            7,
            &bounds,
        );
        assert_eq!(result, date_time(2025, 10, 20, 5, 30));

        // A date edit below the min clamps up to the min, time included
        let result = apply_date_time_change(
            date_time(2025, 10, 5, 12, 0),
            DateTimeField::Date(DateField::Month),
            9,
            &bounds,
        );
        assert_eq!(result, bounds.min());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let bounds = DateTimeBounds::new(
            date_time(2025, 10, 1, 0, 0),
            date_time(2025, 10, 20, 5, 30),
        );
        let field = DateTimeField::Time(TimeField::Hour);
        let once = apply_date_time_change(date_time(2025, 10, 20, 5, 30), field, 7, &bounds);
        let twice = apply_date_time_change(once, field, 7, &bounds);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_display_and_parse() {
        let dt = date_time(1993, 1, 12, 9, 5);
        assert_eq!(dt.to_string(), "1993-01-12 09:05:00");
        let parsed = "1993-01-12 09:05:00"
            .parse::<CalendarDateTime>()
            .expect("valid date-time");
        assert_eq!(parsed, dt);
        let parsed = "1993-01-12 09:05"
            .parse::<CalendarDateTime>()
            .expect("seconds are optional");
        assert_eq!(parsed, dt);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "1993-01-12".parse::<CalendarDateTime>(),
            Err(DateTimeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1993-02-30 09:05".parse::<CalendarDateTime>(),
            Err(DateTimeError::Field(FieldError::InvalidDay { .. }))
        ));
        assert!(matches!(
            "1993-01-12 25:05".parse::<CalendarDateTime>(),
            Err(DateTimeError::Field(FieldError::InvalidHour(25)))
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let dt = date_time(2025, 10, 20, 5, 30);
        let json = serde_json::to_string(&dt).expect("date-time serializes");
        assert_eq!(json, r#""2025-10-20 05:30:00""#);
        let parsed: CalendarDateTime = serde_json::from_str(&json).expect("date-time deserializes");
        assert_eq!(dt, parsed);
    }
}
