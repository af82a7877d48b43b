use crate::FieldError;
use crate::consts::{DATE_SEPARATOR, MAX_DAY, MAX_MONTH, MAX_YEAR};
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month};
use std::str::FromStr;

/// A concrete calendar date. The day is always valid for (year, month);
/// field edits that would break that invariant truncate the day to the
/// last day of the month before the value becomes observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// The column being edited on a date wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// Inclusive date bounds. `min <= max` is a caller precondition; the core
/// neither validates nor repairs inverted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "[{min}, {max}]")]
pub struct DateBounds {
    min: CalendarDate,
    max: CalendarDate,
}

impl DateBounds {
    pub const fn new(min: CalendarDate, max: CalendarDate) -> Self {
        debug_assert!(
            min.year.get() < max.year.get()
                || (min.year.get() == max.year.get() && min.month.get() < max.month.get())
                || (min.year.get() == max.year.get()
                    && min.month.get() == max.month.get()
                    && min.day.get() <= max.day.get())
        );
        Self { min, max }
    }

    /// Returns the earliest allowed date
    pub const fn min(&self) -> CalendarDate {
        self.min
    }

    /// Returns the latest allowed date
    pub const fn max(&self) -> CalendarDate {
        self.max
    }
}

impl CalendarDate {
    /// Creates a date from validated components
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw components, validating each field
    ///
    /// # Errors
    /// Returns the first failing field's `FieldError`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, FieldError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year component
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the typed year
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the typed month
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the typed day
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns the named field as a wheel option value
    pub const fn field_value(&self, field: DateField) -> i32 {
        match field {
            DateField::Day => self.day.get() as i32,
            DateField::Month => self.month.get() as i32,
            DateField::Year => self.year.get() as i32,
        }
    }

    /// Replaces the named field, truncating the day to the last valid day
    /// of the resulting month when the combination would otherwise be
    /// impossible (e.g. day 31 after switching the month to April). The
    /// day never wraps into the next month.
    ///
    /// Values come from wheel option lists and are trusted; out-of-domain
    /// values are clamped into the field's range rather than rejected.
    pub const fn with_field(self, field: DateField, value: i32) -> Self {
        match field {
            DateField::Day => {
                let day = clamp_to_u8(value, MAX_DAY);
                Self {
                    day: Day::truncated(day, self.year.get(), self.month.get()),
                    ..self
                }
            }
            DateField::Month => {
                let month = Month::clamped(clamp_to_u8(value, MAX_MONTH));
                Self {
                    month,
                    day: Day::truncated(self.day.get(), self.year.get(), month.get()),
                    ..self
                }
            }
            DateField::Year => {
                let year = Year::clamped(clamp_to_u16(value, MAX_YEAR));
                Self {
                    year,
                    day: Day::truncated(self.day.get(), year.get(), self.month.get()),
                    ..self
                }
            }
        }
    }

    /// Clamps this date into the inclusive bounds
    pub fn clamp_to(self, bounds: &DateBounds) -> Self {
        if self < bounds.min {
            bounds.min
        } else if self > bounds.max {
            bounds.max
        } else {
            self
        }
    }

    /// Last valid day of this date's month
    pub const fn last_day_of_month(&self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }
}

/// Applies a single column change to a date: replace the named field
/// (truncating the day when needed), then clamp into the bounds.
/// Re-applying with the same inputs yields the same result.
pub fn apply_date_change(
    current: CalendarDate,
    field: DateField,
    value: i32,
    bounds: &DateBounds,
) -> CalendarDate {
    current.with_field(field, value).clamp_to(bounds)
}

const fn clamp_to_u8(value: i32, max: u8) -> u8 {
    if value < 1 {
        1
    } else if value > max as i32 {
        max
    } else {
        value as u8
    }
}

const fn clamp_to_u16(value: i32, max: u16) -> u16 {
    if value < 1 {
        1
    } else if value > max as i32 {
        max
    } else {
        value as u16
    }
}

impl FromStr for CalendarDate {
    type Err = FieldError;

    /// Parses strict ISO `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FieldError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(FieldError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got: {trimmed}"
            )));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;
        Self::new(year, month, day)
    }
}

pub(crate) fn parse_u16(s: &str) -> Result<u16, FieldError> {
    s.parse::<u16>()
        .map_err(|_| FieldError::InvalidFormat(s.to_owned()))
}

pub(crate) fn parse_u8(s: &str) -> Result<u8, FieldError> {
    s.parse::<u8>()
        .map_err(|_| FieldError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
