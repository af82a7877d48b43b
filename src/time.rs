use crate::FieldError;
use crate::consts::{HOURS_PER_MERIDIEM, MAX_HOUR, MAX_MINUTE, MAX_SECOND, TIME_SEPARATOR};
use crate::date::parse_u8;
use crate::prelude::*;
use std::str::FromStr;

/// A wall-clock time of day. Unlike dates there is no cross-field
/// dependency: every field has a fixed radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct WallTime {
    hour: u8,
    minute: u8,
    second: u8,
}

/// The column being edited on a time wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TimeField {
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

/// How the hour column is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TimeFormat {
    /// 0..=23 hour wheel
    #[display(fmt = "24-hour")]
    Hour24,
    /// 1..=12 hour wheel plus an AM/PM column
    #[display(fmt = "AM/PM")]
    AmPm,
}

/// Half of the day on a 12-hour wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Meridiem {
    #[display(fmt = "AM")]
    Am,
    #[display(fmt = "PM")]
    Pm,
}

impl Meridiem {
    /// Maps a meridiem wheel option value (0 = AM, 1 = PM) back to the enum
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Am),
            1 => Some(Self::Pm),
            _ => None,
        }
    }

    /// The wheel option value for this meridiem
    pub const fn value(self) -> i32 {
        match self {
            Self::Am => 0,
            Self::Pm => 1,
        }
    }
}

/// Inclusive time bounds. `min <= max` is a caller precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "[{min}, {max}]")]
pub struct TimeBounds {
    min: WallTime,
    max: WallTime,
}

impl TimeBounds {
    pub const fn new(min: WallTime, max: WallTime) -> Self {
        debug_assert!(min.total_seconds() <= max.total_seconds());
        Self { min, max }
    }

    /// Returns the earliest allowed time
    pub const fn min(&self) -> WallTime {
        self.min
    }

    /// Returns the latest allowed time
    pub const fn max(&self) -> WallTime {
        self.max
    }

    /// The whole day, for hosts that pass no explicit bounds
    pub const fn full_day() -> Self {
        Self {
            min: WallTime::MIDNIGHT,
            max: WallTime {
                hour: MAX_HOUR,
                minute: MAX_MINUTE,
                second: MAX_SECOND,
            },
        }
    }
}

impl WallTime {
    /// 00:00:00
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a time, validating each field's radix
    ///
    /// # Errors
    /// Returns the first failing field's `FieldError`.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, FieldError> {
        if hour > MAX_HOUR {
            return Err(FieldError::InvalidHour(hour));
        }
        if minute > MAX_MINUTE {
            return Err(FieldError::InvalidMinute(minute));
        }
        if second > MAX_SECOND {
            return Err(FieldError::InvalidSecond(second));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour (0..=23)
    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59)
    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59)
    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Seconds since midnight
    pub const fn total_seconds(&self) -> u32 {
        self.hour as u32 * 3_600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Returns the named field as a wheel option value
    pub const fn field_value(&self, field: TimeField) -> i32 {
        match field {
            TimeField::Hour => self.hour as i32,
            TimeField::Minute => self.minute as i32,
            TimeField::Second => self.second as i32,
        }
    }

    /// Replaces the named field, clamping the value into the field's
    /// fixed radix. No field depends on another, so there is no
    /// truncation analog to the calendar day.
    pub const fn with_field(self, field: TimeField, value: i32) -> Self {
        match field {
            TimeField::Hour => Self {
                hour: clamp_radix(value, MAX_HOUR),
                ..self
            },
            TimeField::Minute => Self {
                minute: clamp_radix(value, MAX_MINUTE),
                ..self
            },
            TimeField::Second => Self {
                second: clamp_radix(value, MAX_SECOND),
                ..self
            },
        }
    }

    /// Clamps this time into the inclusive bounds
    pub fn clamp_to(self, bounds: &TimeBounds) -> Self {
        if self < bounds.min {
            bounds.min
        } else if self > bounds.max {
            bounds.max
        } else {
            self
        }
    }
}

/// Applies a single column change to a time: replace the named field,
/// then clamp into the bounds. Idempotent under re-application.
pub fn apply_time_change(
    current: WallTime,
    field: TimeField,
    value: i32,
    bounds: &TimeBounds,
) -> WallTime {
    current.with_field(field, value).clamp_to(bounds)
}

/// Converts a 12-hour wheel selection to a 24-hour value.
/// `hour12` must be in `1..=12`; 12 AM maps to 0, 12 PM to 12.
pub const fn to_hour24(hour12: u8, meridiem: Meridiem) -> u8 {
    debug_assert!(hour12 >= 1 && hour12 <= HOURS_PER_MERIDIEM);
    let base = hour12 % HOURS_PER_MERIDIEM;
    match meridiem {
        Meridiem::Am => base,
        Meridiem::Pm => base + HOURS_PER_MERIDIEM,
    }
}

/// Converts a 24-hour value to its 12-hour wheel representation.
pub const fn to_hour12(hour24: u8) -> (u8, Meridiem) {
    debug_assert!(hour24 <= MAX_HOUR);
    let meridiem = if hour24 < HOURS_PER_MERIDIEM {
        Meridiem::Am
    } else {
        Meridiem::Pm
    };
    let hour = hour24 % HOURS_PER_MERIDIEM;
    if hour == 0 {
        (HOURS_PER_MERIDIEM, meridiem)
    } else {
        (hour, meridiem)
    }
}

const fn clamp_radix(value: i32, max: u8) -> u8 {
    if value < 0 {
        0
    } else if value > max as i32 {
        max
    } else {
        value as u8
    }
}

impl FromStr for WallTime {
    type Err = FieldError;

    /// Parses `HH:MM` or `HH:MM:SS`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FieldError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).map(str::trim).collect();
        match parts.len() {
            2 => Self::new(parse_u8(parts[0])?, parse_u8(parts[1])?, 0),
            3 => Self::new(
                parse_u8(parts[0])?,
                parse_u8(parts[1])?,
                parse_u8(parts[2])?,
            ),
            _ => Err(FieldError::InvalidFormat(format!(
                "Expected HH{TIME_SEPARATOR}MM or HH{TIME_SEPARATOR}MM{TIME_SEPARATOR}SS, got: {trimmed}"
            ))),
        }
    }
}

impl serde::Serialize for WallTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for WallTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
