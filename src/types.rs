use crate::FieldError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, FieldError> {
        let non_zero = NonZeroU16::new(value).ok_or(FieldError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(FieldError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Year by clamping the value into `1..=MAX_YEAR`.
    /// Wheel columns only carry in-range values; anything else is
    /// clamped rather than rejected.
    pub(crate) const fn clamped(value: u16) -> Self {
        let value = if value < 1 {
            1
        } else if value > MAX_YEAR {
            MAX_YEAR
        } else {
            value
        };
        // value >= 1 here, so the NonZero constructor cannot observe 0
        match NonZeroU16::new(value) {
            Some(nz) => Self(nz),
            None => Self(NonZeroU16::MIN),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = FieldError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, FieldError> {
        let non_zero = NonZeroU8::new(value).ok_or(FieldError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(FieldError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Month by clamping the value into `1..=MAX_MONTH`.
    pub(crate) const fn clamped(value: u8) -> Self {
        let value = if value < 1 {
            1
        } else if value > MAX_MONTH {
            MAX_MONTH
        } else {
            value
        };
        match NonZeroU8::new(value) {
            Some(nz) => Self(nz),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `FieldError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, FieldError> {
        let non_zero = NonZeroU8::new(value).ok_or(FieldError::InvalidDay {
            year,
            month,
            day: value,
        })?;

        if value > days_in_month(year, month) {
            return Err(FieldError::InvalidDay {
                year,
                month,
                day: value,
            });
        }

        Ok(Self(non_zero))
    }

    /// Creates a Day by truncating the value into the valid range for
    /// (year, month). Day 31 after a switch to April becomes day 30; a
    /// value below 1 becomes day 1. Never wraps into an adjacent month.
    pub(crate) const fn truncated(value: u8, year: u16, month: u8) -> Self {
        let max = days_in_month(year, month);
        let value = if value < MIN_DAY {
            MIN_DAY
        } else if value > max {
            max
        } else {
            value
        };
        match NonZeroU8::new(value) {
            Some(nz) => Self(nz),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Context-free validation: no year/month available, so only the
        // universal lower bound applies
        let non_zero = NonZeroU8::new(value).ok_or(FieldError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Proleptic Gregorian leap-year rule: divisible by 4, except centuries
/// unless divisible by 400.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in (year, month). Month must be in `1..=12`.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
