use crate::consts::{MAX_MINUTE, MAX_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::options::WheelItem;
use crate::prelude::*;

/// Which unit columns a duration wheel shows. The leading unit is
/// open-ended (bounded only by the allowed maximum); trailing units carry
/// their usual radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DurationFormat {
    #[display(fmt = "HH:MM")]
    HoursMinutes,
    #[display(fmt = "MM:SS")]
    MinutesSeconds,
    #[display(fmt = "HH:MM:SS")]
    HoursMinutesSeconds,
}

/// The column being edited on a duration wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DurationField {
    #[display(fmt = "hours")]
    Hours,
    #[display(fmt = "minutes")]
    Minutes,
    #[display(fmt = "seconds")]
    Seconds,
}

/// Inclusive duration bounds in whole seconds. `min <= max` is a caller
/// precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "[{min}s, {max}s]")]
pub struct DurationBounds {
    min: u64,
    max: u64,
}

impl DurationBounds {
    pub const fn new(min_seconds: u64, max_seconds: u64) -> Self {
        debug_assert!(min_seconds <= max_seconds);
        Self {
            min: min_seconds,
            max: max_seconds,
        }
    }

    /// Returns the shortest allowed duration in seconds
    pub const fn min(&self) -> u64 {
        self.min
    }

    /// Returns the longest allowed duration in seconds
    pub const fn max(&self) -> u64 {
        self.max
    }
}

impl DurationFormat {
    /// The columns this format shows, leading unit first
    pub const fn fields(self) -> &'static [DurationField] {
        match self {
            Self::HoursMinutes => &[DurationField::Hours, DurationField::Minutes],
            Self::MinutesSeconds => &[DurationField::Minutes, DurationField::Seconds],
            Self::HoursMinutesSeconds => &[
                DurationField::Hours,
                DurationField::Minutes,
                DurationField::Seconds,
            ],
        }
    }

    /// Splits a total-seconds duration into this format's (hours,
    /// minutes, seconds) columns. Units the format does not show are
    /// zero; the leading unit absorbs the remainder, so `MM:SS` can show
    /// minute values above 59.
    pub const fn decompose(self, total_seconds: u64) -> (u64, u64, u64) {
        match self {
            Self::HoursMinutes => (
                total_seconds / SECONDS_PER_HOUR,
                (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
                0,
            ),
            Self::MinutesSeconds => (
                0,
                total_seconds / SECONDS_PER_MINUTE,
                total_seconds % SECONDS_PER_MINUTE,
            ),
            Self::HoursMinutesSeconds => (
                total_seconds / SECONDS_PER_HOUR,
                (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
                total_seconds % SECONDS_PER_MINUTE,
            ),
        }
    }

    /// Rebuilds a total-seconds duration from this format's columns.
    /// Only the shown columns contribute; precision the format cannot
    /// display is dropped rather than carried invisibly.
    pub const fn compose(self, hours: u64, minutes: u64, seconds: u64) -> u64 {
        match self {
            Self::HoursMinutes => hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE,
            Self::MinutesSeconds => minutes * SECONDS_PER_MINUTE + seconds,
            Self::HoursMinutesSeconds => {
                hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds
            }
        }
    }

    /// Returns the named column's current value for a total-seconds
    /// duration
    pub const fn field_value(self, total_seconds: u64, field: DurationField) -> i32 {
        let (hours, minutes, seconds) = self.decompose(total_seconds);
        match field {
            DurationField::Hours => hours as i32,
            DurationField::Minutes => minutes as i32,
            DurationField::Seconds => seconds as i32,
        }
    }

    const fn shows(self, field: DurationField) -> bool {
        let fields = self.fields();
        let mut i = 0;
        while i < fields.len() {
            if fields[i] as u8 == field as u8 {
                return true;
            }
            i += 1;
        }
        false
    }
}

/// Applies a single column change to a duration: decompose per the
/// format, replace the named column, recompose, then clamp into the
/// bounds. A field the format does not show leaves the duration
/// unchanged. Idempotent under re-application.
pub fn apply_duration_change(
    current_seconds: u64,
    format: DurationFormat,
    field: DurationField,
    value: i32,
    bounds: &DurationBounds,
) -> u64 {
    if !format.shows(field) {
        debug_assert!(false, "{field} is not shown by {format}");
        return current_seconds;
    }

    let (mut hours, mut minutes, mut seconds) = format.decompose(current_seconds);
    let value = value.max(0) as u64;
    match field {
        DurationField::Hours => hours = value,
        DurationField::Minutes => minutes = value,
        DurationField::Seconds => seconds = value,
    }

    format
        .compose(hours, minutes, seconds)
        .clamp(bounds.min, bounds.max)
}

/// Builds the option list for one column of a duration wheel. The
/// leading unit runs from 0 up to the bound maximum expressed in that
/// unit; trailing units carry their fixed radix. A field the format does
/// not show yields an empty list.
pub fn duration_unit_items(
    format: DurationFormat,
    field: DurationField,
    bounds: &DurationBounds,
) -> Vec<WheelItem> {
    if !format.shows(field) {
        return Vec::new();
    }

    let leading = format.fields()[0];
    let last = if field == leading {
        match field {
            DurationField::Hours => bounds.max / SECONDS_PER_HOUR,
            DurationField::Minutes => bounds.max / SECONDS_PER_MINUTE,
            DurationField::Seconds => bounds.max,
        }
    } else {
        match field {
            DurationField::Hours => 0,
            DurationField::Minutes => u64::from(MAX_MINUTE),
            DurationField::Seconds => u64::from(MAX_SECOND),
        }
    };

    (0..=last)
        .enumerate()
        .map(|(index, value)| WheelItem {
            label: format!("{value:02}"),
            value: value as i32,
            index,
        })
        .collect()
}
