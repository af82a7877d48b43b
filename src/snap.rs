//! Snap-event resolution: the host reports "column X settled on display
//! index I"; the core maps the index to a field value, applies it to the
//! current composite value, clamps into the bounds, and hands back the
//! new value together with the display index the column should show.
//! `None` always means "no update" — the host keeps its last-known
//! value. After a month or year snap the host must re-derive the day
//! column via `day_items` before indexing into it.

use crate::date::{CalendarDate, DateBounds, DateField, apply_date_change};
use crate::datetime::{CalendarDateTime, DateTimeBounds, DateTimeField, apply_date_time_change};
use crate::duration::{DurationBounds, DurationField, DurationFormat, apply_duration_change};
use crate::options::{WheelItem, index_of_value, item_at};
use crate::time::{TimeBounds, TimeField, WallTime, apply_time_change};

/// Result of a date column snap: the clamped date plus the display index
/// the snapped column should settle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnappedDate {
    pub date: CalendarDate,
    pub index: usize,
}

/// Result of a time column snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnappedTime {
    pub time: WallTime,
    pub index: usize,
}

/// Result of a date-time column snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnappedDateTime {
    pub date_time: CalendarDateTime,
    pub index: usize,
}

/// Result of a duration column snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnappedDuration {
    pub total_seconds: u64,
    pub index: usize,
}

/// Resolves a snap on one date column. `items` is the option list the
/// column currently displays. Returns `None` when the index maps to no
/// option, or when the clamped value has no exact match in `items`
/// (stale list: rebuild, then re-resolve).
pub fn snap_date_column(
    current: CalendarDate,
    field: DateField,
    snapped_index: isize,
    items: &[WheelItem],
    bounds: &DateBounds,
) -> Option<SnappedDate> {
    let item = item_at(items, snapped_index)?;
    let date = apply_date_change(current, field, item.value, bounds);
    let index = index_of_value(items, date.field_value(field))?;
    Some(SnappedDate { date, index })
}

/// Resolves a snap on one time column.
pub fn snap_time_column(
    current: WallTime,
    field: TimeField,
    snapped_index: isize,
    items: &[WheelItem],
    bounds: &TimeBounds,
) -> Option<SnappedTime> {
    let item = item_at(items, snapped_index)?;
    let time = apply_time_change(current, field, item.value, bounds);
    let index = index_of_value(items, time.field_value(field))?;
    Some(SnappedTime { time, index })
}

/// Resolves a snap on one date-time column (a date or a time column of
/// the composite wheel).
pub fn snap_date_time_column(
    current: CalendarDateTime,
    field: DateTimeField,
    snapped_index: isize,
    items: &[WheelItem],
    bounds: &DateTimeBounds,
) -> Option<SnappedDateTime> {
    let item = item_at(items, snapped_index)?;
    let date_time = apply_date_time_change(current, field, item.value, bounds);
    let index = index_of_value(items, date_time.field_value(field))?;
    Some(SnappedDateTime { date_time, index })
}

/// Resolves a snap on one duration unit column.
pub fn snap_duration_column(
    current_seconds: u64,
    format: DurationFormat,
    field: DurationField,
    snapped_index: isize,
    items: &[WheelItem],
    bounds: &DurationBounds,
) -> Option<SnappedDuration> {
    let item = item_at(items, snapped_index)?;
    let total_seconds = apply_duration_change(current_seconds, format, field, item.value, bounds);
    let index = index_of_value(items, format.field_value(total_seconds, field))?;
    Some(SnappedDuration {
        total_seconds,
        index,
    })
}
