use std::ops::RangeInclusive;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::FieldError;
use crate::consts::{MAX_MONTH, MIN_FULL_MONTH_NAME_WIDTH};
use crate::prelude::*;
use crate::time::TimeFormat;
use crate::types::days_in_month;

/// One row of a wheel column: the text shown to the user, the concrete
/// field value it stands for, and its 0-based position in the column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{label}")]
pub struct WheelItem {
    pub label: String,
    pub value: i32,
    pub index: usize,
}

/// Host-supplied month name tables for the current locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthNames {
    pub full: [String; 12],
    pub abbreviated: [String; 12],
}

/// Which month name table a column should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MonthNameStyle {
    #[display(fmt = "full")]
    Full,
    #[display(fmt = "abbreviated")]
    Abbreviated,
}

/// Width policy for the month column: below the fixed minimum width the
/// full names will not fit, so the abbreviated table is used instead.
pub fn month_name_style(column_width: f32) -> MonthNameStyle {
    if column_width < MIN_FULL_MONTH_NAME_WIDTH {
        MonthNameStyle::Abbreviated
    } else {
        MonthNameStyle::Full
    }
}

fn day_run(len: u8) -> Vec<WheelItem> {
    (1..=len)
        .map(|value| WheelItem {
            label: value.to_string(),
            value: i32::from(value),
            index: usize::from(value) - 1,
        })
        .collect()
}

// The four possible day columns, built once per process. resolve via
// day_items; the 28-day table sits at index 0.
static DAY_TABLES: LazyLock<[Vec<WheelItem>; 4]> =
    LazyLock::new(|| [day_run(28), day_run(29), day_run(30), day_run(31)]);

static HOUR24_ITEMS: LazyLock<Vec<WheelItem>> = LazyLock::new(|| {
    (0..=23)
        .map(|value| WheelItem {
            label: format!("{value:02}"),
            value,
            index: value as usize,
        })
        .collect()
});

static HOUR12_ITEMS: LazyLock<Vec<WheelItem>> = LazyLock::new(|| {
    (1..=12)
        .map(|value| WheelItem {
            label: value.to_string(),
            value,
            index: value as usize - 1,
        })
        .collect()
});

// Shared by the minute and second columns; both run 00..=59.
static SEXAGESIMAL_ITEMS: LazyLock<Vec<WheelItem>> = LazyLock::new(|| {
    (0..=59)
        .map(|value| WheelItem {
            label: format!("{value:02}"),
            value,
            index: value as usize,
        })
        .collect()
});

/// Resolves the day column for (month, year): one of the four shared
/// tables, chosen by month length and leap-year status. No per-call
/// allocation.
///
/// # Errors
/// Returns `FieldError::InvalidMonth` when month is outside `1..=12`;
/// callers are expected to never do that (precondition violation, not a
/// recoverable state).
pub fn day_items(month: u8, year: u16) -> Result<&'static [WheelItem], FieldError> {
    if month == 0 || month > MAX_MONTH {
        return Err(FieldError::InvalidMonth(month));
    }
    let len = days_in_month(year, month);
    Ok(&DAY_TABLES[usize::from(len) - 28])
}

/// Builds the month column from the host's locale name tables
pub fn month_items(names: &MonthNames, style: MonthNameStyle) -> Vec<WheelItem> {
    let table = match style {
        MonthNameStyle::Full => &names.full,
        MonthNameStyle::Abbreviated => &names.abbreviated,
    };
    table
        .iter()
        .enumerate()
        .map(|(index, label)| WheelItem {
            label: label.clone(),
            value: index as i32 + 1,
            index,
        })
        .collect()
}

/// Builds the year column for an inclusive year range
pub fn year_items(years: RangeInclusive<u16>) -> Vec<WheelItem> {
    years
        .enumerate()
        .map(|(index, value)| WheelItem {
            label: value.to_string(),
            value: i32::from(value),
            index,
        })
        .collect()
}

/// The hour column for the given time format
pub fn hour_items(format: TimeFormat) -> &'static [WheelItem] {
    match format {
        TimeFormat::Hour24 => &HOUR24_ITEMS,
        TimeFormat::AmPm => &HOUR12_ITEMS,
    }
}

/// The minute column (00..=59)
pub fn minute_items() -> &'static [WheelItem] {
    &SEXAGESIMAL_ITEMS
}

/// The second column (00..=59)
pub fn second_items() -> &'static [WheelItem] {
    &SEXAGESIMAL_ITEMS
}

/// The AM/PM column, with host-supplied (locale) labels. Values match
/// `Meridiem::value`.
pub fn meridiem_items(am_label: &str, pm_label: &str) -> Vec<WheelItem> {
    vec![
        WheelItem {
            label: am_label.to_owned(),
            value: 0,
            index: 0,
        },
        WheelItem {
            label: pm_label.to_owned(),
            value: 1,
            index: 1,
        },
    ]
}

/// Resolves a snapped display index against a column. An index past the
/// end (a fling past the last row) selects the last item; a negative
/// index selects the first. Only an empty column yields `None`.
pub fn item_at(items: &[WheelItem], snapped_index: isize) -> Option<&WheelItem> {
    if items.is_empty() {
        return None;
    }
    let last = items.len() - 1;
    let index = snapped_index.clamp(0, last as isize) as usize;
    items.get(index)
}

/// First item whose value matches, as a display index. `None` means the
/// column was built for a different field state (e.g. another month's
/// day count) and must be rebuilt before indexing.
pub fn index_of_value(items: &[WheelItem], value: i32) -> Option<usize> {
    items.iter().find(|item| item.value == value).map(|item| item.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_month_names() -> MonthNames {
        let full = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        let abbreviated = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        MonthNames {
            full: full.map(str::to_owned),
            abbreviated: abbreviated.map(str::to_owned),
        }
    }

    #[test]
    fn test_day_items_lengths_match_calendar() {
        struct TestCase {
            month: u8,
            year: u16,
            expected_len: usize,
            description: &'static str,
        }

        let cases = [
            TestCase {
                month: 1,
                year: 2023,
                expected_len: 31,
                description: "January",
            },
            TestCase {
                month: 2,
                year: 2000,
                expected_len: 29,
                description: "February, divisible by 400",
            },
            TestCase {
                month: 2,
                year: 1900,
                expected_len: 28,
                description: "February, century not divisible by 400",
            },
            TestCase {
                month: 2,
                year: 2024,
                expected_len: 29,
                description: "February, leap",
            },
            TestCase {
                month: 2,
                year: 2023,
                expected_len: 28,
                description: "February, non-leap",
            },
            TestCase {
                month: 4,
                year: 2023,
                expected_len: 30,
                description: "April",
            },
            TestCase {
                month: 12,
                year: 2023,
                expected_len: 31,
                description: "December",
            },
        ];

        for case in &cases {
            let items = day_items(case.month, case.year).expect("month is valid");
            assert_eq!(items.len(), case.expected_len, "{}", case.description);
        }
    }

    #[test]
    fn test_day_items_values_are_contiguous_from_one() {
        for month in 1..=12 {
            let items = day_items(month, 2024).expect("month is valid");
            for (i, item) in items.iter().enumerate() {
                assert_eq!(item.index, i);
                assert_eq!(item.value, i as i32 + 1);
                assert_eq!(item.label, (i + 1).to_string());
            }
        }
    }

    #[test]
    fn test_day_items_shares_tables() {
        // January and March both resolve to the same 31-day table
        let jan = day_items(1, 2024).expect("month is valid");
        let mar = day_items(3, 2024).expect("month is valid");
        assert!(std::ptr::eq(jan, mar));
    }

    #[test]
    fn test_day_items_invalid_month() {
        assert!(matches!(
            day_items(0, 2024),
            Err(FieldError::InvalidMonth(0))
        ));
        assert!(matches!(
            day_items(13, 2024),
            Err(FieldError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_month_items_styles() {
        let names = test_month_names();
        let full = month_items(&names, MonthNameStyle::Full);
        assert_eq!(full.len(), 12);
        assert_eq!(full[0].label, "January");
        assert_eq!(full[0].value, 1);
        assert_eq!(full[11].label, "December");
        assert_eq!(full[11].value, 12);
        assert_eq!(full[11].index, 11);

        let abbreviated = month_items(&names, MonthNameStyle::Abbreviated);
        assert_eq!(abbreviated[8].label, "Sep");
        assert_eq!(abbreviated[8].value, 9);
    }

    #[test]
    fn test_month_name_style_threshold() {
        assert_eq!(month_name_style(54.9), MonthNameStyle::Abbreviated);
        assert_eq!(month_name_style(55.0), MonthNameStyle::Full);
        assert_eq!(month_name_style(85.3), MonthNameStyle::Full);
    }

    #[test]
    fn test_year_items() {
        let items = year_items(1922..=2122);
        assert_eq!(items.len(), 201);
        assert_eq!(items[0].value, 1922);
        assert_eq!(items[0].label, "1922");
        assert_eq!(items[200].value, 2122);
        assert_eq!(items[200].index, 200);
    }

    #[test]
    fn test_hour_items_formats() {
        let h24 = hour_items(TimeFormat::Hour24);
        assert_eq!(h24.len(), 24);
        assert_eq!(h24[0].value, 0);
        assert_eq!(h24[0].label, "00");
        assert_eq!(h24[23].value, 23);

        let h12 = hour_items(TimeFormat::AmPm);
        assert_eq!(h12.len(), 12);
        assert_eq!(h12[0].value, 1);
        assert_eq!(h12[0].label, "1");
        assert_eq!(h12[11].value, 12);
    }

    #[test]
    fn test_minute_and_second_items() {
        let minutes = minute_items();
        assert_eq!(minutes.len(), 60);
        assert_eq!(minutes[5].label, "05");
        assert_eq!(minutes[5].value, 5);
        // Seconds reuse the same table
        assert!(std::ptr::eq(minutes, second_items()));
    }

    #[test]
    fn test_meridiem_items() {
        let items = meridiem_items("AM", "PM");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].value, 0);
        assert_eq!(items[1].label, "PM");
    }

    #[test]
    fn test_item_at_clamps_past_end() {
        // 30-row column, fling reports index 35: select the last row
        let items = day_items(4, 2024).expect("April is valid");
        let item = item_at(items, 35).expect("non-empty column");
        assert_eq!(item.value, 30);
    }

    #[test]
    fn test_item_at_clamps_negative_to_first() {
        let items = day_items(4, 2024).expect("April is valid");
        let item = item_at(items, -3).expect("non-empty column");
        assert_eq!(item.value, 1);
    }

    #[test]
    fn test_item_at_in_range_and_empty() {
        let items = day_items(4, 2024).expect("April is valid");
        assert_eq!(item_at(items, 16).map(|i| i.value), Some(17));
        assert_eq!(item_at(&[], 0), None);
    }

    #[test]
    fn test_index_of_value() {
        let items = day_items(2, 2024).expect("February is valid");
        assert_eq!(index_of_value(items, 29), Some(28));
        // Value 31 never appears in a February column: stale-list signal
        assert_eq!(index_of_value(items, 31), None);
    }
}
