use crate::date::DateField;
use crate::prelude::*;

/// Left-to-right column order for a date wheel, derived from the
/// locale's short date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateFieldOrder {
    #[display(fmt = "YMD")]
    Ymd,
    #[display(fmt = "MDY")]
    Mdy,
    #[display(fmt = "DMY")]
    Dmy,
    #[display(fmt = "YDM")]
    Ydm,
    #[display(fmt = "MYD")]
    Myd,
    #[display(fmt = "DYM")]
    Dym,
}

impl DateFieldOrder {
    /// The three date columns in display order
    pub const fn fields(self) -> [DateField; 3] {
        match self {
            Self::Ymd => [DateField::Year, DateField::Month, DateField::Day],
            Self::Mdy => [DateField::Month, DateField::Day, DateField::Year],
            Self::Dmy => [DateField::Day, DateField::Month, DateField::Year],
            Self::Ydm => [DateField::Year, DateField::Day, DateField::Month],
            Self::Myd => [DateField::Month, DateField::Year, DateField::Day],
            Self::Dym => [DateField::Day, DateField::Year, DateField::Month],
        }
    }
}

/// Derives the date column order from a locale short date pattern
/// (e.g. `"dd.MM.yyyy"` => DMY). Compares the first occurrence of the
/// year/month/day pattern characters, case-insensitively, testing the
/// six permutations in fixed priority order. An absent pattern, or one
/// missing any of the three characters, falls back to MDY.
///
/// System date-format settings can change while an app is backgrounded;
/// the host should call this again on its resume signal and push the
/// result back into its state.
pub fn resolve_field_order(pattern: Option<&str>) -> DateFieldOrder {
    let Some(pattern) = pattern else {
        return DateFieldOrder::Mdy;
    };
    let upper = pattern.to_uppercase();
    let (Some(y), Some(m), Some(d)) = (upper.find('Y'), upper.find('M'), upper.find('D')) else {
        return DateFieldOrder::Mdy;
    };

    if y < m && m < d {
        DateFieldOrder::Ymd
    } else if m < d && d < y {
        DateFieldOrder::Mdy
    } else if d < m && m < y {
        DateFieldOrder::Dmy
    } else if y < d && d < m {
        DateFieldOrder::Ydm
    } else if m < y && y < d {
        DateFieldOrder::Myd
    } else if d < y && y < m {
        DateFieldOrder::Dym
    } else {
        DateFieldOrder::Mdy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_common_patterns() {
        struct TestCase {
            pattern: &'static str,
            expected: DateFieldOrder,
        }

        let cases = [
            TestCase {
                pattern: "MM/dd/yyyy",
                expected: DateFieldOrder::Mdy,
            },
            TestCase {
                pattern: "dd.MM.yyyy",
                expected: DateFieldOrder::Dmy,
            },
            TestCase {
                pattern: "yyyy-MM-dd",
                expected: DateFieldOrder::Ymd,
            },
            TestCase {
                pattern: "d/M/yy",
                expected: DateFieldOrder::Dmy,
            },
            TestCase {
                pattern: "yy/d/M",
                expected: DateFieldOrder::Ydm,
            },
            TestCase {
                pattern: "M yyyy d",
                expected: DateFieldOrder::Myd,
            },
            TestCase {
                pattern: "d yyyy M",
                expected: DateFieldOrder::Dym,
            },
        ];

        for case in &cases {
            assert_eq!(
                resolve_field_order(Some(case.pattern)),
                case.expected,
                "pattern {:?}",
                case.pattern
            );
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(
            resolve_field_order(Some("DD.mm.YYYY")),
            DateFieldOrder::Dmy
        );
    }

    #[test]
    fn test_missing_pattern_defaults_to_mdy() {
        assert_eq!(resolve_field_order(None), DateFieldOrder::Mdy);
    }

    #[test]
    fn test_unresolvable_pattern_defaults_to_mdy() {
        // No day character at all
        assert_eq!(resolve_field_order(Some("MM/yyyy")), DateFieldOrder::Mdy);
        assert_eq!(resolve_field_order(Some("")), DateFieldOrder::Mdy);
        assert_eq!(resolve_field_order(Some("w Q e")), DateFieldOrder::Mdy);
    }

    #[test]
    fn test_fields_permutations() {
        assert_eq!(
            DateFieldOrder::Dmy.fields(),
            [DateField::Day, DateField::Month, DateField::Year]
        );
        assert_eq!(
            DateFieldOrder::Ymd.fields(),
            [DateField::Year, DateField::Month, DateField::Day]
        );
        // Each permutation names all three fields exactly once
        for order in [
            DateFieldOrder::Ymd,
            DateFieldOrder::Mdy,
            DateFieldOrder::Dmy,
            DateFieldOrder::Ydm,
            DateFieldOrder::Myd,
            DateFieldOrder::Dym,
        ] {
            let fields = order.fields();
            assert!(fields.contains(&DateField::Day), "{order}");
            assert!(fields.contains(&DateField::Month), "{order}");
            assert!(fields.contains(&DateField::Year), "{order}");
        }
    }
}
