use chrono::NaiveDate;

use crate::domain::common::Record;
use crate::shared::date_utils::{end_of_day, parse_date, parse_timestamp, start_of_day};

/// Вид фильтра колонки
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
    /// Case-insensitive substring over any of the fields
    Text { fields: Vec<&'static str> },
    /// Equality against a selected option
    Exact {
        field: &'static str,
        case_sensitive: bool,
    },
    /// Inclusive calendar range over a timestamp field
    DateRange { field: &'static str },
}

/// Описание фильтра таблицы
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub fn text(name: &'static str, label: &'static str, fields: &[&'static str]) -> Self {
        Self {
            name,
            label,
            kind: FilterKind::Text {
                fields: fields.to_vec(),
            },
        }
    }

    pub fn exact(name: &'static str, label: &'static str, field: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FilterKind::Exact {
                field,
                case_sensitive: true,
            },
        }
    }

    pub fn exact_ignore_case(name: &'static str, label: &'static str, field: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FilterKind::Exact {
                field,
                case_sensitive: false,
            },
        }
    }

    pub fn date_range(name: &'static str, label: &'static str, field: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FilterKind::DateRange { field },
        }
    }

    /// Does the record satisfy this filter under `value`?
    /// Inactive values impose no constraint.
    pub fn matches<R: Record>(&self, value: &FilterValue, record: &R) -> bool {
        if !value.is_active() {
            return true;
        }
        match (&self.kind, value) {
            (FilterKind::Text { fields }, FilterValue::Term(term)) => {
                let needle = term.trim().to_lowercase();
                fields.iter().any(|field| {
                    record
                        .field_value(field)
                        .map(|v| v.to_lowercase().contains(&needle))
                        .unwrap_or(false)
                })
            }
            (
                FilterKind::Exact {
                    field,
                    case_sensitive,
                },
                FilterValue::Term(selected),
            ) => match record.field_value(field) {
                Some(v) if *case_sensitive => v == *selected,
                Some(v) => v.to_lowercase() == selected.to_lowercase(),
                None => false,
            },
            (FilterKind::DateRange { field }, FilterValue::Range { from, to }) => {
                let Some(ts) = record.field_value(field).as_deref().and_then(parse_timestamp) else {
                    return false;
                };
                from.map_or(true, |d| ts >= start_of_day(d)) && to.map_or(true, |d| ts <= end_of_day(d))
            }
            // value shape does not fit the filter kind
            _ => true,
        }
    }
}

/// Текущее значение фильтра
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Term(String),
    Range {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    pub fn term(value: impl Into<String>) -> Self {
        FilterValue::Term(value.into())
    }

    /// Build a range from two `<input type="date">` values; blank or invalid bounds are open.
    pub fn range_from_inputs(from: &str, to: &str) -> Self {
        FilterValue::Range {
            from: parse_date(from),
            to: parse_date(to),
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Term(term) => !term.trim().is_empty(),
            FilterValue::Range { from, to } => from.is_some() || to.is_some(),
        }
    }

    /// Short text for export file names ("Data Science", "2025-01-01-2025-01-31").
    pub fn summary(&self) -> String {
        match self {
            FilterValue::Term(term) => term.trim().to_string(),
            FilterValue::Range { from, to } => {
                let fmt = |d: &Option<NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string());
                match (fmt(from), fmt(to)) {
                    (Some(f), Some(t)) => format!("{f}-{t}"),
                    (Some(f), None) => format!("from-{f}"),
                    (None, Some(t)) => format!("to-{t}"),
                    (None, None) => String::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: &'static str,
        name: &'static str,
        city: &'static str,
        created_at: &'static str,
    }

    impl Record for Row {
        fn record_key(&self) -> String {
            self.id.to_string()
        }
        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.to_string()),
                "city" => Some(self.city.to_string()),
                "created_at" => Some(self.created_at.to_string()),
                _ => None,
            }
        }
        fn dataset_index() -> &'static str {
            "t000"
        }
        fn dataset_name() -> &'static str {
            "rows"
        }
        fn list_name() -> &'static str {
            "Rows"
        }
    }

    fn row(created_at: &'static str) -> Row {
        Row {
            id: "1",
            name: "Asha Rao",
            city: "Pune",
            created_at,
        }
    }

    #[test]
    fn test_text_filter_is_case_insensitive_over_any_field() {
        let spec = FilterSpec::text("search", "Search", &["name", "city"]);
        assert!(spec.matches(&FilterValue::term("asha"), &row("")));
        assert!(spec.matches(&FilterValue::term("PUN"), &row("")));
        assert!(!spec.matches(&FilterValue::term("mumbai"), &row("")));
        assert!(spec.matches(&FilterValue::term("   "), &row("")));
    }

    #[test]
    fn test_exact_filter_case_sensitivity() {
        let strict = FilterSpec::exact("city", "City", "city");
        let loose = FilterSpec::exact_ignore_case("city", "City", "city");
        assert!(strict.matches(&FilterValue::term("Pune"), &row("")));
        assert!(!strict.matches(&FilterValue::term("pune"), &row("")));
        assert!(loose.matches(&FilterValue::term("pune"), &row("")));
        assert!(!loose.matches(&FilterValue::term("Pun"), &row("")));
    }

    #[test]
    fn test_date_range_bounds_are_inclusive_days() {
        let spec = FilterSpec::date_range("created", "Created", "created_at");
        let january = FilterValue::range_from_inputs("2025-01-01", "2025-01-31");

        assert!(spec.matches(&january, &row("2025-01-31T23:59:59")));
        assert!(spec.matches(&january, &row("2025-01-01T00:00:00")));
        assert!(!spec.matches(&january, &row("2025-02-01T00:00:01")));
        assert!(!spec.matches(&january, &row("2024-12-31T23:59:59")));
        assert!(!spec.matches(&january, &row("not a date")));

        let open_start = FilterValue::range_from_inputs("", "2025-01-31");
        assert!(spec.matches(&open_start, &row("2020-06-01 10:00:00")));

        let inactive = FilterValue::range_from_inputs("", "");
        assert!(!inactive.is_active());
        assert!(spec.matches(&inactive, &row("not a date")));
    }

    #[test]
    fn test_summary() {
        assert_eq!(FilterValue::term(" Data Science ").summary(), "Data Science");
        assert_eq!(
            FilterValue::range_from_inputs("2025-01-01", "2025-01-31").summary(),
            "2025-01-01-2025-01-31"
        );
        assert_eq!(FilterValue::range_from_inputs("2025-01-01", "").summary(), "from-2025-01-01");
    }
}
