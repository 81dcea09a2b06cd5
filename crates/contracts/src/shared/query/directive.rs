use super::column::ColumnId;
use crate::shared::date_utils::{end_of_day, format_due_date, parse_iso_date, start_of_day};
use crate::shared::error::QueryError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Sort
// ============================================================================

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn code(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascending",
            SortDirection::Desc => "Descending",
        }
    }

    pub fn all() -> Vec<SortDirection> {
        vec![SortDirection::Asc, SortDirection::Desc]
    }

    /// Применить направление к результату сравнения по возрастанию
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(QueryError::UnknownDirection(other.to_string())),
        }
    }
}

/// Активная сортировка: одна колонка и направление.
/// Новая директива всегда полностью заменяет предыдущую.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub column: ColumnId,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(column: ColumnId, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub fn asc(column: ColumnId) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    pub fn desc(column: ColumnId) -> Self {
        Self::new(column, SortDirection::Desc)
    }
}

/// "Sort: taskName (asc)"
impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sort: {} ({})", self.column, self.direction)
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Включительный диапазон дат.
///
/// Границы нормализуются при создании: начало дня для `start`,
/// 23:59:59.999 для `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start_of_day(start),
            end: end_of_day(end),
        }
    }

    /// Диапазон существует только когда выбраны обе границы
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self::new(start, end)),
            _ => None,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Дата строки берётся на начало дня и сравнивается с обеими границами
    pub fn contains(&self, date: NaiveDate) -> bool {
        let moment = start_of_day(date);
        self.start <= moment && moment <= self.end
    }
}

/// "15/08/2024 - 20/08/2024"
impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            format_due_date(self.start.date()),
            format_due_date(self.end.date())
        )
    }
}

/// Значение фильтра. Форма значения определяет предикат.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    /// Фильтр не задан: принимаются все строки
    #[default]
    NoFilter,
    /// Подстрока без учёта регистра
    Text(String),
    /// Допустимые метки ячейки; пустой набор не принимает ни одной строки
    Set(Vec<String>),
    /// Включительный диапазон срока выполнения
    Range(DateRange),
    /// Диапазон без одной из границ или с нераспознанной границей:
    /// не принимает ни одной строки
    IncompleteRange,
    /// Значение нераспознанной формы (fail-open)
    Unrecognized,
}

impl FilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        FilterValue::Text(value.into())
    }

    pub fn set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Set(values.into_iter().map(Into::into).collect())
    }

    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        FilterValue::Range(DateRange::new(start, end))
    }

    /// Decode an untyped filter value.
    ///
    /// string -> Text, array -> Set (non-string items match no cell),
    /// `{startDate, endDate}` -> Range (IncompleteRange while either bound is
    /// missing or unparseable), null -> NoFilter. Everything else is Unrecognized.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FilterValue::NoFilter,
            Value::String(text) => FilterValue::Text(text.clone()),
            Value::Array(items) => FilterValue::Set(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            Value::Object(map) if map.contains_key("startDate") && map.contains_key("endDate") => {
                let bound = |key: &str| map.get(key).and_then(Value::as_str).and_then(parse_iso_date);
                DateRange::from_bounds(bound("startDate"), bound("endDate"))
                    .map(FilterValue::Range)
                    .unwrap_or(FilterValue::IncompleteRange)
            }
            _ => FilterValue::Unrecognized,
        }
    }

    /// Текст для чипа активного фильтра
    pub fn describe(&self) -> String {
        match self {
            FilterValue::NoFilter | FilterValue::Unrecognized => String::new(),
            FilterValue::Text(text) => text.clone(),
            FilterValue::Set(values) => values.join(", "),
            FilterValue::Range(range) => range.to_string(),
            FilterValue::IncompleteRange => " - ".to_string(),
        }
    }
}

/// Активный фильтр: одна колонка и значение
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDirective {
    pub column: ColumnId,
    pub value: FilterValue,
}

impl FilterDirective {
    pub fn new(column: ColumnId, value: FilterValue) -> Self {
        Self { column, value }
    }
}

/// "Filter: priority (High, Low)"
impl fmt::Display for FilterDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filter: {} ({})", self.column, self.value.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("down".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_range_bounds_are_normalized() {
        let range = DateRange::new(date(2024, 8, 15), date(2024, 8, 15));
        assert_eq!(range.start().to_string(), "2024-08-15 00:00:00");
        assert_eq!(range.end().to_string(), "2024-08-15 23:59:59.999");
        assert!(range.contains(date(2024, 8, 15)));
        assert!(!range.contains(date(2024, 8, 14)));
        assert!(!range.contains(date(2024, 8, 16)));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = DateRange::new(date(2024, 8, 20), date(2024, 8, 10));
        assert!(!range.contains(date(2024, 8, 15)));
    }

    #[test]
    fn test_from_json_shapes() {
        assert_eq!(FilterValue::from_json(&Value::Null), FilterValue::NoFilter);
        assert_eq!(
            FilterValue::from_json(&json!("mont")),
            FilterValue::text("mont")
        );
        assert_eq!(
            FilterValue::from_json(&json!(["High", "Low"])),
            FilterValue::set(["High", "Low"])
        );
        assert_eq!(
            FilterValue::from_json(&json!([])),
            FilterValue::Set(Vec::new())
        );
        assert_eq!(
            FilterValue::from_json(&json!({
                "startDate": "2024-08-15T00:00:00.000Z",
                "endDate": "2024-08-25"
            })),
            FilterValue::range(date(2024, 8, 15), date(2024, 8, 25))
        );
    }

    #[test]
    fn test_from_json_incomplete_range_matches_nothing() {
        let half = json!({ "startDate": "2024-08-15", "endDate": null });
        assert_eq!(FilterValue::from_json(&half), FilterValue::IncompleteRange);
        let garbled = json!({ "startDate": "soon", "endDate": "later" });
        assert_eq!(FilterValue::from_json(&garbled), FilterValue::IncompleteRange);
    }

    #[test]
    fn test_from_json_array_is_always_a_set() {
        assert_eq!(FilterValue::from_json(&json!([1, 2])), FilterValue::Set(Vec::new()));
        assert_eq!(
            FilterValue::from_json(&json!([1, "High"])),
            FilterValue::set(["High"])
        );
    }

    #[test]
    fn test_from_json_unrecognized() {
        assert_eq!(FilterValue::from_json(&json!(42)), FilterValue::Unrecognized);
        assert_eq!(FilterValue::from_json(&json!(true)), FilterValue::Unrecognized);
        assert_eq!(
            FilterValue::from_json(&json!({ "from": "2024-08-15" })),
            FilterValue::Unrecognized
        );
        assert_eq!(
            FilterValue::from_json(&json!({ "startDate": "2024-08-15" })),
            FilterValue::Unrecognized
        );
    }

    #[test]
    fn test_summaries() {
        let sort = SortDirective::desc(ColumnId::DueDate);
        assert_eq!(sort.to_string(), "Sort: dueDate (desc)");

        let filter = FilterDirective::new(ColumnId::Priority, FilterValue::set(["High", "Low"]));
        assert_eq!(filter.to_string(), "Filter: priority (High, Low)");

        let range = FilterDirective::new(
            ColumnId::DueDate,
            FilterValue::range(date(2024, 8, 15), date(2024, 8, 20)),
        );
        assert_eq!(range.to_string(), "Filter: dueDate (15/08/2024 - 20/08/2024)");
    }
}
