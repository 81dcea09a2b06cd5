//! Состояние селекторов сортировки и фильтра.
//!
//! Селекторы помнят выбор пользователя между открытиями меню и на каждое
//! изменение выдают полную директиву для ядра.

use super::column::{ColumnId, FilterKind};
use super::directive::{DateRange, FilterDirective, FilterValue, SortDirection, SortDirective};
use chrono::NaiveDate;

/// Выбор в меню сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSelection {
    pub column: ColumnId,
    pub direction: SortDirection,
}

impl Default for SortSelection {
    fn default() -> Self {
        Self {
            column: ColumnId::TaskName,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSelection {
    /// Новая колонка с текущим направлением
    pub fn select_column(&mut self, column: ColumnId) -> SortDirective {
        self.column = column;
        self.directive()
    }

    /// Новое направление для текущей колонки
    pub fn select_direction(&mut self, direction: SortDirection) -> SortDirective {
        self.direction = direction;
        self.directive()
    }

    pub fn directive(&self) -> SortDirective {
        SortDirective::new(self.column, self.direction)
    }
}

/// Черновые значения фильтра по каждой колонке.
///
/// Значения сохраняются при переключении колонки; директива выдаётся только
/// для выбранной колонки.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDrafts {
    pub selected: Option<ColumnId>,
    pub task_name: String,
    pub due_start: Option<NaiveDate>,
    pub due_end: Option<NaiveDate>,
    pub priority: Vec<String>,
    pub status: Vec<String>,
    pub task_type: Vec<String>,
}

impl FilterDrafts {
    /// Значение фильтра из черновика колонки
    pub fn value_for(&self, column: ColumnId) -> FilterValue {
        match column.filter_kind() {
            FilterKind::Text => FilterValue::Text(self.task_name.clone()),
            FilterKind::DateRange => DateRange::from_bounds(self.due_start, self.due_end)
                .map(FilterValue::Range)
                .unwrap_or(FilterValue::IncompleteRange),
            FilterKind::Set => FilterValue::Set(self.labels(column).to_vec()),
        }
    }

    /// Выбранные метки для колонки-перечисления
    pub fn labels(&self, column: ColumnId) -> &[String] {
        match column {
            ColumnId::Priority => self.priority.as_slice(),
            ColumnId::Status => self.status.as_slice(),
            ColumnId::TaskType => self.task_type.as_slice(),
            ColumnId::TaskName | ColumnId::DueDate => &[],
        }
    }

    pub fn is_checked(&self, column: ColumnId, label: &str) -> bool {
        self.labels(column).iter().any(|l| l == label)
    }

    /// Выбор колонки в меню. `None` ("Select Column") ничего не выдаёт.
    pub fn select_column(&mut self, column: Option<ColumnId>) -> Option<FilterDirective> {
        self.selected = column;
        self.current()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Option<FilterDirective> {
        self.task_name = text.into();
        self.current()
    }

    pub fn set_range(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<FilterDirective> {
        self.due_start = start;
        self.due_end = end;
        self.current()
    }

    /// Отметить или снять метку в наборе колонки
    pub fn toggle(&mut self, column: ColumnId, label: &str, checked: bool) -> Option<FilterDirective> {
        let labels = match column {
            ColumnId::Priority => &mut self.priority,
            ColumnId::Status => &mut self.status,
            ColumnId::TaskType => &mut self.task_type,
            ColumnId::TaskName | ColumnId::DueDate => {
                log::warn!("Column '{}' has no label set to toggle", column);
                return self.current();
            }
        };
        if checked {
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        } else {
            labels.retain(|l| l != label);
        }
        self.current()
    }

    /// Директива для выбранной колонки
    pub fn current(&self) -> Option<FilterDirective> {
        self.selected
            .map(|column| FilterDirective::new(column, self.value_for(column)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_selection_keeps_other_half() {
        let mut selection = SortSelection::default();
        assert_eq!(
            selection.select_direction(SortDirection::Desc),
            SortDirective::desc(ColumnId::TaskName)
        );
        assert_eq!(
            selection.select_column(ColumnId::Status),
            SortDirective::desc(ColumnId::Status)
        );
    }

    #[test]
    fn test_no_directive_until_column_selected() {
        let mut drafts = FilterDrafts::default();
        assert_eq!(drafts.set_text("mont"), None);
        let directive = drafts.select_column(Some(ColumnId::TaskName)).unwrap();
        assert_eq!(directive.value, FilterValue::text("mont"));
        assert_eq!(drafts.select_column(None), None);
    }

    #[test]
    fn test_drafts_survive_column_switch() {
        let mut drafts = FilterDrafts::default();
        drafts.select_column(Some(ColumnId::Priority));
        drafts.toggle(ColumnId::Priority, "High", true);
        drafts.select_column(Some(ColumnId::TaskName));
        let back = drafts.select_column(Some(ColumnId::Priority)).unwrap();
        assert_eq!(back.value, FilterValue::set(["High"]));
    }

    #[test]
    fn test_default_set_draft_is_empty_set() {
        let mut drafts = FilterDrafts::default();
        let directive = drafts.select_column(Some(ColumnId::Status)).unwrap();
        assert_eq!(directive.value, FilterValue::Set(Vec::new()));
    }

    #[test]
    fn test_toggle_adds_once_and_removes() {
        let mut drafts = FilterDrafts::default();
        drafts.select_column(Some(ColumnId::TaskType));
        drafts.toggle(ColumnId::TaskType, "Bug", true);
        drafts.toggle(ColumnId::TaskType, "Bug", true);
        drafts.toggle(ColumnId::TaskType, "Improvement", true);
        assert_eq!(drafts.task_type, vec!["Bug", "Improvement"]);
        let directive = drafts.toggle(ColumnId::TaskType, "Bug", false).unwrap();
        assert_eq!(directive.value, FilterValue::set(["Improvement"]));
        assert!(drafts.is_checked(ColumnId::TaskType, "Improvement"));
    }

    #[test]
    fn test_incomplete_range_matches_nothing() {
        let mut drafts = FilterDrafts::default();
        let empty = drafts.select_column(Some(ColumnId::DueDate)).unwrap();
        assert_eq!(empty.value, FilterValue::IncompleteRange);
        let start = NaiveDate::from_ymd_opt(2024, 8, 15);
        let half = drafts.set_range(start, None).unwrap();
        assert_eq!(half.value, FilterValue::IncompleteRange);
        let full = drafts.set_range(start, start).unwrap();
        assert!(matches!(full.value, FilterValue::Range(_)));
    }
}
