//! Предикат фильтра по одной колонке.

use super::column::ColumnId;
use super::directive::{FilterDirective, FilterValue};
use crate::domain::a001_task::Task;

/// Trait для типов данных, поддерживающих фильтрацию по колонке
pub trait Filterable {
    /// Проверяет, проходит ли объект фильтр по указанной колонке
    fn matches_filter(&self, column: ColumnId, value: &FilterValue) -> bool;
}

impl Filterable for Task {
    fn matches_filter(&self, column: ColumnId, value: &FilterValue) -> bool {
        match value {
            FilterValue::NoFilter | FilterValue::Unrecognized => true,
            FilterValue::Text(needle) => self
                .cell_value(column)
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            FilterValue::Set(accepted) => {
                let cell = self.cell_value(column);
                accepted.iter().any(|label| label == cell)
            }
            FilterValue::IncompleteRange => false,
            // Диапазон всегда проверяет срок выполнения
            FilterValue::Range(range) => match self.due_date_parsed() {
                Ok(date) => range.contains(date),
                Err(e) => {
                    log::debug!("Row '{}' excluded from range filter: {}", self.task_name, e);
                    false
                }
            },
        }
    }
}

/// Фильтрует список, сохраняя порядок
pub fn filter_list<T: Filterable + Clone>(items: &[T], column: ColumnId, value: &FilterValue) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(column, value))
        .cloned()
        .collect()
}

pub fn apply_filter(rows: &[Task], column: ColumnId, value: &FilterValue) -> Vec<Task> {
    if matches!(value, FilterValue::Unrecognized) {
        log::warn!(
            "Unrecognized filter value for column '{}', showing all rows",
            column
        );
    }
    filter_list(rows, column, value)
}

/// Без директивы принимаются все строки
pub fn filter_rows(rows: &[Task], directive: Option<&FilterDirective>) -> Vec<Task> {
    match directive {
        Some(d) => apply_filter(rows, d.column, &d.value),
        None => rows.to_vec(),
    }
}
