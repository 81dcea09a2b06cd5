//! Сортировка строк таблицы (стабильная, без изменения исходных данных).

use super::column::ColumnId;
use super::directive::{SortDirection, SortDirective};
use crate::domain::a001_task::Task;
use crate::enums::Ranked;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку по колонке
pub trait Sortable {
    /// Сравнивает два объекта по колонке (по возрастанию)
    fn compare_by_column(&self, other: &Self, column: ColumnId) -> Ordering;
}

fn compare_ranked<T: Ranked>(a: &T, b: &T) -> Ordering {
    a.rank().cmp(&b.rank())
}

impl Sortable for Task {
    fn compare_by_column(&self, other: &Self, column: ColumnId) -> Ordering {
        match column {
            // Лексическое сравнение сырой строки, в том числе DD/MM/YYYY
            ColumnId::TaskName => self.task_name.cmp(&other.task_name),
            ColumnId::DueDate => self.due_date.cmp(&other.due_date),
            ColumnId::Priority => compare_ranked(&self.priority, &other.priority),
            ColumnId::Status => compare_ranked(&self.status, &other.status),
            ColumnId::TaskType => compare_ranked(&self.task_type, &other.task_type),
        }
    }
}

/// Сортирует список по колонке.
/// `sort_by` стабилен: строки с равным ключом сохраняют исходный порядок
/// в обоих направлениях.
pub fn sort_list<T: Sortable>(items: &mut [T], column: ColumnId, direction: SortDirection) {
    items.sort_by(|a, b| direction.apply(a.compare_by_column(b, column)));
}

/// Новая отсортированная копия строк
pub fn apply_sort(rows: &[Task], column: ColumnId, direction: SortDirection) -> Vec<Task> {
    let mut sorted = rows.to_vec();
    sort_list(&mut sorted, column, direction);
    sorted
}

/// Без директивы порядок строк не меняется
pub fn sort_rows(rows: &[Task], directive: Option<&SortDirective>) -> Vec<Task> {
    match directive {
        Some(d) => apply_sort(rows, d.column, d.direction),
        None => rows.to_vec(),
    }
}
