use super::directive::{FilterDirective, SortDirective};
use super::engine::compute;
use crate::domain::a001_task::Task;

/// Фаза жизненного цикла директив
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Idle,
    Sorted,
    Filtered,
    SortedAndFiltered,
}

/// Активные директивы таблицы: не более одной сортировки и одного фильтра.
///
/// Каждая директива задаётся и снимается независимо; `reset` снимает обе.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQueryState {
    pub sort: Option<SortDirective>,
    pub filter: Option<FilterDirective>,
}

impl TableQueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sort(&mut self, directive: SortDirective) {
        self.sort = Some(directive);
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn set_filter(&mut self, directive: FilterDirective) {
        self.filter = Some(directive);
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> QueryPhase {
        match (self.sort.is_some(), self.filter.is_some()) {
            (false, false) => QueryPhase::Idle,
            (true, false) => QueryPhase::Sorted,
            (false, true) => QueryPhase::Filtered,
            (true, true) => QueryPhase::SortedAndFiltered,
        }
    }

    /// Пересчитать видимые строки из полного набора данных
    pub fn view(&self, dataset: &[Task]) -> Vec<Task> {
        compute(dataset, self.sort.as_ref(), self.filter.as_ref())
    }
}
