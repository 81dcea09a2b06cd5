use chrono::NaiveDate;
use contracts::shared::query::{
    ColumnId, FilterDirective, FilterDrafts, SortDirection, SortSelection, TableQueryState,
};
use leptos::prelude::*;

/// Состояние страницы задач: активные директивы и выбор в меню.
///
/// Каждое изменение выбора сразу превращается в директиву ядра.
#[derive(Clone, Debug, Default)]
pub struct TaskListState {
    pub query: TableQueryState,
    pub sort_selection: SortSelection,
    pub filter_drafts: FilterDrafts,
}

impl TaskListState {
    pub fn select_sort_column(&mut self, column: ColumnId) {
        let directive = self.sort_selection.select_column(column);
        self.query.set_sort(directive);
    }

    pub fn select_sort_direction(&mut self, direction: SortDirection) {
        let directive = self.sort_selection.select_direction(direction);
        self.query.set_sort(directive);
    }

    pub fn select_filter_column(&mut self, column: Option<ColumnId>) {
        let directive = self.filter_drafts.select_column(column);
        self.emit_filter(directive);
    }

    pub fn set_filter_text(&mut self, text: String) {
        let directive = self.filter_drafts.set_text(text);
        self.emit_filter(directive);
    }

    pub fn set_filter_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        let directive = self.filter_drafts.set_range(start, end);
        self.emit_filter(directive);
    }

    pub fn toggle_filter_label(&mut self, column: ColumnId, label: &str, checked: bool) {
        let directive = self.filter_drafts.toggle(column, label, checked);
        self.emit_filter(directive);
    }

    /// Сбросить сортировку, фильтр и выбор в меню
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // Пока колонка фильтра не выбрана, активный фильтр не меняется
    fn emit_filter(&mut self, directive: Option<FilterDirective>) {
        if let Some(directive) = directive {
            self.query.set_filter(directive);
        }
    }
}

pub fn create_state() -> RwSignal<TaskListState> {
    RwSignal::new(TaskListState::default())
}

/// Выбранная колонка фильтра; меняется только при выборе в меню,
/// ввод значений её не трогает
pub fn selected_filter_column(state: RwSignal<TaskListState>) -> Memo<Option<ColumnId>> {
    Memo::new(move |_| state.with(|s| s.filter_drafts.selected))
}
