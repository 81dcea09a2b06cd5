use super::directive::{FilterDirective, SortDirective};
use super::filter::filter_rows;
use super::sort::sort_rows;
use crate::domain::a001_task::Task;

/// Видимые строки таблицы.
///
/// Сортировка всегда выполняется по полному набору данных, фильтр
/// применяется к её результату.
pub fn compute(
    dataset: &[Task],
    sort: Option<&SortDirective>,
    filter: Option<&FilterDirective>,
) -> Vec<Task> {
    let sorted = sort_rows(dataset, sort);
    let visible = filter_rows(&sorted, filter);
    log::debug!(
        "Recomputed task view: {} of {} rows (sort: {:?}, filter: {:?})",
        visible.len(),
        dataset.len(),
        sort,
        filter.map(|f| f.column)
    );
    visible
}
