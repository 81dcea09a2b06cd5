//! Конвейер сортировки и фильтрации таблицы задач.
//!
//! Видимые строки всегда выводятся из полного набора данных:
//! `compute(data, sort, filter) = filter(sort(data, sort), filter)`.

pub mod column;
pub mod directive;
pub mod engine;
pub mod filter;
pub mod selection;
pub mod sort;
pub mod state;

pub use column::{ColumnId, FilterKind};
pub use directive::{DateRange, FilterDirective, FilterValue, SortDirection, SortDirective};
pub use engine::compute;
pub use filter::{apply_filter, filter_list, filter_rows, Filterable};
pub use selection::{FilterDrafts, SortSelection};
pub use sort::{apply_sort, sort_list, sort_rows, Sortable};
pub use state::{QueryPhase, TableQueryState};
