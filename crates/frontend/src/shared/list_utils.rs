/// Утилиты для отображения списка задач (подсветка поиска, индикатор сортировки)
use contracts::shared::query::{ColumnId, SortDirection, SortDirective};
use leptos::prelude::*;

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // Позиции в нижнем регистре совпадают с исходными только при равной длине
    if filter_lower.is_empty()
        || text_lower.len() != text.len()
        || !text_lower.contains(&filter_lower)
    {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <span class="table__highlight">{text[actual_pos..match_end].to_string()}</span>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Получить индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(sort: Option<SortDirective>, column: ColumnId) -> &'static str {
    match sort {
        Some(d) if d.column == column => match d.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}
