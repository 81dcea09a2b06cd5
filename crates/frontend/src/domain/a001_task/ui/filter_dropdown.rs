use super::list::state::{selected_filter_column, TaskListState};
use crate::shared::click_outside::close_on_outside_click;
use crate::shared::icons::icon;
use contracts::shared::date_utils::parse_iso_date;
use contracts::shared::query::{ColumnId, DateRange, FilterKind};
use leptos::html::Div;
use leptos::prelude::*;

fn iso(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Меню "Filter by Column": колонка и значение фильтра для неё
#[component]
pub fn FilterDropdown(state: RwSignal<TaskListState>) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let root = NodeRef::<Div>::new();
    close_on_outside_click(root, is_open);

    // Поля пересоздаются только при смене колонки, а не на каждый ввод
    let selected = selected_filter_column(state);

    let filter_options = move || {
        let Some(column) = selected.get() else {
            return view! { <></> }.into_any();
        };
        match column.filter_kind() {
            FilterKind::Text => view! {
                <input
                    type="text"
                    class="task-dropdown__input"
                    placeholder="Search task name"
                    prop:value=move || state.with(|s| s.filter_drafts.task_name.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.set_filter_text(text));
                    }
                />
            }
            .into_any(),
            FilterKind::DateRange => view! {
                <div class="task-dropdown__range">
                    <input
                        type="date"
                        class="task-dropdown__input"
                        prop:value=move || state.with(|s| iso(s.filter_drafts.due_start))
                        on:input=move |ev| {
                            let start = parse_iso_date(&event_target_value(&ev));
                            state.update(|s| {
                                let end = s.filter_drafts.due_end;
                                s.set_filter_range(start, end);
                            });
                        }
                    />
                    <input
                        type="date"
                        class="task-dropdown__input"
                        prop:value=move || state.with(|s| iso(s.filter_drafts.due_end))
                        on:input=move |ev| {
                            let end = parse_iso_date(&event_target_value(&ev));
                            state.update(|s| {
                                let start = s.filter_drafts.due_start;
                                s.set_filter_range(start, end);
                            });
                        }
                    />
                    {move || {
                        state
                            .with(|s| DateRange::from_bounds(s.filter_drafts.due_start, s.filter_drafts.due_end))
                            .map(|range| view! {
                                <div class="task-dropdown__hint">
                                    {format!("Selected range: {}", range)}
                                </div>
                            })
                    }}
                </div>
            }
            .into_any(),
            FilterKind::Set => column
                .set_labels()
                .into_iter()
                .map(|label| view! {
                    <label class="task-dropdown__option">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.filter_drafts.is_checked(column, label))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                state.update(|s| s.toggle_filter_label(column, label, checked));
                            }
                        />
                        " "
                        {label}
                    </label>
                })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="task-dropdown" node_ref=root>
            <button
                class="button button--success"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {icon("filter")}
                " Filter by Column"
            </button>

            <Show when=move || is_open.get()>
                <div class="task-dropdown__menu task-dropdown__menu--right">
                    <select
                        class="task-dropdown__select"
                        prop:value=move || {
                            selected.get().map(|c| c.code()).unwrap_or("").to_string()
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let column = ColumnId::from_code(&value);
                            if column.is_none() && !value.is_empty() {
                                log::warn!("Unknown filter column: {}", value);
                            }
                            state.update(|s| s.select_filter_column(column));
                        }
                    >
                        <option value="">"Select Column"</option>
                        {ColumnId::all().into_iter().map(|column| view! {
                            <option value=column.code()>{column.display_name()}</option>
                        }).collect_view()}
                    </select>
                    {filter_options}
                </div>
            </Show>
        </div>
    }
}
