use super::list::state::TaskListState;
use crate::shared::click_outside::close_on_outside_click;
use crate::shared::icons::icon;
use contracts::shared::query::{ColumnId, SortDirection};
use leptos::html::Div;
use leptos::prelude::*;

/// Меню "Sort by Column": колонка и направление
#[component]
pub fn SortDropdown(state: RwSignal<TaskListState>) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let root = NodeRef::<Div>::new();
    close_on_outside_click(root, is_open);

    view! {
        <div class="task-dropdown" node_ref=root>
            <button
                class="button button--primary"
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {icon("sort")}
                " Sort by Column"
            </button>

            <Show when=move || is_open.get()>
                <div class="task-dropdown__menu task-dropdown__menu--left">
                    <select
                        class="task-dropdown__select"
                        prop:value=move || state.with(|s| s.sort_selection.column.code().to_string())
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<ColumnId>() {
                                Ok(column) => state.update(|s| s.select_sort_column(column)),
                                Err(e) => log::warn!("{}", e),
                            }
                        }
                    >
                        {ColumnId::all().into_iter().map(|column| view! {
                            <option value=column.code()>{column.display_name()}</option>
                        }).collect_view()}
                    </select>
                    <select
                        class="task-dropdown__select"
                        prop:value=move || state.with(|s| s.sort_selection.direction.code().to_string())
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<SortDirection>() {
                                Ok(direction) => state.update(|s| s.select_sort_direction(direction)),
                                Err(e) => log::warn!("{}", e),
                            }
                        }
                    >
                        {SortDirection::all().into_iter().map(|direction| view! {
                            <option value=direction.code()>{direction.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </Show>
        </div>
    }
}
