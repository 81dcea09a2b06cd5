pub mod state;

use self::state::create_state;
use super::filter_dropdown::FilterDropdown;
use super::sort_dropdown::SortDropdown;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, highlight_matches};
use contracts::domain::a001_task::default_tasks;
use contracts::shared::config::{default_config, Config};
use contracts::shared::query::{ColumnId, FilterValue};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "a001-task-table";

#[component]
pub fn TaskList() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_else(|| default_config().clone());
    let title = config.table.title.clone();
    let empty_message = config.table.empty_message.clone();

    let state = create_state();
    log!("Task table mounted with {} tasks", default_tasks().len());

    // Полный пересчёт из набора данных на каждое изменение директив
    let visible = Memo::new(move |_| state.with(|s| s.query.view(default_tasks())));

    // Текст для подсветки, только когда активен текстовый фильтр по названию
    let name_highlight = Signal::derive(move || {
        state.with(|s| match &s.query.filter {
            Some(filter) if filter.column == ColumnId::TaskName => match &filter.value {
                FilterValue::Text(text) => text.clone(),
                _ => String::new(),
            },
            _ => String::new(),
        })
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge>
                        {move || visible.with(|rows| rows.len()).to_string()}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="task-toolbar">
                    <SortDropdown state=state />
                    <div class="task-toolbar__chips">
                        {move || {
                            state
                                .with(|s| s.query.sort)
                                .map(|sort| view! {
                                    <span class="badge badge--primary">{sort.to_string()}</span>
                                })
                        }}
                        {move || {
                            state
                                .with(|s| s.query.filter.clone())
                                .map(|filter| view! {
                                    <span class="badge badge--success">{filter.to_string()}</span>
                                })
                        }}
                    </div>
                    <FilterDropdown state=state />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            log!("Reset sort and filter");
                            state.update(|s| s.reset());
                        }
                    >
                        {icon("x")}
                        " Reset All"
                    </Button>
                </div>

                {move || {
                    let rows = visible.get();
                    if rows.is_empty() {
                        return view! {
                            <div class="table__empty">{empty_message.clone()}</div>
                        }
                        .into_any();
                    }

                    view! {
                        <div class="table-wrapper">
                            <Table attr:id=TABLE_ID attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        {ColumnId::all().into_iter().map(|column| view! {
                                            <TableHeaderCell resizable=false>
                                                {column.display_name()}
                                                <span class="table__sort-indicator">
                                                    {move || get_sort_indicator(state.with(|s| s.query.sort), column)}
                                                </span>
                                            </TableHeaderCell>
                                        }).collect_view()}
                                    </TableRow>
                                </TableHeader>

                                <TableBody>
                                    {rows.into_iter().enumerate().map(|(index, task)| {
                                        let row_class = if index % 2 == 0 {
                                            "table__row table__row--even"
                                        } else {
                                            "table__row table__row--odd"
                                        };
                                        let name = task.task_name.clone();
                                        view! {
                                            <TableRow class=row_class>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {move || highlight_matches(&name, &name_highlight.get())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{task.due_date.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{task.priority.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{task.status.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{task.task_type.to_string()}</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
