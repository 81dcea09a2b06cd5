use crate::domain::a001_task::ui::list::TaskList;
use contracts::shared::config::Config;
use leptos::prelude::*;

#[component]
pub fn App(config: Config) -> impl IntoView {
    // Provide the table configuration to the whole app via context.
    provide_context(config);

    view! {
        <TaskList />
    }
}
