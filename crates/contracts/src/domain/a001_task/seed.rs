//! Встроенный набор задач, который показывает таблица.

use super::aggregate::Task;
use crate::shared::error::QueryError;
use once_cell::sync::Lazy;

const TASKS_JSON: &str = include_str!("tasks.json");

static DEFAULT_TASKS: Lazy<Vec<Task>> =
    Lazy::new(|| parse_tasks(TASKS_JSON).expect("embedded tasks.json must be a valid task list"));

/// Разобрать список задач из JSON
pub fn parse_tasks(json: &str) -> Result<Vec<Task>, QueryError> {
    let tasks: Vec<Task> = serde_json::from_str(json)?;
    log::debug!("Parsed {} tasks", tasks.len());
    Ok(tasks)
}

/// Фиксированный набор данных таблицы (порядок загрузки сохраняется)
pub fn default_tasks() -> &'static [Task] {
    &DEFAULT_TASKS
}
