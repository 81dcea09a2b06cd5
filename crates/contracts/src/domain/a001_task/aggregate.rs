use crate::enums::{Priority, Ranked, TaskStatus, TaskType};
use crate::shared::date_utils::parse_due_date;
use crate::shared::error::QueryError;
use crate::shared::query::ColumnId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Задача (строка таблицы).
///
/// Записи неизменяемы после загрузки; ядро их только читает.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "Task Name")]
    pub task_name: String,

    /// Срок выполнения в формате DD/MM/YYYY
    #[serde(rename = "Due Date")]
    pub due_date: String,

    #[serde(rename = "Priority")]
    pub priority: Priority,

    #[serde(rename = "Status")]
    pub status: TaskStatus,

    #[serde(rename = "Task Type")]
    pub task_type: TaskType,
}

impl Task {
    pub fn new(
        task_name: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
        status: TaskStatus,
        task_type: TaskType,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            due_date: due_date.into(),
            priority,
            status,
            task_type,
        }
    }

    /// Значение ячейки так, как оно отображается в таблице
    pub fn cell_value(&self, column: ColumnId) -> &str {
        match column {
            ColumnId::TaskName => &self.task_name,
            ColumnId::DueDate => &self.due_date,
            ColumnId::Priority => self.priority.display_name(),
            ColumnId::Status => self.status.display_name(),
            ColumnId::TaskType => self.task_type.display_name(),
        }
    }

    pub fn due_date_parsed(&self) -> Result<NaiveDate, QueryError> {
        parse_due_date(&self.due_date)
    }
}
