use crate::enums::{Priority, Ranked, TaskStatus, TaskType};
use crate::shared::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Колонка таблицы задач
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    TaskName,
    DueDate,
    Priority,
    Status,
    TaskType,
}

/// Вид значения фильтра, который предлагается для колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    DateRange,
    Set,
}

impl ColumnId {
    /// Код колонки (совпадает с сериализованным представлением)
    pub fn code(&self) -> &'static str {
        match self {
            ColumnId::TaskName => "taskName",
            ColumnId::DueDate => "dueDate",
            ColumnId::Priority => "priority",
            ColumnId::Status => "status",
            ColumnId::TaskType => "taskType",
        }
    }

    /// Заголовок колонки
    pub fn display_name(&self) -> &'static str {
        match self {
            ColumnId::TaskName => "Task Name",
            ColumnId::DueDate => "Due Date",
            ColumnId::Priority => "Priority",
            ColumnId::Status => "Status",
            ColumnId::TaskType => "Task Type",
        }
    }

    /// Все колонки в порядке отображения
    pub fn all() -> Vec<ColumnId> {
        vec![
            ColumnId::TaskName,
            ColumnId::DueDate,
            ColumnId::Priority,
            ColumnId::Status,
            ColumnId::TaskType,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "taskName" => Some(ColumnId::TaskName),
            "dueDate" => Some(ColumnId::DueDate),
            "priority" => Some(ColumnId::Priority),
            "status" => Some(ColumnId::Status),
            "taskType" => Some(ColumnId::TaskType),
            _ => None,
        }
    }

    pub fn filter_kind(&self) -> FilterKind {
        match self {
            ColumnId::TaskName => FilterKind::Text,
            ColumnId::DueDate => FilterKind::DateRange,
            ColumnId::Priority | ColumnId::Status | ColumnId::TaskType => FilterKind::Set,
        }
    }

    /// Метки, из которых собирается набор фильтра (в порядке ранга)
    pub fn set_labels(&self) -> Vec<&'static str> {
        match self {
            ColumnId::Priority => Priority::all().iter().map(Ranked::display_name).collect(),
            ColumnId::Status => TaskStatus::all().iter().map(Ranked::display_name).collect(),
            ColumnId::TaskType => TaskType::all().iter().map(Ranked::display_name).collect(),
            ColumnId::TaskName | ColumnId::DueDate => Vec::new(),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ColumnId {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| QueryError::UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde() {
        for column in ColumnId::all() {
            let json = serde_json::to_string(&column).unwrap();
            assert_eq!(json, format!("\"{}\"", column.code()));
            assert_eq!(column.code().parse::<ColumnId>().unwrap(), column);
        }
    }

    #[test]
    fn test_unknown_column() {
        let err = "assignee".parse::<ColumnId>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown column: assignee");
    }

    #[test]
    fn test_filter_kind() {
        assert_eq!(ColumnId::TaskName.filter_kind(), FilterKind::Text);
        assert_eq!(ColumnId::DueDate.filter_kind(), FilterKind::DateRange);
        assert_eq!(ColumnId::TaskType.filter_kind(), FilterKind::Set);
    }

    #[test]
    fn test_set_labels() {
        assert_eq!(
            ColumnId::Status.set_labels(),
            vec!["Not started", "In progress", "Done"]
        );
        assert_eq!(
            ColumnId::TaskType.set_labels(),
            vec!["Improvement", "Bug", "New Feature"]
        );
        assert!(ColumnId::TaskName.set_labels().is_empty());
    }
}
