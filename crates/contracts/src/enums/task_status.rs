use super::Ranked;
use crate::shared::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Статус выполнения задачи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Not started")]
    NotStarted,
    #[serde(rename = "In progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn all() -> Vec<TaskStatus> {
        vec![
            TaskStatus::NotStarted,
            TaskStatus::InProgress,
            TaskStatus::Done,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Not started" => Some(TaskStatus::NotStarted),
            "In progress" => Some(TaskStatus::InProgress),
            "Done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

impl Ranked for TaskStatus {
    fn rank(&self) -> u8 {
        match self {
            TaskStatus::NotStarted => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not started",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TaskStatus {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| QueryError::UnknownEnumValue {
            kind: "status",
            value: s.to_string(),
        })
    }
}
