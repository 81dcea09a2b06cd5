use super::Ranked;
use crate::shared::error::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Тип задачи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    Improvement,
    Bug,
    #[serde(rename = "New Feature")]
    NewFeature,
}

impl TaskType {
    pub fn all() -> Vec<TaskType> {
        vec![TaskType::Improvement, TaskType::Bug, TaskType::NewFeature]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Improvement" => Some(TaskType::Improvement),
            "Bug" => Some(TaskType::Bug),
            "New Feature" => Some(TaskType::NewFeature),
            _ => None,
        }
    }
}

impl Ranked for TaskType {
    fn rank(&self) -> u8 {
        match self {
            TaskType::Improvement => 0,
            TaskType::Bug => 1,
            TaskType::NewFeature => 2,
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            TaskType::Improvement => "Improvement",
            TaskType::Bug => "Bug",
            TaskType::NewFeature => "New Feature",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TaskType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| QueryError::UnknownEnumValue {
            kind: "task type",
            value: s.to_string(),
        })
    }
}
