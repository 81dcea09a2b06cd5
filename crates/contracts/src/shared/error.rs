use thiserror::Error;

/// Ошибки разбора входных данных таблицы задач
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Invalid due date '{0}': expected DD/MM/YYYY")]
    InvalidDueDate(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),

    #[error("Unknown {kind} value: {value}")]
    UnknownEnumValue { kind: &'static str, value: String },

    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),
}
