//! Разбор и форматирование дат срока выполнения.
//!
//! В данных срок хранится строкой `DD/MM/YYYY`; фильтр по диапазону сравнивает
//! календарные даты, поэтому строку нужно переинтерпретировать как год-месяц-день.

use crate::shared::error::QueryError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Формат срока выполнения в данных
pub const DUE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a stored due date.
/// Example: "15/08/2024" -> 2024-08-15
pub fn parse_due_date(value: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(value.trim(), DUE_DATE_FORMAT)
        .map_err(|_| QueryError::InvalidDueDate(value.to_string()))
}

/// Format a calendar date the way due dates are stored.
/// Example: 2024-08-15 -> "15/08/2024"
pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}

/// Parse an ISO date or datetime string coming from a date picker.
/// Example: "2024-08-15" or "2024-08-15T00:00:00.000Z" -> 2024-08-15
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or("");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// 00:00:00.000 of the given day
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// 23:59:59.999 of the given day
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default();
    date.and_time(last_milli)
}
