pub mod priority;
pub mod task_status;
pub mod task_type;

pub use priority::Priority;
pub use task_status::TaskStatus;
pub use task_type::TaskType;

/// Перечисление с фиксированной таблицей рангов.
///
/// Ранг задаёт порядок сортировки вместо лексического сравнения меток.
pub trait Ranked: Copy {
    fn rank(&self) -> u8;

    /// Метка значения в том виде, в каком она хранится в данных
    fn display_name(&self) -> &'static str;
}
