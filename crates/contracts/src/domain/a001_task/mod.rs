pub mod aggregate;
pub mod seed;

pub use aggregate::Task;
pub use seed::{default_tasks, parse_tasks};
