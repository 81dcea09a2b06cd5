pub mod a001_task;
