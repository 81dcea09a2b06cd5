pub mod filter_dropdown;
pub mod list;
pub mod sort_dropdown;
