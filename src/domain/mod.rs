pub mod filter;
pub mod format;
pub mod lead;
pub mod listing;
pub mod markers;
pub mod pagination;
pub mod property;
pub mod similar;
pub mod sort;
