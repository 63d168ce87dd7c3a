pub mod catalog;
pub mod core;
pub mod schedule;
