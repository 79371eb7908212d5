pub mod api;
pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod format;
