// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod config;
pub mod data;
pub mod format;
pub mod model;
pub mod roster;
pub mod tui;
