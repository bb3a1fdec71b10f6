// Library module for thumbs_cleaner
// Re-exports modules for use in integration tests and the binary

pub mod cleaner;
pub mod cli;
