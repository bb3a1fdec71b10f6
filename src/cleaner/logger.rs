//! Output sink for the cleaner.
//!
//! Components never print directly; they receive a `&dyn Logger` so the CLI
//! can write colored lines to the terminal while tests record them.

use colored::Colorize;
use std::cell::RefCell;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

pub trait Logger {
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Terminal logger. Info goes to stdout, everything else to stderr.
/// Debug lines are only shown in verbose mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    show_debug: bool,
}

impl ConsoleLogger {
    pub fn new(show_debug: bool) -> Self {
        Self { show_debug }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::Debug if self.show_debug => {
                eprintln!("{} {}", "[DEBUG]".dimmed(), message.dimmed())
            }
            Level::Debug => {}
            Level::Info => println!("{} {}", "[INFO]".cyan().bold(), message),
            Level::Warn => eprintln!("{} {}", "[WARN]".yellow().bold(), message),
            Level::Error => eprintln!("{} {}", "[ERROR]".red().bold(), message),
        }
    }
}

/// Logger that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: RefCell<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Messages logged at `level`, in order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any line at any level contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|(_, m)| m.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}
