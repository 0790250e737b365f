use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, level: &str, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}] {}", timestamp, level, prefix, message)
        } else {
            format!("[{}][{}] {}", timestamp, level, message)
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn info(message: &str) {
    if let Some(logger) = LOGGER.get() {
        println!("{}", logger.format_line("INFO", message));
    }
}

// Warnings reach stderr even before init_logger.
pub fn warn(message: &str) {
    match LOGGER.get() {
        Some(logger) => eprintln!("{}", logger.format_line("WARN", message)),
        None => eprintln!("[WARN] {}", message),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::warn(&format!($($arg)*))
    };
}
