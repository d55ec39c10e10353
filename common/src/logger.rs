use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    debug: bool,
}

impl Logger {
    fn new(prefix: Option<String>, debug: bool) -> Self {
        Self { prefix, debug }
    }

    pub fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        println!("{}", self.format_line(message));
    }
}

/// First call wins; later calls keep the existing logger.
pub fn init_logger(prefix: Option<String>, debug: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, debug));
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(|logger| logger.debug)
}

pub fn debug(message: &str) {
    if debug_enabled() {
        log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

/// Like `log!`, but silent unless the logger was initialised in debug mode.
/// The message is only formatted when it will be printed.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::debug(&format!($($arg)*))
        }
    };
}
