//! Developer diagnostics. Separate from the activity feed the dashboard shows.

use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::Display;

/// Severity, ordered from chattiest to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace,
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = "INFO")]
    Info,
    #[display(fmt = "WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Layer and unit a line comes from, e.g. `APP:DashboardService`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self { timestamp: get_time_provider().current_timestamp(), level, component, message: message.into() }
    }
}

/// `[10:15:02] WARN  APP:DashboardService | Status fetch failed ...`
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<5} {} | {}",
            get_time_provider().format_timestamp(self.timestamp),
            self.level.to_string(),
            self.component,
            self.message
        )
    }
}

/// Wall clock abstraction, so the domain never touches `js_sys` directly.
pub trait TimeProvider: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn current_timestamp(&self) -> u64;

    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for developer log records. Records below `min_level` are never built.
pub trait Logger: Send + Sync {
    fn log(&self, record: LogRecord);

    fn min_level(&self) -> LogLevel {
        LogLevel::Trace
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }

    fn trace(&self, component: LogComponent, message: &str) {
        emit_to(self, LogLevel::Trace, component, format_args!("{}", message));
    }

    fn debug(&self, component: LogComponent, message: &str) {
        emit_to(self, LogLevel::Debug, component, format_args!("{}", message));
    }

    fn info(&self, component: LogComponent, message: &str) {
        emit_to(self, LogLevel::Info, component, format_args!("{}", message));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        emit_to(self, LogLevel::Warn, component, format_args!("{}", message));
    }

    fn error(&self, component: LogComponent, message: &str) {
        emit_to(self, LogLevel::Error, component, format_args!("{}", message));
    }
}

fn emit_to<L: Logger + ?Sized>(logger: &L, level: LogLevel, component: LogComponent, args: fmt::Arguments<'_>) {
    if logger.enabled(level) {
        logger.log(LogRecord::new(level, component, args.to_string()));
    }
}

/// Format and forward to the global logger, unless it filters `level` out.
/// Backs the `log_*!` macros.
pub fn emit(level: LogLevel, component: LogComponent, args: fmt::Arguments<'_>) {
    emit_to(get_logger(), level, component, args);
}

type SharedLogger = Box<dyn Logger>;
type SharedClock = Box<dyn TimeProvider>;

static GLOBAL_LOGGER: OnceLock<SharedLogger> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<SharedClock> = OnceLock::new();

/// Install the process-wide logger. The first call wins.
pub fn init_logger(logger: SharedLogger) {
    let _ = GLOBAL_LOGGER.set(logger);
}

/// Install the process-wide clock. The first call wins.
pub fn init_time_provider(time_provider: SharedClock) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    match GLOBAL_LOGGER.get() {
        Some(logger) => logger.as_ref(),
        None => &SilentLogger,
    }
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    match GLOBAL_TIME_PROVIDER.get() {
        Some(clock) => clock.as_ref(),
        None => &SequenceClock,
    }
}

/// Used until `init_logger` runs, and in native tests.
struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _record: LogRecord) {}

    fn min_level(&self) -> LogLevel {
        LogLevel::Error
    }
}

/// Stand-in clock without JS: every reading is one tick after the last.
struct SequenceClock;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

impl TimeProvider for SequenceClock {
    fn current_timestamp(&self) -> u64 {
        SEQUENCE.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("t+{}", timestamp)
    }
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::emit($crate::domain::logging::LogLevel::Debug, $component, format_args!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Info, $component, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($crate::domain::logging::LogLevel::Warn, $component, format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Capture {
        min: LogLevel,
        lines: Mutex<Vec<String>>,
    }

    impl Logger for Capture {
        fn log(&self, record: LogRecord) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(format!("{} {} {}", record.level, record.component, record.message));
            }
        }

        fn min_level(&self) -> LogLevel {
            self.min
        }
    }

    #[test]
    fn records_below_min_level_are_dropped() {
        let capture = Capture { min: LogLevel::Warn, lines: Mutex::new(Vec::new()) };
        capture.info(LogComponent::Application("Test"), "quiet");
        capture.warn(LogComponent::Infrastructure("HTTP"), "loud");
        let lines = capture.lines.lock().map(|l| l.clone()).unwrap_or_default();
        assert_eq!(lines, vec!["WARN INF:HTTP loud".to_string()]);
    }

    #[test]
    fn record_line_layout() {
        let record = LogRecord {
            timestamp: 7,
            level: LogLevel::Info,
            component: LogComponent::Presentation("App"),
            message: "mounted".into(),
        };
        assert!(record.to_string().ends_with("] INFO  PRE:App | mounted"));
    }
}
