// Logging bootstrap for the Wren runtime.
//
// Built on the `tracing` ecosystem. Call one of the initializers once, early
// in the process; later calls are no-ops.
//
// ```rust
// use wren::logging;
//
// // Default settings: INFO level, human-readable console output.
// logging::init_default();
//
// // Or with custom settings.
// let config = logging::LogConfig {
//     level: tracing::Level::DEBUG,
//     ..Default::default()
// };
// logging::init(config);
// ```

use std::sync::Once;

use tracing::{Level, Subscriber};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Configuration for the runtime's tracing output.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level to display.
    pub level: Level,
    /// Whether to use JSON format for logs.
    pub json_format: bool,
    /// Whether to include file and line information.
    pub show_file_line: bool,
    /// Whether to include thread name/id.
    pub show_thread_info: bool,
    /// Target filter expressions (format: "target=level,target2=level2,...").
    pub target_filters: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            show_file_line: true,
            show_thread_info: true,
            target_filters: None,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber with the given configuration.
/// Safe to call multiple times; only the first call takes effect.
pub fn init(config: LogConfig) {
    INIT.call_once(|| {
        let mut env_filter = EnvFilter::from_default_env().add_directive(config.level.into());
        if let Some(filters) = config.target_filters {
            for filter in filters.split(',') {
                if let Ok(directive) = filter.parse() {
                    env_filter = env_filter.add_directive(directive);
                }
            }
        }

        let registry = tracing_subscriber::registry().with(env_filter);
        let subscriber: Box<dyn Subscriber + Send + Sync> = if config.json_format {
            Box::new(registry.with(fmt::layer().json().flatten_event(true)))
        } else {
            Box::new(
                registry.with(
                    fmt::layer()
                        .with_ansi(atty::is(atty::Stream::Stdout))
                        .with_file(config.show_file_line)
                        .with_line_number(config.show_file_line)
                        .with_thread_names(config.show_thread_info)
                        .with_thread_ids(config.show_thread_info),
                ),
            )
        };

        if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("error setting global tracing subscriber: {}", err);
        }
    });
}

/// Initializes logging with defaults that work well for most cases: INFO
/// level, human-readable console output.
pub fn init_default() {
    init(LogConfig::default());
}

/// Initializes logging for tests. Only warnings and errors, no thread noise.
pub fn init_test() {
    init(LogConfig {
        level: Level::WARN,
        show_thread_info: false,
        ..Default::default()
    });
}

/// Creates a span for one actor's operations.
///
/// ```rust
/// let span = wren::actor_span!("notes");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! actor_span {
    ($name:expr) => {
        tracing::info_span!("actor", name = $name)
    };
    ($name:expr, $($fields:tt)*) => {
        tracing::info_span!("actor", name = $name, $($fields)*)
    };
}

// Re-export the most commonly used tracing macros for convenience.
pub use tracing::{debug, error, info, trace, warn};
