//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable, multi-line.
    Pretty,
}

impl LogFormat {
    /// Parse `"json"` / `"pretty"` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Initialize tracing for the process: `RUST_LOG` if set, `info` otherwise.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, LogFormat::Json, false);
}

/// Initialize tracing with an explicit filter directive and format.
///
/// Returns `false` when the directive does not parse or a subscriber was
/// already installed.
pub fn init_with(directive: &str, format: LogFormat) -> bool {
    match EnvFilter::try_new(directive) {
        Ok(filter) => install(filter, format, false),
        Err(err) => {
            ::tracing::warn!(directive, error = %err, "ignoring malformed log filter");
            false
        }
    }
}

/// Pretty output routed through the test harness's captured writer.
///
/// Honors `RUST_LOG`, defaulting to `warn` so passing tests stay quiet.
pub fn init_for_tests() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    install(filter, LogFormat::Pretty, true);
}

fn install(filter: EnvFilter, format: LogFormat, test_writer: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match (format, test_writer) {
        (LogFormat::Json, false) => builder.json().try_init(),
        (LogFormat::Json, true) => builder.json().with_test_writer().try_init(),
        (LogFormat::Pretty, false) => builder.pretty().try_init(),
        (LogFormat::Pretty, true) => builder.pretty().with_test_writer().try_init(),
    };

    match installed {
        Ok(()) => {
            ::tracing::debug!(?format, "tracing subscriber installed");
            true
        }
        Err(err) => {
            ::tracing::debug!(?format, error = %err, "tracing subscriber already installed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" pretty "), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("xml"), None);
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn repeated_initialization_is_a_no_op() {
        init_for_tests();
        init();
        assert!(!init_with("debug", LogFormat::Json));
    }

    #[test]
    fn initialization_installs_a_global_dispatcher() {
        init_for_tests();
        assert!(::tracing::dispatcher::has_been_set());
        ::tracing::info!("subscriber accepts events");
    }

    #[test]
    fn rejects_malformed_directive() {
        assert!(!init_with("warden=notalevel", LogFormat::Pretty));
    }
}
