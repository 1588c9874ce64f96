use std::path::Path;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Initialise logging. Debug logging starts at `debug` and lets `RUST_LOG`
/// override the level; otherwise the level is pinned to `info`.
///
/// When `log_file` is given, output is written to that file as well as stderr.
/// Calling this more than once keeps the first subscriber.
pub fn init(debug: bool, log_file: Option<&Path>) {
    // Without debug logging a stray `RUST_LOG` in the environment must not turn
    // on per-sample pointer tracing.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let file_appender = log_file.and_then(|path| {
        let file_name = path.file_name()?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        Some(tracing_appender::rolling::never(dir, file_name))
    });

    let result = match file_appender {
        Some(appender) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::io::stderr.and(appender))
            .try_init(),
        None => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}
