//! Tracing subscriber initialization.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    #[display("human")]
    Human,
    /// One JSON object per line
    #[display("json")]
    Json,
}

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG`; falls back to `info` when it is unset or invalid.
/// Logs go to stderr so stdout stays free for command output.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(format: LogFormat) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Human => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| format!("Failed to install tracing subscriber: {}", e))?;

    info!(format = %format, "Tracing initialized");
    Ok(())
}
